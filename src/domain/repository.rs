use super::product::Product;

/// Read-only port onto the product catalog.
///
/// Implementations own the canonical product list and hand out borrowed
/// records. There is no mutation path.
pub trait ProductRepository: Send + Sync {
    /// Every product, in source order. Empty when nothing could be loaded.
    fn find_all(&self) -> &[Product];

    /// Exact identifier match; absence is `None`, never an error.
    fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.find_all().iter().find(|product| product.id() == id)
    }
}
