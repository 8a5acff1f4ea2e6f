//! Product comparison
//!
//! [`ProductComparison::new`] is a total function over two valid products:
//! it computes the absolute price and rating deltas and splits the union of
//! both spec sets into common specs and specs unique to each side.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::json_number;
use super::product::Product;

/// Decimal places kept for `ratingDifference`.
const RATING_DECIMALS: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonDetails {
    #[serde(rename = "priceDifference", serialize_with = "json_number::serialize")]
    pub price_difference: f64,
    #[serde(rename = "ratingDifference", serialize_with = "json_number::serialize")]
    pub rating_difference: f64,
    pub common_specs: Vec<String>,
    pub unique_specs_product1: IndexMap<String, String>,
    pub unique_specs_product2: IndexMap<String, String>,
}

/// Outcome of comparing two products. Holds borrowed references to both.
#[derive(Debug, Clone)]
pub struct ProductComparison<'a> {
    pub product1: &'a Product,
    pub product2: &'a Product,
    pub comparison: ComparisonDetails,
}

impl<'a> ProductComparison<'a> {
    pub fn new(product1: &'a Product, product2: &'a Product) -> Self {
        let (common_specs, unique_specs_product1, unique_specs_product2) =
            diff_specs(product1, product2);

        let comparison = ComparisonDetails {
            price_difference: (product1.price() - product2.price()).abs(),
            rating_difference: round_to(
                (product1.rating() - product2.rating()).abs(),
                RATING_DECIMALS,
            ),
            common_specs,
            unique_specs_product1,
            unique_specs_product2,
        };

        Self {
            product1,
            product2,
            comparison,
        }
    }
}

/// Round half away from zero to `decimals` places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

type SpecDiff = (Vec<String>, IndexMap<String, String>, IndexMap<String, String>);

fn diff_specs(product1: &Product, product2: &Product) -> SpecDiff {
    // Keys of product1 first, then keys only product2 has.
    let keys: IndexSet<&str> = product1
        .specs()
        .keys()
        .chain(product2.specs().keys())
        .map(String::as_str)
        .collect();

    let mut common = Vec::new();
    let mut unique1 = IndexMap::new();
    let mut unique2 = IndexMap::new();

    for key in keys {
        match (product1.spec(key), product2.spec(key)) {
            (Some(v1), Some(v2)) if v1 == v2 => common.push(key.to_string()),
            (Some(v1), Some(v2)) => {
                unique1.insert(key.to_string(), v1.to_string());
                unique2.insert(key.to_string(), v2.to_string());
            }
            (Some(v1), None) => {
                unique1.insert(key.to_string(), v1.to_string());
            }
            (None, Some(v2)) => {
                unique2.insert(key.to_string(), v2.to_string());
            }
            (None, None) => {}
        }
    }

    (common, unique1, unique2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Specs;

    fn specs(pairs: &[(&str, &str)]) -> Specs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn product(id: &str, price: f64, rating: f64, pairs: &[(&str, &str)]) -> Product {
        Product::new(id, format!("Product {id}"), price, rating, "", "", specs(pairs)).unwrap()
    }

    #[test]
    fn test_laptop_vs_phone() {
        let a = product("1", 1000.0, 5.0, &[("color", "red"), ("size", "M")]);
        let b = product("2", 800.0, 4.0, &[("color", "red"), ("storage", "128GB")]);

        let result = ProductComparison::new(&a, &b);
        let c = &result.comparison;

        assert_eq!(c.price_difference, 200.0);
        assert_eq!(c.rating_difference, 1.0);
        assert_eq!(c.common_specs, vec!["color".to_string()]);
        assert_eq!(c.unique_specs_product1, specs(&[("size", "M")]));
        assert_eq!(c.unique_specs_product2, specs(&[("storage", "128GB")]));
        assert_eq!(result.product1.id(), "1");
        assert_eq!(result.product2.id(), "2");
    }

    #[test]
    fn test_differences_are_symmetric() {
        let a = product("1", 999_900.0, 4.8, &[]);
        let b = product("2", 899_900.0, 4.7, &[]);

        let ab = ProductComparison::new(&a, &b).comparison;
        let ba = ProductComparison::new(&b, &a).comparison;

        assert_eq!(ab.price_difference, 100_000.0);
        assert_eq!(ab.price_difference, ba.price_difference);
        assert_eq!(ab.rating_difference, 0.1);
        assert_eq!(ab.rating_difference, ba.rating_difference);
    }

    #[test]
    fn test_rating_rounds_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(1.0, 2), 1.0);
        assert_eq!(round_to(0.004, 2), 0.0);
        assert_eq!(round_to(2.345_6, 2), 2.35);
    }

    #[test]
    fn test_differing_values_land_in_both_unique_maps() {
        let a = product("1", 10.0, 3.0, &[("color", "red")]);
        let b = product("2", 10.0, 3.0, &[("color", "blue")]);

        let c = ProductComparison::new(&a, &b).comparison;

        assert!(c.common_specs.is_empty());
        assert_eq!(c.unique_specs_product1.get("color").map(String::as_str), Some("red"));
        assert_eq!(c.unique_specs_product2.get("color").map(String::as_str), Some("blue"));
    }

    #[test]
    fn test_empty_values_are_treated_as_missing() {
        let a = product("1", 10.0, 3.0, &[("color", ""), ("size", ""), ("ram", "8GB")]);
        let b = product("2", 10.0, 3.0, &[("color", "red"), ("size", ""), ("ram", "")]);

        let c = ProductComparison::new(&a, &b).comparison;

        assert!(c.common_specs.is_empty());
        assert_eq!(c.unique_specs_product1, specs(&[("ram", "8GB")]));
        assert_eq!(c.unique_specs_product2, specs(&[("color", "red")]));
        assert!(!c.unique_specs_product1.contains_key("size"));
        assert!(!c.unique_specs_product2.contains_key("size"));
    }

    #[test]
    fn test_spec_keys_are_partitioned() {
        let a = product(
            "1",
            10.0,
            3.0,
            &[("a", "1"), ("b", "2"), ("c", "3"), ("e", "")],
        );
        let b = product("2", 10.0, 3.0, &[("b", "2"), ("c", "x"), ("d", "4"), ("e", "")]);

        let c = ProductComparison::new(&a, &b).comparison;

        for key in ["a", "b", "c", "d"] {
            let hits = [
                c.common_specs.iter().any(|k| k == key),
                c.unique_specs_product1.contains_key(key)
                    || c.unique_specs_product2.contains_key(key),
            ];
            assert_eq!(hits.iter().filter(|hit| **hit).count(), 1, "key {key}");
        }
        assert!(!c.common_specs.iter().any(|k| k == "e"));
        assert!(!c.unique_specs_product1.contains_key("e"));
        assert!(!c.unique_specs_product2.contains_key("e"));
    }

    #[test]
    fn test_union_order_is_first_seen() {
        let a = product("1", 1.0, 1.0, &[("z", "1"), ("m", "2")]);
        let b = product("2", 1.0, 1.0, &[("a", "3"), ("z", "9")]);

        let c = ProductComparison::new(&a, &b).comparison;

        let keys1: Vec<&str> = c.unique_specs_product1.keys().map(String::as_str).collect();
        let keys2: Vec<&str> = c.unique_specs_product2.keys().map(String::as_str).collect();
        assert_eq!(keys1, vec!["z", "m"]);
        assert_eq!(keys2, vec!["z", "a"]);
    }

    #[test]
    fn test_serialized_field_names() {
        let a = product("1", 1000.0, 5.0, &[]);
        let b = product("2", 800.0, 4.0, &[]);

        let json = serde_json::to_value(ProductComparison::new(&a, &b).comparison).unwrap();

        assert_eq!(json["priceDifference"].as_f64(), Some(200.0));
        assert_eq!(json["ratingDifference"].as_f64(), Some(1.0));
        assert!(json["common_specs"].is_array());
        assert!(json["unique_specs_product1"].is_object());
        assert!(json["unique_specs_product2"].is_object());

        let text = serde_json::to_string(&ProductComparison::new(&a, &b).comparison).unwrap();
        assert!(text.contains(r#""priceDifference":200,"#), "{text}");
        assert!(text.contains(r#""ratingDifference":1,"#), "{text}");
    }
}
