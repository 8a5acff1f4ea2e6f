/// Service configuration
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 3007 | HTTP port |
/// | PRODUCTS_FILE | data/products.json | product data source |
/// | LOG_LEVEL | info | default log level (`RUST_LOG` wins when set) |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub products_file: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            http_port: 3007,
            products_file: "data/products.json".into(),
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            products_file: lookup("PRODUCTS_FILE").unwrap_or(defaults.products_file),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}
