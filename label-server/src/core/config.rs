/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HOST | 0.0.0.0 | Bind address |
/// | PORT | 5002 | HTTP port |
/// | DATABASE_PATH | database.sqlite | SQLite file (created if missing) |
/// | ENVIRONMENT | development | development / production |
/// | STATIC_DIR | (unset) | Client build served in production |
/// | LOG_LEVEL | info | Max log level |
/// | LOG_DIR | (unset) | Daily rolling log directory |
/// | MAX_LABEL_QUANTITY | 20 | Per-label copy cap on the queue API |
///
/// # Example
///
/// ```ignore
/// PORT=8080 DATABASE_PATH=/data/labels.sqlite cargo run -p label-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub database_path: String,
    /// development | production
    pub environment: String,
    pub static_dir: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Highest quantity accepted when queueing a label
    pub max_label_quantity: i64,
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    ///
    /// Unparseable numbers fall back too.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5002),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "database.sqlite".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            static_dir: std::env::var("STATIC_DIR").ok().filter(|d| !d.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            max_label_quantity: std::env::var("MAX_LABEL_QUANTITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &i64| *v >= 1)
                .unwrap_or(20),
        }
    }

    /// Override the database location and port
    ///
    /// Used by tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("/tmp/labels.sqlite", 6000);
        assert_eq!(config.database_path, "/tmp/labels.sqlite");
        assert_eq!(config.http_port, 6000);
        assert!(config.bind_addr().ends_with(":6000"));
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides("db.sqlite", 5002);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
