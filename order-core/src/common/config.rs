use std::path::PathBuf;

/// Order core configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the order database
    pub work_dir: String,
    /// Database file name inside `work_dir`
    pub db_file: String,
    pub log_level: String,
    pub log_json: bool,
    /// File logging is disabled when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from the environment (`.env` is honored)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            db_file: std::env::var("ORDER_DB_FILE").unwrap_or_else(|_| "orders.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Create a config rooted at a custom work dir
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    /// Install the tracing subscriber described by this config
    pub fn init_logging(&self) -> anyhow::Result<()> {
        super::logger::init_logger_with_file(
            &self.log_level,
            self.log_json,
            self.log_dir.as_deref(),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
