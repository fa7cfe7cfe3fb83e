use crate::db::ConnectionStrategy;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Local Food Wastage Management System";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "food-share-dashboard",
    version,
    about = "Browser dashboard for food donation listings, claims and reports"
)]
pub struct Config {
    /// SQLite store holding providers, receivers, food_listings and claims
    #[arg(long, env = "FOOD_DB_PATH", default_value = "food_wastage.db")]
    pub db_path: PathBuf,
    #[arg(long, env = "FOOD_BIND", default_value = "127.0.0.1:8501")]
    pub bind: SocketAddr,
    /// Write JSON logs to a daily rolling file in this directory instead of stderr
    #[arg(long, env = "FOOD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
    /// Keep one connection open for the life of the process
    #[arg(long, env = "FOOD_SHARED_CONNECTION", default_value_t = false)]
    pub shared_connection: bool,
    #[arg(long, env = "FOOD_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,
}

impl Config {
    pub fn connection_strategy(&self) -> ConnectionStrategy {
        if self.shared_connection {
            ConnectionStrategy::Shared
        } else {
            ConnectionStrategy::PerOperation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_TITLE};
    use crate::db::ConnectionStrategy;
    use clap::Parser;

    #[test]
    fn defaults_point_at_local_store() {
        let config = Config::try_parse_from(["food-share-dashboard"]).expect("defaults");
        assert_eq!(config.db_path.to_string_lossy(), "food_wastage.db");
        assert_eq!(config.bind.port(), 8501);
        assert!(config.log_dir.is_none());
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.connection_strategy(), ConnectionStrategy::PerOperation);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "food-share-dashboard",
            "--db-path",
            "/tmp/other.db",
            "--bind",
            "0.0.0.0:9000",
            "--shared-connection",
        ])
        .expect("flags");
        assert_eq!(config.db_path.to_string_lossy(), "/tmp/other.db");
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.connection_strategy(), ConnectionStrategy::Shared);
    }

    #[test]
    fn malformed_bind_address_is_rejected() {
        assert!(Config::try_parse_from(["food-share-dashboard", "--bind", "nowhere"]).is_err());
    }
}
