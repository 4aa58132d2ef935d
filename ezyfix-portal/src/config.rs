//! Application configuration
//!
//! Everything comes from the CLI or environment; `.env` is loaded first
//! so local setups can keep the backend URL out of the shell.

use clap::Parser;
use std::path::PathBuf;

/// EzyFix vendor portal
#[derive(Debug, Parser)]
#[command(name = "ezyfix-portal", about = "Vendor portal for the EzyFix deals platform")]
pub struct Cli {
    /// Backend API base URL
    #[arg(long, env = "EZYFIX_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Identity verification service base URL
    #[arg(long, env = "EZYFIX_VERIFY_URL", default_value = "https://verify.ezyfix.in")]
    pub verify_url: String,

    /// Payment gateway publishable key id
    #[arg(long, env = "EZYFIX_PAYMENT_KEY", default_value = "rzp_test_ezyfix")]
    pub payment_key: String,

    /// Directory for the session file and logs
    #[arg(long, env = "EZYFIX_DATA_DIR", default_value = ".ezyfix")]
    pub data_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "EZYFIX_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub verify_url: String,
    pub payment_key: String,
    pub data_dir: PathBuf,
    pub timeout: u64,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            api_url: cli.api_url,
            verify_url: cli.verify_url,
            payment_key: cli.payment_key,
            data_dir: cli.data_dir,
            timeout: cli.timeout,
        }
    }

    pub fn client_config(&self) -> portal_client::ClientConfig {
        portal_client::ClientConfig::new(&self.api_url)
            .with_verify_url(&self.verify_url)
            .with_timeout(self.timeout)
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_under_data_dir() {
        let config = AppConfig {
            api_url: "http://localhost:5000".into(),
            verify_url: "https://verify.ezyfix.in".into(),
            payment_key: "rzp_test".into(),
            data_dir: PathBuf::from("/tmp/ezyfix"),
            timeout: 30,
        };
        assert_eq!(config.session_path(), PathBuf::from("/tmp/ezyfix/session.json"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/ezyfix/logs"));
    }
}
