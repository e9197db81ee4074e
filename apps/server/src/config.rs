use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub tickers_path: PathBuf,
    pub nlp_base_url: String,
    /// Shared secret sent to the analysis service, if any.
    pub nlp_token: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            tickers_path: PathBuf::from("data/tickers.csv"),
            nlp_base_url: "http://127.0.0.1:8000".into(),
            nlp_token: None,
            cors_allow: vec!["*".into()],
            request_timeout: Duration::from_millis(30000),
            static_dir: "dist".into(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("SP_LISTEN_ADDR") {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("Invalid SP_LISTEN_ADDR '{}'", addr))?,
            Err(_) => defaults.listen_addr,
        };
        let tickers_path = std::env::var("SP_TICKERS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.tickers_path);
        let nlp_base_url = std::env::var("SP_NLP_BASE_URL").unwrap_or(defaults.nlp_base_url);
        let nlp_token = std::env::var("SP_NLP_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let cors_allow = std::env::var("SP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("SP_STATIC_DIR").unwrap_or(defaults.static_dir);

        Ok(Self {
            listen_addr,
            tickers_path,
            nlp_base_url,
            nlp_token,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
        })
    }
}
