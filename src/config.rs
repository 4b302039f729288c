use std::env;
use std::time::Duration;

use url::Url;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const BACKEND_BASE_URL: &str = "http://localhost:8000/api";
const BACKEND_TIMEOUT_SECS: u64 = 30;
const ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend_base_url: Url,
    pub backend_timeout: Duration,
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);

        let backend_base_url = env::var("BACKEND_BASE_URL")
            .ok()
            .and_then(|raw| match parse_base_url(&raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    log::warn!("Ignoring invalid BACKEND_BASE_URL {:?}: {}", raw, err);
                    None
                }
            })
            .unwrap_or_else(default_backend_url);

        let backend_timeout = env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(BACKEND_TIMEOUT_SECS));

        let allowed_origin =
            env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| ALLOWED_ORIGIN.to_string());

        Self {
            host,
            port,
            backend_base_url,
            backend_timeout,
            allowed_origin,
        }
    }

    /// Config pointing at a specific backend, used by tests and tools.
    pub fn with_backend(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            host: HOST.to_string(),
            port: PORT,
            backend_base_url: parse_base_url(base_url)?,
            backend_timeout: Duration::from_secs(BACKEND_TIMEOUT_SECS),
            allowed_origin: ALLOWED_ORIGIN.to_string(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            backend_base_url: default_backend_url(),
            backend_timeout: Duration::from_secs(BACKEND_TIMEOUT_SECS),
            allowed_origin: ALLOWED_ORIGIN.to_string(),
        }
    }
}

// Url::join drops the last path segment unless the base ends with '/'.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(&format!("{}/", trimmed))
}

fn default_backend_url() -> Url {
    Url::parse("http://localhost:8000/api/").expect("static backend url is valid")
}
