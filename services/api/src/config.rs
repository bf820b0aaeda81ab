use std::path::PathBuf;

use serde::Deserialize;

use restful_core::config::Config;

/// Deployment preset. Supplies the defaults for anything not set explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    /// Unknown or missing names fall back to staging.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("production") => Self::Production,
            _ => Self::Staging,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    fn http_port(self) -> u16 {
        match self {
            Self::Staging => 3000,
            Self::Production => 5000,
        }
    }

    fn https_port(self) -> u16 {
        match self {
            Self::Staging => 3001,
            Self::Production => 5001,
        }
    }

    fn hashing_secret(self) -> &'static str {
        match self {
            Self::Staging => "thisIsASecret",
            Self::Production => "thisIsAlsoASecret",
        }
    }
}

/// API service configuration, read from `RESTFUL_*` environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// `staging` or `production`. Env var: `RESTFUL_ENV_NAME`.
    pub env_name: Option<String>,
    /// Port of the first listener. Env var: `RESTFUL_HTTP_PORT`.
    pub http_port: Option<u16>,
    /// Port of the second listener, fronted by a TLS-terminating proxy.
    /// Env var: `RESTFUL_HTTPS_PORT`.
    pub https_port: Option<u16>,
    /// HMAC key for password hashes. Env var: `RESTFUL_HASHING_SECRET`.
    pub hashing_secret: Option<String>,
    /// Root of the record store (default `.data`). Env var: `RESTFUL_DATA_DIR`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".data")
}

impl Config for ApiConfig {
    const PREFIX: &'static str = "RESTFUL_";
}

impl ApiConfig {
    pub fn environment(&self) -> Environment {
        Environment::from_name(self.env_name.as_deref())
    }

    pub fn http_port(&self) -> u16 {
        self.http_port
            .unwrap_or_else(|| self.environment().http_port())
    }

    pub fn https_port(&self) -> u16 {
        self.https_port
            .unwrap_or_else(|| self.environment().https_port())
    }

    pub fn hashing_secret(&self) -> String {
        self.hashing_secret
            .clone()
            .unwrap_or_else(|| self.environment().hashing_secret().to_owned())
    }
}
