use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::api::server_config::REQUEST_TIMEOUT;
use crate::core::errors::GalleryError;

/// Alchemy provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider network identifier, e.g. `eth-mainnet`
    #[serde(default = "ProviderConfig::default_network")]
    pub network: String,

    #[serde(default)]
    pub api_key: String,

    /// Full base URL override. When unset the URL is derived from network and key.
    #[serde(default)]
    pub base_url: Option<String>,

    /// HTTP client timeout (seconds)
    #[serde(default = "ProviderConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    fn default_network() -> String { "eth-mainnet".to_string() }
    fn default_timeout_secs() -> u64 { 15 }

    /// Config pointing at an arbitrary base URL; used against mock providers.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()), ..Self::default() }
    }

    /// `{base}` that the `getNFTs/` and `getNFTsForCollection/` paths hang off.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.g.alchemy.com/v2/{}", self.network, self.api_key),
        }
    }

    /// Base URL safe to print in logs.
    pub fn redacted_base_url(&self) -> String {
        let base = self.base_url();
        if self.api_key.is_empty() {
            base
        } else {
            base.replace(&self.api_key, "***")
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            network: Self::default_network(),
            api_key: String::new(),
            base_url: None,
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl ServerConfig {
    fn default_host() -> String { "127.0.0.1".to_string() }
    fn default_port() -> u16 { 3000 }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: Self::default_host(), port: Self::default_port() }
    }
}

/// Top level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl GalleryConfig {
    /// Load `gallery.toml` (or `$GALLERY_CONFIG`) if present, then apply env overrides.
    pub fn load() -> Result<Self, GalleryError> {
        let path = std::env::var("GALLERY_CONFIG").unwrap_or_else(|_| "gallery.toml".to_string());
        let mut config = Self::from_file_or_default(Path::new(&path))?;
        config.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file_or_default(path: &Path) -> Result<Self, GalleryError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: GalleryConfig = toml::from_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Overlay values from `lookup`. Network-specific keys
    /// (`ALCHEMY_API_KEY_ETH_MAINNET`) win over `ALCHEMY_API_KEY`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), GalleryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(network) = lookup("ALCHEMY_NETWORK") {
            self.provider.network = network;
        }

        let network_key = format!(
            "ALCHEMY_API_KEY_{}",
            self.provider.network.to_uppercase().replace('-', "_")
        );
        if let Some(key) = lookup(&network_key).or_else(|| lookup("ALCHEMY_API_KEY")) {
            self.provider.api_key = key;
        }

        if let Some(base_url) = lookup("ALCHEMY_BASE_URL") {
            self.provider.base_url = Some(base_url);
        }

        if let Some(timeout) = lookup("GALLERY_HTTP_TIMEOUT_SECS") {
            self.provider.timeout_secs = timeout.parse().map_err(|_| {
                GalleryError::Config(format!("GALLERY_HTTP_TIMEOUT_SECS is not a number: {}", timeout))
            })?;
        }

        if let Some(host) = lookup("GALLERY_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("GALLERY_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| GalleryError::Config(format!("GALLERY_PORT is not a port: {}", port)))?;
        }

        Ok(())
    }

    /// Fails when neither an API key nor a base URL override is configured,
    /// or when the provider timeout would outlast the router's request timeout.
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.provider.api_key.is_empty() && self.provider.base_url.is_none() {
            return Err(GalleryError::Config(
                "ALCHEMY_API_KEY is not set and no ALCHEMY_BASE_URL override given".to_string(),
            ));
        }
        if self.provider.timeout_secs == 0 || self.provider.timeout() >= REQUEST_TIMEOUT {
            return Err(GalleryError::Config(format!(
                "provider timeout must be between 1 and {} seconds, got {}",
                REQUEST_TIMEOUT.as_secs() - 1,
                self.provider.timeout_secs
            )));
        }
        Ok(())
    }
}
