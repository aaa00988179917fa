//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Table backend used to seed meetings and documents at boot.
    /// When absent, remote sync is disabled and the app runs with local
    /// data only.
    #[serde(default)]
    pub remote: Option<RemoteSettings>,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSettings {
    /// Base URL, e.g. "https://acme.supabase.co"
    pub base_url: String,

    /// API key sent as both `apikey` and bearer token
    pub api_key: String,
}

pub fn load_config() -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        // Load from config file if it exists
        .add_source(::config::File::with_name("config").required(false))
        // Override with environment variables (ROOMBOARD_PORT, ROOMBOARD_REMOTE__BASE_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("ROOMBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_settings_deserialize() {
        let config: Config = serde_json::from_str(
            r#"{"port": 9090, "remote": {"base_url": "https://acme.supabase.co", "api_key": "anon-key"}}"#,
        )
        .unwrap();
        assert_eq!(config.port, 9090);
        let remote = config.remote.unwrap();
        assert_eq!(remote.base_url, "https://acme.supabase.co");
    }

    #[test]
    fn test_remote_defaults_to_none() {
        let config: Config = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        assert!(config.remote.is_none());
    }
}
