use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://dathost.net/api/0.1";
pub const DEFAULT_PREFIX: &str = "!";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid channel id in ALLOWED_CHANNELS: {0:?}")]
    InvalidChannel(String),
}

/// Credentials and endpoint for the Dathost API.
#[derive(Clone)]
pub struct DathostConfig {
    pub api_url: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for DathostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DathostConfig")
            .field("api_url", &self.api_url)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub prefix: String,
    /// Channels gated commands may run in. Empty means everywhere.
    pub allowed_channels: HashSet<u64>,
    pub dathost: DathostConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("prefix", &self.prefix)
            .field("allowed_channels", &self.allowed_channels)
            .field("dathost", &self.dathost)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let email = required("DATHOST_EMAIL")?;
        let password = required("DATHOST_PASSWORD")?;

        let allowed_channels =
            parse_channels(&lookup("ALLOWED_CHANNELS").unwrap_or_default())?;

        let prefix = lookup("COMMAND_PREFIX")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let api_url = lookup("DATHOST_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            discord_token,
            prefix,
            allowed_channels,
            dathost: DathostConfig {
                api_url,
                email,
                password,
            },
        })
    }

    pub fn channel_allowed(&self, channel_id: u64) -> bool {
        self.allowed_channels.is_empty() || self.allowed_channels.contains(&channel_id)
    }
}

fn parse_channels(raw: &str) -> Result<HashSet<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map_err(|_| ConfigError::InvalidChannel(part.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DISCORD_TOKEN", "token"),
            ("DATHOST_EMAIL", "ops@example.com"),
            ("DATHOST_PASSWORD", "hunter2"),
        ]
    }

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = env(pairs);
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let config = load(&base()).unwrap();
        assert_eq!(config.prefix, "!");
        assert_eq!(config.dathost.api_url, DEFAULT_API_URL);
        assert!(config.allowed_channels.is_empty());
        assert!(config.channel_allowed(42));
    }

    #[test]
    fn missing_credentials_are_reported_by_name() {
        let err = load(&[("DISCORD_TOKEN", "token"), ("DATHOST_EMAIL", "a@b.c")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATHOST_PASSWORD"));

        let mut vars = base();
        vars[0] = ("DISCORD_TOKEN", "  ");
        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("DISCORD_TOKEN"));
    }

    #[test]
    fn allowed_channels_parse_and_gate() {
        let mut vars = base();
        vars.push(("ALLOWED_CHANNELS", "123, 456,,"));
        let config = load(&vars).unwrap();
        assert_eq!(config.allowed_channels, HashSet::from([123, 456]));
        assert!(config.channel_allowed(456));
        assert!(!config.channel_allowed(789));
    }

    #[test]
    fn invalid_channel_is_rejected() {
        let mut vars = base();
        vars.push(("ALLOWED_CHANNELS", "123,general"));
        assert_eq!(
            load(&vars).unwrap_err(),
            ConfigError::InvalidChannel("general".to_string())
        );
    }

    #[test]
    fn api_url_override_drops_trailing_slash() {
        let mut vars = base();
        vars.push(("DATHOST_API_URL", "http://localhost:8080/api/"));
        vars.push(("COMMAND_PREFIX", "?"));
        let config = load(&vars).unwrap();
        assert_eq!(config.dathost.api_url, "http://localhost:8080/api");
        assert_eq!(config.prefix, "?");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let rendered = format!("{:?}", load(&base()).unwrap());
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("\"token\""));
        assert!(rendered.contains("ops@example.com"));
    }
}
