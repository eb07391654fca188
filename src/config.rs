use crate::utils::errors::{Result, SessionStoreError};
use serde::Deserialize;

/// Default key namespace. Only needs changing if it clashes with other keys
/// in a shared store.
pub const DEFAULT_KEY_PREFIX: &str = "scs:session:";

/// Store configuration.
///
/// `key_prefix` is prepended to every session token to form the storage key,
/// isolating session keys from unrelated data. The prefix is fixed at
/// construction; create separate stores for separate namespaces.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: prefix.into(),
        }
    }

    /// Loads configuration from the TOML file named by
    /// `SESSION_STORE_CONFIG_PATH` (defaults apply if unset or missing),
    /// then applies the `SESSION_STORE_KEY_PREFIX` environment override.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("SESSION_STORE_CONFIG_PATH") {
            Ok(path) if std::path::Path::new(&path).exists() => {
                let config_str = std::fs::read_to_string(&path).map_err(|e| {
                    SessionStoreError::Configuration(format!(
                        "Failed to read config file {}: {}",
                        path, e
                    ))
                })?;

                toml::from_str::<StoreConfig>(&config_str).map_err(|e| {
                    SessionStoreError::Configuration(format!("Failed to parse config file: {}", e))
                })?
            }
            _ => StoreConfig::default(),
        };

        if let Ok(prefix) = std::env::var("SESSION_STORE_KEY_PREFIX") {
            config.key_prefix = prefix;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::SessionStoreError;
    use assert_matches::assert_matches;
    use std::sync::Mutex;

    // load() reads process-wide env vars; tests touching them take this
    // lock so they cannot interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "session-store-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_prefix() {
        let config = StoreConfig::default();
        assert_eq!(config.key_prefix, "scs:session:");
    }

    #[test]
    fn custom_prefix() {
        let config = StoreConfig::with_prefix("app:sess:");
        assert_eq!(config.key_prefix, "app:sess:");
    }

    #[test]
    fn parses_toml() {
        let config: StoreConfig = toml::from_str(r#"key_prefix = "myapp:""#).unwrap();
        assert_eq!(config.key_prefix, "myapp:");
    }

    #[test]
    fn toml_defaults_missing_fields() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config.key_prefix, DEFAULT_KEY_PREFIX);
    }

    #[test]
    fn load_reads_config_file_and_env_override_wins() {
        let _guard = ENV_LOCK.lock().unwrap();
        let path = write_temp_config("load", r#"key_prefix = "file:""#);
        std::env::set_var("SESSION_STORE_CONFIG_PATH", &path);

        let config = StoreConfig::load().unwrap();
        assert_eq!(config.key_prefix, "file:");

        std::env::set_var("SESSION_STORE_KEY_PREFIX", "env:");
        let config = StoreConfig::load().unwrap();
        assert_eq!(config.key_prefix, "env:");

        std::env::remove_var("SESSION_STORE_CONFIG_PATH");
        std::env::remove_var("SESSION_STORE_KEY_PREFIX");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_without_env_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("SESSION_STORE_CONFIG_PATH");
        std::env::remove_var("SESSION_STORE_KEY_PREFIX");

        let config = StoreConfig::load().unwrap();
        assert_eq!(config.key_prefix, DEFAULT_KEY_PREFIX);
    }

    #[test]
    fn load_reports_unparsable_config_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let path = write_temp_config("bad", "key_prefix = [not toml");
        std::env::set_var("SESSION_STORE_CONFIG_PATH", &path);

        let result = StoreConfig::load();
        assert_matches!(result, Err(SessionStoreError::Configuration(_)));

        std::env::remove_var("SESSION_STORE_CONFIG_PATH");
        std::fs::remove_file(path).unwrap();
    }
}
