use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding [`DirectoryConfig::buffer_size`].
pub const BUFFER_SIZE_ENV: &str = "MENTIONS_BUFFER_SIZE";

const DEFAULT_BUFFER_SIZE: usize = 32;

/// Settings for the directory actors.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Capacity of each store actor's request channel.
    pub buffer_size: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl DirectoryConfig {
    /// Defaults, overridden by [`BUFFER_SIZE_ENV`] when it holds a positive integer.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(BUFFER_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(
                    value = %raw,
                    default = config.buffer_size,
                    "Ignoring invalid {}", BUFFER_SIZE_ENV
                ),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_overrides_buffer_size() {
        let config = DirectoryConfig::from_lookup(|_| Some("128".to_string()));
        assert_eq!(config.buffer_size, 128);
    }

    #[test]
    fn test_invalid_values_fall_back_to_default() {
        for raw in ["0", "-4", "many"] {
            let config = DirectoryConfig::from_lookup(|_| Some(raw.to_string()));
            assert_eq!(config, DirectoryConfig::default());
        }
        assert_eq!(DirectoryConfig::from_lookup(|_| None).buffer_size, 32);
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let config: DirectoryConfig = serde_json::from_str(r#"{"buffer_size": 8}"#).unwrap();
        assert_eq!(config.buffer_size, 8);

        let config: DirectoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }
}
