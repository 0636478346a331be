use serde::{Deserialize, Serialize};

/// Tunables for the minimax engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ply budget used when the caller does not pick one.
    pub search_depth: u8,
    /// Hard cap on caller-supplied depth; recursion never exceeds it.
    pub max_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 2,
            max_depth: 6,
        }
    }
}

impl EngineConfig {
    /// Loads a config from JSON; absent fields keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = EngineConfig::load_from_json("{}").unwrap();
        assert_eq!(config.search_depth, 2);
        assert_eq!(config.max_depth, 6);
    }

    #[test]
    fn test_load_config_partial() {
        let config = EngineConfig::load_from_json(r#"{ "search_depth": 3 }"#).unwrap();
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.max_depth, 6);
    }

    #[test]
    fn test_load_config_invalid_json() {
        assert!(EngineConfig::load_from_json("{ invalid json }").is_err());
    }
}
