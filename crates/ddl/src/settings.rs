use serde::{Deserialize, Serialize};

pub const DEFAULT_ENGINE: &str = "Log()";
pub const DEFAULT_UUID_FUNCTION: &str = "generateUUIDv4()";

/// Compiler settings handed over by the configuration layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DdlSettings {
    /// Engine used for plain tables created without options.
    pub default_engine: String,
    /// Default expression of UUID primary keys.
    pub uuid_default_function: String,
}

impl Default for DdlSettings {
    fn default() -> Self {
        Self {
            default_engine: DEFAULT_ENGINE.to_string(),
            uuid_default_function: DEFAULT_UUID_FUNCTION.to_string(),
        }
    }
}

impl DdlSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fall_back_to_defaults() {
        let settings = DdlSettings::from_json(r#"{ "default_engine": "TinyLog" }"#).unwrap();
        assert_eq!(settings.default_engine, "TinyLog");
        assert_eq!(settings.uuid_default_function, DEFAULT_UUID_FUNCTION);

        assert_eq!(DdlSettings::from_json("{}").unwrap(), DdlSettings::default());
        assert!(DdlSettings::from_json("[]").is_err());
    }
}
