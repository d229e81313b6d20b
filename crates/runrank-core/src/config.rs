//! Host-supplied tracker configuration.
//!
//! Comparison constants (`TEXT_CAPACITY`, `REAL_TOLERANCE`) are fixed and
//! deliberately not part of this surface.

use serde::{Deserialize, Serialize};

/// Function name registered with the host when none is configured.
pub const DEFAULT_FUNCTION_NAME: &str = "rank";

///
/// TrackerConfig
///
/// Policy knobs selected by the host when one streak function is set up.
/// Missing fields fall back to their defaults when deserialized.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Emit per-row `[debug]` diagnostics.
    pub debug: bool,

    /// Name the function is registered under in the host catalog.
    pub function_name: String,
}

impl TrackerConfig {
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let config: TrackerConfig = serde_json::from_str("{}").expect("empty config should parse");

        assert_eq!(config, TrackerConfig::default());
        assert!(!config.debug);
        assert_eq!(config.function_name, "rank");
    }

    #[test]
    fn partial_object_keeps_remaining_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"debug":true}"#).expect("partial config should parse");

        assert!(config.debug);
        assert_eq!(config.function_name, DEFAULT_FUNCTION_NAME);
    }

    #[test]
    fn builders_override_fields() {
        let config = TrackerConfig::default()
            .with_debug(true)
            .with_function_name("streak");

        assert!(config.debug);
        assert_eq!(config.function_name, "streak");
    }
}
