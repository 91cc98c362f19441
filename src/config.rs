//! Feature-parameter configuration.
//!
//! Each feature evaluator reads its own keys out of a shared [`EvalParams`]
//! map, falling back to its documented default when a key is absent.
//! Unknown keys are simply never read by anything and have no effect.

use std::collections::HashMap;

use serde::Deserialize;

/// A keyed map from parameter name to weight, immutable after construction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvalParams {
    #[serde(flatten)]
    values: HashMap<String, f64>,
}

impl EvalParams {
    /// An empty parameter set; every feature evaluator falls back to its
    /// built-in default.
    pub fn empty() -> Self {
        EvalParams {
            values: HashMap::new(),
        }
    }

    /// Build a parameter set from an explicit key/weight map.
    pub fn from_map(values: HashMap<String, f64>) -> Self {
        EvalParams { values }
    }

    /// Look up `key`, falling back to `default` if absent.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.values.get(key).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let params = EvalParams::empty();
        assert_eq!(params.get_or("pawn_value", 100.0), 100.0);
    }

    #[test]
    fn present_key_overrides_default() {
        let mut map = HashMap::new();
        map.insert("pawn_value".to_string(), 120.0);
        let params = EvalParams::from_map(map);
        assert_eq!(params.get_or("pawn_value", 100.0), 120.0);
        assert_eq!(params.get_or("knight_value", 320.0), 320.0);
    }

    #[test]
    fn unknown_key_is_inert() {
        let mut map = HashMap::new();
        map.insert("not_a_real_parameter".to_string(), 999.0);
        let params = EvalParams::from_map(map);
        assert_eq!(params.get_or("pawn_value", 100.0), 100.0);
    }
}
