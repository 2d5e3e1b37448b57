use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An immutable snapshot of the environment a generation is evaluated in.
///
/// Expression models read the snapshot; nothing in the generation-step
/// pipeline writes to it. One instance is shared read-only across the whole
/// population for a generation. When a regulatory network is active, the
/// engine derives a per-gene effective TF concentration from the snapshot's
/// baseline value instead of mutating the snapshot itself.
///
/// Custom fields live in a `BTreeMap` so that iteration order, and therefore
/// serialized output, is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Transcription-factor concentration driving expression
    tf_concentration: f64,
    /// Ambient temperature in degrees Celsius
    temperature: f64,
    /// Available nutrient level
    nutrient_level: f64,
    /// Open extension map for model-specific fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    custom: BTreeMap<String, f64>,
}

impl Default for Conditions {
    /// Baseline conditions: no transcription factor present, physiological
    /// temperature, nutrients saturating.
    fn default() -> Self {
        Self {
            tf_concentration: 0.0,
            temperature: 37.0,
            nutrient_level: 1.0,
            custom: BTreeMap::new(),
        }
    }
}

impl Conditions {
    /// Create baseline conditions (see [`Default`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transcription-factor concentration.
    pub fn with_tf_concentration(mut self, tf: f64) -> Self {
        self.tf_concentration = tf;
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the nutrient level.
    pub fn with_nutrient_level(mut self, nutrient_level: f64) -> Self {
        self.nutrient_level = nutrient_level;
        self
    }

    /// Attach a custom named field.
    pub fn with_custom(mut self, name: impl Into<String>, value: f64) -> Self {
        self.custom.insert(name.into(), value);
        self
    }

    /// Transcription-factor concentration.
    #[inline]
    pub fn tf_concentration(&self) -> f64 {
        self.tf_concentration
    }

    /// Temperature.
    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Nutrient level.
    #[inline]
    pub fn nutrient_level(&self) -> f64 {
        self.nutrient_level
    }

    /// Look up a custom field by name.
    pub fn custom(&self, name: &str) -> Option<f64> {
        self.custom.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditions_defaults() {
        let conditions = Conditions::new();
        assert_eq!(conditions.tf_concentration(), 0.0);
        assert_eq!(conditions.temperature(), 37.0);
        assert_eq!(conditions.nutrient_level(), 1.0);
        assert_eq!(conditions.custom("anything"), None);
    }

    #[test]
    fn test_conditions_builders() {
        let conditions = Conditions::new()
            .with_tf_concentration(0.8)
            .with_temperature(25.0)
            .with_nutrient_level(0.5);

        assert_eq!(conditions.tf_concentration(), 0.8);
        assert_eq!(conditions.temperature(), 25.0);
        assert_eq!(conditions.nutrient_level(), 0.5);
    }

    #[test]
    fn test_conditions_custom_fields() {
        let conditions = Conditions::new()
            .with_custom("ph", 7.4)
            .with_custom("oxygen", 0.21);

        assert_eq!(conditions.custom("ph"), Some(7.4));
        assert_eq!(conditions.custom("oxygen"), Some(0.21));
        assert_eq!(conditions.custom("missing"), None);
    }

    #[test]
    fn test_conditions_clone_is_independent() {
        let a = Conditions::new().with_tf_concentration(1.0);
        let b = a.clone().with_tf_concentration(2.0);

        assert_eq!(a.tf_concentration(), 1.0);
        assert_eq!(b.tf_concentration(), 2.0);
    }
}
