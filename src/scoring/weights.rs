//! Configurable scoring weights.
//!
//! The weight vector is process-wide configuration persisted in the
//! settings collaborator under a single key. Reads fall back to the
//! documented defaults when the key is missing or unreadable; writes
//! merge recognized keys into the current vector and persist the whole
//! merged vector, never a partial object.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Settings key the weight vector is persisted under.
pub const WEIGHTS_SETTINGS_KEY: &str = "award_weights";

/// The weight applied to each scoring metric.
///
/// Weights are signed; `leaves` defaults to a negative value so taking
/// leave acts as a penalty.
///
/// # Example
///
/// ```
/// use merit_engine::scoring::WeightVector;
/// use rust_decimal::Decimal;
///
/// let weights = WeightVector::default();
/// assert_eq!(weights.presence, Decimal::new(5, 1));  // 0.5
/// assert_eq!(weights.leaves, Decimal::new(-1, 1));   // -0.1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightVector {
    /// Weight of the presence rate.
    pub presence: Decimal,
    /// Weight of the normalized total hours.
    pub hours: Decimal,
    /// Weight of the normalized approved overtime hours.
    pub overtime: Decimal,
    /// Weight of the leave-days ratio. Negative by default.
    pub leaves: Decimal,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            presence: Decimal::new(5, 1),
            hours: Decimal::new(3, 1),
            overtime: Decimal::new(1, 1),
            leaves: Decimal::new(-1, 1),
        }
    }
}

impl WeightVector {
    /// Merges recognized keys from `updates` into this vector.
    ///
    /// Unknown keys are ignored silently.
    pub fn merge(&mut self, updates: &HashMap<String, Decimal>) {
        for (key, value) in updates {
            match key.as_str() {
                "presence" => self.presence = *value,
                "hours" => self.hours = *value,
                "overtime" => self.overtime = *value,
                "leaves" => self.leaves = *value,
                _ => {}
            }
        }
    }

    /// Reconstructs a vector from the raw settings value.
    ///
    /// Starts from the defaults and overlays recognized keys found in the
    /// stored object, so a vector persisted by an older deployment with
    /// fewer keys still reads cleanly. A missing, non-object or otherwise
    /// unreadable value falls back to the defaults without error.
    pub fn from_settings(stored: Option<&Value>) -> Self {
        let mut weights = Self::default();
        let Some(Value::Object(entries)) = stored else {
            return weights;
        };
        let recognized: HashMap<String, Decimal> = entries
            .iter()
            .filter_map(|(key, value)| decimal_from_value(value).map(|d| (key.clone(), d)))
            .collect();
        weights.merge(&recognized);
        weights
    }

    /// Serializes the whole vector for persistence in the settings store.
    pub fn to_settings(&self) -> Value {
        serde_json::to_value(self).expect("Weight vector serializes")
    }
}

/// Reads a decimal out of a stored JSON value, accepting both the string
/// form this crate writes and the bare number form the settings UI may
/// have written.
fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => n.as_f64().and_then(Decimal::from_f64_retain),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_weights() {
        let weights = WeightVector::default();
        assert_eq!(weights.presence, dec("0.5"));
        assert_eq!(weights.hours, dec("0.3"));
        assert_eq!(weights.overtime, dec("0.1"));
        assert_eq!(weights.leaves, dec("-0.1"));
    }

    #[test]
    fn test_merge_updates_recognized_keys() {
        let mut weights = WeightVector::default();
        let updates = HashMap::from([
            ("presence".to_string(), dec("0.9")),
            ("overtime".to_string(), dec("0.2")),
        ]);
        weights.merge(&updates);
        assert_eq!(weights.presence, dec("0.9"));
        assert_eq!(weights.overtime, dec("0.2"));
        // Untouched keys keep their previous value.
        assert_eq!(weights.hours, dec("0.3"));
        assert_eq!(weights.leaves, dec("-0.1"));
    }

    #[test]
    fn test_merge_ignores_unknown_keys() {
        let mut weights = WeightVector::default();
        let updates = HashMap::from([
            ("presence".to_string(), dec("0.9")),
            ("bogus_key".to_string(), dec("100")),
        ]);
        weights.merge(&updates);
        assert_eq!(weights.presence, dec("0.9"));
        assert_eq!(weights, WeightVector {
            presence: dec("0.9"),
            ..WeightVector::default()
        });
    }

    #[test]
    fn test_from_settings_missing_value_yields_defaults() {
        assert_eq!(WeightVector::from_settings(None), WeightVector::default());
    }

    #[test]
    fn test_from_settings_non_object_yields_defaults() {
        let stored = json!("not an object");
        assert_eq!(
            WeightVector::from_settings(Some(&stored)),
            WeightVector::default()
        );
    }

    #[test]
    fn test_from_settings_reads_string_form() {
        let stored = json!({
            "presence": "0.7",
            "hours": "0.2",
            "overtime": "0.05",
            "leaves": "-0.2"
        });
        let weights = WeightVector::from_settings(Some(&stored));
        assert_eq!(weights.presence, dec("0.7"));
        assert_eq!(weights.hours, dec("0.2"));
        assert_eq!(weights.overtime, dec("0.05"));
        assert_eq!(weights.leaves, dec("-0.2"));
    }

    #[test]
    fn test_from_settings_reads_number_form() {
        let stored = json!({ "presence": 0.75 });
        let weights = WeightVector::from_settings(Some(&stored));
        assert_eq!(weights.presence, dec("0.75"));
        assert_eq!(weights.hours, dec("0.3"));
    }

    #[test]
    fn test_from_settings_partial_object_overlays_defaults() {
        let stored = json!({ "overtime": "0.4" });
        let weights = WeightVector::from_settings(Some(&stored));
        assert_eq!(weights.overtime, dec("0.4"));
        assert_eq!(weights.presence, dec("0.5"));
        assert_eq!(weights.leaves, dec("-0.1"));
    }

    #[test]
    fn test_from_settings_skips_unreadable_entries() {
        let stored = json!({
            "presence": "not a number",
            "hours": "0.6"
        });
        let weights = WeightVector::from_settings(Some(&stored));
        assert_eq!(weights.presence, dec("0.5"));
        assert_eq!(weights.hours, dec("0.6"));
    }

    #[test]
    fn test_settings_round_trip() {
        let weights = WeightVector {
            presence: dec("0.6"),
            hours: dec("0.25"),
            overtime: dec("0.15"),
            leaves: dec("-0.05"),
        };
        let stored = weights.to_settings();
        assert_eq!(WeightVector::from_settings(Some(&stored)), weights);
    }

    #[test]
    fn test_to_settings_always_writes_all_keys() {
        let stored = WeightVector::default().to_settings();
        let object = stored.as_object().unwrap();
        for key in ["presence", "hours", "overtime", "leaves"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert!(!object.contains_key("bogus_key"));
    }
}
