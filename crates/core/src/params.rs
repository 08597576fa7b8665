//! Typed parameter extraction from a `serde_json::Value` object.
//!
//! Total helpers: a missing key or a wrong-typed value falls back to the
//! given default, so callers always get a usable number. Range and
//! finiteness checks belong to the params structs' `validate()`, not here.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, or `default` if missing or not a
/// number. JSON integers convert to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, or `default` if missing, not an
/// integer, or negative.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"strength": 2.5e-4});
        assert!((param_f64(&params, "strength", 1.0) - 2.5e-4).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"magnet_length": 4096});
        assert!((param_f64(&params, "magnet_length", 0.0) - 4096.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_defaults_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "strength", 3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_defaults_for_wrong_type() {
        let params = json!({"strength": "strong"});
        assert!((param_f64(&params, "strength", 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_defaults_for_non_object() {
        let params = json!([1, 2, 3]);
        assert!((param_f64(&params, "strength", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"substeps": 16});
        assert_eq!(param_usize(&params, "substeps", 1), 16);
    }

    #[test]
    fn param_usize_defaults_when_key_missing() {
        let params = json!({});
        assert_eq!(param_usize(&params, "substeps", 8), 8);
    }

    #[test]
    fn param_usize_defaults_for_float_value() {
        let params = json!({"substeps": 2.5});
        assert_eq!(param_usize(&params, "substeps", 4), 4);
    }

    #[test]
    fn param_usize_defaults_for_negative_integer() {
        let params = json!({"particle_count": -1});
        assert_eq!(param_usize(&params, "particle_count", 1000), 1000);
    }
}
