//! Printer capacity constraints.
//!
//! Limits that every batch must respect: total material volume on the
//! build plate and the number of models printed simultaneously.

use serde::{Deserialize, Serialize};

/// Per-batch capacity limits, applied uniformly to every batch.
///
/// Unknown fields in serialized input are rejected rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrinterConstraints {
    /// Maximum cumulative volume per batch (cm³). Must be positive.
    pub max_volume: f64,
    /// Maximum number of items per batch. Must be at least 1.
    pub max_items: usize,
}

impl PrinterConstraints {
    /// Creates constraints with the given limits.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_new() {
        let c = PrinterConstraints::new(300.0, 2);
        assert!((c.max_volume - 300.0).abs() < 1e-10);
        assert_eq!(c.max_items, 2);
    }

    #[test]
    fn test_constraints_from_json() {
        let c: PrinterConstraints =
            serde_json::from_str(r#"{"max_volume": 300, "max_items": 2}"#).unwrap();
        assert_eq!(c.max_items, 2);
    }

    #[test]
    fn test_constraints_rejects_unknown_field() {
        let result: Result<PrinterConstraints, _> =
            serde_json::from_str(r#"{"max_volume": 300, "max_items": 2, "max_weight": 10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_constraints_rejects_negative_items() {
        // usize cannot represent a negative count
        let result: Result<PrinterConstraints, _> =
            serde_json::from_str(r#"{"max_volume": 300, "max_items": -1}"#);
        assert!(result.is_err());
    }
}
