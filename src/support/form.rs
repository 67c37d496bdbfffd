//! Input-field descriptors for a form-driven view layer.
//!
//! The models in this crate sit behind interactive forms: every input is a
//! numeric field or a choice field with declared bounds and a default. The
//! descriptors here let a view layer render those fields without hardcoding
//! the models' expectations: each model publishes the fields it consumes.
//!
//! Descriptors are data only. Validation still happens in the model input
//! constructors; the declared bounds exist so the view can clamp or reject
//! values before submission, mirroring the min/max arguments of the original
//! form widgets.

use serde::Serialize;

/// A numeric form input with declared bounds and a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberField {
    /// Prompt shown next to the input.
    pub label: &'static str,

    /// Unit the value is entered in (e.g., `"MJ/kg"`, `"%"`).
    pub unit: &'static str,

    /// Smallest accepted value.
    pub min: f64,

    /// Largest accepted value, if bounded.
    pub max: Option<f64>,

    /// Value the field starts at.
    pub default: f64,
}

impl NumberField {
    /// A non-negative field with no upper bound, starting at zero.
    #[must_use]
    pub const fn non_negative(label: &'static str, unit: &'static str) -> Self {
        Self {
            label,
            unit,
            min: 0.0,
            max: None,
            default: 0.0,
        }
    }

    /// A percentage field bounded to 0–100, starting at zero.
    #[must_use]
    pub const fn percentage(label: &'static str) -> Self {
        Self {
            label,
            unit: "%",
            min: 0.0,
            max: Some(100.0),
            default: 0.0,
        }
    }
}

/// A single-choice form input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChoiceField {
    /// Prompt shown next to the input.
    pub label: &'static str,

    /// The selectable options.
    pub options: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_fields_are_bounded() {
        let field = NumberField::percentage("Average capture rate");
        assert_eq!(field.min, 0.0);
        assert_eq!(field.max, Some(100.0));
        assert_eq!(field.unit, "%");
    }

    #[test]
    fn non_negative_fields_are_unbounded_above() {
        let field = NumberField::non_negative("Mass of the fuel consumed", "kg");
        assert_eq!(field.min, 0.0);
        assert_eq!(field.max, None);
    }
}
