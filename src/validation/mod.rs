//! Field-level validation errors and range checks.
//!
//! Every fallible operation in this crate reports all of its input problems
//! at once as a [`ValidationErrors`] collection, never just the first issue.
//! Callers are expected to re-collect input and retry; no partial state
//! survives a failed call.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Longest straight-line (geodesic) distance on Earth between two points,
/// in kilometres. No delivery distance can exceed it.
pub const MAX_DISTANCE_KM: u32 = 17208;

/// Input field named by a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    /// Base delivery cost shared by the batch.
    BaseCost,
    /// Package weight in kilograms.
    Weight,
    /// Package distance in kilometres.
    Distance,
    /// Promotional offer code.
    OfferCode,
    /// Number of vehicles in the fleet.
    VehicleCount,
    /// Fleet maximum speed in km/h.
    MaxSpeed,
    /// Fleet maximum carriable weight in kilograms.
    MaxWeight,
}

impl Field {
    /// Human-readable field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BaseCost => "base delivery cost",
            Self::Weight => "weight",
            Self::Distance => "distance",
            Self::OfferCode => "offer code",
            Self::VehicleCount => "number of vehicles",
            Self::MaxSpeed => "maximum speed",
            Self::MaxWeight => "maximum carriable weight",
        }
    }

    /// Unit suffix printed after values of this field, if any.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Weight | Self::MaxWeight => "kg",
            Self::Distance => "km",
            Self::MaxSpeed => "km/h",
            Self::BaseCost | Self::OfferCode | Self::VehicleCount => "",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One violated input constraint: which field, which bound, which value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// Value fell below the field's minimum (positivity or an offer's
    /// eligibility floor).
    #[error("expect the {field} to be more than {minimum}{unit}, but received {actual}{unit}", unit = .field.unit())]
    BelowMinimum {
        /// Violating field.
        field: Field,
        /// Inclusive lower bound.
        minimum: u32,
        /// Offending value.
        actual: u32,
    },
    /// Value exceeded the field's maximum (the geodesic cap or an offer's
    /// eligibility ceiling).
    #[error("expect the {field} to be less than {maximum}{unit}, but received {actual}{unit}", unit = .field.unit())]
    AboveMaximum {
        /// Violating field.
        field: Field,
        /// Inclusive upper bound.
        maximum: u32,
        /// Offending value.
        actual: u32,
    },
    /// Offer code is not in the catalogue.
    #[error("unknown offer code \"{actual}\"")]
    UnknownOfferCode {
        /// The unrecognized code.
        actual: String,
    },
}

/// All validation issues from one call, reported together.
///
/// # Examples
///
/// ```
/// use courier_core::validation::{ensure_positive, Field, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// ensure_positive(Field::Weight, 0, &mut errors);
/// let err = errors.into_result(()).expect_err("zero weight");
/// assert_eq!(err.issues().len(), 1);
/// assert!(err.to_string().contains("weight"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    issues: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Records one issue.
    pub fn push(&mut self, issue: ValidationError) {
        self.issues.push(issue);
    }

    /// Issues recorded so far, in check order.
    pub fn issues(&self) -> &[ValidationError] {
        &self.issues
    }

    /// True if no issue has been recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `Ok(value)` when no issue was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(issue: ValidationError) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

/// Records a `BelowMinimum` issue when `value` is zero.
///
/// All numeric inputs in this system are positive integers; zero is the
/// only way an unsigned value can violate that.
pub fn ensure_positive(field: Field, value: u32, errors: &mut ValidationErrors) {
    if value < 1 {
        errors.push(ValidationError::BelowMinimum {
            field,
            minimum: 1,
            actual: value,
        });
    }
}

/// Records an issue when `value` falls outside the inclusive `[min, max]`
/// range for `field`.
pub fn ensure_in_range(field: Field, value: u32, min: u32, max: u32, errors: &mut ValidationErrors) {
    if value < min {
        errors.push(ValidationError::BelowMinimum {
            field,
            minimum: min,
            actual: value,
        });
    } else if value > max {
        errors.push(ValidationError::AboveMaximum {
            field,
            maximum: max,
            actual: value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_accepts_one() {
        let mut errors = ValidationErrors::new();
        ensure_positive(Field::BaseCost, 1, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_ensure_positive_rejects_zero() {
        let mut errors = ValidationErrors::new();
        ensure_positive(Field::VehicleCount, 0, &mut errors);
        assert_eq!(
            errors.issues(),
            &[ValidationError::BelowMinimum {
                field: Field::VehicleCount,
                minimum: 1,
                actual: 0,
            }]
        );
    }

    #[test]
    fn test_ensure_in_range_bounds_inclusive() {
        let mut errors = ValidationErrors::new();
        ensure_in_range(Field::Weight, 70, 70, 200, &mut errors);
        ensure_in_range(Field::Weight, 200, 70, 200, &mut errors);
        assert!(errors.is_empty());

        ensure_in_range(Field::Weight, 69, 70, 200, &mut errors);
        ensure_in_range(Field::Weight, 201, 70, 200, &mut errors);
        assert_eq!(errors.issues().len(), 2);
    }

    #[test]
    fn test_display_one_issue_per_line() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::BelowMinimum {
            field: Field::Weight,
            minimum: 70,
            actual: 50,
        });
        errors.push(ValidationError::AboveMaximum {
            field: Field::Distance,
            maximum: MAX_DISTANCE_KM,
            actual: 20000,
        });
        let text = errors.to_string();
        assert_eq!(
            text.lines().next(),
            Some("expect the weight to be more than 70kg, but received 50kg")
        );
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("less than 17208km"));
    }

    #[test]
    fn test_unknown_offer_code_message() {
        let err = ValidationError::UnknownOfferCode {
            actual: "OFRX".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown offer code \"OFRX\"");
    }

    #[test]
    fn test_into_result_empty_is_ok() {
        let errors = ValidationErrors::new();
        assert_eq!(errors.into_result(7), Ok(7));
    }
}
