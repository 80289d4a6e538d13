//! Fleet parameters shared by all vehicles in a scheduling call.

use serde::{Deserialize, Serialize};

use crate::validation::{ensure_positive, Field, ValidationErrors};

/// Parameters of a homogeneous delivery fleet.
///
/// Every vehicle has the same maximum speed and carriable weight; the count
/// bounds how many trips can run in one round.
///
/// # Examples
///
/// ```
/// use courier_core::models::Fleet;
///
/// let fleet = Fleet::new(2, 70, 200).expect("valid parameters");
/// assert_eq!(fleet.vehicle_count(), 2);
/// assert_eq!(fleet.max_speed_kmh(), 70);
/// assert_eq!(fleet.max_weight_kg(), 200);
///
/// let err = Fleet::new(0, 0, 200).expect_err("two zero fields");
/// assert_eq!(err.issues().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    vehicle_count: u32,
    max_speed_kmh: u32,
    max_weight_kg: u32,
}

impl Fleet {
    /// Creates a fleet, validating that all three parameters are positive.
    ///
    /// All violations are collected and returned together.
    pub fn new(
        vehicle_count: u32,
        max_speed_kmh: u32,
        max_weight_kg: u32,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        ensure_positive(Field::VehicleCount, vehicle_count, &mut errors);
        ensure_positive(Field::MaxSpeed, max_speed_kmh, &mut errors);
        ensure_positive(Field::MaxWeight, max_weight_kg, &mut errors);
        errors.into_result(Self {
            vehicle_count,
            max_speed_kmh,
            max_weight_kg,
        })
    }

    /// Number of vehicles available per round.
    pub fn vehicle_count(&self) -> u32 {
        self.vehicle_count
    }

    /// Uniform maximum speed in km/h.
    pub fn max_speed_kmh(&self) -> u32 {
        self.max_speed_kmh
    }

    /// Maximum carriable weight per trip in kilograms.
    pub fn max_weight_kg(&self) -> u32 {
        self.max_weight_kg
    }
}
