//! Delivery estimate output record.

use serde::{Deserialize, Serialize};

/// The scheduler's output for one package: the cost figures carried over
/// from pricing plus the estimated delivery completion time.
///
/// Drivers render this however they like (the conventional console line is
/// `PKG<id> <discount> <final_cost> <delivery_time>`); the core only
/// guarantees the numeric fields are already quantized to 2 decimal places.
///
/// # Examples
///
/// ```
/// use courier_core::models::DeliveryEstimate;
///
/// let est = DeliveryEstimate::new(2, 0.0, 1475.0, 1.78);
/// assert_eq!(est.package_id(), 2);
/// assert_eq!(est.delivery_time_hours(), 1.78);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryEstimate {
    package_id: u32,
    discount: f64,
    final_cost: f64,
    delivery_time_hours: f64,
}

impl DeliveryEstimate {
    /// Creates an estimate record.
    pub fn new(package_id: u32, discount: f64, final_cost: f64, delivery_time_hours: f64) -> Self {
        Self {
            package_id,
            discount,
            final_cost,
            delivery_time_hours,
        }
    }

    /// Package ID this estimate belongs to.
    pub fn package_id(&self) -> u32 {
        self.package_id
    }

    /// Discount amount from pricing, unchanged by scheduling.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Final cost from pricing, unchanged by scheduling.
    pub fn final_cost(&self) -> f64 {
        self.final_cost
    }

    /// Estimated delivery completion time in hours from dispatch start.
    pub fn delivery_time_hours(&self) -> f64 {
        self.delivery_time_hours
    }
}
