//! Package and costed-package types.

use serde::{Deserialize, Serialize};

use super::OfferCode;

/// A package submitted for delivery.
///
/// IDs are positive and unique within a batch, assigned by input order
/// starting at 1. Construction is unchecked; range validation happens in
/// the cost estimator, which is where out-of-range inputs are reported.
///
/// # Examples
///
/// ```
/// use courier_core::models::{OfferCode, Package};
///
/// let pkg = Package::new(1, 50, 30, Some(OfferCode::Ofr001));
/// assert_eq!(pkg.id(), 1);
/// assert_eq!(pkg.weight_kg(), 50);
/// assert_eq!(pkg.distance_km(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    id: u32,
    weight_kg: u32,
    distance_km: u32,
    offer: Option<OfferCode>,
}

impl Package {
    /// Creates a package.
    pub fn new(id: u32, weight_kg: u32, distance_km: u32, offer: Option<OfferCode>) -> Self {
        Self {
            id,
            weight_kg,
            distance_km,
            offer,
        }
    }

    /// Package ID (1-based input order).
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> u32 {
        self.weight_kg
    }

    /// Delivery distance in kilometres.
    pub fn distance_km(&self) -> u32 {
        self.distance_km
    }

    /// Promotional offer code, if one was supplied.
    pub fn offer(&self) -> Option<OfferCode> {
        self.offer
    }
}

/// A package with its delivery cost computed.
///
/// Produced by [`crate::pricing::estimate_cost`] and consumed by the
/// scheduler, which only adds a time dimension — the cost fields are never
/// recomputed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostedPackage {
    package: Package,
    cost_without_discount: f64,
    discount: f64,
    final_cost: f64,
}

impl CostedPackage {
    /// Assembles a costed package from its parts.
    ///
    /// Intended for the pricing module; `discount` and `final_cost` are
    /// expected to be already quantized to 2 decimal places.
    pub fn new(
        package: Package,
        cost_without_discount: f64,
        discount: f64,
        final_cost: f64,
    ) -> Self {
        Self {
            package,
            cost_without_discount,
            discount,
            final_cost,
        }
    }

    /// The underlying package.
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Package ID.
    pub fn id(&self) -> u32 {
        self.package.id()
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> u32 {
        self.package.weight_kg()
    }

    /// Delivery distance in kilometres.
    pub fn distance_km(&self) -> u32 {
        self.package.distance_km()
    }

    /// Base + weight + distance cost before any discount.
    pub fn cost_without_discount(&self) -> f64 {
        self.cost_without_discount
    }

    /// Discount amount, rounded to 2 decimal places.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Final cost after discount, rounded to 2 decimal places.
    pub fn final_cost(&self) -> f64 {
        self.final_cost
    }
}
