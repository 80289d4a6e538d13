//! Domain model types for courier pricing and fleet dispatch.
//!
//! Provides the core abstractions: packages with weight and distance, the
//! static promotional offer catalogue, costed packages produced by the
//! estimator, fleet parameters, ephemeral per-call vehicle state, and the
//! final delivery estimate record.

mod estimate;
mod fleet;
mod offer;
mod package;
mod vehicle;

pub use estimate::DeliveryEstimate;
pub use fleet::Fleet;
pub use offer::{Offer, OfferCode};
pub use package::{CostedPackage, Package};
pub use vehicle::{Trip, Vehicle};
