//! # courier-core
//!
//! Courier delivery pricing and fleet dispatch library: promotional offer
//! pricing with eligibility windows, capacity-constrained trip packing,
//! and per-package delivery time estimation for a homogeneous fleet.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Package, CostedPackage, Offer, Fleet, DeliveryEstimate)
//! - [`rounding`] — Two-decimal fixed-point helpers (round half-away-from-zero, truncate)
//! - [`validation`] — Field-level validation errors and range checks
//! - [`pricing`] — Package cost estimator with offer-code discounts
//! - [`scheduling`] — Fleet delivery scheduler (trip packing + round-trip time accounting)
//!
//! ## Usage
//!
//! ```
//! use courier_core::models::{Fleet, Package};
//! use courier_core::pricing::estimate_cost;
//! use courier_core::scheduling::schedule;
//!
//! let pkg = Package::new(1, 50, 30, None);
//! let costed = estimate_cost(100, &pkg).expect("valid inputs");
//! assert_eq!(costed.final_cost(), 750.0);
//!
//! let fleet = Fleet::new(2, 70, 200).expect("valid fleet");
//! let estimates = schedule(&[costed], &fleet);
//! assert_eq!(estimates.len(), 1);
//! ```

pub mod models;
pub mod pricing;
pub mod rounding;
pub mod scheduling;
pub mod validation;
