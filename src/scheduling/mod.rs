//! Fleet delivery scheduling.
//!
//! - [`schedule`] — batch assignment with the shipped first-fit trip packing
//! - [`schedule_with_packer`] — same round/time accounting, pluggable packer
//! - [`schedule_fleet`] — validates raw fleet parameters first
//! - [`TripPacker`] — the packing seam, with [`FirstFitPacker`] and
//!   [`BestFitPacker`] implementations

mod packer;
mod scheduler;

pub use packer::{BestFitPacker, FirstFitPacker, TripPacker};
pub use scheduler::{schedule, schedule_fleet, schedule_with_packer};
