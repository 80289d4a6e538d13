//! Fleet delivery scheduler.
//!
//! Assigns a batch of costed packages to a fixed fleet in rounds. Each
//! round, the soonest-available vehicles dispatch one trip apiece; a trip
//! carries whatever the packer selects from the remaining pool, and the
//! vehicle is busy for the full round trip (out and back at the pace of its
//! slowest package). Packages heavier than the fleet's carriable weight are
//! excluded from delivery entirely.

use tracing::debug;

use crate::models::{CostedPackage, DeliveryEstimate, Fleet, Trip, Vehicle};
use crate::rounding::{round2, trunc2};
use crate::validation::ValidationErrors;

use super::{FirstFitPacker, TripPacker};

/// Schedules a batch with the shipped first-fit trip packing.
///
/// Returns one estimate per package that the fleet can carry, ordered by
/// ascending package id. Packages with `weight > max_weight` receive no
/// estimate.
///
/// # Examples
///
/// ```
/// use courier_core::models::{Fleet, Package};
/// use courier_core::pricing::price_packages;
/// use courier_core::scheduling::schedule;
///
/// let packages = vec![
///     Package::new(1, 50, 30, None),
///     Package::new(2, 75, 125, None),
///     Package::new(3, 175, 100, None),
///     Package::new(4, 110, 60, None),
///     Package::new(5, 155, 95, None),
/// ];
/// let costed = price_packages(100, &packages).expect("valid batch");
/// let fleet = Fleet::new(2, 70, 200).expect("valid fleet");
///
/// let estimates = schedule(&costed, &fleet);
/// assert_eq!(estimates.len(), 5);
/// let ids: Vec<u32> = estimates.iter().map(|e| e.package_id()).collect();
/// assert_eq!(ids, vec![1, 2, 3, 4, 5]);
/// ```
pub fn schedule(packages: &[CostedPackage], fleet: &Fleet) -> Vec<DeliveryEstimate> {
    schedule_with_packer(packages, fleet, &FirstFitPacker)
}

/// Schedules a batch with a caller-chosen [`TripPacker`] strategy.
///
/// The round structure and time accounting are identical to [`schedule`];
/// only the per-trip package selection differs.
pub fn schedule_with_packer<P: TripPacker>(
    packages: &[CostedPackage],
    fleet: &Fleet,
    packer: &P,
) -> Vec<DeliveryEstimate> {
    let mut remaining: Vec<CostedPackage> = Vec::with_capacity(packages.len());
    for pkg in packages {
        if pkg.weight_kg() > fleet.max_weight_kg() {
            debug!(
                package_id = pkg.id(),
                weight_kg = pkg.weight_kg(),
                max_weight_kg = fleet.max_weight_kg(),
                "package exceeds carriable weight, excluded from delivery"
            );
        } else {
            remaining.push(*pkg);
        }
    }

    let vehicle_count = fleet.vehicle_count() as usize;
    let mut vehicles: Vec<Vehicle> = (0..vehicle_count).map(Vehicle::new).collect();
    let mut estimates: Vec<DeliveryEstimate> = Vec::with_capacity(remaining.len());
    let mut round = 0u32;

    while !remaining.is_empty() {
        round += 1;
        // Soonest-available vehicle dispatches first; the stable sort keeps
        // fleet order on equal consumed time.
        let mut order: Vec<usize> = (0..vehicles.len()).collect();
        order.sort_by(|&a, &b| {
            vehicles[a]
                .consumed_time()
                .total_cmp(&vehicles[b].consumed_time())
        });

        let mut dispatched = 0usize;
        for &vi in &order {
            if remaining.is_empty() {
                break;
            }
            let picked = packer.pack(&remaining, fleet.max_weight_kg());
            if picked.is_empty() {
                continue;
            }
            dispatched += picked.len();

            let vehicle = &mut vehicles[vi];
            let available_at = vehicle.consumed_time();
            let mut trip_ids = Vec::with_capacity(picked.len());
            let mut trip_duration: f64 = 0.0;
            for &i in &picked {
                let pkg = &remaining[i];
                let one_way = single_trip_time(pkg.distance_km(), fleet.max_speed_kmh());
                trip_duration = trip_duration.max(one_way);
                trip_ids.push(pkg.id());
                // The package is delivered the moment it arrives, not when
                // the vehicle finishes the trip's slowest drop.
                estimates.push(DeliveryEstimate::new(
                    pkg.id(),
                    pkg.discount(),
                    pkg.final_cost(),
                    round2(available_at + one_way),
                ));
            }
            vehicle.log_trip(Trip::new(trip_ids, trip_duration));

            for &i in picked.iter().rev() {
                remaining.remove(i);
            }
        }

        debug!(round, dispatched, remaining = remaining.len(), "round complete");
        if dispatched == 0 {
            // Nothing boarded anywhere; the pool can never shrink again.
            break;
        }
    }

    estimates.sort_by_key(DeliveryEstimate::package_id);
    estimates
}

/// Validates raw fleet parameters, then schedules with first-fit packing.
///
/// This is the four-argument contract exposed to drivers that collect the
/// fleet parameters alongside the package batch.
pub fn schedule_fleet(
    packages: &[CostedPackage],
    vehicle_count: u32,
    max_speed_kmh: u32,
    max_weight_kg: u32,
) -> Result<Vec<DeliveryEstimate>, ValidationErrors> {
    let fleet = Fleet::new(vehicle_count, max_speed_kmh, max_weight_kg)?;
    Ok(schedule(packages, &fleet))
}

/// One-way travel time in hours, truncated to 2 decimals (never rounded up).
fn single_trip_time(distance_km: u32, max_speed_kmh: u32) -> f64 {
    trunc2(f64::from(distance_km) / f64::from(max_speed_kmh))
}
