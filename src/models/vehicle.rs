//! Ephemeral vehicle and trip state used during one scheduling call.

/// One outbound-and-return dispatch carrying one or more packages together.
///
/// `duration_hours` is the one-way duration: the slowest package's
/// single-trip time. The vehicle is back and available again after twice
/// this duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    package_ids: Vec<u32>,
    duration_hours: f64,
}

impl Trip {
    /// Creates a trip record.
    pub fn new(package_ids: Vec<u32>, duration_hours: f64) -> Self {
        Self {
            package_ids,
            duration_hours,
        }
    }

    /// IDs of the packages dispatched together on this trip.
    pub fn package_ids(&self) -> &[u32] {
        &self.package_ids
    }

    /// One-way duration in hours (maximum single-trip time on board).
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }
}

/// Scheduling state for one vehicle.
///
/// Vehicles exist only for the duration of a single [`crate::scheduling::schedule`]
/// call; no identity persists across calls. `consumed_time` is the cumulative
/// time spent on completed round trips and determines when the vehicle is next
/// available.
#[derive(Debug, Clone)]
pub struct Vehicle {
    index: usize,
    consumed_time: f64,
    trips: Vec<Trip>,
}

impl Vehicle {
    /// Creates an idle vehicle with no completed trips.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            consumed_time: 0.0,
            trips: Vec::new(),
        }
    }

    /// Position of this vehicle in the fleet (tie-break order).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cumulative round-trip time so far, in hours.
    pub fn consumed_time(&self) -> f64 {
        self.consumed_time
    }

    /// Trips completed so far, in dispatch order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Records a completed trip and advances availability by the full
    /// round trip (out and back).
    pub fn log_trip(&mut self, trip: Trip) {
        self.consumed_time += 2.0 * trip.duration_hours();
        self.trips.push(trip);
    }
}
