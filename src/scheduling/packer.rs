//! Trip packing strategies.
//!
//! A packer chooses which of the remaining packages board the next trip,
//! subject to the vehicle's weight capacity. The shipped behavior is
//! [`FirstFitPacker`]; [`BestFitPacker`] is the count-then-weight subset
//! search kept behind the same seam as a documented alternative.

use crate::models::CostedPackage;

/// Selects the packages for one trip.
///
/// Implementations return indices into `remaining` (strictly increasing);
/// the caller removes those packages from the pool. Every package in
/// `remaining` is individually carriable (the scheduler excludes overweight
/// packages up front), so a non-empty pool always yields a non-empty trip.
pub trait TripPacker {
    /// Picks the indices of the packages boarding the next trip.
    fn pack(&self, remaining: &[CostedPackage], max_weight_kg: u32) -> Vec<usize>;
}

/// First-fit in arrival order: scan the remaining list as-is and take every
/// package that still fits under the running weight total.
///
/// This is deliberately not an optimal subset search — it reproduces the
/// observed dispatch behavior, where packages board in the order the
/// operator entered them.
///
/// # Examples
///
/// ```
/// use courier_core::models::{CostedPackage, Package};
/// use courier_core::scheduling::{FirstFitPacker, TripPacker};
///
/// let pool: Vec<CostedPackage> = [(1, 50), (2, 175), (3, 110)]
///     .iter()
///     .map(|&(id, w)| CostedPackage::new(Package::new(id, w, 10, None), 0.0, 0.0, 0.0))
///     .collect();
///
/// // 50 fits, 175 would exceed 200, 110 still fits after 50.
/// assert_eq!(FirstFitPacker.pack(&pool, 200), vec![0, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitPacker;

impl TripPacker for FirstFitPacker {
    fn pack(&self, remaining: &[CostedPackage], max_weight_kg: u32) -> Vec<usize> {
        let mut picked = Vec::new();
        // Running load in u64: two individually-carriable weights can sum
        // past u32::MAX.
        let mut load: u64 = 0;
        for (i, pkg) in remaining.iter().enumerate() {
            if load + u64::from(pkg.weight_kg()) <= u64::from(max_weight_kg) {
                load += u64::from(pkg.weight_kg());
                picked.push(i);
            }
        }
        picked
    }
}

/// Exhaustive subset selection maximizing package count first and total
/// weight second, under the capacity bound.
///
/// Depth-first over the remaining list with a weight bound; exponential in
/// the pool size, so only suitable for the modest batch sizes this system
/// handles. Not used by [`crate::scheduling::schedule`] — the first-fit
/// behavior is the contract — but available through
/// [`crate::scheduling::schedule_with_packer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFitPacker;

impl TripPacker for BestFitPacker {
    fn pack(&self, remaining: &[CostedPackage], max_weight_kg: u32) -> Vec<usize> {
        let mut best: Vec<usize> = Vec::new();
        let mut best_weight: u64 = 0;
        let mut current: Vec<usize> = Vec::new();
        search(
            remaining,
            max_weight_kg,
            0,
            0,
            &mut current,
            &mut best,
            &mut best_weight,
        );
        best
    }
}

fn search(
    remaining: &[CostedPackage],
    max_weight_kg: u32,
    start: usize,
    load: u64,
    current: &mut Vec<usize>,
    best: &mut Vec<usize>,
    best_weight: &mut u64,
) {
    if current.len() > best.len() || (current.len() == best.len() && load > *best_weight) {
        best.clone_from(current);
        *best_weight = load;
    }
    // Even taking every remaining package cannot match the incumbent count.
    if current.len() + (remaining.len() - start) < best.len() {
        return;
    }
    for i in start..remaining.len() {
        let w = u64::from(remaining[i].weight_kg());
        if load + w > u64::from(max_weight_kg) {
            continue;
        }
        current.push(i);
        search(
            remaining,
            max_weight_kg,
            i + 1,
            load + w,
            current,
            best,
            best_weight,
        );
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Package;

    fn pool(weights: &[u32]) -> Vec<CostedPackage> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let id = u32::try_from(i).expect("small pool") + 1;
                CostedPackage::new(Package::new(id, w, 10, None), 0.0, 0.0, 0.0)
            })
            .collect()
    }

    #[test]
    fn test_first_fit_takes_arrival_order() {
        let pool = pool(&[50, 75, 175, 110, 155]);
        // 50 + 75 = 125; 175 would exceed 200; 110 would exceed; 155 would exceed
        assert_eq!(FirstFitPacker.pack(&pool, 200), vec![0, 1]);
    }

    #[test]
    fn test_first_fit_skips_then_resumes() {
        let pool = pool(&[175, 100, 20]);
        // 175 boards; 100 exceeds; 20 still fits
        assert_eq!(FirstFitPacker.pack(&pool, 200), vec![0, 2]);
    }

    #[test]
    fn test_first_fit_empty_pool() {
        assert!(FirstFitPacker.pack(&[], 200).is_empty());
    }

    #[test]
    fn test_first_fit_single_full_load() {
        let pool = pool(&[200]);
        assert_eq!(FirstFitPacker.pack(&pool, 200), vec![0]);
    }

    #[test]
    fn test_first_fit_near_max_weights_do_not_overflow() {
        // Two packages that each fit alone but whose sum passes u32::MAX:
        // the second is skipped, not wrapped into an over-capacity trip.
        let pool = pool(&[3_000_000_000, 3_000_000_000]);
        assert_eq!(FirstFitPacker.pack(&pool, 4_000_000_000), vec![0]);
    }

    #[test]
    fn test_best_fit_near_max_weights_do_not_overflow() {
        let pool = pool(&[3_000_000_000, 3_000_000_000, 900_000_000]);
        // Pairing the 3e9s would exceed the cap (and u32); 3e9 + 9e8 fits.
        assert_eq!(BestFitPacker.pack(&pool, 4_000_000_000), vec![0, 2]);
    }

    #[test]
    fn test_best_fit_prefers_count_over_weight() {
        // One 190 kg package vs two packages totalling 150 kg
        let pool = pool(&[190, 80, 70]);
        assert_eq!(BestFitPacker.pack(&pool, 200), vec![1, 2]);
    }

    #[test]
    fn test_best_fit_breaks_count_ties_by_weight() {
        // Pairs: (110,90)=200 beats (110,60)=170 and (90,60)=150
        let pool = pool(&[110, 90, 60]);
        assert_eq!(BestFitPacker.pack(&pool, 200), vec![0, 1]);
    }

    #[test]
    fn test_packers_agree_when_everything_fits() {
        let pool = pool(&[30, 40, 50]);
        assert_eq!(FirstFitPacker.pack(&pool, 200), vec![0, 1, 2]);
        assert_eq!(BestFitPacker.pack(&pool, 200), vec![0, 1, 2]);
    }
}
