//! Package cost estimator.
//!
//! Delivery cost is `base + 10·weight + 5·distance`. When a package carries
//! an offer code, both weight and distance must sit inside the offer's
//! eligibility window; an out-of-range value rejects the call outright
//! instead of waiving the discount (a preserved product decision, not an
//! accident — the operator is expected to correct the input).

use tracing::debug;

use crate::models::{CostedPackage, Offer, Package};
use crate::rounding::round2;
use crate::validation::{
    ensure_in_range, ensure_positive, Field, ValidationErrors, MAX_DISTANCE_KM,
};

/// Cost per kilogram of package weight.
const COST_PER_KG: u32 = 10;
/// Cost per kilometre of delivery distance.
const COST_PER_KM: u32 = 5;

/// Computes the discount and final delivery cost for one package.
///
/// All input problems are collected and returned together: positivity of
/// `base_cost`, weight, and distance, the 17208 km geodesic distance cap,
/// and — when an offer is present — the offer's weight and distance
/// eligibility ranges.
///
/// The discount and final cost are rounded to 2 decimal places
/// independently, half away from zero.
///
/// # Examples
///
/// ```
/// use courier_core::models::{OfferCode, Package};
/// use courier_core::pricing::estimate_cost;
///
/// // No offer: full price.
/// let plain = Package::new(1, 5, 5, None);
/// let costed = estimate_cost(100, &plain).expect("valid");
/// assert_eq!(costed.cost_without_discount(), 175.0);
/// assert_eq!(costed.discount(), 0.0);
/// assert_eq!(costed.final_cost(), 175.0);
///
/// // OFR003: 5% off 2100.
/// let offered = Package::new(2, 150, 100, Some(OfferCode::Ofr003));
/// let costed = estimate_cost(100, &offered).expect("in range");
/// assert_eq!(costed.discount(), 105.0);
/// assert_eq!(costed.final_cost(), 1995.0);
///
/// // OFR001 requires at least 70 kg: hard rejection, not zero discount.
/// let light = Package::new(3, 50, 30, Some(OfferCode::Ofr001));
/// assert!(estimate_cost(100, &light).is_err());
/// ```
pub fn estimate_cost(base_cost: u32, package: &Package) -> Result<CostedPackage, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    ensure_positive(Field::BaseCost, base_cost, &mut errors);
    ensure_positive(Field::Weight, package.weight_kg(), &mut errors);
    ensure_in_range(
        Field::Distance,
        package.distance_km(),
        1,
        MAX_DISTANCE_KM,
        &mut errors,
    );

    let rate = match package.offer() {
        None => 0.0,
        Some(code) => {
            let offer = Offer::for_code(code);
            let [w_min, w_max] = offer.weight_range_kg();
            ensure_in_range(Field::Weight, package.weight_kg(), w_min, w_max, &mut errors);
            let [d_min, d_max] = offer.distance_range_km();
            ensure_in_range(
                Field::Distance,
                package.distance_km(),
                d_min,
                d_max,
                &mut errors,
            );
            offer.discount_rate()
        }
    };

    if !errors.is_empty() {
        debug!(
            package_id = package.id(),
            issues = errors.issues().len(),
            "cost estimate rejected"
        );
        return Err(errors);
    }

    let cost_without_discount = f64::from(base_cost)
        + f64::from(COST_PER_KG) * f64::from(package.weight_kg())
        + f64::from(COST_PER_KM) * f64::from(package.distance_km());
    let discount = round2(cost_without_discount * rate);
    let final_cost = round2(cost_without_discount * (1.0 - rate));
    Ok(CostedPackage::new(
        *package,
        cost_without_discount,
        discount,
        final_cost,
    ))
}

/// Prices a whole input batch against one base cost.
///
/// Succeeds only when every package prices cleanly; otherwise returns the
/// combined issue list across all failing packages, in input order, so the
/// operator sees every problem at once.
pub fn price_packages(
    base_cost: u32,
    packages: &[Package],
) -> Result<Vec<CostedPackage>, ValidationErrors> {
    let mut costed = Vec::with_capacity(packages.len());
    let mut errors = ValidationErrors::new();
    for package in packages {
        match estimate_cost(base_cost, package) {
            Ok(c) => costed.push(c),
            Err(batch) => {
                for issue in batch.issues() {
                    errors.push(issue.clone());
                }
            }
        }
    }
    errors.into_result(costed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfferCode;
    use crate::validation::ValidationError;

    #[test]
    fn test_no_offer_full_price() {
        let pkg = Package::new(1, 5, 5, None);
        let costed = estimate_cost(100, &pkg).expect("valid");
        assert_eq!(costed.cost_without_discount(), 175.0);
        assert_eq!(costed.discount(), 0.0);
        assert_eq!(costed.final_cost(), 175.0);
    }

    #[test]
    fn test_ofr003_in_range_at_bounds() {
        // weight 150 and distance 100 sit inside OFR003's 10-150 / 50-250
        let pkg = Package::new(1, 150, 100, Some(OfferCode::Ofr003));
        let costed = estimate_cost(100, &pkg).expect("eligible");
        assert_eq!(costed.cost_without_discount(), 2100.0);
        assert_eq!(costed.discount(), 105.0);
        assert_eq!(costed.final_cost(), 1995.0);
    }

    #[test]
    fn test_ofr001_weight_below_range_rejects() {
        let pkg = Package::new(1, 50, 30, Some(OfferCode::Ofr001));
        let err = estimate_cost(100, &pkg).expect_err("weight below 70");
        assert_eq!(
            err.issues(),
            &[ValidationError::BelowMinimum {
                field: Field::Weight,
                minimum: 70,
                actual: 50,
            }]
        );
    }

    #[test]
    fn test_only_out_of_range_fields_reported() {
        // OFR001 weight range 70-200, distance range 0-200: weight 5 is
        // below range, distance 15 is fine, so exactly one issue.
        let pkg = Package::new(1, 5, 15, Some(OfferCode::Ofr001));
        let err = estimate_cost(100, &pkg).expect_err("weight out of range");
        assert_eq!(err.issues().len(), 1);
        assert!(matches!(
            err.issues()[0],
            ValidationError::BelowMinimum {
                field: Field::Weight,
                ..
            }
        ));
    }

    #[test]
    fn test_both_fields_out_of_range_reported_together() {
        // OFR002: weight 100-250, distance 50-150
        let pkg = Package::new(1, 20, 300, Some(OfferCode::Ofr002));
        let err = estimate_cost(100, &pkg).expect_err("both out of range");
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_distance_exceeding_geodesic_cap() {
        let pkg = Package::new(1, 10, 20000, None);
        let err = estimate_cost(100, &pkg).expect_err("too far");
        assert_eq!(
            err.issues(),
            &[ValidationError::AboveMaximum {
                field: Field::Distance,
                maximum: MAX_DISTANCE_KM,
                actual: 20000,
            }]
        );
    }

    #[test]
    fn test_zero_inputs_collected_together() {
        let pkg = Package::new(1, 0, 0, None);
        let err = estimate_cost(0, &pkg).expect_err("all zero");
        // base cost, weight, and distance each report one issue
        assert_eq!(err.issues().len(), 3);
    }

    #[test]
    fn test_estimate_is_pure() {
        let pkg = Package::new(4, 110, 60, Some(OfferCode::Ofr002));
        let a = estimate_cost(100, &pkg).expect("valid");
        let b = estimate_cost(100, &pkg).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_discount_and_final_round_independently() {
        // OFR002: cwd = 100 + 1210 + 325 = 1635; 7% = 114.45; final 1520.55
        let pkg = Package::new(1, 121, 65, Some(OfferCode::Ofr002));
        let costed = estimate_cost(100, &pkg).expect("eligible");
        assert_eq!(costed.discount(), 114.45);
        assert_eq!(costed.final_cost(), 1520.55);
    }

    #[test]
    fn test_price_packages_all_valid() {
        let packages = vec![
            Package::new(1, 50, 30, None),
            Package::new(2, 75, 125, None),
        ];
        let costed = price_packages(100, &packages).expect("valid batch");
        assert_eq!(costed.len(), 2);
        assert_eq!(costed[0].final_cost(), 750.0);
        assert_eq!(costed[1].final_cost(), 1475.0);
    }

    #[test]
    fn test_price_packages_combines_issues() {
        let packages = vec![
            Package::new(1, 50, 30, Some(OfferCode::Ofr001)), // weight below 70
            Package::new(2, 75, 125, None),                   // fine
            Package::new(3, 10, 20000, None),                 // beyond geodesic cap
        ];
        let err = price_packages(100, &packages).expect_err("two bad packages");
        assert_eq!(err.issues().len(), 2);
    }
}
