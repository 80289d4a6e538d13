//! Promotional offer codes and the static offer catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// A promotional offer code from the fixed catalogue.
///
/// The wire form is the uppercase string printed on the shipping label
/// (`OFR001` etc.); parsing any other string is a validation error rather
/// than a silent no-discount fallback.
///
/// # Examples
///
/// ```
/// use courier_core::models::OfferCode;
///
/// let code: OfferCode = "OFR001".parse().expect("known code");
/// assert_eq!(code.to_string(), "OFR001");
/// assert!("OFR999".parse::<OfferCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferCode {
    /// 10% off, weight 70–200 kg, distance 0–200 km.
    Ofr001,
    /// 7% off, weight 100–250 kg, distance 50–150 km.
    Ofr002,
    /// 5% off, weight 10–150 kg, distance 50–250 km.
    Ofr003,
}

impl fmt::Display for OfferCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ofr001 => "OFR001",
            Self::Ofr002 => "OFR002",
            Self::Ofr003 => "OFR003",
        };
        f.write_str(s)
    }
}

impl FromStr for OfferCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFR001" => Ok(Self::Ofr001),
            "OFR002" => Ok(Self::Ofr002),
            "OFR003" => Ok(Self::Ofr003),
            other => Err(ValidationError::UnknownOfferCode {
                actual: other.to_owned(),
            }),
        }
    }
}

/// A catalogue entry: discount rate plus the eligibility window in which the
/// offer may be applied. Both ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    code: OfferCode,
    discount_rate: f64,
    weight_range_kg: [u32; 2],
    distance_range_km: [u32; 2],
}

/// The fixed, process-wide offer catalogue.
const CATALOGUE: [Offer; 3] = [
    Offer {
        code: OfferCode::Ofr001,
        discount_rate: 0.10,
        weight_range_kg: [70, 200],
        distance_range_km: [0, 200],
    },
    Offer {
        code: OfferCode::Ofr002,
        discount_rate: 0.07,
        weight_range_kg: [100, 250],
        distance_range_km: [50, 150],
    },
    Offer {
        code: OfferCode::Ofr003,
        discount_rate: 0.05,
        weight_range_kg: [10, 150],
        distance_range_km: [50, 250],
    },
];

impl Offer {
    /// Returns the full catalogue.
    pub fn catalogue() -> &'static [Offer] {
        &CATALOGUE
    }

    /// Looks up the catalogue entry for a code.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_core::models::{Offer, OfferCode};
    ///
    /// let offer = Offer::for_code(OfferCode::Ofr003);
    /// assert_eq!(offer.discount_rate(), 0.05);
    /// assert_eq!(offer.weight_range_kg(), [10, 150]);
    /// ```
    pub fn for_code(code: OfferCode) -> &'static Offer {
        match code {
            OfferCode::Ofr001 => &CATALOGUE[0],
            OfferCode::Ofr002 => &CATALOGUE[1],
            OfferCode::Ofr003 => &CATALOGUE[2],
        }
    }

    /// The code this entry belongs to.
    pub fn code(&self) -> OfferCode {
        self.code
    }

    /// Discount rate as a fraction in `[0, 1)`.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Inclusive `[min, max]` eligible weight in kilograms.
    pub fn weight_range_kg(&self) -> [u32; 2] {
        self.weight_range_kg
    }

    /// Inclusive `[min, max]` eligible distance in kilometres.
    pub fn distance_range_km(&self) -> [u32; 2] {
        self.distance_range_km
    }
}
