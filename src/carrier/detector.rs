//! Tracking-number based carrier detection.
//!
//! # Rule Table
//! Families are evaluated in this fixed order; the first matching pattern wins.
//!
//! | Order | Carrier     | Patterns (against trimmed, upper-cased input)                  |
//! |-------|-------------|----------------------------------------------------------------|
//! | 1     | usps        | `^(94\|93\|92\|95)[0-9]{20}$`, `^(94\|93\|92\|95)[0-9]{22}$`,  |
//! |       |             | `^(70\|14\|23\|03)[0-9]{14}$`, `^(M0\|82)[0-9]{8}$`,           |
//! |       |             | `^[A-Z]{2}[0-9]{9}US$`                                         |
//! | 2     | fedex       | `^[0-9]{12}$`, `^[0-9]{15}$`, `^[0-9]{20}$`, `^96[0-9]{20}$`   |
//! | 3     | ups         | `^1Z[0-9A-Z]{16}$`, `^[HTJKFWMQA][0-9]{10}$`                   |
//! | 4     | dhl         | `^[0-9]{10,12}$`, `^JJD[0-9]{18}$`, `^JVGL[0-9]{10}$`          |
//! | 5     | canada_post | `^[0-9]{16}$`, `^[A-Z]{2}[0-9]{9}CA$`                          |
//!
//! The numeric families overlap: a 12 digit number satisfies both FedEx and DHL
//! and resolves to FedEx; a 16 digit number starting with `70`, `14`, `23` or
//! `03` satisfies both USPS and Canada Post and resolves to USPS.

use regex::Regex;
use std::sync::LazyLock;

use crate::carrier::types::CarrierCode;

const USPS_PATTERNS: &[&str] = &[
    r"^(94|93|92|95)[0-9]{20}$",
    r"^(94|93|92|95)[0-9]{22}$",
    r"^(70|14|23|03)[0-9]{14}$",
    r"^(M0|82)[0-9]{8}$",
    r"^[A-Z]{2}[0-9]{9}US$",
];

const FEDEX_PATTERNS: &[&str] = &[
    r"^[0-9]{12}$",
    r"^[0-9]{15}$",
    r"^[0-9]{20}$",
    r"^96[0-9]{20}$",
];

const UPS_PATTERNS: &[&str] = &[r"^1Z[0-9A-Z]{16}$", r"^[HTJKFWMQA][0-9]{10}$"];

const DHL_PATTERNS: &[&str] = &[r"^[0-9]{10,12}$", r"^JJD[0-9]{18}$", r"^JVGL[0-9]{10}$"];

const CANADA_POST_PATTERNS: &[&str] = &[r"^[0-9]{16}$", r"^[A-Z]{2}[0-9]{9}CA$"];

/// Carrier families in evaluation order.
fn carrier_patterns() -> Vec<(CarrierCode, &'static [&'static str])> {
    vec![
        (CarrierCode::Usps, USPS_PATTERNS),
        (CarrierCode::Fedex, FEDEX_PATTERNS),
        (CarrierCode::Ups, UPS_PATTERNS),
        (CarrierCode::Dhl, DHL_PATTERNS),
        (CarrierCode::CanadaPost, CANADA_POST_PATTERNS),
    ]
}

/// A single compiled detection rule.
#[derive(Debug)]
pub struct CarrierRule {
    pub carrier: CarrierCode,
    pub pattern: Regex,
}

static RULES: LazyLock<Vec<CarrierRule>> = LazyLock::new(|| {
    carrier_patterns()
        .into_iter()
        .flat_map(|(carrier, patterns)| {
            patterns.iter().map(move |p| CarrierRule {
                carrier: carrier.clone(),
                pattern: Regex::new(p).expect("carrier pattern should compile"),
            })
        })
        .collect()
});

/// The compiled rule table, in evaluation order.
pub fn rules() -> &'static [CarrierRule] {
    &RULES
}

/// Guess the carrier of a tracking number.
///
/// Never fails; returns `CarrierCode::Unknown` when no family matches.
pub fn detect(tracking_number: &str) -> CarrierCode {
    let candidate = tracking_number.trim().to_uppercase();
    if candidate.is_empty() {
        return CarrierCode::Unknown;
    }

    rules()
        .iter()
        .find(|rule| rule.pattern.is_match(&candidate))
        .map(|rule| rule.carrier.clone())
        .unwrap_or(CarrierCode::Unknown)
}
