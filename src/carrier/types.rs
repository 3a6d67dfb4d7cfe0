//! Carrier codes and their public tracking pages.

use serde::{Serialize, Serializer};
use std::fmt;

/// Shipping carrier identifier.
///
/// Known carriers serialize to their lowercase wire code. A caller-supplied
/// code that is not recognised is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarrierCode {
    Usps,
    Fedex,
    Ups,
    Dhl,
    CanadaPost,
    Unknown,
    Other(String),
}

impl CarrierCode {
    /// Interpret a carrier string supplied by the caller.
    ///
    /// Returns `None` for blank input so the detector can run instead.
    pub fn from_caller(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let known = [
            CarrierCode::Usps,
            CarrierCode::Fedex,
            CarrierCode::Ups,
            CarrierCode::Dhl,
            CarrierCode::CanadaPost,
            CarrierCode::Unknown,
        ];

        Some(
            known
                .into_iter()
                .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
                .unwrap_or_else(|| CarrierCode::Other(raw.to_string())),
        )
    }

    /// Wire representation of the code.
    pub fn as_str(&self) -> &str {
        match self {
            CarrierCode::Usps => "usps",
            CarrierCode::Fedex => "fedex",
            CarrierCode::Ups => "ups",
            CarrierCode::Dhl => "dhl",
            CarrierCode::CanadaPost => "canada_post",
            CarrierCode::Unknown => "unknown",
            CarrierCode::Other(code) => code,
        }
    }

    /// True when the code names a carrier, i.e. it is not `unknown`.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, CarrierCode::Unknown)
    }

    /// Base URL of the carrier's public tracking page, if one is known.
    pub fn tracking_url_base(&self) -> Option<&'static str> {
        match self {
            CarrierCode::Usps => Some("https://tools.usps.com/go/TrackConfirmAction?tLabels="),
            CarrierCode::Fedex => Some("https://www.fedex.com/fedextrack/?trknbr="),
            CarrierCode::Ups => Some("https://www.ups.com/track?tracknum="),
            CarrierCode::Dhl => Some("https://www.dhl.com/en/express/tracking.html?AWB="),
            CarrierCode::CanadaPost => {
                Some("https://www.canadapost-postescanada.ca/track-reperage/en#/search?searchFor=")
            }
            CarrierCode::Unknown | CarrierCode::Other(_) => None,
        }
    }

    /// Direct link to the carrier's tracking page for this shipment.
    pub fn tracking_url(&self, tracking_number: &str) -> Option<String> {
        self.tracking_url_base()
            .map(|base| format!("{}{}", base, tracking_number))
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CarrierCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_caller_known_codes() {
        assert_eq!(CarrierCode::from_caller("ups"), Some(CarrierCode::Ups));
        assert_eq!(CarrierCode::from_caller("FedEx"), Some(CarrierCode::Fedex));
        assert_eq!(
            CarrierCode::from_caller("canada_post"),
            Some(CarrierCode::CanadaPost)
        );
    }

    #[test]
    fn test_from_caller_passthrough() {
        assert_eq!(
            CarrierCode::from_caller("ontrac"),
            Some(CarrierCode::Other("ontrac".to_string()))
        );
        assert_eq!(CarrierCode::from_caller("   "), None);
        assert_eq!(CarrierCode::from_caller(""), None);
    }

    #[test]
    fn test_tracking_url() {
        assert_eq!(
            CarrierCode::Ups.tracking_url("1Z999AA10123456784").as_deref(),
            Some("https://www.ups.com/track?tracknum=1Z999AA10123456784")
        );
        assert_eq!(CarrierCode::Unknown.tracking_url("ABC123"), None);
        assert_eq!(
            CarrierCode::Other("ontrac".into()).tracking_url("C123"),
            None
        );
    }

    #[test]
    fn test_serializes_as_wire_code() {
        let json = serde_json::to_string(&CarrierCode::CanadaPost).unwrap();
        assert_eq!(json, "\"canada_post\"");
        let json = serde_json::to_string(&CarrierCode::Other("LaserShip".into())).unwrap();
        assert_eq!(json, "\"LaserShip\"");
    }
}
