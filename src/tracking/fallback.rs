//! Deterministic placeholder timelines.
//!
//! When the aggregator has nothing for a shipment the relay still answers with
//! a plausible record. The status is picked by summing the character codes of
//! the tracking number modulo the number of lifecycle stages, so the same
//! number always lands on the same stage.
//!
//! # Timeline
//! ```text
//! delivered         now
//! out_for_delivery  now - 5h
//! in_transit        now - 1d
//! shipped           now - 2d
//! label created     now - 3d   (always present, always last)
//! ```

use chrono::{DateTime, Duration, Utc};

use crate::carrier::CarrierCode;
use crate::tracking::types::{TrackingEvent, TrackingRecord, TrackingStatus};

/// Lifecycle stages in the order a parcel moves through them.
pub const LIFECYCLE: [TrackingStatus; 5] = [
    TrackingStatus::PreTransit,
    TrackingStatus::Shipped,
    TrackingStatus::InTransit,
    TrackingStatus::OutForDelivery,
    TrackingStatus::Delivered,
];

/// Placeholder location, not real geocoding.
struct Location {
    city: &'static str,
    state: &'static str,
    postal_code: &'static str,
    country: &'static str,
}

const ORIGIN: Location = Location {
    city: "Origin City",
    state: "CA",
    postal_code: "90001",
    country: "US",
};

const DESTINATION: Location = Location {
    city: "Destination City",
    state: "NY",
    postal_code: "10001",
    country: "US",
};

/// Index into [`LIFECYCLE`] derived from the tracking number.
pub fn status_index(tracking_number: &str) -> usize {
    let sum: u64 = tracking_number.chars().map(|c| c as u64).sum();
    (sum % LIFECYCLE.len() as u64) as usize
}

/// Build a synthetic record for a shipment.
///
/// Identical inputs always produce an identical record.
pub fn generate(tracking_number: &str, carrier: CarrierCode, now: DateTime<Utc>) -> TrackingRecord {
    let index = status_index(tracking_number);
    let status = LIFECYCLE[index].clone();

    let events = timeline(index, now);
    let ship_date = events.last().map(|e| e.occurred_at);

    TrackingRecord {
        tracking_number: tracking_number.to_string(),
        tracking_url: carrier.tracking_url(tracking_number),
        carrier_code: carrier,
        status_description: stage_title(&status).to_string(),
        estimated_delivery_date: lead_time(&status).map(|lead| now + lead),
        status,
        ship_date,
        events,
    }
}

/// Events up to and including `LIFECYCLE[index]`, newest first.
///
/// The label event is always present and always last.
pub(crate) fn timeline(index: usize, now: DateTime<Utc>) -> Vec<TrackingEvent> {
    let index = index.min(LIFECYCLE.len() - 1);
    let mut events: Vec<TrackingEvent> = LIFECYCLE[1..=index]
        .iter()
        .rev()
        .map(|stage| stage_event(stage, now))
        .collect();
    events.push(stage_event(&TrackingStatus::PreTransit, now));
    events
}

fn stage_event(stage: &TrackingStatus, now: DateTime<Utc>) -> TrackingEvent {
    let (offset, description, location) = match stage {
        TrackingStatus::Delivered => (Duration::zero(), "Delivered, Front Door/Porch", &DESTINATION),
        TrackingStatus::OutForDelivery => (Duration::hours(5), "Out for Delivery", &DESTINATION),
        TrackingStatus::InTransit => (Duration::days(1), "In Transit to Next Facility", &ORIGIN),
        TrackingStatus::Shipped => (Duration::days(2), "Departed Shipping Partner Facility", &ORIGIN),
        _ => (Duration::days(3), "Shipping Label Created", &ORIGIN),
    };

    TrackingEvent {
        occurred_at: now - offset,
        description: description.to_string(),
        city_locality: location.city.to_string(),
        state_province: location.state.to_string(),
        postal_code: location.postal_code.to_string(),
        country_code: location.country.to_string(),
    }
}

fn stage_title(status: &TrackingStatus) -> &'static str {
    match status {
        TrackingStatus::PreTransit => "Label Created",
        TrackingStatus::Shipped => "Shipped",
        TrackingStatus::InTransit => "In Transit",
        TrackingStatus::OutForDelivery => "Out for Delivery",
        TrackingStatus::Delivered => "Delivered",
        _ => "Unknown",
    }
}

/// Delivery lead time from now; `None` once delivered.
pub(crate) fn lead_time(status: &TrackingStatus) -> Option<Duration> {
    match status {
        TrackingStatus::PreTransit => Some(Duration::days(5)),
        TrackingStatus::Shipped => Some(Duration::days(3)),
        TrackingStatus::InTransit => Some(Duration::days(2)),
        TrackingStatus::OutForDelivery => Some(Duration::zero()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2026-03-10T15:00:00Z".parse().unwrap()
    }

    /// Smallest ASCII-digit string whose code sum lands on `index`.
    fn number_for(index: usize) -> String {
        // "0000" sums to 192, and 192 % 5 == 2
        let mut digits = vec![b'0'; 4];
        let shift = (index + 5 - 2) % 5;
        digits[3] += shift as u8;
        String::from_utf8(digits).unwrap()
    }

    #[test]
    fn test_status_index_is_char_sum_mod_five() {
        // 65 + 66 + 67 + 49 + 50 + 51 = 348
        assert_eq!(status_index("ABC123"), 3);
        // 1009 % 5
        assert_eq!(status_index("1Z999AA10123456784"), 4);
        assert_eq!(status_index(""), 0);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate("ABC123", CarrierCode::Unknown, now());
        let b = generate("ABC123", CarrierCode::Unknown, now());
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_out_for_delivery_timeline() {
        let record = generate("ABC123", CarrierCode::Unknown, now());

        assert_eq!(record.status, TrackingStatus::OutForDelivery);
        assert_eq!(record.status_description, "Out for Delivery");
        assert_eq!(record.estimated_delivery_date, Some(now()));
        assert_eq!(record.tracking_url, None);

        let offsets: Vec<Duration> = record.events.iter().map(|e| now() - e.occurred_at).collect();
        assert_eq!(
            offsets,
            vec![
                Duration::hours(5),
                Duration::days(1),
                Duration::days(2),
                Duration::days(3),
            ]
        );
        assert_eq!(record.events[0].description, "Out for Delivery");
        assert_eq!(record.events[3].description, "Shipping Label Created");
    }

    #[test]
    fn test_delivered_has_no_estimate() {
        let record = generate("1Z999AA10123456784", CarrierCode::Ups, now());

        assert_eq!(record.status, TrackingStatus::Delivered);
        assert_eq!(record.estimated_delivery_date, None);
        assert_eq!(record.events.len(), 5);
        assert_eq!(record.events[0].occurred_at, now());
        assert_eq!(record.events[0].city_locality, "Destination City");
        assert!(record
            .tracking_url
            .unwrap()
            .starts_with("https://www.ups.com/track?tracknum="));
    }

    #[test]
    fn test_every_stage() {
        let expected = [
            (TrackingStatus::PreTransit, 1, Some(Duration::days(5))),
            (TrackingStatus::Shipped, 2, Some(Duration::days(3))),
            (TrackingStatus::InTransit, 3, Some(Duration::days(2))),
            (TrackingStatus::OutForDelivery, 4, Some(Duration::zero())),
            (TrackingStatus::Delivered, 5, None),
        ];

        for (index, (status, event_count, lead)) in expected.into_iter().enumerate() {
            let number = number_for(index);
            assert_eq!(status_index(&number), index, "number {}", number);

            let record = generate(&number, CarrierCode::Dhl, now());
            assert_eq!(record.status, status);
            assert_eq!(record.events.len(), event_count);
            assert_eq!(record.estimated_delivery_date, lead.map(|l| now() + l));
            assert_eq!(record.ship_date, Some(now() - Duration::days(3)));
            assert_eq!(
                record.events.last().unwrap().description,
                "Shipping Label Created"
            );
        }
    }

    #[test]
    fn test_timeline_for_pre_transit_is_label_only() {
        let events = timeline(0, now());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].description, "Shipping Label Created");
        assert_eq!(events[0].occurred_at, now() - Duration::days(3));
    }

    #[test]
    fn test_events_newest_first() {
        let record = generate("1Z999AA10123456784", CarrierCode::Ups, now());
        assert!(record
            .events
            .windows(2)
            .all(|pair| pair[0].occurred_at > pair[1].occurred_at));
    }
}
