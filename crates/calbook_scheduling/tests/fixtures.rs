//! Test fixtures for the scheduling API tests.
//!
//! This module provides factory functions that root the file-backed stores
//! in a temporary directory and build realistic request payloads.

use calbook_config::store::ConfigStore;
use calbook_scheduling::handlers::SchedulingState;
use calbook_scheduling::store::BookingStore;
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

/// A Monday far enough ahead that every slot it yields is in the future,
/// and early enough in March that Madrid is still on UTC+1: the default
/// 09:00-17:00 window runs 08:00Z-16:00Z.
pub fn test_monday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 3, 4, 0, 0, 0).unwrap()
}

/// Creates a scheduling state whose config and bookings files live in a
/// fresh temporary directory. Keep the returned directory handle alive for
/// as long as the state is used.
pub fn create_test_state() -> (Arc<SchedulingState>, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let state = SchedulingState {
        config_store: ConfigStore::new(dir.path().join("config.json")),
        booking_store: BookingStore::new(dir.path().join("bookings.json")),
    };
    (Arc::new(state), dir)
}

/// Creates a complete JSON body for the booking endpoint.
pub fn create_booking_body(name: &str, start: DateTime<Utc>, duration_minutes: i64) -> Value {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    json!({
        "name": name,
        "email": email,
        "startTime": start.to_rfc3339(),
        "endTime": (start + Duration::minutes(duration_minutes)).to_rfc3339(),
        "meetingType": "intro",
        "notes": "Booked from the test suite",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_monday_fixture_is_a_future_monday() {
        let monday = test_monday();
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert!(monday > Utc::now());
    }

    #[test]
    fn test_state_is_rooted_in_the_temp_dir() {
        let (state, dir) = create_test_state();
        assert!(state.config_store.path().starts_with(dir.path()));
        assert!(state.booking_store.path().starts_with(dir.path()));
    }

    #[test]
    fn test_booking_body_uses_the_wire_field_names() {
        let body = create_booking_body("Ada Lovelace", test_monday(), 30);
        assert_eq!(body["name"], "Ada Lovelace");
        assert_eq!(body["email"], "ada.lovelace@example.com");
        assert!(body["startTime"].is_string());
        assert!(body["endTime"].is_string());
        assert_eq!(body["meetingType"], "intro");
    }
}
