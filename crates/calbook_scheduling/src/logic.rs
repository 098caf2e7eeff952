// --- File: crates/calbook_scheduling/src/logic.rs ---
use calbook_config::models::{MeetingType, WeeklyAvailability};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::Booking;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Data Structures ---

/// Query parameters for the slot listing endpoint. All optional, and empty
/// values count as absent so `?start=&end=&duration=` behaves like no
/// parameters at all.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SlotsQuery {
    /// Range start, RFC 3339 or YYYY-MM-DD
    #[cfg_attr(feature = "openapi", schema(example = "2026-03-02"))]
    pub start: Option<String>,

    /// Range end, RFC 3339 or YYYY-MM-DD
    #[cfg_attr(feature = "openapi", schema(example = "2026-03-16"))]
    pub end: Option<String>,

    /// Slot length in minutes; defaults to the configured meeting duration
    #[cfg_attr(feature = "openapi", schema(example = "30"))]
    pub duration: Option<String>,
}

/// One bookable interval.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Slot {
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2026-03-02T08:00:00Z")
    )]
    pub start: DateTime<Utc>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2026-03-02T08:30:00Z")
    )]
    pub end: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SlotsResponse {
    pub slots: Vec<Slot>,
    /// IANA zone name clients should render the slots in.
    #[cfg_attr(feature = "openapi", schema(example = "Europe/Madrid"))]
    pub timezone: String,
}

/// Body of the booking endpoint. Required fields are options so the handler
/// can reject their absence with the documented error body instead of a
/// deserialization failure.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Ada Lovelace"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "ada@example.com"))]
    pub email: Option<String>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = Option<String>, example = "2026-03-02T08:00:00Z")
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = Option<String>, example = "2026-03-02T08:30:00Z")
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "openapi", schema(example = "intro"))]
    pub meeting_type: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingConfirmation {
    pub success: bool,
    pub booking: Booking,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CancellationResponse {
    pub success: bool,
    pub cancelled: Booking,
}

/// Public subset of the owner configuration exposed to visitors.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PublicConfigResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Your Name"))]
    pub owner_name: String,
    pub meeting_types: Vec<MeetingType>,
    #[cfg_attr(feature = "openapi", schema(example = "Europe/Madrid"))]
    pub timezone: String,
    #[cfg_attr(feature = "openapi", schema(example = "#4F46E5"))]
    pub brand_color: String,
}

// --- Availability Logic ---

/// Calculates bookable slots for a date range.
///
/// Day windows come from the weekly template interpreted in `tz`. Candidates
/// start at the window open and advance by `duration + buffer_time` whether
/// or not the candidate is emitted, so a conflicting booking consumes its
/// grid position without shifting later starts. A candidate is emitted when
/// it fits inside the window, starts strictly after `now`, and overlaps no
/// busy period. Overlap is half-open: a slot may begin exactly when a busy
/// period ends and vice versa.
///
/// Days are stepped wall-clock, keeping the range start's time of day as the
/// cursor that bounds the iteration against `range_end`. Candidates earlier
/// in the first day than that time of day are not filtered; only `now` and
/// busy periods prune candidates.
#[allow(clippy::too_many_arguments)]
pub fn calculate_available_slots(
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    busy_periods: &[(DateTime<Utc>, DateTime<Utc>)],
    duration: Duration,
    availability: &WeeklyAvailability,
    buffer_time: Duration,
    tz: Tz,
    now: DateTime<Utc>,
) -> Vec<Slot> {
    // Resolve a wall-clock time on a date to an instant; a DST gap yields
    // None and the day contributes nothing.
    fn at_local(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
        tz.from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }

    // The candidate step must be positive and representable for the scan to
    // advance.
    let step = match duration.checked_add(&buffer_time) {
        Some(step) if step > Duration::zero() => step,
        _ => {
            debug!(
                "Unusable candidate step of {} + {} minutes, returning no slots",
                duration.num_minutes(),
                buffer_time.num_minutes()
            );
            return Vec::new();
        }
    };

    let start_local = range_start.with_timezone(&tz);
    let end_local = range_end.with_timezone(&tz);
    let cursor_time = start_local.time();
    let end_date = end_local.date_naive();
    let end_time = end_local.time();

    debug!(
        "Calculating available slots between {} and {} in {}",
        range_start, range_end, tz
    );

    let mut slots = Vec::new();
    let mut date = start_local.date_naive();
    // A day is in range while its cursor (the day at the range start's time
    // of day) falls before the range end.
    while date < end_date || (date == end_date && cursor_time < end_time) {
        if let Some(window) = availability.window_for(date.weekday()) {
            let bounds = (
                at_local(tz, date, window.start),
                at_local(tz, date, window.end),
            );
            if let (Some(day_open), Some(day_close)) = bounds {
                let mut candidate = day_open;
                while candidate < day_close {
                    let candidate_end = match candidate.checked_add_signed(duration) {
                        Some(end) => end,
                        None => break,
                    };
                    if candidate_end <= day_close {
                        let booked = busy_periods.iter().any(|&(busy_start, busy_end)| {
                            candidate < busy_end && candidate_end > busy_start
                        });
                        if !booked && candidate > now {
                            slots.push(Slot {
                                start: candidate,
                                end: candidate_end,
                            });
                        }
                    }
                    candidate = match candidate.checked_add_signed(step) {
                        Some(next) => next,
                        None => break,
                    };
                }
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    debug!("Found {} available slots", slots.len());
    slots
}

/// Busy intervals from stored bookings, in store order.
pub fn busy_periods_from_bookings(bookings: &[Booking]) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    bookings
        .iter()
        .map(|booking| (booking.start_time, booking.end_time))
        .collect()
}
