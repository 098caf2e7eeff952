// File: crates/calbook_scheduling/src/handlers.rs
use crate::logic::{
    busy_periods_from_bookings, calculate_available_slots, BookingConfirmation, BookingRequest,
    CancellationResponse, PublicConfigResponse, SlotsQuery, SlotsResponse,
};
use crate::store::{Booking, BookingStore};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calbook_common::error::{
    internal_error, not_found, parse_error, validation_error, CalbookError, HttpStatusCode,
};
use calbook_config::models::AppConfig;
use calbook_config::store::{ConfigSource, ConfigStore};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

// Define shared state needed by scheduling handlers
#[derive(Clone)]
pub struct SchedulingState {
    pub config_store: ConfigStore,
    pub booking_store: BookingStore,
}

// --- Error Handling ---

/// Wrapper turning [`CalbookError`] into the `{"error": message}` JSON body
/// the frontend expects. Client errors carry their message verbatim; server
/// failures keep their detail in the log and answer with a generic message.
#[derive(Debug)]
pub struct ApiError(pub CalbookError);

impl<E> From<E> for ApiError
where
    E: Into<CalbookError>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if status.is_server_error() {
            error!("Request failed: {}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Load the owner configuration, logging when the store had to heal itself.
async fn load_config(state: &SchedulingState) -> Result<AppConfig, ApiError> {
    let (config, source) = state.config_store.load_or_init().await?;
    if source == ConfigSource::Initialized {
        info!(
            "Scheduling config was missing or unusable; defaults written to {}",
            state.config_store.path().display()
        );
    }
    Ok(config)
}

/// Handler for the public configuration subset.
#[axum::debug_handler]
pub async fn get_public_config_handler(
    State(state): State<Arc<SchedulingState>>,
) -> Result<Json<PublicConfigResponse>, ApiError> {
    let config = load_config(&state).await?;
    Ok(Json(PublicConfigResponse {
        owner_name: config.owner_name,
        meeting_types: config.meeting_types,
        timezone: config.timezone,
        brand_color: config.brand_color,
    }))
}

/// Handler to get available time slots.
#[axum::debug_handler]
pub async fn get_slots_handler(
    State(state): State<Arc<SchedulingState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, ApiError> {
    let config = load_config(&state).await?;
    let tz = config.parsed_timezone();
    let now = Utc::now();

    let range_start = parse_range_bound(query.start.as_deref(), tz)?.unwrap_or(now);
    let range_end =
        parse_range_bound(query.end.as_deref(), tz)?.unwrap_or_else(|| now + Duration::days(14));
    let duration_minutes =
        parse_duration_minutes(query.duration.as_deref(), config.meeting_duration)?;
    let duration = configured_minutes(duration_minutes, "meeting duration")?;
    let buffer_time = configured_minutes(config.buffer_time, "buffer time")?;

    let bookings = state.booking_store.load_all().await;
    let busy_periods = busy_periods_from_bookings(&bookings);

    let slots = calculate_available_slots(
        range_start,
        range_end,
        &busy_periods,
        duration,
        &config.availability,
        buffer_time,
        tz,
        now,
    );
    debug!(
        "Returning {} slots between {} and {}",
        slots.len(),
        range_start,
        range_end
    );

    Ok(Json(SlotsResponse {
        slots,
        timezone: config.timezone,
    }))
}

/// Handler to book a slot.
#[axum::debug_handler]
pub async fn book_slot_handler(
    State(state): State<Arc<SchedulingState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingConfirmation>, ApiError> {
    let required = (
        request.name.filter(|name| !name.is_empty()),
        request.email.filter(|email| !email.is_empty()),
        request.start_time,
        request.end_time,
    );
    let (name, email, start_time, end_time) = match required {
        (Some(name), Some(email), Some(start_time), Some(end_time)) => {
            (name, email, start_time, end_time)
        }
        _ => return Err(validation_error("Missing required fields").into()),
    };

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        start_time,
        end_time,
        meeting_type: request.meeting_type,
        notes: request.notes,
        created_at: Utc::now(),
    };

    state.booking_store.append(booking.clone()).await?;
    info!(
        "Created booking {} ({} - {})",
        booking.id, booking.start_time, booking.end_time
    );

    Ok(Json(BookingConfirmation {
        success: true,
        booking,
    }))
}

/// Handler to list every stored booking.
#[axum::debug_handler]
pub async fn list_bookings_handler(State(state): State<Arc<SchedulingState>>) -> Json<Vec<Booking>> {
    Json(state.booking_store.load_all().await)
}

/// Handler to cancel a booking by id.
#[axum::debug_handler]
pub async fn cancel_booking_handler(
    State(state): State<Arc<SchedulingState>>,
    Path(id): Path<String>,
) -> Result<Json<CancellationResponse>, ApiError> {
    match state.booking_store.remove_by_id(&id).await? {
        Some(cancelled) => {
            info!("Cancelled booking {}", cancelled.id);
            Ok(Json(CancellationResponse {
                success: true,
                cancelled,
            }))
        }
        None => Err(not_found("Not found").into()),
    }
}

// --- Query parsing ---

/// Parse an optional range bound: RFC 3339, or a bare date read as midnight
/// in the configured zone. Empty strings count as absent.
pub(crate) fn parse_range_bound(
    raw: Option<&str>,
    tz: Tz,
) -> Result<Option<DateTime<Utc>>, ApiError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(instant.with_timezone(&Utc)));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| parse_error(format!("Invalid date: {}", raw)))?;
    let midnight = tz
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| parse_error(format!("Invalid date: {}", raw)))?;
    Ok(Some(midnight.with_timezone(&Utc)))
}

/// Parse the duration override in minutes; empty counts as absent. Positive
/// values chrono cannot represent are rejected like unparseable input.
pub(crate) fn parse_duration_minutes(
    raw: Option<&str>,
    default_minutes: i64,
) -> Result<i64, ApiError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(default_minutes),
    };
    let minutes: i64 = raw
        .parse()
        .map_err(|_| parse_error(format!("Invalid duration: {}", raw)))?;
    if minutes <= 0 {
        return Err(validation_error("Duration must be a positive number of minutes").into());
    }
    if Duration::try_minutes(minutes).is_none() {
        return Err(parse_error(format!("Invalid duration: {}", raw)).into());
    }
    Ok(minutes)
}

/// Convert minutes that came from the owner configuration into a
/// [`Duration`]. A stored value outside chrono's representable range
/// surfaces as an internal error.
pub(crate) fn configured_minutes(minutes: i64, what: &str) -> Result<Duration, ApiError> {
    Duration::try_minutes(minutes).ok_or_else(|| {
        internal_error(format!(
            "Configured {} of {} minutes is out of range",
            what, minutes
        ))
        .into()
    })
}
