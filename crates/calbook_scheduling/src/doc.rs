// File: crates/calbook_scheduling/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    BookingConfirmation, BookingRequest, CancellationResponse, PublicConfigResponse, Slot,
    SlotsQuery, SlotsResponse,
};
use crate::store::Booking;
use calbook_config::models::MeetingType;

#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "Public owner configuration", body = PublicConfigResponse,
         example = json!({
             "ownerName": "Your Name",
             "meetingTypes": [
                 { "id": "intro", "name": "Intro Call", "duration": 30, "description": "Quick intro call" }
             ],
             "timezone": "Europe/Madrid",
             "brandColor": "#4F46E5"
         })
        ),
        (status = 500, description = "Configuration could not be read or healed")
    )
)]
fn doc_get_public_config_handler() {}

#[utoipa::path(
    get,
    path = "/slots",
    params(
        ("start" = Option<String>, Query, description = "Range start, RFC 3339 or YYYY-MM-DD; defaults to now", example = "2026-03-02"),
        ("end" = Option<String>, Query, description = "Range end, RFC 3339 or YYYY-MM-DD; defaults to now plus 14 days", example = "2026-03-16"),
        ("duration" = Option<String>, Query, description = "Slot length in minutes; defaults to the configured meeting duration", example = "30")
    ),
    responses(
        (status = 200, description = "Bookable slots", body = SlotsResponse,
         example = json!({
             "slots": [
                 { "start": "2026-03-02T08:00:00Z", "end": "2026-03-02T08:30:00Z" }
             ],
             "timezone": "Europe/Madrid"
         })
        ),
        (status = 400, description = "Unparseable start, end or duration",
         example = json!({ "error": "Invalid date: not-a-date" })
        )
    )
)]
fn doc_get_slots_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookingRequest, example = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "startTime": "2026-03-02T08:00:00Z",
        "endTime": "2026-03-02T08:30:00Z",
        "meetingType": "intro",
        "notes": "First contact"
    })),
    responses(
        (status = 200, description = "Booking stored", body = BookingConfirmation,
         example = json!({
             "success": true,
             "booking": {
                 "id": "7f8d2c1a-0b63-4c35-9a34-5de7f6c11b2f",
                 "name": "Ada Lovelace",
                 "email": "ada@example.com",
                 "startTime": "2026-03-02T08:00:00Z",
                 "endTime": "2026-03-02T08:30:00Z",
                 "meetingType": "intro",
                 "notes": "First contact",
                 "createdAt": "2026-02-20T12:00:00Z"
             }
         })
        ),
        (status = 400, description = "A required field is missing or empty",
         example = json!({ "error": "Missing required fields" })
        )
    )
)]
fn doc_book_slot_handler() {}

#[utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "Every stored booking", body = [Booking])
    )
)]
fn doc_list_bookings_handler() {}

#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    params(
        ("id" = String, Path, description = "The id of the booking to cancel")
    ),
    responses(
        (status = 200, description = "Cancellation result", body = CancellationResponse,
         example = json!({
             "success": true,
             "cancelled": {
                 "id": "7f8d2c1a-0b63-4c35-9a34-5de7f6c11b2f",
                 "name": "Ada Lovelace",
                 "email": "ada@example.com",
                 "startTime": "2026-03-02T08:00:00Z",
                 "endTime": "2026-03-02T08:30:00Z",
                 "createdAt": "2026-02-20T12:00:00Z"
             }
         })
        ),
        (status = 404, description = "No booking with that id",
         example = json!({ "error": "Not found" })
        )
    )
)]
fn doc_cancel_booking_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_public_config_handler,
        doc_get_slots_handler,
        doc_book_slot_handler,
        doc_list_bookings_handler,
        doc_cancel_booking_handler
    ),
    components(
        schemas(
            SlotsQuery,
            Slot,
            SlotsResponse,
            BookingRequest,
            BookingConfirmation,
            CancellationResponse,
            PublicConfigResponse,
            Booking,
            MeetingType
        )
    ),
    tags(
        (name = "scheduling", description = "Appointment scheduling API")
    ),
    servers(
        (url = "/api", description = "Scheduling API server")
    )
)]
pub struct SchedulingApiDoc;
