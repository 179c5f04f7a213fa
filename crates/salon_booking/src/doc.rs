// --- File: crates/salon_booking/src/doc.rs ---

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::{
    BlockRequest, BlockedResponse, BookedResponse, ClosureAddedResponse, ClosureRemovedResponse,
    ClosureRequest, DeletedResponse, SlotsResponse,
};
use crate::logic::BookingRequest;
use salon_common::Booking;
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("date" = String, Query, description = "Date in YYYY-MM-DD format", example = "2030-03-04", format = "date")
    ),
    responses(
        (status = 200, description = "Free slots, never cached", body = SlotsResponse,
         example = json!({"date": "2030-03-04", "slots": ["10:00", "10:30", "11:00"]})),
        (status = 400, description = "Date missing or malformed",
         example = json!({"error": {"message": "date required", "code": 400}}))
    ),
    tag = "booking"
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookingRequest, example = json!({
        "nombre": "Lucía",
        "apellido": "Martín",
        "telefono": "611222333",
        "email": "lucia@example.com",
        "date": "2030-03-04",
        "time": "10:30"
    })),
    responses(
        (status = 200, description = "Booking stored", body = BookedResponse),
        (status = 400, description = "Missing data, date unavailable, day closed, invalid time or slot blocked",
         example = json!({"error": {"message": "day closed", "code": 400}})),
        (status = 409, description = "Slot already taken",
         example = json!({"error": {"message": "slot already taken", "code": 409}}))
    ),
    tag = "booking"
)]
fn doc_book_handler() {}

#[utoipa::path(
    get,
    path = "/closures",
    responses(
        (status = 200, description = "Closed dates, ascending", body = [String],
         example = json!(["2030-03-10", "2030-04-01"]))
    ),
    tag = "booking"
)]
fn doc_list_closures_handler() {}

#[utoipa::path(
    get,
    path = "/bookings",
    params(
        ("date" = Option<String>, Query, description = "Only bookings on this date (YYYY-MM-DD)", format = "date")
    ),
    responses(
        (status = 200, description = "Bookings ordered by date and time", body = [Booking]),
        (status = 400, description = "Invalid date"),
        (status = 401, description = "Missing or wrong admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
fn doc_list_bookings_handler() {}

#[utoipa::path(
    delete,
    path = "/book/{id}",
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking deleted", body = DeletedResponse),
        (status = 404, description = "Booking not found",
         example = json!({"error": {"message": "booking not found", "code": 404}})),
        (status = 401, description = "Missing or wrong admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
fn doc_cancel_booking_handler() {}

#[utoipa::path(
    post,
    path = "/closures",
    request_body(content = ClosureRequest, example = json!({"date": "2030-03-10"})),
    responses(
        (status = 200, description = "Day closed; `added` is false if it already was", body = ClosureAddedResponse),
        (status = 400, description = "Past or invalid date",
         example = json!({"error": {"message": "cannot close a past date", "code": 400}})),
        (status = 401, description = "Missing or wrong admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
fn doc_add_closure_handler() {}

#[utoipa::path(
    delete,
    path = "/closures/{date}",
    params(("date" = String, Path, description = "Date in YYYY-MM-DD format", format = "date")),
    responses(
        (status = 200, description = "Day reopened", body = ClosureRemovedResponse),
        (status = 404, description = "Day was not closed"),
        (status = 401, description = "Missing or wrong admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
fn doc_remove_closure_handler() {}

#[utoipa::path(
    get,
    path = "/blocked",
    params(("date" = String, Query, description = "Date in YYYY-MM-DD format", format = "date")),
    responses(
        (status = 200, description = "Blocked slots for the date", body = SlotsResponse),
        (status = 401, description = "Missing or wrong admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
fn doc_list_blocked_handler() {}

#[utoipa::path(
    post,
    path = "/blocked",
    request_body(content = BlockRequest, example = json!({"date": "2030-03-04", "slots": ["13:00", "13:30"]})),
    responses(
        (status = 200, description = "Blocked slots after the change", body = BlockedResponse),
        (status = 400, description = "Missing slots or a slot outside the grid"),
        (status = 401, description = "Missing or wrong admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
fn doc_block_slots_handler() {}

#[utoipa::path(
    delete,
    path = "/blocked",
    request_body(content = BlockRequest, example = json!({"date": "2030-03-04", "slots": ["13:00"]})),
    responses(
        (status = 200, description = "Blocked slots after the change", body = BlockedResponse),
        (status = 400, description = "Missing slots or a slot outside the grid"),
        (status = 401, description = "Missing or wrong admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
fn doc_unblock_slots_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_availability_handler,
        doc_book_handler,
        doc_list_closures_handler,
        doc_list_bookings_handler,
        doc_cancel_booking_handler,
        doc_add_closure_handler,
        doc_remove_closure_handler,
        doc_list_blocked_handler,
        doc_block_slots_handler,
        doc_unblock_slots_handler
    ),
    components(
        schemas(
            Booking,
            BookingRequest,
            BookedResponse,
            DeletedResponse,
            SlotsResponse,
            ClosureRequest,
            ClosureAddedResponse,
            ClosureRemovedResponse,
            BlockRequest,
            BlockedResponse
        )
    ),
    tags(
        (name = "booking", description = "Public booking API"),
        (name = "admin", description = "Bookings, closures and blocked slots (HTTP Basic)")
    ),
    servers(
        (url = "/api", description = "Salon booking API")
    )
)]
pub struct BookingApiDoc;
