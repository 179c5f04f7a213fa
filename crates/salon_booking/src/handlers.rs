// --- File: crates/salon_booking/src/handlers.rs ---
use crate::clock::BusinessClock;
use crate::eligibility::ScheduleRules;
use crate::logic::{self, parse_date, BookingError, BookingRequest};
use crate::notify::Notifications;
use crate::registry;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Json},
};
use chrono::NaiveDate;
use salon_common::{Booking, SalonError};
use salon_config::{AdminConfig, AppConfig};
use salon_db::repositories::SqlScheduleRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state of the booking routes.
#[derive(Clone)]
pub struct BookingState {
    pub rules: ScheduleRules,
    pub clock: BusinessClock,
    pub store: SqlScheduleRepository,
    pub notifications: Notifications,
    pub admin: Option<AdminConfig>,
}

impl BookingState {
    /// Builds the state from configuration. Fails when the business hours
    /// or closed weekday cannot be interpreted.
    pub fn from_config(
        config: &AppConfig,
        store: SqlScheduleRepository,
        notifications: Notifications,
    ) -> Result<Self, SalonError> {
        Ok(Self {
            rules: ScheduleRules::from_business(&config.business)?,
            clock: BusinessClock::from_config(config.business.time_zone.as_deref()),
            store,
            notifications,
            admin: config.admin.clone(),
        })
    }
}

// --- Request and response bodies ---

#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct SlotsResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2030-03-04"))]
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct BookedResponse {
    pub ok: bool,
    pub booking: Booking,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
    pub deleted: Booking,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Deserialize)]
pub struct ClosureRequest {
    pub date: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct ClosureAddedResponse {
    pub ok: bool,
    /// `false` when the day was already closed
    pub added: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct ClosureRemovedResponse {
    pub ok: bool,
    pub removed: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Deserialize)]
pub struct BlockRequest {
    pub date: Option<String>,
    #[serde(default)]
    pub slots: Option<Vec<String>>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct BlockedResponse {
    pub ok: bool,
    pub slots: Vec<String>,
}

fn optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, BookingError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(Some(value)).map(Some),
    }
}

// --- Public handlers ---

/// Free slots for a date. Never cached.
pub async fn get_availability_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, SalonError> {
    let date = parse_date(query.date.as_deref())?;
    let now = state.clock.now();
    let slots = logic::availability(&state.store, &state.rules, date, now).await?;

    let body = SlotsResponse {
        date,
        slots: slots.iter().map(ToString::to_string).collect(),
    };
    Ok((
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    ))
}

pub async fn book_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookedResponse>, SalonError> {
    let booking = logic::create_booking(
        &state.store,
        &state.rules,
        state.clock.today(),
        request,
        &state.notifications,
    )
    .await?;
    Ok(Json(BookedResponse { ok: true, booking }))
}

pub async fn list_closures_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Vec<NaiveDate>>, SalonError> {
    Ok(Json(registry::list_closures(&state.store).await?))
}

// --- Admin handlers ---

pub async fn list_bookings_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<Booking>>, SalonError> {
    let date = optional_date(query.date.as_deref())?;
    Ok(Json(logic::list_bookings(&state.store, date).await?))
}

pub async fn cancel_booking_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, SalonError> {
    let deleted = logic::cancel_booking(&state.store, id, &state.notifications).await?;
    Ok(Json(DeletedResponse { ok: true, deleted }))
}

pub async fn add_closure_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<ClosureRequest>,
) -> Result<Json<ClosureAddedResponse>, SalonError> {
    let date = parse_date(request.date.as_deref())?;
    let added = registry::close_day(&state.store, date, state.clock.today()).await?;
    Ok(Json(ClosureAddedResponse { ok: true, added }))
}

pub async fn remove_closure_handler(
    State(state): State<Arc<BookingState>>,
    Path(raw_date): Path<String>,
) -> Result<Json<ClosureRemovedResponse>, SalonError> {
    let date = parse_date(Some(&raw_date))?;
    registry::reopen_day(&state.store, date).await?;
    Ok(Json(ClosureRemovedResponse {
        ok: true,
        removed: date.format("%Y-%m-%d").to_string(),
    }))
}

pub async fn list_blocked_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<SlotsResponse>, SalonError> {
    let date = parse_date(query.date.as_deref())?;
    let slots = registry::blocked_for_date(&state.store, date).await?;
    Ok(Json(SlotsResponse { date, slots }))
}

pub async fn block_slots_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<BlockRequest>,
) -> Result<Json<BlockedResponse>, SalonError> {
    let date = parse_date(request.date.as_deref())?;
    let requested = request.slots.unwrap_or_default();
    let slots = registry::block_slots(&state.store, &state.rules.grid, date, &requested).await?;
    Ok(Json(BlockedResponse { ok: true, slots }))
}

pub async fn unblock_slots_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<BlockRequest>,
) -> Result<Json<BlockedResponse>, SalonError> {
    let date = parse_date(request.date.as_deref())?;
    let requested = request.slots.unwrap_or_default();
    let slots = registry::unblock_slots(&state.store, &state.rules.grid, date, &requested).await?;
    Ok(Json(BlockedResponse { ok: true, slots }))
}
