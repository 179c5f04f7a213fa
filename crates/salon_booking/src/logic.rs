// --- File: crates/salon_booking/src/logic.rs ---
//! Availability resolution and booking arbitration.
//!
//! Everything here works against the repository traits, so the same code
//! runs over SQL in production and over an in-memory store in tests.

use crate::eligibility::{DayStatus, ScheduleRules};
use crate::notify::Notifications;
use crate::slots::{Slot, SlotGrid};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use salon_common::{Booking, NewBooking, SalonError};
use salon_db::repositories::{BlockedSlotRepository, BookingRepository, ClosureRepository};
use salon_db::DbError;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Reasons a booking or registry operation is refused.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("missing data")]
    MissingData,
    #[error("invalid date")]
    InvalidDate,
    #[error("date required")]
    DateRequired,
    #[error("date unavailable")]
    DateUnavailable,
    #[error("day closed")]
    DayClosed,
    #[error("cannot close a past date")]
    PastDate,
    #[error("invalid time")]
    InvalidTime,
    #[error("slot blocked")]
    SlotBlocked,
    #[error("slot already taken")]
    SlotTaken,
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(DbError),
}

impl From<DbError> for BookingError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(_) => BookingError::SlotTaken,
            other => BookingError::Store(other),
        }
    }
}

impl From<BookingError> for SalonError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::MissingData | BookingError::InvalidDate | BookingError::DateRequired => {
                SalonError::ValidationError(err.to_string())
            }
            BookingError::DateUnavailable
            | BookingError::DayClosed
            | BookingError::PastDate
            | BookingError::InvalidTime
            | BookingError::SlotBlocked => SalonError::EligibilityError(err.to_string()),
            BookingError::SlotTaken => SalonError::ConflictError(err.to_string()),
            BookingError::NotFound(what) => SalonError::NotFoundError(what),
            BookingError::Store(db) => db.into(),
        }
    }
}

/// Anything that can answer for bookings, closures and blocks.
pub trait ScheduleStore: BookingRepository + ClosureRepository + BlockedSlotRepository + Sync {}

impl<T> ScheduleStore for T where T: BookingRepository + ClosureRepository + BlockedSlotRepository + Sync {}

/// Parses a `YYYY-MM-DD` parameter. Absent or blank is [`BookingError::DateRequired`].
pub fn parse_date(raw: Option<&str>) -> Result<NaiveDate, BookingError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(BookingError::DateRequired);
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| BookingError::InvalidDate)
}

/// Booking form as posted by the public page. Every field is checked by
/// [`create_booking`], so missing keys deserialize to `None`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

fn required(field: &Option<String>) -> Result<String, BookingError> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(BookingError::MissingData)
}

/// Free slots of `grid` on `date` given what is already booked and blocked.
///
/// Past dates have none. On the current date only slots strictly after the
/// current minute remain. Inputs may be `HH:MM` or `HH:MM:SS`.
pub fn compute_free_slots(
    grid: &SlotGrid,
    date: NaiveDate,
    now: NaiveDateTime,
    booked: &[String],
    blocked: &[String],
) -> Vec<Slot> {
    let today = now.date();
    if date < today {
        return Vec::new();
    }

    let taken: HashSet<Slot> = booked
        .iter()
        .chain(blocked.iter())
        .filter_map(|t| Slot::from_stored(t).ok())
        .collect();
    let cutoff = (date == today).then(|| now.hour() * 60 + now.minute());

    grid.iter()
        .filter(|slot| !taken.contains(slot))
        .filter(|slot| cutoff.map_or(true, |minute| slot.minutes() > minute))
        .copied()
        .collect()
}

/// Free slots for `date`, or none when the day is not eligible.
pub async fn availability<S: ScheduleStore>(
    store: &S,
    rules: &ScheduleRules,
    date: NaiveDate,
    now: NaiveDateTime,
) -> Result<Vec<Slot>, BookingError> {
    let status = rules.day_status(store, date, now.date()).await?;
    if !status.is_open() {
        debug!("No availability on {}: {:?}", date, status);
        return Ok(Vec::new());
    }

    let booked: Vec<String> = store
        .find_bookings(Some(date))
        .await?
        .into_iter()
        .map(|b| b.time)
        .collect();
    let blocked = store.blocked_slots(date).await?;

    Ok(compute_free_slots(&rules.grid, date, now, &booked, &blocked))
}

/// Validates a request and stores it. First failing check wins:
/// fields, date, day rules, grid, blocks, existing booking, insert.
///
/// The insert's uniqueness constraint settles races the existence check
/// cannot see. On success a confirmation is sent in the background.
pub async fn create_booking<S: ScheduleStore>(
    store: &S,
    rules: &ScheduleRules,
    today: NaiveDate,
    request: BookingRequest,
    notifications: &Notifications,
) -> Result<Booking, BookingError> {
    let nombre = required(&request.nombre)?;
    let apellido = required(&request.apellido)?;
    let telefono = required(&request.telefono)?;
    let email = required(&request.email)?;
    let raw_date = required(&request.date)?;
    let raw_time = required(&request.time)?;

    let date = parse_date(Some(&raw_date))?;

    match rules.day_status(store, date, today).await? {
        DayStatus::Open => {}
        DayStatus::ClosedWeekday | DayStatus::Past => return Err(BookingError::DateUnavailable),
        DayStatus::Closed => return Err(BookingError::DayClosed),
    }

    let slot: Slot = raw_time.parse().map_err(|_| BookingError::InvalidTime)?;
    if !rules.grid.contains(&slot) {
        return Err(BookingError::InvalidTime);
    }
    let time = slot.to_string();

    let blocked = store.blocked_slots(date).await?;
    if blocked.iter().any(|b| Slot::from_stored(b).ok() == Some(slot)) {
        return Err(BookingError::SlotBlocked);
    }

    if store.booking_exists(date, &time).await? {
        return Err(BookingError::SlotTaken);
    }

    let booking = store
        .insert_booking(NewBooking {
            nombre,
            apellido,
            telefono,
            email,
            date,
            time,
        })
        .await?;

    info!("Booked {} {} (id {})", booking.date, booking.time, booking.id);
    notifications.booking_confirmed(&booking);
    Ok(booking)
}

/// Deletes a booking and notifies its customer. Blocks and closures are untouched.
pub async fn cancel_booking<S: ScheduleStore>(
    store: &S,
    id: i64,
    notifications: &Notifications,
) -> Result<Booking, BookingError> {
    let booking = store
        .delete_booking(id)
        .await?
        .ok_or_else(|| BookingError::NotFound("booking not found".to_string()))?;

    info!("Cancelled booking {} ({} {})", booking.id, booking.date, booking.time);
    notifications.booking_cancelled(&booking);
    Ok(booking)
}

pub async fn list_bookings<S: ScheduleStore>(
    store: &S,
    date: Option<NaiveDate>,
) -> Result<Vec<Booking>, BookingError> {
    Ok(store.find_bookings(date).await?)
}
