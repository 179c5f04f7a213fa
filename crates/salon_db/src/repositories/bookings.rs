//! Repository for bookings

use crate::error::DbError;
use chrono::NaiveDate;
use salon_common::{Booking, NewBooking};

/// Storage of customer bookings, unique per `(date, time)`.
pub trait BookingRepository {
    /// Lists bookings ordered by date and time, optionally for one date only.
    fn find_bookings(
        &self,
        date: Option<NaiveDate>,
    ) -> impl std::future::Future<Output = Result<Vec<Booking>, DbError>> + Send;

    /// Whether a booking already holds `(date, time)`.
    fn booking_exists(
        &self,
        date: NaiveDate,
        time: &str,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Inserts the booking and returns it with its id.
    ///
    /// # Errors
    ///
    /// [`DbError::UniqueViolation`] when another booking took the same
    /// `(date, time)` first, even if it landed after an existence check.
    fn insert_booking(
        &self,
        booking: NewBooking,
    ) -> impl std::future::Future<Output = Result<Booking, DbError>> + Send;

    /// Deletes by id and returns the removed record, `None` if there was none.
    fn delete_booking(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Booking>, DbError>> + Send;
}
