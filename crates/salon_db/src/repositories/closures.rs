//! Repository for closed days

use crate::error::DbError;
use chrono::NaiveDate;

/// Whole dates withdrawn from booking.
pub trait ClosureRepository {
    /// All closed dates, ascending.
    fn list_closures(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<NaiveDate>, DbError>> + Send;

    fn is_closed(
        &self,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Returns `true` when the date was newly closed, `false` when it already was.
    fn add_closure(
        &self,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Returns `true` when a closure was removed.
    fn remove_closure(
        &self,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}
