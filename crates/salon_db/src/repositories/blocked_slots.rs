//! Repository for blocked slots

use crate::error::DbError;
use chrono::NaiveDate;

/// Single slots withheld by the business on an otherwise open day.
///
/// Batch operations are idempotent and atomic: either the whole batch is
/// applied or none of it.
pub trait BlockedSlotRepository {
    /// Blocked `HH:MM` times for `date`, ascending.
    fn blocked_slots(
        &self,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Vec<String>, DbError>> + Send;

    /// Blocks every time in `times`, skipping ones already blocked.
    /// Returns the blocked list for `date` afterwards.
    fn block_slots(
        &self,
        date: NaiveDate,
        times: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<String>, DbError>> + Send;

    /// Unblocks every time in `times`, ignoring ones not blocked.
    /// Returns the blocked list for `date` afterwards.
    fn unblock_slots(
        &self,
        date: NaiveDate,
        times: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<String>, DbError>> + Send;
}
