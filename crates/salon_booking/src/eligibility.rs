// --- File: crates/salon_booking/src/eligibility.rs ---
//! Whether a calendar date can take bookings at all.
//!
//! Rules are applied in a fixed order: weekly closed day, then past date,
//! then the closure registry. The first two need no store access.

use crate::slots::SlotGrid;
use chrono::{Datelike, NaiveDate, Weekday};
use salon_common::SalonError;
use salon_config::BusinessConfig;
use salon_db::repositories::ClosureRepository;
use salon_db::DbError;

/// Outcome of the day rules for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Open,
    /// Falls on the weekly closed day
    ClosedWeekday,
    /// Strictly before today
    Past,
    /// Listed in the closure registry
    Closed,
}

impl DayStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, DayStatus::Open)
    }
}

/// The configured shape of a business day.
#[derive(Debug, Clone)]
pub struct ScheduleRules {
    pub grid: SlotGrid,
    pub closed_weekday: Weekday,
}

impl ScheduleRules {
    pub fn new(grid: SlotGrid, closed_weekday: Weekday) -> Self {
        Self {
            grid,
            closed_weekday,
        }
    }

    pub fn from_business(business: &BusinessConfig) -> Result<Self, SalonError> {
        let closed_weekday = business.closed_weekday()?;
        let grid = SlotGrid::from_business(business)
            .map_err(|e| SalonError::ConfigError(e.to_string()))?;
        Ok(Self::new(grid, closed_weekday))
    }

    /// Rules 1 and 2: closed weekday, then past date.
    pub fn calendar_status(&self, date: NaiveDate, today: NaiveDate) -> DayStatus {
        if date.weekday() == self.closed_weekday {
            DayStatus::ClosedWeekday
        } else if date < today {
            DayStatus::Past
        } else {
            DayStatus::Open
        }
    }

    /// All three rules; the closure registry is only consulted when the calendar allows the date.
    pub async fn day_status<R>(
        &self,
        store: &R,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<DayStatus, DbError>
    where
        R: ClosureRepository + Sync,
    {
        let status = self.calendar_status(date, today);
        if !status.is_open() {
            return Ok(status);
        }
        if store.is_closed(date).await? {
            return Ok(DayStatus::Closed);
        }
        Ok(DayStatus::Open)
    }
}
