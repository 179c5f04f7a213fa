//! Admin-side closures and slot blocks.

use crate::logic::{BookingError, ScheduleStore};
use crate::slots::{Slot, SlotGrid};
use chrono::NaiveDate;
use tracing::info;

pub async fn list_closures<S: ScheduleStore>(store: &S) -> Result<Vec<NaiveDate>, BookingError> {
    Ok(store.list_closures().await?)
}

/// Closes `date` for booking. Returns `false` when it was already closed.
/// Existing bookings on that date are kept.
pub async fn close_day<S: ScheduleStore>(
    store: &S,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<bool, BookingError> {
    if date < today {
        return Err(BookingError::PastDate);
    }
    let added = store.add_closure(date).await?;
    info!("Closed {} (new: {})", date, added);
    Ok(added)
}

pub async fn reopen_day<S: ScheduleStore>(store: &S, date: NaiveDate) -> Result<(), BookingError> {
    if !store.remove_closure(date).await? {
        return Err(BookingError::NotFound("day was not closed".to_string()));
    }
    info!("Reopened {}", date);
    Ok(())
}

pub async fn blocked_for_date<S: ScheduleStore>(
    store: &S,
    date: NaiveDate,
) -> Result<Vec<String>, BookingError> {
    Ok(store.blocked_slots(date).await?)
}

/// Every entry must be a slot of `grid`; the batch is rejected as a whole otherwise.
fn grid_slots(grid: &SlotGrid, raw: &[String]) -> Result<Vec<String>, BookingError> {
    if raw.is_empty() {
        return Err(BookingError::MissingData);
    }
    let mut labels: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        let slot: Slot = entry.parse().map_err(|_| BookingError::InvalidTime)?;
        if !grid.contains(&slot) {
            return Err(BookingError::InvalidTime);
        }
        let label = slot.to_string();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    Ok(labels)
}

/// Blocks a batch of slots; already blocked ones are skipped.
/// Returns the blocked list for `date` afterwards.
pub async fn block_slots<S: ScheduleStore>(
    store: &S,
    grid: &SlotGrid,
    date: NaiveDate,
    slots: &[String],
) -> Result<Vec<String>, BookingError> {
    let labels = grid_slots(grid, slots)?;
    let blocked = store.block_slots(date, &labels).await?;
    info!("Blocked {:?} on {}", labels, date);
    Ok(blocked)
}

/// Unblocks a batch of slots; ones that were not blocked are ignored.
pub async fn unblock_slots<S: ScheduleStore>(
    store: &S,
    grid: &SlotGrid,
    date: NaiveDate,
    slots: &[String],
) -> Result<Vec<String>, BookingError> {
    let labels = grid_slots(grid, slots)?;
    let blocked = store.unblock_slots(date, &labels).await?;
    info!("Unblocked {:?} on {}", labels, date);
    Ok(blocked)
}
