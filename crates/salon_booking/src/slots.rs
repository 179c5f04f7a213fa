// --- File: crates/salon_booking/src/slots.rs ---
//! The bookable time-of-day grid.
//!
//! A [`Slot`] is compared and displayed as `HH:MM`. The same [`SlotGrid`] is
//! used for every date; it is either derived from opening hours or taken
//! literally from configuration (for grids with a lunch gap).

use chrono::{NaiveTime, Timelike};
use salon_common::normalize_time;
use salon_config::BusinessConfig;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlotError {
    #[error("invalid slot time '{0}' (expected HH:MM)")]
    InvalidTime(String),
    #[error("slot grid is empty")]
    EmptyGrid,
    #[error("invalid business hours: {0}")]
    InvalidHours(String),
}

/// A time of day at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(NaiveTime);

impl Slot {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Slot)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Reads a persisted time, which may carry seconds.
    pub fn from_stored(raw: &str) -> Result<Self, SlotError> {
        normalize_time(raw)
            .ok_or_else(|| SlotError::InvalidTime(raw.to_string()))?
            .parse()
    }
}

impl FromStr for Slot {
    type Err = SlotError;

    /// Accepts exactly `HH:MM`. Stored `HH:MM:SS` values go through
    /// [`Slot::from_stored`] instead.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidTime(raw.to_string());
        if raw.len() != 5 || normalize_time(raw).as_deref() != Some(raw) {
            return Err(invalid());
        }
        NaiveTime::parse_from_str(raw, "%H:%M")
            .map(Slot)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

/// Ordered, duplicate-free list of bookable slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    slots: Vec<Slot>,
}

impl SlotGrid {
    /// Slots from `open_hour` up to (excluding) `close_hour`, every `step_minutes`.
    pub fn regular(open_hour: u32, close_hour: u32, step_minutes: u32) -> Result<Self, SlotError> {
        if open_hour >= close_hour || close_hour > 24 {
            return Err(SlotError::InvalidHours(format!(
                "open {} must be before close {}",
                open_hour, close_hour
            )));
        }
        if step_minutes == 0 {
            return Err(SlotError::InvalidHours("slot length must be positive".into()));
        }

        let end = close_hour * 60;
        let slots = (open_hour * 60..end)
            .step_by(step_minutes as usize)
            .filter_map(|minutes| Slot::from_hm(minutes / 60, minutes % 60))
            .collect();
        Ok(Self { slots })
    }

    /// A literal grid. Order is kept, repeats are dropped.
    pub fn from_list<S: AsRef<str>>(entries: &[S]) -> Result<Self, SlotError> {
        let mut slots: Vec<Slot> = Vec::with_capacity(entries.len());
        for entry in entries {
            let slot: Slot = entry.as_ref().parse()?;
            if !slots.contains(&slot) {
                slots.push(slot);
            }
        }
        if slots.is_empty() {
            return Err(SlotError::EmptyGrid);
        }
        Ok(Self { slots })
    }

    /// `business.slots` when present, otherwise the regular grid from the opening hours.
    pub fn from_business(business: &BusinessConfig) -> Result<Self, SlotError> {
        match &business.slots {
            Some(list) => Self::from_list(list),
            None => Self::regular(
                business.open_hour,
                business.close_hour,
                business.slot_minutes,
            ),
        }
    }

    pub fn contains(&self, slot: &Slot) -> bool {
        self.slots.contains(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The grid as `HH:MM` strings.
    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(Slot::to_string).collect()
    }
}
