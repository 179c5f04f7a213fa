//! Wall clock of the business.

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::warn;

/// Reads "now" in the business time zone, or host local time when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessClock {
    tz: Option<Tz>,
}

impl BusinessClock {
    pub fn new(tz: Option<Tz>) -> Self {
        Self { tz }
    }

    /// Unknown zone names fall back to host local time with a warning.
    pub fn from_config(time_zone: Option<&str>) -> Self {
        let tz = time_zone.and_then(|name| match Tz::from_str(name.trim()) {
            Ok(tz) => Some(tz),
            Err(_) => {
                warn!("Unknown time zone '{}', using host local time", name);
                None
            }
        });
        Self { tz }
    }

    pub fn now(&self) -> NaiveDateTime {
        match self.tz {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Local::now().naive_local(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
