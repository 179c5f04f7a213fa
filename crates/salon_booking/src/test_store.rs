//! In-memory schedule store for exercising the arbiter without SQL.

use chrono::NaiveDate;
use salon_common::services::{BoxFuture, BoxedError, NotificationResult, NotificationService};
use salon_common::{Booking, NewBooking};
use salon_db::repositories::{BlockedSlotRepository, BookingRepository, ClosureRepository};
use salon_db::DbError;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inner {
    next_id: i64,
    bookings: BTreeMap<(NaiveDate, String), Booking>,
    closures: BTreeSet<NaiveDate>,
    blocked: BTreeSet<(NaiveDate, String)>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    /// Makes `booking_exists` answer `false` so the insert has to catch the duplicate.
    pub hide_existing: AtomicBool,
    /// Makes every call fail like an unreachable database.
    pub offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn booking_count(&self) -> usize {
        self.inner.lock().unwrap().bookings.len()
    }

    fn check_online(&self) -> Result<(), DbError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DbError::PoolError("pool timed out".to_string()));
        }
        Ok(())
    }
}

impl BookingRepository for MemoryStore {
    async fn find_bookings(&self, date: Option<NaiveDate>) -> Result<Vec<Booking>, DbError> {
        self.check_online()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .bookings
            .values()
            .filter(|b| date.map_or(true, |d| b.date == d))
            .cloned()
            .collect())
    }

    async fn booking_exists(&self, date: NaiveDate, time: &str) -> Result<bool, DbError> {
        self.check_online()?;
        if self.hide_existing.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let inner = self.inner.lock().unwrap();
        Ok(inner.bookings.contains_key(&(date, time.to_string())))
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking, DbError> {
        self.check_online()?;
        let mut inner = self.inner.lock().unwrap();
        let key = (booking.date, booking.time.clone());
        if inner.bookings.contains_key(&key) {
            return Err(DbError::UniqueViolation(
                "UNIQUE constraint failed: bookings.date, bookings.time".to_string(),
            ));
        }
        inner.next_id += 1;
        let stored = booking.into_booking(inner.next_id);
        inner.bookings.insert(key, stored.clone());
        Ok(stored)
    }

    async fn delete_booking(&self, id: i64) -> Result<Option<Booking>, DbError> {
        self.check_online()?;
        let mut inner = self.inner.lock().unwrap();
        let key = inner
            .bookings
            .iter()
            .find(|(_, b)| b.id == id)
            .map(|(k, _)| k.clone());
        Ok(key.and_then(|k| inner.bookings.remove(&k)))
    }
}

impl ClosureRepository for MemoryStore {
    async fn list_closures(&self) -> Result<Vec<NaiveDate>, DbError> {
        self.check_online()?;
        Ok(self.inner.lock().unwrap().closures.iter().copied().collect())
    }

    async fn is_closed(&self, date: NaiveDate) -> Result<bool, DbError> {
        self.check_online()?;
        Ok(self.inner.lock().unwrap().closures.contains(&date))
    }

    async fn add_closure(&self, date: NaiveDate) -> Result<bool, DbError> {
        self.check_online()?;
        Ok(self.inner.lock().unwrap().closures.insert(date))
    }

    async fn remove_closure(&self, date: NaiveDate) -> Result<bool, DbError> {
        self.check_online()?;
        Ok(self.inner.lock().unwrap().closures.remove(&date))
    }
}

impl MemoryStore {
    fn blocked_on(inner: &Inner, date: NaiveDate) -> Vec<String> {
        inner
            .blocked
            .iter()
            .filter(|(d, _)| *d == date)
            .map(|(_, t)| t.clone())
            .collect()
    }
}

impl BlockedSlotRepository for MemoryStore {
    async fn blocked_slots(&self, date: NaiveDate) -> Result<Vec<String>, DbError> {
        self.check_online()?;
        let inner = self.inner.lock().unwrap();
        Ok(Self::blocked_on(&inner, date))
    }

    async fn block_slots(&self, date: NaiveDate, times: &[String]) -> Result<Vec<String>, DbError> {
        self.check_online()?;
        let mut inner = self.inner.lock().unwrap();
        for time in times {
            inner.blocked.insert((date, time.clone()));
        }
        Ok(Self::blocked_on(&inner, date))
    }

    async fn unblock_slots(
        &self,
        date: NaiveDate,
        times: &[String],
    ) -> Result<Vec<String>, DbError> {
        self.check_online()?;
        let mut inner = self.inner.lock().unwrap();
        for time in times {
            inner.blocked.remove(&(date, time.clone()));
        }
        Ok(Self::blocked_on(&inner, date))
    }
}

/// Records every email it is asked to send; optionally fails each one.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn subjects_to(&self, to: &str) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(addr, _)| addr == to)
            .map(|(_, subject)| subject.clone())
            .collect()
    }
}

impl NotificationService for RecordingNotifier {
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        _body: &str,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        let fail = self.fail;
        Box::pin(async move {
            if fail {
                return Err(BoxedError("relay unreachable".into()));
            }
            Ok(NotificationResult {
                id: "test-1".to_string(),
                status: "200".to_string(),
            })
        })
    }
}

pub fn recording() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::default())
}
