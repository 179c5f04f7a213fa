//! SQL implementation of the booking, closure and blocked-slot repositories

use crate::error::DbError;
use crate::repositories::{BlockedSlotRepository, BookingRepository, ClosureRepository};
use crate::DbClient;
use chrono::NaiveDate;
use salon_common::{normalize_time, Booking, NewBooking};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

const BOOKING_COLUMNS: &str = "id, nombre, apellido, telefono, email, date, time";

/// SQL implementation of all schedule repositories over one pooled client
#[derive(Debug, Clone)]
pub struct SqlScheduleRepository {
    db_client: DbClient,
}

impl SqlScheduleRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    pub fn db_client(&self) -> &DbClient {
        &self.db_client
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_stored_date(raw: &str) -> Result<NaiveDate, DbError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| DbError::DecodeError(format!("stored date '{}': {}", raw, e)))
}

fn stored_time(raw: String) -> String {
    normalize_time(&raw).unwrap_or(raw)
}

fn booking_from_row(row: &AnyRow) -> Result<Booking, DbError> {
    let date: String = row.try_get("date")?;
    let time: String = row.try_get("time")?;
    Ok(Booking {
        id: row.try_get("id")?,
        nombre: row.try_get("nombre")?,
        apellido: row.try_get("apellido")?,
        telefono: row.try_get("telefono")?,
        email: row.try_get("email")?,
        date: parse_stored_date(&date)?,
        time: stored_time(time),
    })
}

impl BookingRepository for SqlScheduleRepository {
    async fn find_bookings(&self, date: Option<NaiveDate>) -> Result<Vec<Booking>, DbError> {
        debug!("Finding bookings for {:?}", date);

        let rows = match date {
            Some(date) => {
                let query = format!(
                    "SELECT {BOOKING_COLUMNS} FROM bookings WHERE date = $1 ORDER BY date, time"
                );
                sqlx::query(&query)
                    .bind(date_key(date))
                    .fetch_all(self.db_client.pool())
                    .await
            }
            None => {
                let query = format!("SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY date, time");
                sqlx::query(&query).fetch_all(self.db_client.pool()).await
            }
        }
        .map_err(|e| {
            error!("Failed to list bookings: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        rows.iter().map(booking_from_row).collect()
    }

    async fn booking_exists(&self, date: NaiveDate, time: &str) -> Result<bool, DbError> {
        let row = sqlx::query("SELECT id FROM bookings WHERE date = $1 AND time = $2 LIMIT 1")
            .bind(date_key(date))
            .bind(time.to_string())
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to check booking existence: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(row.is_some())
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking, DbError> {
        debug!("Inserting booking for {} {}", booking.date, booking.time);

        let row = sqlx::query(
            r#"
            INSERT INTO bookings (nombre, apellido, telefono, email, date, time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(booking.nombre.clone())
        .bind(booking.apellido.clone())
        .bind(booking.telefono.clone())
        .bind(booking.email.clone())
        .bind(date_key(booking.date))
        .bind(booking.time.clone())
        .fetch_one(self.db_client.pool())
        .await
        .map_err(|e| match DbError::from_query(e) {
            DbError::UniqueViolation(msg) => {
                info!(
                    "Booking for {} {} lost to a concurrent insert",
                    booking.date, booking.time
                );
                DbError::UniqueViolation(msg)
            }
            other => {
                error!("Failed to insert booking: {}", other);
                other
            }
        })?;

        let id: i64 = row.try_get("id")?;
        info!("Booking {} created for {} {}", id, booking.date, booking.time);
        Ok(booking.into_booking(id))
    }

    async fn delete_booking(&self, id: i64) -> Result<Option<Booking>, DbError> {
        debug!("Deleting booking {}", id);

        let query = format!("DELETE FROM bookings WHERE id = $1 RETURNING {BOOKING_COLUMNS}");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete booking {}: {}", id, e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(booking_from_row).transpose()
    }
}

impl ClosureRepository for SqlScheduleRepository {
    async fn list_closures(&self) -> Result<Vec<NaiveDate>, DbError> {
        let rows = sqlx::query("SELECT date FROM closures ORDER BY date")
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list closures: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter()
            .map(|row| {
                let raw: String = row.try_get("date")?;
                parse_stored_date(&raw)
            })
            .collect()
    }

    async fn is_closed(&self, date: NaiveDate) -> Result<bool, DbError> {
        let row = sqlx::query("SELECT date FROM closures WHERE date = $1")
            .bind(date_key(date))
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to look up closure: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(row.is_some())
    }

    async fn add_closure(&self, date: NaiveDate) -> Result<bool, DbError> {
        let result = sqlx::query("INSERT INTO closures (date) VALUES ($1) ON CONFLICT (date) DO NOTHING")
            .bind(date_key(date))
            .execute(self.db_client.pool())
            .await
            .map_err(DbError::from_query)?;

        let added = result.rows_affected() > 0;
        info!("Closure for {} (newly added: {})", date, added);
        Ok(added)
    }

    async fn remove_closure(&self, date: NaiveDate) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM closures WHERE date = $1")
            .bind(date_key(date))
            .execute(self.db_client.pool())
            .await
            .map_err(DbError::from_query)?;

        let removed = result.rows_affected() > 0;
        info!("Closure for {} removed: {}", date, removed);
        Ok(removed)
    }
}

impl BlockedSlotRepository for SqlScheduleRepository {
    async fn blocked_slots(&self, date: NaiveDate) -> Result<Vec<String>, DbError> {
        let rows = sqlx::query("SELECT time FROM blocked_slots WHERE date = $1 ORDER BY time")
            .bind(date_key(date))
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list blocked slots: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("time").map(stored_time).map_err(DbError::from))
            .collect()
    }

    async fn block_slots(&self, date: NaiveDate, times: &[String]) -> Result<Vec<String>, DbError> {
        let key = date_key(date);
        let mut tx = self.db_client.begin().await?;
        for time in times {
            sqlx::query(
                "INSERT INTO blocked_slots (date, time) VALUES ($1, $2) ON CONFLICT (date, time) DO NOTHING",
            )
            .bind(key.clone())
            .bind(time.clone())
            .execute(&mut *tx)
            .await
            .map_err(DbError::from_query)?;
        }
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Blocked {} slot(s) on {}", times.len(), date);
        self.blocked_slots(date).await
    }

    async fn unblock_slots(&self, date: NaiveDate, times: &[String]) -> Result<Vec<String>, DbError> {
        let key = date_key(date);
        let mut tx = self.db_client.begin().await?;
        for time in times {
            sqlx::query("DELETE FROM blocked_slots WHERE date = $1 AND time = $2")
                .bind(key.clone())
                .bind(time.clone())
                .execute(&mut *tx)
                .await
                .map_err(DbError::from_query)?;
        }
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Unblocked {} slot(s) on {}", times.len(), date);
        self.blocked_slots(date).await
    }
}
