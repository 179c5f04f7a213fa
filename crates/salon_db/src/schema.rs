//! Schema creation
//!
//! Dates are stored as `YYYY-MM-DD` text and times as `HH:MM` text so the
//! same statements run on SQLite and PostgreSQL through `sqlx::Any`.

use crate::client::DbClient;
use crate::error::DbError;
use tracing::{debug, info};

/// Creates the tables and indexes when missing. Safe to run on every start.
pub async fn init_schema(client: &DbClient) -> Result<(), DbError> {
    debug!("Initializing schema for {:?}", client.backend());
    let id_column = client.backend().id_column();

    let statements = [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS bookings (
                {id_column},
                nombre TEXT NOT NULL,
                apellido TEXT NOT NULL,
                telefono TEXT NOT NULL DEFAULT '',
                email TEXT NOT NULL DEFAULT '',
                date TEXT NOT NULL,
                time TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                UNIQUE(date, time)
            )
            "#
        ),
        r#"
            CREATE TABLE IF NOT EXISTS closures (
                date TEXT PRIMARY KEY
            )
        "#
        .to_string(),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS blocked_slots (
                {id_column},
                date TEXT NOT NULL,
                time TEXT NOT NULL,
                UNIQUE(date, time)
            )
            "#
        ),
        "CREATE INDEX IF NOT EXISTS idx_bookings_date ON bookings(date)".to_string(),
        "CREATE INDEX IF NOT EXISTS idx_bookings_datetime ON bookings(date, time)".to_string(),
        "CREATE INDEX IF NOT EXISTS idx_blocked_slots_date ON blocked_slots(date)".to_string(),
    ];

    for statement in &statements {
        client.execute(statement).await?;
    }

    info!("Schema initialized");
    Ok(())
}
