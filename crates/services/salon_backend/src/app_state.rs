// --- File: crates/services/salon_backend/src/app_state.rs ---
use crate::service_factory::SalonServiceFactory;
use salon_booking::handlers::BookingState;
use salon_booking::notify::Notifications;
use salon_common::services::ServiceFactory;
use salon_common::SalonError;
use salon_config::AppConfig;
use salon_db::repositories::ScheduleRepositoryFactory;
use salon_db::{DbClient, DbClientFactory, RepositoryFactory};
use std::sync::Arc;
use tracing::info;

/// Everything the server holds for its lifetime.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DbClient,
    pub booking: Arc<BookingState>,
}

impl AppState {
    /// Connects the store, creates the schema and wires the booking state.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, SalonError> {
        let db = DbClientFactory::new().connect_and_migrate(&config).await?;
        if !db.is_healthy().await {
            return Err(SalonError::DatabaseError(format!(
                "{} did not answer a health check",
                db
            )));
        }
        info!("Database ready ({:?})", db.backend());

        let services = SalonServiceFactory::new(&config);
        let notifications = Notifications::new(
            services.notification_service(),
            services.business_name(),
        );
        let store = ScheduleRepositoryFactory::new().create_repository(db.clone());
        let booking = BookingState::from_config(&config, store, notifications)?;
        info!(
            "Booking grid: {} slots, closed on {}",
            booking.rules.grid.len(),
            booking.rules.closed_weekday
        );

        Ok(Self {
            config,
            db,
            booking: Arc::new(booking),
        })
    }
}
