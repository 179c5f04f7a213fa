//! Fire-and-forget customer emails.

use salon_common::services::{BoxedError, NotificationService};
use salon_common::Booking;
use salon_mailer::{booking_cancellation, booking_confirmation, EmailMessage};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub type SharedNotifier = Arc<dyn NotificationService<Error = BoxedError>>;

/// Outgoing notification hooks used by the arbiter.
#[derive(Clone, Default)]
pub struct Notifications {
    service: Option<SharedNotifier>,
    business_name: String,
}

impl Notifications {
    pub fn new(service: Option<SharedNotifier>, business_name: impl Into<String>) -> Self {
        Self {
            service,
            business_name: business_name.into(),
        }
    }

    /// No service: every notification is logged and dropped.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.service.is_some()
    }

    pub fn booking_confirmed(&self, booking: &Booking) -> Option<JoinHandle<()>> {
        let message = booking_confirmation(booking, &self.business_name);
        dispatch_notification(self.service.clone(), &booking.email, message)
    }

    pub fn booking_cancelled(&self, booking: &Booking) -> Option<JoinHandle<()>> {
        let message = booking_cancellation(booking, &self.business_name);
        dispatch_notification(self.service.clone(), &booking.email, message)
    }
}

impl std::fmt::Debug for Notifications {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifications")
            .field("enabled", &self.is_enabled())
            .field("business_name", &self.business_name)
            .finish()
    }
}

/// Spawns the send on the runtime. The outcome is only logged; callers never
/// wait on it, and the handle is returned so tests can.
pub fn dispatch_notification(
    service: Option<SharedNotifier>,
    to: &str,
    message: EmailMessage,
) -> Option<JoinHandle<()>> {
    let Some(service) = service else {
        debug!("No mail service configured, skipping '{}' to {}", message.subject, to);
        return None;
    };

    let to = to.to_string();
    Some(tokio::spawn(async move {
        match service.send_email(&to, &message.subject, &message.body).await {
            Ok(result) => info!(
                "Notification '{}' sent to {} (id: {}, status: {})",
                message.subject, to, result.id, result.status
            ),
            Err(e) => warn!(
                "Notification '{}' to {} failed: {}",
                message.subject, to, e
            ),
        }
    }))
}
