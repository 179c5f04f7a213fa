// --- File: crates/services/salon_backend/src/service_factory.rs ---
//! Builds the outgoing services named in the configuration.

use salon_common::services::{
    BoxFuture, BoxedError, NotificationResult, NotificationService, ServiceFactory,
};
use salon_config::AppConfig;
use salon_mailer::HttpMailer;
use std::sync::Arc;
use tracing::{error, info};

// Adapts the mailer's own error type to BoxedError
struct BoxedNotificationService {
    inner: HttpMailer,
}

impl NotificationService for BoxedNotificationService {
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        let body = body.to_string();
        let inner = &self.inner;

        Box::pin(async move {
            inner
                .send(&to, &subject, &body)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

pub struct SalonServiceFactory {
    notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
    business_name: String,
}

impl SalonServiceFactory {
    /// An unusable `[mail]` section is logged and leaves mail off; it never stops startup.
    pub fn new(config: &AppConfig) -> Self {
        let mut factory = Self {
            notification_service: None,
            business_name: String::new(),
        };

        match HttpMailer::from_app_config(config) {
            None => info!("Mail notifications disabled."),
            Some(Err(e)) => error!("Mail notifications disabled: {}", e),
            Some(Ok(mailer)) => {
                factory.business_name = mailer.business_name().to_string();
                factory.notification_service =
                    Some(Arc::new(BoxedNotificationService { inner: mailer }));
                info!("Mail notification service initialized.");
            }
        }

        factory
    }

    /// Name used to sign customer emails.
    pub fn business_name(&self) -> &str {
        &self.business_name
    }
}

impl ServiceFactory for SalonServiceFactory {
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        self.notification_service.clone()
    }
}
