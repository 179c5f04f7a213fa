use salon_common::services::{BoxFuture, NotificationResult, NotificationService};
use salon_common::{is_mail_enabled, post_json_with_bearer};
use salon_config::{AppConfig, MailConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Mail relay error types.
#[derive(Error, Debug)]
pub enum MailerError {
    /// The relay could not be reached
    #[error("Mail API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The relay answered with a non-success status
    #[error("Mail API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Missing or incomplete mail configuration
    #[error("Mail configuration missing or incomplete")]
    ConfigError,
}

/// JSON document posted to the relay.
#[derive(Debug, Serialize)]
pub struct OutgoingEmail<'a> {
    pub from: String,
    pub to: &'a str,
    pub subject: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Sends plain-text email through an HTTP relay with a bearer API key.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    config: MailConfig,
}

impl HttpMailer {
    pub fn new(config: MailConfig) -> Result<Self, MailerError> {
        if config.api_url.trim().is_empty() || config.from_address.trim().is_empty() {
            return Err(MailerError::ConfigError);
        }
        Ok(Self { config })
    }

    /// Builds a mailer when mail is switched on and configured, `None` otherwise.
    pub fn from_app_config(config: &AppConfig) -> Option<Result<Self, MailerError>> {
        if !is_mail_enabled(config) {
            return None;
        }
        config.mail.clone().map(Self::new)
    }

    /// Name shown in message bodies; falls back to the sender name.
    pub fn business_name(&self) -> &str {
        self.config
            .business_name
            .as_deref()
            .or(self.config.from_name.as_deref())
            .unwrap_or("")
    }

    fn from_header(&self) -> String {
        match &self.config.from_name {
            Some(name) if !name.trim().is_empty() => {
                format!("{} <{}>", name.trim(), self.config.from_address)
            }
            _ => self.config.from_address.clone(),
        }
    }

    /// Posts one message and returns the relay's id for it.
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        text: &str,
    ) -> Result<NotificationResult, MailerError> {
        let payload = OutgoingEmail {
            from: self.from_header(),
            to,
            subject,
            text,
        };
        debug!("Posting email '{}' to relay for {}", subject, to);

        let response =
            post_json_with_bearer(&self.config.api_url, &self.config.api_key, &payload).await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailerError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: RelayResponse = serde_json::from_str(&body).unwrap_or_default();
        info!("Email '{}' accepted by relay for {}", subject, to);

        Ok(NotificationResult {
            id: parsed.id.unwrap_or_default(),
            status: status.as_u16().to_string(),
        })
    }
}

impl NotificationService for HttpMailer {
    type Error = MailerError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        let body = body.to_string();

        Box::pin(async move { self.send(&to, &subject, &body).await })
    }
}
