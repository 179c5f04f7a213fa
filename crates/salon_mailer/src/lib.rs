/// HTTP mail relay implementing the notification service.
pub mod service;
/// Customer-facing message texts.
pub mod templates;

#[cfg(test)]
mod service_test;

pub use service::{HttpMailer, MailerError};
pub use templates::{booking_cancellation, booking_confirmation, EmailMessage};
