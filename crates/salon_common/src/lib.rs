// --- File: crates/salon_common/src/lib.rs ---

pub mod error; // Error taxonomy and status mapping
pub mod features; // Runtime feature switches
pub mod http; // HTTP error rendering and the shared client
pub mod logging; // Subscriber setup
pub mod models; // Booking records shared by the store and the API
pub mod services; // Notification service abstraction

pub use error::{HttpStatusCode, SalonError};

pub use http::{
    client::{create_client, post_json_with_bearer, HTTP_CLIENT},
    IntoHttpResponse, INTERNAL_ERROR_MESSAGE,
};

pub use logging::{init, init_with_level, level_from_config};

pub use features::{is_feature_enabled, is_mail_enabled};

pub use models::{normalize_time, Booking, NewBooking};
pub use services::{BoxFuture, BoxedError, NotificationResult, NotificationService, ServiceFactory};
