// --- File: crates/salon_booking/src/auth.rs ---

use crate::handlers::BookingState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use constant_time_eq::constant_time_eq;
use salon_common::SalonError;
use salon_config::AdminConfig;
use std::sync::Arc;
use tracing::{debug, warn};

pub const ADMIN_REALM: &str = "Basic realm=\"salon-admin\"";

/// Username and password from an `Authorization: Basic ...` header.
pub fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Compares both fields in constant time, without short-circuiting between them.
pub fn credentials_match(admin: &AdminConfig, user: &str, password: &str) -> bool {
    let user_ok = constant_time_eq(user.as_bytes(), admin.username.as_bytes());
    let password_ok = constant_time_eq(password.as_bytes(), admin.password.as_bytes());
    user_ok & password_ok
}

fn unauthorized() -> Response {
    let mut response = SalonError::AuthError("unauthorized".to_string()).into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(ADMIN_REALM));
    response
}

/// Gates the admin routes behind HTTP Basic credentials from `[admin]`.
pub async fn admin_auth_middleware(
    State(state): State<Arc<BookingState>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(admin) = state.admin.as_ref() else {
        return SalonError::ConfigError("admin credentials are not configured".to_string())
            .into_response();
    };

    match basic_credentials(req.headers()) {
        Some((user, password)) if credentials_match(admin, &user, &password) => {
            debug!("Admin request authenticated for {}", req.uri().path());
            next.run(req).await
        }
        Some(_) => {
            warn!("Admin request to {} rejected: wrong credentials", req.uri().path());
            unauthorized()
        }
        None => {
            warn!("Admin request to {} rejected: no credentials", req.uri().path());
            unauthorized()
        }
    }
}
