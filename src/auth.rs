use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::api::AppState;

/// Hash a password for at-rest storage (sha256, base64-encoded).
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    STANDARD.encode(digest)
}

/// Generate an opaque session token from 32 random bytes.
pub fn new_session_token() -> String {
    let bytes: [u8; 32] = rand::random();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// The authenticated principal, resolved from the bearer token.
pub struct CurrentUser {
    pub username: String,
    pub token: String,
}

#[derive(Debug)]
pub struct AuthRejection(&'static str);

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0 });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthRejection("missing authorization header"))?;

        let value = header
            .to_str()
            .map_err(|_| AuthRejection("invalid authorization header"))?;

        let token = value
            .strip_prefix("Bearer ")
            .ok_or(AuthRejection("expected bearer token"))?;

        match state.db.session_user(token) {
            Ok(Some(username)) => Ok(CurrentUser {
                username,
                token: token.to_string(),
            }),
            Ok(None) => Err(AuthRejection("invalid or expired session")),
            Err(e) => {
                tracing::error!("session lookup failed: {e}");
                Err(AuthRejection("session lookup failed"))
            }
        }
    }
}
