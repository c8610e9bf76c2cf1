//! Admin authentication extractor and session helpers.
//!
//! The admin flag lives only in the visitor's session; restarting the server
//! logs every admin out.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use crate::models::session_keys;

/// Extractor that requires an authenticated admin session.
///
/// # Example
///
/// ```rust,ignore
/// async fn list_products(_admin: RequireAdmin, State(state): State<AppState>) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

/// Error returned when an admin endpoint is called without logging in.
pub struct AdminRejection;

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Admin login required" })),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts.extensions.get::<Session>().ok_or(AdminRejection)?;

        let authenticated = session
            .get::<bool>(session_keys::ADMIN_AUTHENTICATED)
            .await
            .ok()
            .flatten()
            .unwrap_or(false);

        if authenticated {
            Ok(Self)
        } else {
            Err(AdminRejection)
        }
    }
}

/// Mark the session as an authenticated admin.
///
/// The session ID is cycled first so a pre-login session cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin_authenticated(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::ADMIN_AUTHENTICATED, true).await
}

/// Clear the admin flag from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_admin_authenticated(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<bool>(session_keys::ADMIN_AUTHENTICATED)
        .await?;
    Ok(())
}
