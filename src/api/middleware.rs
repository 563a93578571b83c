use crate::AppState;
use crate::session::{Resolution, clear_session, resolve_session, store_session};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, error, warn};

pub const LOGIN_PATH: &str = "/login";

pub async fn log_request_errors(req: Request, next: Next) -> Response {
    let uri = req.uri().clone();
    let method = req.method().clone();

    let response = next.run(req).await;
    let status = response.status();
    if status.is_client_error() {
        // 4xx error
        warn!(
            method = %method,
            uri = %uri,
            status = %status,
            "Client error"
        );
    } else if status.is_server_error() {
        // 5xx error
        error!(
            method = %method,
            uri = %uri,
            status = %status,
            "Server error"
        );
    }

    response
}

/// Middleware for pages that need a signed-in user
///
/// Anonymous visitors are sent to the login page. Otherwise the
/// [`CurrentUser`](crate::session::CurrentUser) is stored in the request
/// extensions, and rotated tokens are written back as cookies.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    match resolve_session(&state.supabase, &jar).await {
        Resolution::Active(current) => {
            req.extensions_mut().insert(current);
            next.run(req).await
        }
        Resolution::Refreshed(current, session) => {
            debug!(user_id = %current.user.id, "Storing refreshed session");
            req.extensions_mut().insert(current);
            let jar = store_session(jar, &session, state.secure_cookies);
            (jar, next.run(req).await).into_response()
        }
        Resolution::Anonymous => Redirect::to(LOGIN_PATH).into_response(),
        Resolution::Invalid => {
            debug!("Clearing rejected session cookies");
            (clear_session(jar), Redirect::to(LOGIN_PATH)).into_response()
        }
    }
}
