use crate::AppState;
use crate::course::{CourseBrowser, DashboardQuery};
use crate::credentials::{
    AuthMode, CONFIRMATION_SENT, LoginForm, RegisterForm, describe_failure,
};
use crate::error::AppError;
use crate::session::{CurrentUser, access_token, clear_session, store_session};
use crate::supabase::{SignUpOutcome, SupabaseError};
use crate::views::{AuthTemplate, DashboardTemplate, LandingTemplate, render};
use axum::Form;
use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn landing(Extension(state): Extension<AppState>) -> Result<Html<String>, AppError> {
    let quote = state.quotes.inspiration().await;
    render(&LandingTemplate::new(quote))
}

pub async fn inspiration(Extension(state): Extension<AppState>) -> Json<QuoteResponse> {
    Json(QuoteResponse {
        quote: state.quotes.inspiration().await,
    })
}

pub async fn login_page() -> Result<Html<String>, AppError> {
    render(&AuthTemplate::blank(AuthMode::Login))
}

pub async fn register_page() -> Result<Html<String>, AppError> {
    render(&AuthTemplate::blank(AuthMode::Register))
}

/// Status of a form page re-rendered with an error
fn failure_status(error: &SupabaseError) -> StatusCode {
    match error {
        SupabaseError::Transport(_) => StatusCode::BAD_GATEWAY,
        SupabaseError::Api { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub async fn login(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match state
        .supabase
        .sign_in_with_password(&form.email, &form.password)
        .await
    {
        Ok(session) => {
            let jar = store_session(jar, &session, state.secure_cookies);
            Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
        }
        Err(error) => {
            info!(%error, "Sign-in rejected");
            let page = AuthTemplate {
                email: form.email,
                error: Some(describe_failure(&error)),
                ..AuthTemplate::blank(AuthMode::Login)
            };
            Ok((failure_status(&error), render(&page)?).into_response())
        }
    }
}

pub async fn register(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let outcome = state
        .supabase
        .sign_up(&form.email, &form.password, &form.full_name)
        .await;

    let mut page = AuthTemplate {
        email: form.email,
        full_name: form.full_name,
        ..AuthTemplate::blank(AuthMode::Register)
    };

    match outcome {
        Ok(SignUpOutcome::SignedIn(session)) => {
            page.message = Some(CONFIRMATION_SENT.to_string());
            let jar = store_session(jar, &session, state.secure_cookies);
            Ok((jar, render(&page)?).into_response())
        }
        Ok(SignUpOutcome::ConfirmationPending(_)) => {
            page.message = Some(CONFIRMATION_SENT.to_string());
            Ok(render(&page)?.into_response())
        }
        Err(error) => {
            info!(%error, "Sign-up rejected");
            page.error = Some(describe_failure(&error));
            Ok((failure_status(&error), render(&page)?).into_response())
        }
    }
}

pub async fn logout(Extension(state): Extension<AppState>, jar: CookieJar) -> Response {
    if let Some(token) = access_token(&jar)
        && let Err(error) = state.supabase.sign_out(&token).await
    {
        warn!(%error, "Failed to revoke session");
    }

    (clear_session(jar), Redirect::to("/")).into_response()
}

pub async fn dashboard(
    Extension(state): Extension<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let email = current.email().to_string();

    let entitled = state
        .supabase
        .has_course_access(&current.user.id, &current.access_token)
        .await
        .unwrap_or_else(|error| {
            warn!(%error, user_id = %current.user.id, "Course access check failed");
            false
        });

    if !entitled {
        return render(&DashboardTemplate::locked(email));
    }

    let lessons = state
        .supabase
        .lessons(&current.access_token)
        .await
        .unwrap_or_else(|error| {
            warn!(%error, "Failed to fetch lessons");
            Vec::new()
        });

    let browser = CourseBrowser::build(&lessons, &query);
    render(&DashboardTemplate::unlocked(email, browser))
}
