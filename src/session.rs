use crate::supabase::{Session, SupabaseClient, SupabaseError, User};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{debug, warn};

pub const ACCESS_COOKIE: &str = "artme-access-token";
pub const REFRESH_COOKIE: &str = "artme-refresh-token";

/// Signed-in user, placed in request extensions by `require_session`
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub access_token: String,
}

impl CurrentUser {
    pub fn email(&self) -> &str {
        self.user.email.as_deref().unwrap_or_default()
    }
}

/// Outcome of looking at the session cookies
#[derive(Debug)]
pub enum Resolution {
    /// No usable tokens, or the backend could not be reached
    Anonymous,
    /// Tokens were present but the backend rejected them
    Invalid,
    Active(CurrentUser),
    /// The access token expired and was rotated; the new pair must be stored
    Refreshed(CurrentUser, Session),
}

fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .permanent()
        .build()
}

pub fn store_session(jar: CookieJar, session: &Session, secure: bool) -> CookieJar {
    jar.add(session_cookie(
        ACCESS_COOKIE,
        session.access_token.clone(),
        secure,
    ))
    .add(session_cookie(
        REFRESH_COOKIE,
        session.refresh_token.clone(),
        secure,
    ))
}

pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(ACCESS_COOKIE).path("/"))
        .remove(Cookie::build(REFRESH_COOKIE).path("/"))
}

pub fn access_token(jar: &CookieJar) -> Option<String> {
    jar.get(ACCESS_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

fn refresh_token(jar: &CookieJar) -> Option<String> {
    jar.get(REFRESH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Resolve the session cookies into a user, refreshing once if needed.
pub async fn resolve_session(client: &SupabaseClient, jar: &CookieJar) -> Resolution {
    let access = access_token(jar);
    let refresh = refresh_token(jar);

    if access.is_none() && refresh.is_none() {
        return Resolution::Anonymous;
    }

    if let Some(access_token) = access {
        match client.get_user(&access_token).await {
            Ok(user) => {
                return Resolution::Active(CurrentUser { user, access_token });
            }
            Err(error) if error.is_unauthorized() => {
                debug!(%error, "Access token rejected");
            }
            Err(error) => {
                warn!(%error, "Failed to resolve session");
                return Resolution::Anonymous;
            }
        }
    }

    let Some(refresh_token) = refresh else {
        return Resolution::Invalid;
    };

    match client.refresh_session(&refresh_token).await {
        Ok(session) => {
            let current = CurrentUser {
                user: session.user.clone(),
                access_token: session.access_token.clone(),
            };
            Resolution::Refreshed(current, session)
        }
        Err(SupabaseError::Transport(error)) => {
            warn!(%error, "Failed to refresh session");
            Resolution::Anonymous
        }
        Err(error) => {
            debug!(%error, "Refresh token rejected");
            Resolution::Invalid
        }
    }
}
