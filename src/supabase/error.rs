use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the auth/database backend client
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

impl SupabaseError {
    /// The message the backend attached to the failure, if it sent one.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            SupabaseError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// The access token was rejected and a refresh may help.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            SupabaseError::Api { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// Error bodies differ between the auth and rest services
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

pub(crate) fn error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return body.trim().to_string();
    };

    parsed
        .msg
        .or(parsed.message)
        .or(parsed.error_description)
        .or(parsed.error)
        .unwrap_or_default()
}

/// Turn a non-success response into [`SupabaseError::Api`].
pub(crate) async fn check(response: reqwest::Response) -> Result<reqwest::Response, SupabaseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SupabaseError::Api {
        status,
        message: error_message(&body),
    })
}
