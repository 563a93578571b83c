//! Client for the hosted auth/database backend.
//!
//! Only the published HTTP surface is used: the auth service under
//! `/auth/v1` and the rest service under `/rest/v1`. Every call carries the
//! project's anon key; calls made on behalf of a user also carry the user's
//! access token.

mod auth;
mod error;
mod rest;

pub use auth::SignUpOutcome;
pub use error::SupabaseError;

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: User,
}

#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    timeout: Duration,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self, SupabaseError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.with_key(self.http.get(self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.with_key(self.http.post(self.url(path)))
    }

    fn with_key(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .timeout(self.timeout)
    }
}
