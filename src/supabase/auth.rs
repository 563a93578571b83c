use super::error::check;
use super::{Session, SupabaseClient, SupabaseError, User};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

/// Result of a successful sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Email confirmation is disabled, the user is signed in right away
    SignedIn(Session),
    /// A confirmation email was sent; no session until it is confirmed
    ConfirmationPending(User),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(User),
}

impl SupabaseClient {
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpOutcome, SupabaseError> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "full_name": full_name },
        });

        let response = check(self.post("/auth/v1/signup").json(&body).send().await?).await?;
        let outcome = match response.json::<SignUpResponse>().await? {
            SignUpResponse::Session(session) => SignUpOutcome::SignedIn(session),
            SignUpResponse::User(user) => SignUpOutcome::ConfirmationPending(user),
        };

        info!(
            signed_in = matches!(outcome, SignUpOutcome::SignedIn(_)),
            "User registered"
        );
        Ok(outcome)
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, SupabaseError> {
        let body = json!({ "email": email, "password": password });
        let response = check(
            self.post("/auth/v1/token")
                .query(&[("grant_type", "password")])
                .json(&body)
                .send()
                .await?,
        )
        .await?;

        let session = response.json::<Session>().await?;
        info!(user_id = %session.user.id, "User signed in");
        Ok(session)
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, SupabaseError> {
        let body = json!({ "refresh_token": refresh_token });
        let response = check(
            self.post("/auth/v1/token")
                .query(&[("grant_type", "refresh_token")])
                .json(&body)
                .send()
                .await?,
        )
        .await?;

        let session = response.json::<Session>().await?;
        debug!(user_id = %session.user.id, "Session refreshed");
        Ok(session)
    }

    /// Revoke the session server-side.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        check(
            self.post("/auth/v1/logout")
                .bearer_auth(access_token)
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    /// Resolve the user an access token belongs to.
    pub async fn get_user(&self, access_token: &str) -> Result<User, SupabaseError> {
        let response = check(
            self.get("/auth/v1/user")
                .bearer_auth(access_token)
                .send()
                .await?,
        )
        .await?;
        Ok(response.json::<User>().await?)
    }
}
