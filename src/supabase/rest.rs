use super::error::check;
use super::{SupabaseClient, SupabaseError};
use crate::course::Lesson;
use serde_json::json;
use tracing::debug;

impl SupabaseClient {
    /// Ask the backend whether `user_id` has purchased the course.
    ///
    /// Calls the `has_course_access` procedure; a `null` answer counts as no.
    pub async fn has_course_access(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<bool, SupabaseError> {
        let response = check(
            self.post("/rest/v1/rpc/has_course_access")
                .bearer_auth(access_token)
                .json(&json!({ "_user_id": user_id }))
                .send()
                .await?,
        )
        .await?;

        let granted = response.json::<Option<bool>>().await?.unwrap_or(false);
        debug!(user_id, granted, "Course access checked");
        Ok(granted)
    }

    /// All lessons, ordered by `sort_order` on the backend.
    pub async fn lessons(&self, access_token: &str) -> Result<Vec<Lesson>, SupabaseError> {
        let response = check(
            self.get("/rest/v1/lessons")
                .query(&[("select", "*"), ("order", "sort_order.asc")])
                .bearer_auth(access_token)
                .send()
                .await?,
        )
        .await?;

        let lessons = response.json::<Vec<Lesson>>().await?;
        debug!(count = lessons.len(), "Lessons fetched");
        Ok(lessons)
    }
}
