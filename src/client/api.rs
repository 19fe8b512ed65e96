// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the activity API.

use crate::models::{Activity, ActivityPatch, NewActivity};
use serde::Deserialize;

/// Errors surfaced by [`ActivityApi`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

/// Error body returned by the service.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Activity API client.
#[derive(Clone)]
pub struct ActivityApi {
    http: reqwest::Client,
    base_url: String,
}

impl ActivityApi {
    /// Create a client for the service at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn activity_url(&self, id: &str) -> String {
        format!("{}/activities/{}", self.base_url, urlencoding::encode(id))
    }

    /// Fetch every activity.
    pub async fn list(&self) -> Result<Vec<Activity>, ClientError> {
        let url = format!("{}/activities", self.base_url);
        let response = self.http.get(&url).send().await?;
        check_response_json(response).await
    }

    /// Create an activity; returns the stored record with its ID.
    pub async fn create(&self, activity: &NewActivity) -> Result<Activity, ClientError> {
        let url = format!("{}/activities", self.base_url);
        let response = self.http.post(&url).json(activity).send().await?;
        check_response_json(response).await
    }

    /// Update an activity; `None` if the service has no record with this ID.
    pub async fn update(
        &self,
        id: &str,
        patch: &ActivityPatch,
    ) -> Result<Option<Activity>, ClientError> {
        let response = self
            .http
            .put(self.activity_url(id))
            .json(patch)
            .send()
            .await?;
        check_response_json(response).await
    }

    /// Delete an activity; returns the service's confirmation message.
    pub async fn delete(&self, id: &str) -> Result<String, ClientError> {
        let response = self.http.delete(self.activity_url(id)).send().await?;
        let body: MessageBody = check_response_json(response).await?;
        Ok(body.message)
    }
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}
