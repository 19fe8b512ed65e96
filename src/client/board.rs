// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side list of activities.
//!
//! The board only changes after the service confirms a request. Failures are
//! logged and leave the list as it was.

use crate::client::api::ActivityApi;
use crate::client::form::ActivityForm;
use crate::models::{Activity, ActivityPatch};
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct ActivityBoard {
    items: Vec<Activity>,
}

impl ActivityBoard {
    /// Load the current list from the service.
    ///
    /// A failed fetch is logged and yields an empty board.
    pub async fn mount(api: &ActivityApi) -> Self {
        match api.list().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Loaded activities");
                Self { items }
            }
            Err(e) => {
                tracing::error!(error = %e, base_url = api.base_url(), "Failed to load activities");
                Self::default()
            }
        }
    }

    pub fn items(&self) -> &[Activity] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Submit the form as a new activity.
    ///
    /// On success the stored record is appended and the form is cleared.
    /// Returns whether the board changed.
    pub async fn submit(&mut self, api: &ActivityApi, form: &mut ActivityForm) -> bool {
        let body = match form.submission() {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Form not submitted");
                return false;
            }
        };

        match api.create(&body).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "Activity added");
                self.items.push(created);
                form.reset();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to add activity");
                false
            }
        }
    }

    /// Apply `patch` to the activity with this ID.
    ///
    /// The local record is replaced by the service's copy on success. If the
    /// service no longer has the record it is dropped from the board.
    pub async fn update(&mut self, api: &ActivityApi, id: &str, patch: &ActivityPatch) -> bool {
        match api.update(id, patch).await {
            Ok(Some(updated)) => {
                let position = self.items.iter().position(|a| a.id == updated.id);
                match position {
                    Some(i) => self.items[i] = updated,
                    None => self.items.push(updated),
                }
                true
            }
            Ok(None) => {
                tracing::warn!(id, "Activity no longer exists");
                let before = self.items.len();
                self.items.retain(|a| a.id != id);
                self.items.len() != before
            }
            Err(e) => {
                tracing::error!(error = %e, id, "Failed to update activity");
                false
            }
        }
    }

    /// Delete the activity with this ID.
    pub async fn remove(&mut self, api: &ActivityApi, id: &str) -> bool {
        match api.delete(id).await {
            Ok(message) => {
                tracing::info!(id, message = %message, "Activity removed");
                self.items.retain(|a| a.id != id);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, id, "Failed to delete activity");
                false
            }
        }
    }

    /// Text view of the board.
    pub fn render(&self) -> String {
        let mut out = format!("Total Activities: {}\n", self.items.len());
        for activity in &self.items {
            let _ = write!(
                out,
                "\n[{}]\n  Activity: {}\n  Price: RM{:.2}\n  Type: {}\n  Booking Required: {}\n  Accessibility: {:.1}\n",
                activity.id,
                activity.activity,
                activity.price,
                activity.kind,
                if activity.booking_required { "Yes" } else { "No" },
                activity.accessibility,
            );
        }
        out
    }
}
