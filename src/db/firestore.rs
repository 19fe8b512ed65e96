// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed activity operations.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Activity, ActivityPatch};

/// Firestore-backed activity collection.
#[derive(Clone)]
pub struct FirestoreStore {
    client: firestore::FirestoreDb,
}

impl FirestoreStore {
    /// Connect to Firestore.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn connect(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::connect_emulator(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn connect_emulator(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self { client })
    }

    /// Insert a new activity document keyed by its ID.
    pub async fn insert(&self, activity: &Activity) -> Result<Activity, AppError> {
        self.client
            .fluent()
            .insert()
            .into(collections::ACTIVITIES)
            .document_id(&activity.id)
            .object(activity)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get an activity by ID.
    pub async fn get(&self, id: &str) -> Result<Option<Activity>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::ACTIVITIES)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Every document in the collection.
    pub async fn list(&self) -> Result<Vec<Activity>, AppError> {
        self.client
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Read-merge-write. Concurrent writers on the same document are
    /// last-write-wins.
    pub async fn update(
        &self,
        id: &str,
        patch: ActivityPatch,
    ) -> Result<Option<Activity>, AppError> {
        let Some(mut record) = self.get(id).await? else {
            return Ok(None);
        };
        record.apply(patch);
        self.replace_existing(&record).await
    }

    /// Overwrite a document only if it still exists.
    ///
    /// A document deleted since it was read stays deleted and yields `None`.
    pub async fn replace_existing(&self, record: &Activity) -> Result<Option<Activity>, AppError> {
        let result = self
            .client
            .fluent()
            .update()
            .in_col(collections::ACTIVITIES)
            .precondition(firestore::FirestoreWritePrecondition::Exists(true))
            .document_id(&record.id)
            .object(record)
            .execute::<Activity>()
            .await;

        match result {
            Ok(stored) => Ok(Some(stored)),
            Err(firestore::errors::FirestoreError::DataNotFoundError(_)) => {
                tracing::debug!(id = %record.id, "Activity deleted before update was written");
                Ok(None)
            }
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    /// Delete a document. Deleting a missing document succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client
            .fluent()
            .delete()
            .from(collections::ACTIVITIES)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
