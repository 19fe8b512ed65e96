// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! [`ActivityDb`] is the store handle held in the application state. It
//! dispatches to Firestore in production, to an in-process map for
//! `memory://` and tests, or to an offline stub whose every operation fails.

pub mod firestore;
pub mod ids;
pub mod memory;

pub use self::firestore::FirestoreStore;
pub use self::memory::MemoryStore;

use crate::config::StoreConfig;
use crate::error::AppError;
use crate::models::{Activity, ActivityPatch, NewActivity};
use ring::rand::SystemRandom;

/// Collection names as constants.
pub mod collections {
    pub const ACTIVITIES: &str = "activities";
}

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreStore),
    Memory(MemoryStore),
    Offline,
}

/// Activity store handle.
#[derive(Clone)]
pub struct ActivityDb {
    backend: Backend,
    rng: SystemRandom,
}

impl ActivityDb {
    /// Connect to the store named by the configuration.
    pub async fn connect(store: &StoreConfig) -> Result<Self, AppError> {
        match store {
            StoreConfig::Firestore { project_id } => {
                Ok(Self::from_backend(Backend::Firestore(
                    FirestoreStore::connect(project_id).await?,
                )))
            }
            StoreConfig::Memory => {
                tracing::warn!("Using in-memory activity store; data is lost on restart");
                Ok(Self::new_memory())
            }
        }
    }

    /// Create an empty in-process store.
    pub fn new_memory() -> Self {
        Self::from_backend(Backend::Memory(MemoryStore::new()))
    }

    /// Create an offline store for testing.
    ///
    /// All database operations will return an error if called.
    pub fn new_offline() -> Self {
        Self::from_backend(Backend::Offline)
    }

    fn from_backend(backend: Backend) -> Self {
        Self {
            backend,
            rng: SystemRandom::new(),
        }
    }

    /// Short name of the backend, for logs.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Firestore(_) => "firestore",
            Backend::Memory(_) => "memory",
            Backend::Offline => "offline",
        }
    }

    fn offline() -> AppError {
        AppError::Database("Database not connected (offline mode)".to_string())
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Store a new activity under a freshly generated ID.
    pub async fn create_activity(&self, new: NewActivity) -> Result<Activity, AppError> {
        let id = ids::generate_id(&self.rng)?;
        let activity = new.into_activity(id);

        match &self.backend {
            Backend::Firestore(store) => store.insert(&activity).await,
            Backend::Memory(store) => {
                if store.insert(&activity) {
                    Ok(activity)
                } else {
                    Err(AppError::Database(format!(
                        "Document {} already exists",
                        activity.id
                    )))
                }
            }
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Get an activity by ID.
    #[cfg(test)]
    pub async fn get_activity(&self, id: &str) -> Result<Option<Activity>, AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.get(id).await,
            Backend::Memory(store) => Ok(store.get(id)),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// All stored activities.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.list().await,
            Backend::Memory(store) => Ok(store.list()),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Merge `patch` into an existing activity.
    ///
    /// Returns `None` if no activity has this ID.
    pub async fn update_activity(
        &self,
        id: &str,
        patch: ActivityPatch,
    ) -> Result<Option<Activity>, AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.update(id, patch).await,
            Backend::Memory(store) => Ok(store.update(id, patch)),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Delete an activity. A missing ID is not an error.
    pub async fn delete_activity(&self, id: &str) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.delete(id).await,
            Backend::Memory(store) => {
                store.delete(id);
                Ok(())
            }
            Backend::Offline => Err(Self::offline()),
        }
    }
}
