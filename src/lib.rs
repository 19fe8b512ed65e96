// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Tracker: plan activities and keep them in a document store
//!
//! This crate provides the REST backend for activity records and a form
//! client that talks to it.

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use config::Config;
use db::ActivityDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: ActivityDb,
}
