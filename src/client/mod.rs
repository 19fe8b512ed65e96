// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form client for the activity API.

pub mod api;
pub mod board;
pub mod form;

pub use api::{ActivityApi, ClientError};
pub use board::ActivityBoard;
pub use form::{ActivityForm, FormError};
