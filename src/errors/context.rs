// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the shared [`Context`](crate::context::Context) store.

use thiserror::Error;

/// Errors that can occur while reading from or writing to a context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The key exists but its value was stored as a different type.
    #[error("context key '{key}' holds a {stored}, not a {requested}")]
    TypeMismatch {
        key: String,
        stored: &'static str,
        requested: &'static str,
    },

    /// The context was torn down and no longer accepts operations.
    #[error("context has been torn down")]
    TornDown,
}
