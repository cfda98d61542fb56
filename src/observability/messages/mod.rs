// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Every message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its documented level with typed fields.

use tracing::Span;

pub mod context;
pub mod flow;
pub mod node;

/// A log message that knows its level and its structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
