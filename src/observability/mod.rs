// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic output goes through the message types in [`messages`], each a
//! small struct with a `Display` implementation and a [`StructuredLog`]
//! implementation that emits the same event with typed fields:
//!
//! * `messages::flow` - traversal lifecycle (start, completion, failure)
//! * `messages::node` - per-activation lifecycle and release hooks
//! * `messages::context` - overwrites and teardown of the shared store
//!
//! # Usage
//!
//! ```rust
//! use nodeflow::observability::messages::{flow::FlowStarted, StructuredLog};
//!
//! FlowStarted { start: Some("outline"), node_count: 3 }.log();
//! ```
//!
//! [`StructuredLog`]: messages::StructuredLog

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`; an unparsable filter
/// falls back to `info`. Calling this more than once is harmless: only the
/// first subscriber is installed.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
