// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the shared context store.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A `set` displaced an existing value, which is released.
///
/// # Log Level
/// `trace!` - Store bookkeeping
pub struct ValueReplaced<'a> {
    pub key: &'a str,
    pub previous_type: &'static str,
}

impl Display for ValueReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Context key '{}' overwritten, releasing previous {}",
            self.key, self.previous_type
        )
    }
}

impl StructuredLog for ValueReplaced<'_> {
    fn log(&self) {
        tracing::trace!(key = self.key, previous_type = self.previous_type, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("context_replace", span_name = name, key = self.key)
    }
}

/// The store was torn down.
///
/// # Log Level
/// `debug!` - Lifecycle event
///
/// # Example
/// ```
/// use nodeflow::observability::messages::context::ContextTornDown;
///
/// let msg = ContextTornDown { released: 4 };
/// assert_eq!(msg.to_string(), "Context torn down, released 4 values");
/// ```
pub struct ContextTornDown {
    pub released: usize,
}

impl Display for ContextTornDown {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Context torn down, released {} values", self.released)
    }
}

impl StructuredLog for ContextTornDown {
    fn log(&self) {
        tracing::debug!(released = self.released, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("context_teardown", span_name = name, released = self.released)
    }
}
