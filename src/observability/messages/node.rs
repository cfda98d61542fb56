// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for node activations.

use crate::errors::Stage;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A node activation is starting.
///
/// # Log Level
/// `debug!` - Per-step detail
///
/// # Example
/// ```
/// use nodeflow::observability::messages::node::NodeActivationStarted;
///
/// let msg = NodeActivationStarted { node: "outline", step: 1 };
/// assert_eq!(msg.to_string(), "Step 1: activating node 'outline'");
/// ```
pub struct NodeActivationStarted<'a> {
    pub node: &'a str,
    pub step: usize,
}

impl Display for NodeActivationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Step {}: activating node '{}'", self.step, self.node)
    }
}

impl StructuredLog for NodeActivationStarted<'_> {
    fn log(&self) {
        tracing::debug!(node = self.node, step = self.step, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "node_activation",
            span_name = name,
            node = self.node,
            step = self.step,
        )
    }
}

/// A node activation finished and returned an action label.
///
/// # Log Level
/// `info!` - Important operational event
pub struct NodeActivationCompleted<'a> {
    pub node: &'a str,
    pub step: usize,
    pub action: &'a str,
    pub duration: std::time::Duration,
}

impl Display for NodeActivationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' returned action '{}' in {:?}",
            self.node, self.action, self.duration
        )
    }
}

impl StructuredLog for NodeActivationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            node = self.node,
            step = self.step,
            action = self.action,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "node_completed",
            span_name = name,
            node = self.node,
            action = self.action,
        )
    }
}

/// A node stage failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use nodeflow::errors::{NodeError, Stage};
/// use nodeflow::observability::messages::node::NodeStageFailed;
///
/// let error = NodeError::missing("topic");
/// let msg = NodeStageFailed { node: "outline", stage: Stage::Prep, error: &error };
/// assert_eq!(
///     msg.to_string(),
///     "Node 'outline' failed during prep: required context key 'topic' is missing"
/// );
/// ```
pub struct NodeStageFailed<'a> {
    pub node: &'a str,
    pub stage: Stage,
    pub error: &'a dyn std::error::Error,
}

impl Display for NodeStageFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' failed during {}: {}",
            self.node, self.stage, self.error
        )
    }
}

impl StructuredLog for NodeStageFailed<'_> {
    fn log(&self) {
        tracing::error!(
            node = self.node,
            stage = self.stage.as_str(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "node_failed",
            span_name = name,
            node = self.node,
            stage = self.stage.as_str(),
        )
    }
}

/// Intermediate results were handed back to the node's release hooks.
///
/// # Log Level
/// `trace!` - Lifecycle bookkeeping
pub struct IntermediatesReleased<'a> {
    pub node: &'a str,
    pub prep: bool,
    pub exec: bool,
}

impl Display for IntermediatesReleased<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' released intermediates (prep={}, exec={})",
            self.node, self.prep, self.exec
        )
    }
}

impl StructuredLog for IntermediatesReleased<'_> {
    fn log(&self) {
        tracing::trace!(node = self.node, prep = self.prep, exec = self.exec, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("node_release", span_name = name, node = self.node)
    }
}
