// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for flow traversal events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Traversal started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use nodeflow::observability::messages::flow::FlowStarted;
///
/// let msg = FlowStarted { start: Some("outline"), node_count: 3 };
/// assert_eq!(msg.to_string(), "Starting flow at 'outline' over 3 nodes");
/// ```
pub struct FlowStarted<'a> {
    pub start: Option<&'a str>,
    pub node_count: usize,
}

impl Display for FlowStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.start {
            Some(start) => write!(
                f,
                "Starting flow at '{}' over {} nodes",
                start, self.node_count
            ),
            None => write!(f, "Starting flow with no start node"),
        }
    }
}

impl StructuredLog for FlowStarted<'_> {
    fn log(&self) {
        tracing::info!(
            start = self.start.unwrap_or("<none>"),
            node_count = self.node_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "flow",
            span_name = name,
            start = self.start.unwrap_or("<none>"),
            node_count = self.node_count,
        )
    }
}

/// Traversal ended because the last node's label had no successor.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use nodeflow::observability::messages::flow::FlowCompleted;
/// use std::time::Duration;
///
/// let msg = FlowCompleted {
///     steps: 3,
///     last_action: Some("y"),
///     duration: Duration::from_millis(5),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct FlowCompleted<'a> {
    pub steps: usize,
    pub last_action: Option<&'a str>,
    pub duration: std::time::Duration,
}

impl Display for FlowCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Flow completed after {} steps (last action {:?}) in {:?}",
            self.steps, self.last_action, self.duration
        )
    }
}

impl StructuredLog for FlowCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            steps = self.steps,
            last_action = self.last_action.unwrap_or("<none>"),
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "flow_completed",
            span_name = name,
            steps = self.steps,
            duration = ?self.duration,
        )
    }
}

/// Traversal aborted by a node failure.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct FlowFailed<'a> {
    pub steps: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for FlowFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Flow aborted after {} steps: {}", self.steps, self.error)
    }
}

impl StructuredLog for FlowFailed<'_> {
    fn log(&self) {
        tracing::error!(
            steps = self.steps,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "flow_failed",
            span_name = name,
            steps = self.steps,
            error = %self.error,
        )
    }
}

/// The returned label has no registered successor, so traversal halts.
///
/// # Log Level
/// `debug!` - Normal termination detail
pub struct NoSuccessor<'a> {
    pub node: &'a str,
    pub action: &'a str,
    /// Labels the node does have successors for, sorted.
    pub registered: &'a [&'a str],
}

impl Display for NoSuccessor<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' has no successor for action '{}', ending flow",
            self.node, self.action
        )?;
        if !self.registered.is_empty() {
            write!(f, " (registered: {})", self.registered.join(", "))?;
        }
        Ok(())
    }
}

impl StructuredLog for NoSuccessor<'_> {
    fn log(&self) {
        tracing::debug!(
            node = self.node,
            action = self.action,
            registered = ?self.registered,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "no_successor",
            span_name = name,
            node = self.node,
            action = self.action,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn flow_started_without_start_node() {
        let msg = FlowStarted { start: None, node_count: 0 };
        assert_eq!(msg.to_string(), "Starting flow with no start node");
    }

    #[test]
    fn flow_completed_mentions_steps_and_action() {
        let msg = FlowCompleted {
            steps: 2,
            last_action: Some("done"),
            duration: Duration::from_millis(1),
        };
        let text = msg.to_string();
        assert!(text.contains("after 2 steps"));
        assert!(text.contains("\"done\""));
    }

    #[test]
    fn no_successor_names_node_and_action() {
        let msg = NoSuccessor { node: "writer", action: "y", registered: &[] };
        assert_eq!(
            msg.to_string(),
            "Node 'writer' has no successor for action 'y', ending flow"
        );
    }

    #[test]
    fn no_successor_lists_registered_labels() {
        let msg = NoSuccessor {
            node: "router",
            action: "up",
            registered: &["left", "right"],
        };
        assert_eq!(
            msg.to_string(),
            "Node 'router' has no successor for action 'up', ending flow (registered: left, right)"
        );
    }
}
