// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sequential traversal of a [`NodeGraph`] driven by action labels.
//!
//! ```text
//! current = start
//! while current is some node:
//!     label   = activate(current)        // prep -> exec -> post -> release
//!     current = successors(current)[label]
//! ```
//!
//! A label with no registered successor ends the traversal normally. A
//! failing stage ends it with a [`FlowError`]; context writes made by earlier
//! activations stay in place. There is no step limit and no cycle detection:
//! a graph that loops without ever returning an unmapped label runs forever.

use std::time::Instant;

use tracing::Instrument;

use super::graph::{NodeGraph, NodeId, Successors};
use crate::context::Context;
use crate::errors::FlowError;
use crate::observability::messages::flow::{FlowCompleted, FlowFailed, FlowStarted, NoSuccessor};
use crate::observability::messages::node::{
    NodeActivationCompleted, NodeActivationStarted, NodeStageFailed,
};
use crate::observability::messages::StructuredLog;

/// Outcome of a traversal that ran to termination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowReport {
    path: Vec<NodeId>,
    last_action: Option<String>,
}

impl FlowReport {
    /// Nodes in activation order; a node appears once per activation.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// Label returned by the final node, `None` if nothing ran.
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    fn record(&mut self, id: NodeId, action: String) {
        self.path.push(id);
        self.last_action = Some(action);
    }
}

/// Walks a borrowed [`NodeGraph`] from a start node.
///
/// A `Flow` holds no traversal state of its own, so one value may run any
/// number of traversals, including concurrently over different contexts.
///
/// # Examples
///
/// ```
/// # use async_trait::async_trait;
/// # use nodeflow::errors::NodeError;
/// # use nodeflow::traits::Node;
/// use nodeflow::context::Context;
/// use nodeflow::engine::{Flow, NodeGraph};
///
/// struct Count(&'static str);
///
/// # #[async_trait]
/// # impl Node for Count {
/// #     type Prep = u32;
/// #     type Exec = u32;
/// #     fn name(&self) -> &str { "count" }
/// #     fn prep(&self, ctx: &Context) -> Result<u32, NodeError> {
/// #         Ok(ctx.get::<u32>("n")?.unwrap_or(0))
/// #     }
/// #     async fn exec(&self, n: &u32) -> Result<u32, NodeError> { Ok(n + 1) }
/// #     fn post(&self, ctx: &Context, _: &u32, n: &u32) -> Result<String, NodeError> {
/// #         ctx.set("n", *n)?;
/// #         Ok(self.0.to_string())
/// #     }
/// # }
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut graph = NodeGraph::new();
/// let first = graph.add_node(Count("next"));
/// let second = graph.add_node(Count("stop"));
/// graph.connect(first, "next", second)?;
///
/// let ctx = Context::new();
/// let report = Flow::new(&graph, first).run(&ctx).await?;
///
/// assert_eq!(report.path(), &[first, second]);
/// assert_eq!(report.last_action(), Some("stop"));
/// assert_eq!(ctx.get::<u32>("n")?, Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Flow<'g> {
    graph: &'g NodeGraph,
    start: Option<NodeId>,
}

impl<'g> Flow<'g> {
    pub fn new(graph: &'g NodeGraph, start: NodeId) -> Self {
        Self {
            graph,
            start: Some(start),
        }
    }

    /// A flow with no start node; running it terminates immediately.
    pub fn empty(graph: &'g NodeGraph) -> Self {
        Self { graph, start: None }
    }

    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    pub fn graph(&self) -> &'g NodeGraph {
        self.graph
    }

    /// Drive the graph from the start node until an action label has no
    /// successor, or a node stage fails.
    pub async fn run(&self, ctx: &Context) -> Result<FlowReport, FlowError> {
        let started_at = Instant::now();
        FlowStarted {
            start: self.start.and_then(|id| self.graph.node_name(id)),
            node_count: self.graph.len(),
        }
        .log();

        let mut report = FlowReport::default();
        let mut current = self.start;

        while let Some(id) = current {
            let node = match self.graph.node(id) {
                Some(node) => node,
                None => {
                    let error = FlowError::UnknownNode(id);
                    FlowFailed {
                        steps: report.steps(),
                        error: &error,
                    }
                    .log();
                    return Err(error);
                }
            };
            let name = node.node_name();
            let step = report.steps() + 1;

            let start_msg = NodeActivationStarted { node: name, step };
            let span = start_msg.span("node_activation");
            start_msg.log();

            let activated_at = Instant::now();
            let action = match node.activate(ctx).instrument(span).await {
                Ok(action) => action,
                Err(failure) => {
                    NodeStageFailed {
                        node: name,
                        stage: failure.stage,
                        error: &failure.error,
                    }
                    .log();
                    let error = FlowError::Stage {
                        step,
                        id,
                        node: name.to_string(),
                        stage: failure.stage,
                        source: failure.error,
                    };
                    FlowFailed {
                        steps: step,
                        error: &error,
                    }
                    .log();
                    return Err(error);
                }
            };

            NodeActivationCompleted {
                node: name,
                step,
                action: &action,
                duration: activated_at.elapsed(),
            }
            .log();

            current = self.graph.successor(id, &action);
            if current.is_none() {
                let registered = self
                    .graph
                    .successors(id)
                    .map(Successors::labels)
                    .unwrap_or_default();
                NoSuccessor {
                    node: name,
                    action: &action,
                    registered: &registered,
                }
                .log();
            }
            report.record(id, action);
        }

        FlowCompleted {
            steps: report.steps(),
            last_action: report.last_action(),
            duration: started_at.elapsed(),
        }
        .log();
        Ok(report)
    }
}
