// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The node lifecycle contract.
//!
//! A flow activates a node by running, strictly in order:
//!
//! ```text
//! prep(ctx) -> Prep
//! exec(&Prep) -> Exec          (async, may block on external I/O)
//! post(ctx, &Prep, &Exec) -> action label
//! release_prep(Prep), release_exec(Exec)
//! ```
//!
//! `post` is the only stage that writes to the context. Anything it stores is
//! moved or cloned into the store, so the release hooks only ever see
//! node-local data.

use async_trait::async_trait;

use crate::context::Context;
use crate::errors::{NodeError, Stage};
use crate::observability::messages::node::IntermediatesReleased;
use crate::observability::messages::StructuredLog;

/// A unit of work in a node graph.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use nodeflow::context::Context;
/// use nodeflow::errors::NodeError;
/// use nodeflow::traits::Node;
///
/// struct Shout;
///
/// #[async_trait]
/// impl Node for Shout {
///     type Prep = String;
///     type Exec = String;
///
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn prep(&self, ctx: &Context) -> Result<String, NodeError> {
///         ctx.get::<String>("text")?.ok_or_else(|| NodeError::missing("text"))
///     }
///
///     async fn exec(&self, text: &String) -> Result<String, NodeError> {
///         Ok(text.to_uppercase())
///     }
///
///     fn post(&self, ctx: &Context, _: &String, loud: &String) -> Result<String, NodeError> {
///         ctx.set("loud", loud.clone())?;
///         Ok("done".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait Node: Send + Sync {
    /// Intermediate produced by `prep`.
    type Prep: Send + Sync;
    /// Intermediate produced by `exec`.
    type Exec: Send + Sync;

    fn name(&self) -> &str;

    /// Read what the node needs from the context.
    fn prep(&self, ctx: &Context) -> Result<Self::Prep, NodeError>;

    /// Do the node's work. Must not touch the context.
    async fn exec(&self, prep: &Self::Prep) -> Result<Self::Exec, NodeError>;

    /// Store results for downstream nodes and choose the next action label.
    fn post(
        &self,
        ctx: &Context,
        prep: &Self::Prep,
        exec: &Self::Exec,
    ) -> Result<String, NodeError>;

    /// Release the `prep` intermediate. Runs once per activation that
    /// produced one: after `post`, after a later stage failed, or when the
    /// activation future is dropped while `exec` is pending.
    fn release_prep(&self, prep: Self::Prep) {
        drop(prep);
    }

    /// Release the `exec` intermediate. Runs once per activation that
    /// produced one.
    fn release_exec(&self, exec: Self::Exec) {
        drop(exec);
    }
}

/// A stage failure carried out of an activation.
#[derive(Debug)]
pub(crate) struct StageFailure {
    pub stage: Stage,
    pub error: NodeError,
}

impl StageFailure {
    fn new(stage: Stage, error: NodeError) -> Self {
        Self { stage, error }
    }
}

/// Owns a `prep` intermediate and hands it to `release_prep` when dropped,
/// which also covers an activation cancelled while `exec` is awaited.
struct PrepGuard<'a, N: Node> {
    node: &'a N,
    prep: Option<N::Prep>,
}

impl<N: Node> Drop for PrepGuard<'_, N> {
    fn drop(&mut self) {
        if let Some(prep) = self.prep.take() {
            self.node.release_prep(prep);
        }
    }
}

/// Object-safe view of a [`Node`] with its intermediate types erased.
#[async_trait]
pub(crate) trait DynNode: Send + Sync {
    fn node_name(&self) -> &str;

    /// Run one full lifecycle pass and return the action label.
    async fn activate(&self, ctx: &Context) -> Result<String, StageFailure>;
}

#[async_trait]
impl<N: Node> DynNode for N {
    fn node_name(&self) -> &str {
        Node::name(self)
    }

    // Every intermediate that was produced reaches its release hook exactly
    // once, whether the activation succeeds, a later stage fails or the
    // future is dropped mid-`exec`.
    async fn activate(&self, ctx: &Context) -> Result<String, StageFailure> {
        let mut guard = PrepGuard {
            node: self,
            prep: None,
        };
        let prep: &N::Prep = guard.prep.insert(
            self.prep(ctx)
                .map_err(|error| StageFailure::new(Stage::Prep, error))?,
        );

        let exec = match self.exec(prep).await {
            Ok(exec) => exec,
            Err(error) => {
                drop(guard);
                IntermediatesReleased {
                    node: Node::name(self),
                    prep: true,
                    exec: false,
                }
                .log();
                return Err(StageFailure::new(Stage::Exec, error));
            }
        };

        let action = self.post(ctx, prep, &exec);
        drop(guard);
        self.release_exec(exec);
        IntermediatesReleased {
            node: Node::name(self),
            prep: true,
            exec: true,
        }
        .log();
        action.map_err(|error| StageFailure::new(Stage::Post, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::backends::stub::{Probe, ProbeNode};

    #[tokio::test]
    async fn successful_activation_releases_both_intermediates() {
        let node = ProbeNode::succeeding("probe", "next");
        let ctx = Context::new();

        let action = node.activate(&ctx).await.unwrap();

        assert_eq!(action, "next");
        assert_eq!(
            ctx.get::<String>("probe:result").unwrap(),
            Some("probe:prep:exec".to_string())
        );
        assert_eq!(Probe::read(&node.probe.prep_released), 1);
        assert_eq!(Probe::read(&node.probe.exec_released), 1);
    }

    #[tokio::test]
    async fn prep_failure_skips_remaining_stages() {
        let node = ProbeNode::failing_at("probe", Stage::Prep);
        let ctx = Context::new();

        let failure = node.activate(&ctx).await.unwrap_err();

        assert_eq!(failure.stage, Stage::Prep);
        assert_eq!(Probe::read(&node.probe.exec_calls), 0);
        assert_eq!(Probe::read(&node.probe.post_calls), 0);
        assert_eq!(Probe::read(&node.probe.prep_released), 0);
        assert_eq!(Probe::read(&node.probe.exec_released), 0);
    }

    #[tokio::test]
    async fn exec_failure_still_releases_prep_result() {
        let node = ProbeNode::failing_at("probe", Stage::Exec);
        let ctx = Context::new();

        let failure = node.activate(&ctx).await.unwrap_err();

        assert_eq!(failure.stage, Stage::Exec);
        assert_eq!(Probe::read(&node.probe.post_calls), 0);
        assert_eq!(Probe::read(&node.probe.prep_released), 1);
        assert_eq!(Probe::read(&node.probe.exec_released), 0);
        assert!(ctx.is_empty());
    }

    #[tokio::test]
    async fn post_failure_releases_both_intermediates() {
        let node = ProbeNode::failing_at("probe", Stage::Post);
        let ctx = Context::new();

        let failure = node.activate(&ctx).await.unwrap_err();

        assert_eq!(failure.stage, Stage::Post);
        assert!(matches!(failure.error, NodeError::InvalidInput(_)));
        assert_eq!(Probe::read(&node.probe.prep_released), 1);
        assert_eq!(Probe::read(&node.probe.exec_released), 1);
    }

    #[tokio::test]
    async fn cancelled_exec_still_releases_prep_result() {
        let node = ProbeNode::stalling("slow", Duration::from_secs(30));
        let ctx = Context::new();

        let outcome = tokio::time::timeout(Duration::from_millis(20), node.activate(&ctx)).await;

        assert!(outcome.is_err());
        assert_eq!(Probe::read(&node.probe.exec_calls), 1);
        assert_eq!(Probe::read(&node.probe.post_calls), 0);
        assert_eq!(Probe::read(&node.probe.prep_released), 1);
        assert_eq!(Probe::read(&node.probe.exec_released), 0);
        assert!(ctx.is_empty());
    }

    #[test]
    fn erased_name_matches_node_name() {
        let node = ProbeNode::succeeding("named", "x");
        assert_eq!(node.node_name(), "named");
    }
}
