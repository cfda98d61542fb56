// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors that abort a [`Flow`](crate::engine::Flow) traversal.

use thiserror::Error;

use super::{NodeError, Stage};
use crate::engine::NodeId;

/// Terminal error returned by `Flow::run`.
///
/// Reaching a node without a successor for the returned label is normal
/// termination and never produces an error.
#[derive(Error, Debug)]
pub enum FlowError {
    /// A node stage failed; traversal stopped at this activation.
    #[error("step {step}: node '{node}' ({id}) failed during {stage}: {source}")]
    Stage {
        step: usize,
        id: NodeId,
        node: String,
        stage: Stage,
        #[source]
        source: NodeError,
    },

    /// A node id that does not belong to the graph being traversed.
    #[error("node {0} is not part of this graph")]
    UnknownNode(NodeId),
}

impl FlowError {
    /// The failed stage, if the error came from a node.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            FlowError::Stage { stage, .. } => Some(*stage),
            FlowError::UnknownNode(_) => None,
        }
    }
}
