// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by node lifecycle stages.

use std::fmt;
use thiserror::Error;

use super::ContextError;

/// The lifecycle stage a node activation was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Prep,
    Exec,
    Post,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Prep => "prep",
            Stage::Exec => "exec",
            Stage::Post => "post",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a node from one of its `prep`, `exec` or `post` stages.
#[derive(Error, Debug)]
pub enum NodeError {
    /// A key the node depends on has not been written by an upstream node.
    #[error("required context key '{0}' is missing")]
    MissingKey(String),

    /// The context rejected a read or write.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Input was present but unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An external collaborator (model client, remote service) failed.
    #[error("external call failed: {0}")]
    External(#[from] anyhow::Error),
}

impl NodeError {
    pub fn missing(key: impl Into<String>) -> Self {
        NodeError::MissingKey(key.into())
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        NodeError::InvalidInput(reason.into())
    }
}
