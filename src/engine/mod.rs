// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod flow;
pub mod graph;

pub use flow::{Flow, FlowReport};
pub use graph::{NodeGraph, NodeId, Successors};
