// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod keys;
pub mod nodes;
pub mod pipeline;

pub use nodes::*;
pub use pipeline::DocumentPipeline;

/// Action returned by a node that hands over to the next stage of the pipeline.
pub const ACTION_NEXT: &str = "x";
/// Action returned by the last node; nothing is registered for it.
pub const ACTION_DONE: &str = "y";
