// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod context;
mod flow;
mod node;

pub use config::ConfigError;
pub use context::ContextError;
pub use flow::FlowError;
pub use node::{NodeError, Stage};
