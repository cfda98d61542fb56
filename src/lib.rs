// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // concrete nodes
pub mod config;     // YAML configuration
pub mod context;    // shared key/value store
pub mod engine;     // node graph + flow traversal
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // node lifecycle contract
