// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete node implementations.
//!
//! ## Local Backend
//! In-process text nodes that turn a topic into a short document:
//! - **OutlineNode**: topic → section headings
//! - **ContentNode**: headings → one paragraph per heading
//! - **DocumentNode**: headings + paragraphs → markdown document
//!
//! `DocumentPipeline` wires the three together from configuration.
//!
//! ## Stub Backend (Test-Only)
//! Nodes for engine tests, only compiled in test builds:
//! - **LabelNode**: returns a fixed action and records that it ran
//! - **ProbeNode**: fails at a chosen stage and counts calls and releases

pub mod local;
#[cfg(test)]
pub mod stub;
