// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Context keys shared by the local pipeline nodes.

use std::collections::HashMap;

use crate::context::ContextKey;

pub const TOPIC: ContextKey<String> = ContextKey::new("topic");
pub const OUTLINE: ContextKey<Vec<String>> = ContextKey::new("outline");
pub const CONTENT: ContextKey<HashMap<String, String>> = ContextKey::new("content");
pub const DOCUMENT: ContextKey<String> = ContextKey::new("document");
