// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use async_trait::async_trait;

use crate::backends::local::keys::{CONTENT, DOCUMENT, OUTLINE};
use crate::backends::local::ACTION_DONE;
use crate::context::Context;
use crate::errors::NodeError;
use crate::traits::Node;

/// Outline and per-heading content read by [`DocumentNode`].
#[derive(Debug, Clone)]
pub struct DocumentSources {
    pub outline: Vec<String>,
    pub content: HashMap<String, String>,
}

/// Document node - joins headings and content into markdown, in outline order
pub struct DocumentNode;

impl DocumentNode {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocumentNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Node for DocumentNode {
    type Prep = DocumentSources;
    type Exec = String;

    fn name(&self) -> &str {
        "document"
    }

    fn prep(&self, ctx: &Context) -> Result<DocumentSources, NodeError> {
        let outline = ctx
            .fetch(&OUTLINE)?
            .ok_or_else(|| NodeError::missing(OUTLINE.name()))?;
        let content = ctx
            .fetch(&CONTENT)?
            .ok_or_else(|| NodeError::missing(CONTENT.name()))?;
        Ok(DocumentSources { outline, content })
    }

    async fn exec(&self, sources: &DocumentSources) -> Result<String, NodeError> {
        let mut document = String::new();
        for item in &sources.outline {
            let body = sources
                .content
                .get(item)
                .ok_or_else(|| NodeError::invalid(format!("no content for section '{}'", item)))?;
            document.push_str(&format!("## {}\n{}\n\n", item, body));
        }
        Ok(document)
    }

    fn post(&self, ctx: &Context, _sources: &DocumentSources, document: &String) -> Result<String, NodeError> {
        ctx.put(&DOCUMENT, document.clone())?;
        Ok(ACTION_DONE.to_string())
    }
}
