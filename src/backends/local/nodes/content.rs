// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use async_trait::async_trait;

use crate::backends::local::keys::{CONTENT, OUTLINE};
use crate::backends::local::ACTION_NEXT;
use crate::config::consts::ITEM_PLACEHOLDER;
use crate::context::Context;
use crate::errors::NodeError;
use crate::traits::Node;

/// Content node - writes one paragraph per outline heading
pub struct ContentNode {
    template: String,
}

impl ContentNode {
    /// `template` is rendered once per heading with `{item}` replaced.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    fn render(&self, item: &str) -> String {
        self.template.replace(ITEM_PLACEHOLDER, item)
    }
}

#[async_trait]
impl Node for ContentNode {
    type Prep = Vec<String>;
    type Exec = HashMap<String, String>;

    fn name(&self) -> &str {
        "content"
    }

    fn prep(&self, ctx: &Context) -> Result<Vec<String>, NodeError> {
        ctx.fetch(&OUTLINE)?
            .ok_or_else(|| NodeError::missing(OUTLINE.name()))
    }

    async fn exec(&self, outline: &Vec<String>) -> Result<HashMap<String, String>, NodeError> {
        Ok(outline
            .iter()
            .map(|item| (item.clone(), self.render(item)))
            .collect())
    }

    fn post(
        &self,
        ctx: &Context,
        _outline: &Vec<String>,
        content: &HashMap<String, String>,
    ) -> Result<String, NodeError> {
        ctx.put(&CONTENT, content.clone())?;
        Ok(ACTION_NEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_template_for_each_item() {
        let node = ContentNode::new("About {item}.");
        let outline = vec!["Intro".to_string(), "Usage".to_string()];

        let content = node.exec(&outline).await.unwrap();

        assert_eq!(content.len(), 2);
        assert_eq!(content["Intro"], "About Intro.");
        assert_eq!(content["Usage"], "About Usage.");
    }

    #[test]
    fn prep_requires_outline() {
        let node = ContentNode::new("{item}");
        assert!(matches!(
            node.prep(&Context::new()),
            Err(NodeError::MissingKey(key)) if key == "outline"
        ));
    }

    #[tokio::test]
    async fn empty_outline_yields_empty_content() {
        let node = ContentNode::new("{item}");
        assert!(node.exec(&Vec::new()).await.unwrap().is_empty());
    }
}
