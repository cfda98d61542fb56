// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::backends::local::keys::{OUTLINE, TOPIC};
use crate::backends::local::ACTION_NEXT;
use crate::config::consts::TOPIC_PLACEHOLDER;
use crate::context::Context;
use crate::errors::NodeError;
use crate::traits::Node;

/// Outline node - expands the `topic` into one heading per section template
pub struct OutlineNode {
    sections: Vec<String>,
}

impl OutlineNode {
    /// `sections` are heading templates; `{topic}` is replaced by the topic.
    pub fn new(sections: Vec<String>) -> Self {
        Self { sections }
    }
}

#[async_trait]
impl Node for OutlineNode {
    type Prep = String;
    type Exec = Vec<String>;

    fn name(&self) -> &str {
        "outline"
    }

    fn prep(&self, ctx: &Context) -> Result<String, NodeError> {
        ctx.fetch(&TOPIC)?
            .ok_or_else(|| NodeError::missing(TOPIC.name()))
    }

    async fn exec(&self, topic: &String) -> Result<Vec<String>, NodeError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(NodeError::invalid("topic is empty"));
        }
        if self.sections.is_empty() {
            return Err(NodeError::invalid("no outline sections configured"));
        }

        Ok(self
            .sections
            .iter()
            .map(|section| section.replace(TOPIC_PLACEHOLDER, topic))
            .collect())
    }

    fn post(&self, ctx: &Context, _topic: &String, outline: &Vec<String>) -> Result<String, NodeError> {
        ctx.put(&OUTLINE, outline.clone())?;
        Ok(ACTION_NEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<String> {
        vec![
            "Introduction to {topic}".to_string(),
            "Working with {topic}".to_string(),
            "Beyond {topic}".to_string(),
        ]
    }

    #[tokio::test]
    async fn expands_every_section_for_the_topic() {
        let node = OutlineNode::new(sections());
        let outline = node.exec(&"  lifetimes ".to_string()).await.unwrap();
        assert_eq!(
            outline,
            vec![
                "Introduction to lifetimes",
                "Working with lifetimes",
                "Beyond lifetimes"
            ]
        );
    }

    #[test]
    fn prep_requires_topic() {
        let node = OutlineNode::new(sections());
        let err = node.prep(&Context::new()).unwrap_err();
        assert!(matches!(err, NodeError::MissingKey(key) if key == "topic"));
    }

    #[test]
    fn prep_rejects_topic_of_wrong_type() {
        let node = OutlineNode::new(sections());
        let ctx = Context::new().with_value("topic", 12u32);
        assert!(matches!(node.prep(&ctx), Err(NodeError::Context(_))));
    }

    #[tokio::test]
    async fn blank_topic_is_invalid() {
        let node = OutlineNode::new(sections());
        assert!(matches!(
            node.exec(&"   ".to_string()).await,
            Err(NodeError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn empty_section_list_is_invalid() {
        let node = OutlineNode::new(vec![]);
        assert!(node.exec(&"rust".to_string()).await.is_err());
    }

    #[test]
    fn post_stores_outline_and_continues() {
        let node = OutlineNode::new(sections());
        let ctx = Context::new();
        let outline = vec!["a".to_string()];

        let action = node.post(&ctx, &"rust".to_string(), &outline).unwrap();

        assert_eq!(action, ACTION_NEXT);
        assert_eq!(ctx.fetch(&OUTLINE).unwrap(), Some(outline));
    }
}
