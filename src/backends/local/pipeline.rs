// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::keys::TOPIC;
use crate::backends::local::{ContentNode, DocumentNode, OutlineNode, ACTION_NEXT};
use crate::config::PipelineConfig;
use crate::context::Context;
use crate::engine::{Flow, NodeGraph, NodeId};
use crate::errors::FlowError;

/// The outline → content → document graph, built from configuration.
///
/// ```text
/// outline --x--> content --x--> document --y--> (end)
/// ```
///
/// # Examples
///
/// ```
/// use nodeflow::backends::local::keys::DOCUMENT;
/// use nodeflow::backends::local::DocumentPipeline;
/// use nodeflow::config::PipelineConfig;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = DocumentPipeline::from_config(&PipelineConfig::default())?;
/// let ctx = pipeline.context();
///
/// let report = pipeline.flow().run(&ctx).await?;
///
/// assert_eq!(report.steps(), 3);
/// assert!(ctx.fetch(&DOCUMENT)?.unwrap().starts_with("## "));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DocumentPipeline {
    graph: NodeGraph,
    start: NodeId,
    topic: String,
}

impl DocumentPipeline {
    pub fn from_config(cfg: &PipelineConfig) -> Result<Self, FlowError> {
        let mut graph = NodeGraph::new();
        let outline = graph.add_node(OutlineNode::new(cfg.sections.clone()));
        let content = graph.add_node(ContentNode::new(cfg.content_template.clone()));
        let document = graph.add_node(DocumentNode::new());

        graph.connect(outline, ACTION_NEXT, content)?;
        graph.connect(content, ACTION_NEXT, document)?;

        Ok(Self {
            graph,
            start: outline,
            topic: cfg.topic.clone(),
        })
    }

    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    pub fn flow(&self) -> Flow<'_> {
        Flow::new(&self.graph, self.start)
    }

    /// A fresh context seeded with the configured topic.
    pub fn context(&self) -> Context {
        Context::new().with_value(TOPIC.name(), self.topic.clone())
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::ACTION_DONE;

    #[test]
    fn wires_three_nodes_in_a_line() {
        let pipeline = DocumentPipeline::from_config(&PipelineConfig::default()).unwrap();
        let graph = pipeline.graph();
        let ids: Vec<NodeId> = graph.ids().collect();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.node_name(ids[0]), Some("outline"));
        assert_eq!(graph.successor(ids[0], ACTION_NEXT), Some(ids[1]));
        assert_eq!(graph.successor(ids[1], ACTION_NEXT), Some(ids[2]));
        assert_eq!(graph.successor(ids[2], ACTION_DONE), None);
        assert_eq!(pipeline.flow().start(), Some(ids[0]));
    }

    #[test]
    fn context_is_seeded_with_topic() {
        let cfg = PipelineConfig {
            topic: "borrowing".to_string(),
            ..PipelineConfig::default()
        };
        let pipeline = DocumentPipeline::from_config(&cfg).unwrap();

        let ctx = pipeline.context();
        assert_eq!(ctx.fetch(&TOPIC).unwrap(), Some("borrowing".to_string()));
        assert_eq!(ctx.len(), 1);
    }
}
