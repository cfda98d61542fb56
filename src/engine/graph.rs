// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Node storage and the per-node successor maps.
//!
//! Nodes are owned by a [`NodeGraph`] arena and addressed by [`NodeId`].
//! Each slot carries its own [`Successors`] map from action label to the
//! next node. Several nodes may share a successor and cycles are allowed;
//! nothing here checks reachability or termination.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::FlowError;
use crate::traits::{DynNode, Node};

static NEXT_GRAPH: AtomicU64 = AtomicU64::new(0);

/// Handle to a node inside the [`NodeGraph`] that created it.
///
/// The handle remembers its graph, so an id is never resolved against a
/// different graph even when the slot index exists there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    graph: u64,
    index: usize,
}

impl NodeId {
    /// Position of the node within its graph.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.index)
    }
}

/// Action label to next-node mapping for a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Successors(HashMap<String, NodeId>);

impl Successors {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Map `label` to `next`, returning the node it previously mapped to.
    pub fn register(&mut self, label: impl Into<String>, next: NodeId) -> Option<NodeId> {
        self.0.insert(label.into(), next)
    }

    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.0.get(label).copied()
    }

    /// Registered labels in sorted order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.0.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct NodeSlot {
    node: Box<dyn DynNode>,
    successors: Successors,
}

/// Arena owning every node of a pipeline and the edges between them.
///
/// Build the graph first, then hand a shared borrow to a
/// [`Flow`](crate::engine::Flow); the borrow keeps the graph immutable for as
/// long as any traversal may be running.
///
/// ```
/// # use async_trait::async_trait;
/// # use nodeflow::context::Context;
/// # use nodeflow::errors::NodeError;
/// # use nodeflow::traits::Node;
/// use nodeflow::engine::NodeGraph;
/// # struct Step(&'static str);
/// # #[async_trait]
/// # impl Node for Step {
/// #     type Prep = ();
/// #     type Exec = ();
/// #     fn name(&self) -> &str { self.0 }
/// #     fn prep(&self, _: &Context) -> Result<(), NodeError> { Ok(()) }
/// #     async fn exec(&self, _: &()) -> Result<(), NodeError> { Ok(()) }
/// #     fn post(&self, _: &Context, _: &(), _: &()) -> Result<String, NodeError> { Ok("x".into()) }
/// # }
///
/// let mut graph = NodeGraph::new();
/// let a = graph.add_node(Step("a"));
/// let b = graph.add_node(Step("b"));
/// graph.connect(a, "x", b).unwrap();
///
/// assert_eq!(graph.successor(a, "x"), Some(b));
/// assert_eq!(graph.successor(b, "x"), None);
/// ```
pub struct NodeGraph {
    id: u64,
    slots: Vec<NodeSlot>,
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self {
            id: NEXT_GRAPH.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
        }
    }
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn id_at(&self, index: usize) -> NodeId {
        NodeId {
            graph: self.id,
            index,
        }
    }

    fn slot(&self, id: NodeId) -> Option<&NodeSlot> {
        if id.graph == self.id {
            self.slots.get(id.index)
        } else {
            None
        }
    }

    pub fn add_node<N: Node + 'static>(&mut self, node: N) -> NodeId {
        let id = self.id_at(self.slots.len());
        self.slots.push(NodeSlot {
            node: Box::new(node),
            successors: Successors::new(),
        });
        id
    }

    /// Route action `label` returned by `from` to `to`, replacing any
    /// previous target for that label.
    pub fn connect(
        &mut self,
        from: NodeId,
        label: impl Into<String>,
        to: NodeId,
    ) -> Result<Option<NodeId>, FlowError> {
        if !self.contains(to) {
            return Err(FlowError::UnknownNode(to));
        }
        if !self.contains(from) {
            return Err(FlowError::UnknownNode(from));
        }
        Ok(self.slots[from.index].successors.register(label, to))
    }

    pub fn successor(&self, from: NodeId, label: &str) -> Option<NodeId> {
        self.slot(from).and_then(|slot| slot.successors.get(label))
    }

    pub fn successors(&self, id: NodeId) -> Option<&Successors> {
        self.slot(id).map(|slot| &slot.successors)
    }

    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.slot(id).map(|slot| slot.node.node_name())
    }

    /// Whether `id` was handed out by this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.slots.len()).map(|index| self.id_at(index))
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&dyn DynNode> {
        self.slot(id).map(|slot| slot.node.as_ref())
    }
}

impl fmt::Debug for NodeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (index, slot) in self.slots.iter().enumerate() {
            map.entry(
                &format_args!("{} ({})", self.id_at(index), slot.node.node_name()),
                &slot.successors,
            );
        }
        map.finish()
    }
}
