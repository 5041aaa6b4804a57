//! In-memory content collections.
//!
//! One [`Collection`] per node type, each keeping insertion order plus an id
//! index. Ids must stay fixed once a node is inserted.

use super::node::{Node, NodeType};
use crate::pipeline::PipelineError;
use std::collections::HashMap;

/// All nodes of a single type.
#[derive(Debug)]
pub struct Collection {
    type_name: NodeType,
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl Collection {
    pub fn new(type_name: NodeType) -> Self {
        Self {
            type_name,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a node, rejecting ids already present in this collection.
    pub fn insert(&mut self, node: Node) -> Result<(), PipelineError> {
        if self.index.contains_key(&node.id) {
            return Err(PipelineError::DuplicateNode {
                type_name: self.type_name,
                id: node.id,
            });
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// All nodes in insertion order.
    pub fn data(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    pub fn get_node_by_id(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn get_node_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.index.get(id).map(|&i| &mut self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The content graph: blog posts, series and tags.
#[derive(Debug)]
pub struct ContentStore {
    posts: Collection,
    series: Collection,
    tags: Collection,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            posts: Collection::new(NodeType::BlogPost),
            series: Collection::new(NodeType::Series),
            tags: Collection::new(NodeType::Tag),
        }
    }

    /// Route a node into the collection of its type.
    pub fn insert(&mut self, node: Node) -> Result<(), PipelineError> {
        self.get_collection_mut(node.node_type()).insert(node)
    }

    pub fn get_collection(&self, type_name: NodeType) -> &Collection {
        match type_name {
            NodeType::BlogPost => &self.posts,
            NodeType::Series => &self.series,
            NodeType::Tag => &self.tags,
        }
    }

    pub fn get_collection_mut(&mut self, type_name: NodeType) -> &mut Collection {
        match type_name {
            NodeType::BlogPost => &mut self.posts,
            NodeType::Series => &mut self.series,
            NodeType::Tag => &mut self.tags,
        }
    }

    /// Borrow posts for reading while series and tags are written.
    pub fn split_for_aggregation(&mut self) -> (&Collection, &mut Collection, &mut Collection) {
        (&self.posts, &mut self.series, &mut self.tags)
    }
}
