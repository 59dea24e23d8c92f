//! Graph builder with efficient edge handling
//!
//! This module provides a mutable, undirected graph builder over sentence
//! indices. Edges are kept in an FxHashMap per node for O(1) updates while
//! the graph is assembled from a similarity matrix.

use crate::similarity::matrix::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `n` isolated nodes, ids `0..n`
    pub fn with_nodes(n: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); n],
        }
    }

    /// Append a node, returning its ID
    pub fn add_node(&mut self) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::default());
        id
    }

    /// Increment the edge weight between two nodes
    ///
    /// The edge is created if missing. Self-loops and unknown node IDs are
    /// ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || from as usize >= self.nodes.len() || to as usize >= self.nodes.len() {
            return;
        }

        // Add edge in both directions (undirected graph)
        *self.nodes[from as usize].edges.entry(to).or_insert(0.0) += weight;
        *self.nodes[to as usize].edges.entry(from).or_insert(0.0) += weight;
    }

    /// Build the sentence graph from a similarity matrix
    ///
    /// One node per row. Each pair `i < j` whose similarity is strictly above
    /// `threshold` becomes an edge weighted by that similarity; the diagonal
    /// is skipped.
    pub fn from_similarity(matrix: &SimilarityMatrix, threshold: f64) -> Self {
        let n = matrix.size();
        let mut builder = Self::with_nodes(n);

        for i in 0..n {
            let row = matrix.row(i);
            for (j, &weight) in row.iter().enumerate().skip(i + 1) {
                if weight > threshold {
                    builder.increment_edge(i as u32, j as u32, weight);
                }
            }
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
