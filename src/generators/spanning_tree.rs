use std::collections::HashSet;

use super::graph::{Graph, Node, NodeId, Weight};
use crate::error::{MazeError, Result};

/// An edge from the grown tree to a node that may not be in it yet.
///
/// Ordered by weight, then source id, then destination id. Field order matters:
/// the derived `Ord` compares fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierCandidate {
    pub weight: Weight,
    pub source: NodeId,
    pub destination: NodeId,
}

/// Candidate list of the growing tree.
///
/// The whole list is re-sorted before every pop. Which maze a given weight
/// assignment produces depends on this ordering, so a heap may replace it only
/// if it pops candidates in exactly the same order.
#[derive(Debug, Default)]
pub struct Frontier {
    candidates: Vec<FrontierCandidate>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues every outgoing connection of `node`.
    pub fn extend_from(&mut self, node: &Node) {
        self.candidates
            .extend(node.connections().map(|c| FrontierCandidate {
                weight: c.weight,
                source: node.id(),
                destination: c.to,
            }));
    }

    pub fn pop_lowest(&mut self) -> Option<FrontierCandidate> {
        if self.candidates.is_empty() {
            return None;
        }
        self.candidates.sort();
        Some(self.candidates.remove(0))
    }
}

/// Grows a minimum spanning tree from node 0, always taking the lowest frontier candidate.
///
/// Candidates leading back into the tree are dropped, which is enough to reject
/// cycles since their source is always already in the tree. Every node reachable
/// from node 0 ends up in the returned tree, with each edge stored on both ends.
pub fn build_spanning_tree(graph: &Graph) -> Result<Graph> {
    if graph.is_empty() {
        return Err(MazeError::EmptyGraph);
    }

    let start: NodeId = 0;
    let mut tree = Graph::new();
    let mut visited = HashSet::from([start]);
    let mut frontier = Frontier::new();
    frontier.extend_from(&graph.node_or_default(start));

    while let Some(candidate) = frontier.pop_lowest() {
        if !visited.insert(candidate.destination) {
            continue;
        }
        tree.connect(candidate.source, candidate.destination, candidate.weight);
        frontier.extend_from(&graph.node_or_default(candidate.destination));
    }

    tracing::debug!(
        nodes = tree.len(),
        edges = tree.edge_count(),
        "built spanning tree"
    );
    Ok(tree)
}
