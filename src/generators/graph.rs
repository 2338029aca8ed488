use std::collections::BTreeMap;

use rand::Rng;

pub type NodeId = usize;
pub type Weight = u8;

/// Outgoing link from a node to one of its grid neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub to: NodeId,
    pub weight: Weight,
}

/// A logical cell and its outgoing connections, keyed by neighbor id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    connections: BTreeMap<NodeId, Connection>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Node {
            id,
            connections: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn connect(&mut self, to: NodeId, weight: Weight) {
        self.connections.insert(to, Connection { to, weight });
    }

    pub fn weight_to(&self, to: NodeId) -> Option<Weight> {
        self.connections.get(&to).map(|c| c.weight)
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }
}

/// Adjacency-map graph over logical cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// The node stored under `id`, or a fresh unconnected node if there is none.
    /// Never inserts: use [`Graph::insert`] to store the result.
    pub fn node_or_default(&self, id: NodeId) -> Node {
        self.nodes.get(&id).cloned().unwrap_or_else(|| Node::new(id))
    }

    pub fn insert(&mut self, node: Node) {
        self.nodes.insert(node.id, node);
    }

    /// Adds the connection `a <-> b` to both endpoints, creating them as needed.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: Weight) {
        self.nodes.entry(a).or_insert_with(|| Node::new(a)).connect(b, weight);
        self.nodes.entry(b).or_insert_with(|| Node::new(b)).connect(a, weight);
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of undirected edges, counting each mirrored pair once.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum::<usize>() / 2
    }
}

/// Id of the logical cell at `(row, column)` in a grid `inner_width` cells wide.
pub fn node_id(row: usize, column: usize, inner_width: usize) -> NodeId {
    row * inner_width + column
}

/// Builds the weighted grid graph over an `inner_height × inner_width` logical grid.
///
/// Each cell is connected to every in-range compass neighbor. A connection to a
/// neighbor that was already built reuses the weight stored on that neighbor, so
/// both sides of an edge always agree. Fresh weights are drawn from `{0, 1}`.
pub fn build_weighted_graph<R: Rng>(
    inner_height: usize,
    inner_width: usize,
    rng: &mut R,
) -> Graph {
    let mut graph = Graph::new();

    for row in 0..inner_height {
        for column in 0..inner_width {
            let id = node_id(row, column, inner_width);
            let mut node = Node::new(id);

            let neighbors = [
                // North
                row.checked_sub(1).map(|r| node_id(r, column, inner_width)),
                // West
                column.checked_sub(1).map(|c| node_id(row, c, inner_width)),
                // South
                (row + 1 < inner_height).then(|| node_id(row + 1, column, inner_width)),
                // East
                (column + 1 < inner_width).then(|| node_id(row, column + 1, inner_width)),
            ];

            for neighbor in neighbors.into_iter().flatten() {
                let weight = graph
                    .get(neighbor)
                    .and_then(|n| n.weight_to(id))
                    .unwrap_or_else(|| rng.random_range(0..=1));
                node.connect(neighbor, weight);
            }

            graph.insert(node);
        }
    }

    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "built weighted graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_node_or_default_does_not_insert() {
        let graph = Graph::new();
        let node = graph.node_or_default(7);
        assert_eq!(node.id(), 7);
        assert_eq!(node.degree(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_every_cell_links_to_all_neighbors() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = build_weighted_graph(3, 4, &mut rng);
        assert_eq!(graph.len(), 12);
        // corners have 2 neighbors, edges 3, interior 4
        assert_eq!(graph.get(0).unwrap().degree(), 2);
        assert_eq!(graph.get(1).unwrap().degree(), 3);
        assert_eq!(graph.get(5).unwrap().degree(), 4);
        assert_eq!(graph.get(11).unwrap().degree(), 2);
        // 3 rows of 3 horizontal edges + 2 rows of 4 vertical edges
        assert_eq!(graph.edge_count(), 17);
    }

    #[test]
    fn test_weights_are_binary() {
        let mut rng = StdRng::seed_from_u64(9);
        let graph = build_weighted_graph(6, 6, &mut rng);
        assert!(
            graph
                .nodes()
                .flat_map(Node::connections)
                .all(|c| c.weight <= 1)
        );
    }

    proptest! {
        #[test]
        fn prop_weights_are_symmetric(seed: u64, h in 2usize..12, w in 2usize..12) {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = build_weighted_graph(h, w, &mut rng);
            for node in graph.nodes() {
                for c in node.connections() {
                    let back = graph.get(c.to).and_then(|n| n.weight_to(node.id()));
                    prop_assert_eq!(back, Some(c.weight));
                }
            }
        }
    }
}
