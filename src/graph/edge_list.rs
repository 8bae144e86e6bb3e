use super::{Graph, NeighborMode};
use crate::types::{EId, VId};

struct GraphNode {
    out_edges: Vec<EId>,
    in_edges: Vec<EId>,
    all_edges: Vec<EId>,
}

impl GraphNode {
    fn new() -> GraphNode {
        GraphNode {
            out_edges: vec![],
            in_edges: vec![],
            all_edges: vec![],
        }
    }
}

/// An in-memory graph that keeps its edges in insertion order.
///
/// Edge ids are assigned consecutively from zero, so every incidence list is
/// sorted by edge id. Self-loops and parallel edges are ordinary edges.
pub struct EdgeListGraph {
    directed: bool,
    vertices: Vec<GraphNode>,
    edges: Vec<(VId, VId)>,
}

impl EdgeListGraph {
    /// Create a graph with `num_vertices` isolated vertices.
    pub fn new(num_vertices: usize, directed: bool) -> Self {
        Self {
            directed,
            vertices: (0..num_vertices).map(|_| GraphNode::new()).collect(),
            edges: vec![],
        }
    }

    /// Create a graph from `(from, to)` pairs.
    ///
    /// Returns `None` if an endpoint is not smaller than `num_vertices`.
    pub fn with_edges<E>(num_vertices: usize, directed: bool, edges: E) -> Option<Self>
    where
        E: IntoIterator<Item = (VId, VId)>,
    {
        let mut graph = Self::new(num_vertices, directed);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Some(graph)
    }

    pub fn add_vertex(&mut self) -> VId {
        self.vertices.push(GraphNode::new());
        self.vertices.len() - 1
    }

    pub fn add_vertices(&mut self, count: usize) {
        self.vertices.extend((0..count).map(|_| GraphNode::new()));
    }

    /// Add an edge and return its id, or `None` if an endpoint does not exist.
    pub fn add_edge(&mut self, from: VId, to: VId) -> Option<EId> {
        if from >= self.vertices.len() || to >= self.vertices.len() {
            return None;
        }
        let eid = self.edges.len();
        self.edges.push((from, to));
        self.vertices[from].out_edges.push(eid);
        self.vertices[to].in_edges.push(eid);
        self.vertices[from].all_edges.push(eid);
        self.vertices[to].all_edges.push(eid);
        Some(eid)
    }

    pub fn edges(&self) -> &[(VId, VId)] {
        &self.edges
    }
}

impl Graph for EdgeListGraph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn endpoints(&self, eid: EId) -> (VId, VId) {
        self.edges[eid]
    }

    fn incident_edges(&self, vid: VId, mode: NeighborMode) -> &[EId] {
        let node = &self.vertices[vid];
        match (self.directed, mode) {
            (true, NeighborMode::Out) => &node.out_edges,
            (true, NeighborMode::In) => &node.in_edges,
            _ => &node.all_edges,
        }
    }
}

impl std::fmt::Debug for EdgeListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EdgeListGraph {} {:?}", self.info(), self.edges)
    }
}
