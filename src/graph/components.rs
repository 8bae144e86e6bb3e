use super::{Graph, NeighborMode};
use crate::types::VId;
use itertools::Itertools;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connectedness {
    /// Reachability ignoring edge direction.
    Weak,
    /// Mutual reachability respecting edge direction.
    Strong,
}

/// Vertex to component id mapping together with the component sizes.
///
/// Component ids are dense, starting from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPartition {
    membership: Vec<usize>,
    sizes: Vec<usize>,
}

impl ComponentPartition {
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    pub fn membership(&self, vid: VId) -> usize {
        self.membership[vid]
    }

    pub fn size(&self, component: usize) -> usize {
        self.sizes[component]
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Components that contain at least one edge, in ascending id order.
    ///
    /// A vertex whose only edges are self-loops forms a non-trivial singleton.
    pub fn non_trivial<G: Graph>(&self, graph: &G) -> Vec<usize> {
        (0..graph.num_vertices())
            .filter(|&vid| graph.degree(vid, NeighborMode::All) > 0)
            .map(|vid| self.membership[vid])
            .sorted()
            .dedup()
            .collect()
    }

    /// Whether all edges of `graph` live in a single component.
    pub fn is_connected_ignoring_isolated<G: Graph>(&self, graph: &G) -> bool {
        self.non_trivial(graph).len() <= 1
    }
}

/// Partition the vertices of `graph` for the given connectivity.
///
/// For undirected graphs both modes give the same partition.
pub fn connected_components<G: Graph>(graph: &G, mode: Connectedness) -> ComponentPartition {
    if mode == Connectedness::Strong && graph.is_directed() {
        strong_components(graph)
    } else {
        weak_components(graph)
    }
}

const UNASSIGNED: usize = usize::MAX;

fn weak_components<G: Graph>(graph: &G) -> ComponentPartition {
    let n = graph.num_vertices();
    let mut membership = vec![UNASSIGNED; n];
    let mut sizes = vec![];
    let mut queue = VecDeque::new();
    for root in 0..n {
        if membership[root] != UNASSIGNED {
            continue;
        }
        let id = sizes.len();
        let mut size = 1;
        membership[root] = id;
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            for &eid in graph.incident_edges(u, NeighborMode::All) {
                let v = graph.other_endpoint(eid, u);
                if membership[v] == UNASSIGNED {
                    membership[v] = id;
                    size += 1;
                    queue.push_back(v);
                }
            }
        }
        sizes.push(size);
    }
    ComponentPartition { membership, sizes }
}

// Kosaraju: finishing order on the graph, then sweep the reversed graph.
fn strong_components<G: Graph>(graph: &G) -> ComponentPartition {
    let n = graph.num_vertices();
    let mut finished = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    for root in 0..n {
        if visited[root] {
            continue;
        }
        let mut dfs_stack = vec![(root, false)];
        while let Some((u, fin)) = dfs_stack.pop() {
            if fin {
                finished.push(u);
            } else if !visited[u] {
                visited[u] = true;
                dfs_stack.push((u, true));
                for &eid in graph.incident_edges(u, NeighborMode::Out).iter().rev() {
                    let (_, v) = graph.endpoints(eid);
                    if !visited[v] {
                        dfs_stack.push((v, false));
                    }
                }
            }
        }
    }

    let mut membership = vec![UNASSIGNED; n];
    let mut sizes = vec![];
    while let Some(root) = finished.pop() {
        if membership[root] != UNASSIGNED {
            continue;
        }
        let id = sizes.len();
        let mut size = 1;
        membership[root] = id;
        let mut dfs_stack = vec![root];
        while let Some(u) = dfs_stack.pop() {
            for &eid in graph.incident_edges(u, NeighborMode::In) {
                let (v, _) = graph.endpoints(eid);
                if membership[v] == UNASSIGNED {
                    membership[v] = id;
                    size += 1;
                    dfs_stack.push(v);
                }
            }
        }
        sizes.push(size);
    }
    ComponentPartition { membership, sizes }
}
