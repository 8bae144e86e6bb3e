use super::{
    classifier::{classify, EulerianStatus},
    error::{Error, Result, TrailKind},
};
use crate::{
    graph::{Graph, NeighborMode},
    types::{EId, VId},
};
use log::{debug, error, warn};

/// An Eulerian trail.
///
/// `vertices` holds one more entry than `edges`: edge `edges[i]` leads from
/// `vertices[i]` to `vertices[i + 1]`. Both are empty for the trail of an
/// edgeless graph that has no start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    edges: Vec<EId>,
    vertices: Vec<VId>,
}

impl Trail {
    pub fn edges(&self) -> &[EId] {
        &self.edges
    }

    pub fn vertices(&self) -> &[VId] {
        &self.vertices
    }

    pub fn into_edges(self) -> Vec<EId> {
        self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the trail ends where it started.
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }
}

/// Walk every edge of `graph` exactly once, starting from `start`.
///
/// The trail is closed when `graph` has an Eulerian cycle. `start` must have
/// nonzero degree for a cycle; for a path it must be an odd-degree vertex
/// (undirected) or the vertex with one more outgoing than incoming edge
/// (directed).
pub fn construct<G: Graph>(graph: &G, start: VId) -> Result<Vec<EId>> {
    construct_trail(graph, start).map(Trail::into_edges)
}

/// Like [`construct`], but also returns the vertices walked.
pub fn construct_trail<G: Graph>(graph: &G, start: VId) -> Result<Trail> {
    let status = classify(graph);
    if !status.has_path() {
        warn!("no Eulerian trail in [{}]", graph.info());
        return Err(Error::NotEulerian(TrailKind::Path));
    }
    if !is_valid_start(graph, &status, start) {
        warn!("vertex {} cannot start a trail in [{}]", start, graph.info());
        return Err(Error::InvalidStart(start));
    }
    TrailState::new(graph, start).walk()
}

/// Find an Eulerian path, starting from the classifier's start vertex.
pub fn eulerian_path<G: Graph>(graph: &G) -> Result<Trail> {
    eulerian_trail(graph, TrailKind::Path)
}

/// Find an Eulerian cycle, starting from the classifier's start vertex.
pub fn eulerian_cycle<G: Graph>(graph: &G) -> Result<Trail> {
    eulerian_trail(graph, TrailKind::Cycle)
}

fn eulerian_trail<G: Graph>(graph: &G, kind: TrailKind) -> Result<Trail> {
    let status = classify(graph);
    if !status.admits(kind) {
        warn!("Eulerian {} not possible in [{}]", kind, graph.info());
        return Err(Error::NotEulerian(kind));
    }
    match status.start() {
        Some(start) => TrailState::new(graph, start).walk(),
        None => Ok(Trail {
            edges: vec![],
            vertices: vec![],
        }),
    }
}

fn is_valid_start<G: Graph>(graph: &G, status: &EulerianStatus, start: VId) -> bool {
    if start >= graph.num_vertices() {
        false
    } else if graph.num_edges() == 0 {
        true
    } else if status.has_cycle() {
        graph.degree(start, NeighborMode::All) > 0
    } else if graph.is_directed() {
        status.start() == Some(start)
    } else {
        graph.degree(start, NeighborMode::All) % 2 == 1
    }
}

/// Construction-time bookkeeping of the Hierholzer walk.
///
/// Directed graphs consume edges forwards only, so the remaining degree of a
/// vertex is its out-degree; undirected graphs count every incident edge.
struct TrailState<'g, G: Graph> {
    graph: &'g G,
    mode: NeighborMode,
    remaining: Vec<usize>,
    cursor: Vec<usize>,
    visited: Vec<bool>,
    current: VId,
    vertex_stack: Vec<VId>,
    edge_stack: Vec<EId>,
    res_vertices: Vec<VId>,
    res_edges: Vec<EId>,
}

impl<'g, G: Graph> TrailState<'g, G> {
    fn new(graph: &'g G, start: VId) -> Self {
        let mode = if graph.is_directed() {
            NeighborMode::Out
        } else {
            NeighborMode::All
        };
        let num_edges = graph.num_edges();
        Self {
            graph,
            mode,
            remaining: graph.degrees(mode),
            cursor: vec![0; graph.num_vertices()],
            visited: vec![false; num_edges],
            current: start,
            vertex_stack: vec![start],
            edge_stack: Vec::with_capacity(num_edges),
            res_vertices: Vec::with_capacity(num_edges + 1),
            res_edges: Vec::with_capacity(num_edges),
        }
    }

    fn walk(mut self) -> Result<Trail> {
        let start = self.current;
        while !self.vertex_stack.is_empty() {
            if self.remaining[self.current] > 0 {
                self.descend()?;
            } else {
                self.backtrack();
            }
        }
        if self.res_edges.len() != self.graph.num_edges() {
            return Err(self.inconsistency());
        }
        self.res_edges.reverse();
        self.res_vertices.reverse();
        debug!(
            "constructed trail of {} edges from vertex {}",
            self.res_edges.len(),
            start
        );
        Ok(Trail {
            edges: self.res_edges,
            vertices: self.res_vertices,
        })
    }

    fn descend(&mut self) -> Result<()> {
        let current = self.current;
        let eid = match self.next_unvisited(current) {
            Some(eid) => eid,
            None => return Err(self.inconsistency()),
        };
        self.visited[eid] = true;
        self.remaining[current] -= 1;
        let next = self.graph.other_endpoint(eid, current);
        if !self.graph.is_directed() {
            self.remaining[next] -= 1;
        }
        self.vertex_stack.push(current);
        self.edge_stack.push(eid);
        self.current = next;
        Ok(())
    }

    fn backtrack(&mut self) {
        self.res_vertices.push(self.current);
        if let Some(vid) = self.vertex_stack.pop() {
            self.current = vid;
        }
        if let Some(eid) = self.edge_stack.pop() {
            self.res_edges.push(eid);
        }
    }

    // The cursor only moves forwards: everything before it is visited.
    fn next_unvisited(&mut self, vid: VId) -> Option<EId> {
        let graph = self.graph;
        let incident = graph.incident_edges(vid, self.mode);
        while let Some(&eid) = incident.get(self.cursor[vid]) {
            self.cursor[vid] += 1;
            if !self.visited[eid] {
                return Some(eid);
            }
        }
        None
    }

    fn inconsistency(&self) -> Error {
        let (expected, found) = (
            self.graph.num_edges(),
            self.visited.iter().filter(|&&v| v).count(),
        );
        error!(
            "Eulerian walk used {} of {} edges in [{}]",
            found,
            expected,
            self.graph.info()
        );
        Error::InternalInconsistency { expected, found }
    }
}
