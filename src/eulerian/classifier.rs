use crate::{
    graph::{connected_components, Connectedness, Graph, NeighborMode},
    types::VId,
};
use log::debug;

use super::error::TrailKind;

/// Whether a graph has an Eulerian path and/or cycle, and where to start one.
///
/// `has_cycle` implies `has_path`, and `start` is only ever set alongside
/// `has_path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EulerianStatus {
    has_path: bool,
    has_cycle: bool,
    start: Option<VId>,
}

impl EulerianStatus {
    pub fn has_path(&self) -> bool {
        self.has_path
    }

    pub fn has_cycle(&self) -> bool {
        self.has_cycle
    }

    /// The vertex a trail starts from; `None` on rejection or without edges.
    pub fn start(&self) -> Option<VId> {
        self.start
    }

    pub fn admits(&self, kind: TrailKind) -> bool {
        match kind {
            TrailKind::Path => self.has_path,
            TrailKind::Cycle => self.has_cycle,
        }
    }
}

// private methods
impl EulerianStatus {
    fn rejected() -> Self {
        Self {
            has_path: false,
            has_cycle: false,
            start: None,
        }
    }

    fn path(start: VId) -> Self {
        Self {
            has_path: true,
            has_cycle: false,
            start: Some(start),
        }
    }

    fn cycle(start: Option<VId>) -> Self {
        Self {
            has_path: true,
            has_cycle: true,
            start,
        }
    }
}

impl std::fmt::Display for EulerianStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", self.has_path, self.has_cycle)?;
        match self.start {
            Some(start) => write!(f, "{}", start),
            None => write!(f, "-"),
        }
    }
}

/// Decide whether `graph` has an Eulerian path and/or cycle.
pub fn classify<G: Graph>(graph: &G) -> EulerianStatus {
    let status = if graph.num_edges() == 0 || graph.num_vertices() <= 1 {
        EulerianStatus::cycle(first_non_isolated(graph))
    } else if graph.is_directed() {
        classify_directed(graph)
    } else {
        classify_undirected(graph)
    };
    debug!("classified [{}]: {}", graph.info(), status);
    status
}

fn first_non_isolated<G: Graph>(graph: &G) -> Option<VId> {
    (0..graph.num_vertices()).find(|&vid| graph.degree(vid, NeighborMode::All) > 0)
}

fn classify_undirected<G: Graph>(graph: &G) -> EulerianStatus {
    if !connected_components(graph, Connectedness::Weak).is_connected_ignoring_isolated(graph) {
        return EulerianStatus::rejected();
    }
    let odd: Vec<VId> = graph
        .degrees(NeighborMode::All)
        .into_iter()
        .enumerate()
        .filter(|&(_, deg)| deg % 2 == 1)
        .map(|(vid, _)| vid)
        .collect();
    match odd.len() {
        0 => EulerianStatus::cycle(first_non_isolated(graph)),
        2 => EulerianStatus::path(odd[0]),
        _ => EulerianStatus::rejected(),
    }
}

fn classify_directed<G: Graph>(graph: &G) -> EulerianStatus {
    let (mut source, mut sink) = (None, None);
    for vid in 0..graph.num_vertices() {
        let deficit = graph.degree(vid, NeighborMode::Out) as isize
            - graph.degree(vid, NeighborMode::In) as isize;
        match deficit {
            0 => {}
            1 if source.is_none() => source = Some(vid),
            -1 if sink.is_none() => sink = Some(vid),
            _ => return EulerianStatus::rejected(),
        }
    }
    match (source, sink) {
        (None, None) => {
            if connected_components(graph, Connectedness::Strong)
                .is_connected_ignoring_isolated(graph)
            {
                EulerianStatus::cycle(first_non_isolated(graph))
            } else {
                EulerianStatus::rejected()
            }
        }
        (Some(source), Some(_)) => {
            if connected_components(graph, Connectedness::Weak)
                .is_connected_ignoring_isolated(graph)
            {
                EulerianStatus::path(source)
            } else {
                EulerianStatus::rejected()
            }
        }
        _ => EulerianStatus::rejected(),
    }
}
