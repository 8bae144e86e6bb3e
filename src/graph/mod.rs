//! The graph store and its degree/connectivity facade.

pub use components::{connected_components, ComponentPartition, Connectedness};
pub use edge_list::EdgeListGraph;
pub use info::{Directedness, GraphInfo};

use crate::types::{EId, VId};

mod components;
mod edge_list;
mod info;

/// Which incident edges of a vertex to look at.
///
/// Undirected graphs treat every mode as `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborMode {
    Out,
    In,
    All,
}

pub trait Graph {
    fn is_directed(&self) -> bool;

    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;

    /// The `(from, to)` pair of an edge.
    fn endpoints(&self, eid: EId) -> (VId, VId);

    /// Edges incident on `vid`, in ascending edge id order.
    ///
    /// In `All` mode a self-loop is listed twice, so the length of the list is
    /// the degree of the vertex.
    fn incident_edges(&self, vid: VId, mode: NeighborMode) -> &[EId];

    fn degree(&self, vid: VId, mode: NeighborMode) -> usize {
        self.incident_edges(vid, mode).len()
    }

    /// The endpoint of `eid` that is not `vid`, or `vid` itself for a self-loop.
    fn other_endpoint(&self, eid: EId, vid: VId) -> VId {
        let (from, to) = self.endpoints(eid);
        if from == vid {
            to
        } else {
            from
        }
    }

    /// The degree of every vertex.
    fn degrees(&self, mode: NeighborMode) -> Vec<usize> {
        (0..self.num_vertices())
            .map(|vid| self.degree(vid, mode))
            .collect()
    }

    fn info(&self) -> GraphInfo {
        GraphInfo::new(self.num_vertices(), self.num_edges(), self.is_directed())
    }
}
