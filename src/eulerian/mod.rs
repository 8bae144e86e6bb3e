//! Eulerian path and cycle classification and construction.

pub use classifier::{classify, EulerianStatus};
pub use error::{Error, Result, TrailKind};
pub use trail::{construct, construct_trail, eulerian_cycle, eulerian_path, Trail};

pub mod error;

mod classifier;
mod trail;

use crate::graph::Graph;

/// Alias of [`classify`].
pub fn is_eulerian<G: Graph>(graph: &G) -> EulerianStatus {
    classify(graph)
}
