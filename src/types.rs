//! Various types related to Eulerian trails.

/// The vertex id type.
pub type VId = usize;

/// The edge id type.
pub type EId = usize;
