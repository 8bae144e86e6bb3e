//! Eulerian path and cycle detection and construction.

pub mod eulerian;
pub mod front_end;
pub mod graph;
pub mod types;
