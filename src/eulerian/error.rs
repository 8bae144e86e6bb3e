//! Error management.

use crate::types::VId;
use derive_more::Display;

/// The kind of trail a caller asked for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailKind {
    #[display(fmt = "path")]
    Path,
    #[display(fmt = "cycle")]
    Cycle,
}

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    #[display(fmt = "graph has no Eulerian {}", _0)]
    NotEulerian(TrailKind),
    #[display(fmt = "vertex {} cannot start an Eulerian trail", _0)]
    InvalidStart(VId),
    #[display(
        fmt = "trail covers {} of {} edges; classification and construction disagree",
        found,
        expected
    )]
    InternalInconsistency { expected: usize, found: usize },
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::NotEulerian(TrailKind::Cycle).to_string(),
            "graph has no Eulerian cycle"
        );
        assert_eq!(
            Error::InvalidStart(3).to_string(),
            "vertex 3 cannot start an Eulerian trail"
        );
        assert_eq!(
            Error::InternalInconsistency {
                expected: 4,
                found: 3
            }
            .to_string(),
            "trail covers 3 of 4 edges; classification and construction disagree"
        );
    }
}
