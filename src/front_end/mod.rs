//! The graph description language.
//!
//! ```text
//! (graph directed
//!   (vertices 4)
//!   (edges (0 1) (1 2) (2 3)))
//! ```

pub use ast::Ast;
pub use checker::build;
pub use parser::{parse, GraphRule, MAX_VERTICES};

pub mod error;

mod ast;
mod checker;
mod parser;

use crate::graph::EdgeListGraph;
use std::path::Path;

/// Read, parse and build the graph described in `path`.
pub fn read_graph<P: AsRef<Path>>(path: P) -> std::result::Result<EdgeListGraph, error::ReadError> {
    let input = std::fs::read_to_string(path)?;
    Ok(build(&parse(&input)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use std::io::Write;

    #[test]
    fn test_read_graph() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(graph directed (edges (0 1) (1 2) (2 0)))").unwrap();
        let g = read_graph(file.path()).unwrap();
        assert_eq!(g.num_edges(), 3);
        assert!(g.is_directed());
    }

    #[test]
    fn test_read_graph_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_graph(dir.path().join("missing")),
            Err(error::ReadError::Io(_))
        ));
        let path = dir.path().join("bad");
        std::fs::write(&path, "(graph sideways)").unwrap();
        assert!(matches!(read_graph(&path), Err(error::ReadError::Parse(_))));
    }
}
