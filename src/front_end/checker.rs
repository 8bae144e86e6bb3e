use super::{error::Result, parser::MAX_VERTICES, GraphRule};
use crate::{front_end::Ast, graph::EdgeListGraph};
use log::debug;

/// Turn a parsed description into a graph.
///
/// [`parse`](super::parse) already rejects out-of-range endpoints with their
/// span. The checks here guard hand-built `Ast`s, which carry no source text,
/// so the resulting error has no position.
pub fn build(ast: &Ast) -> Result<EdgeListGraph> {
    let num_vertices = ast
        .vertex_count()
        .filter(|&n| n <= MAX_VERTICES)
        .ok_or_else(graph_error)?;
    let graph = EdgeListGraph::with_edges(
        num_vertices,
        ast.is_directed(),
        ast.edges().iter().copied(),
    )
    .ok_or_else(graph_error)?;
    debug!(
        "built graph with {} vertices and {} edges",
        num_vertices,
        ast.edges().len()
    );
    Ok(graph)
}

fn graph_error() -> pest::error::Error<GraphRule> {
    pest::error::Error::new_from_pos(
        pest::error::ErrorVariant::CustomError {
            message: String::from("vertex out of range"),
        },
        pest::Position::from_start(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        front_end::parse,
        graph::{Graph, NeighborMode},
    };

    #[test]
    fn test_build() {
        let g = build(&parse("(graph undirected (vertices 5) (edges (0 1) (1 1)))").unwrap())
            .unwrap();
        assert!(!g.is_directed());
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.edges(), &[(0, 1), (1, 1)]);
        assert_eq!(g.degree(1, NeighborMode::All), 3);
    }

    #[test]
    fn test_build_implicit_vertices() {
        let g = build(&parse("(graph directed (edges (3 1) (0 2)))").unwrap()).unwrap();
        assert!(g.is_directed());
        assert_eq!(g.num_vertices(), 4);
        let g = build(&parse("(graph directed)").unwrap()).unwrap();
        assert_eq!(g.num_vertices(), 0);
    }

    #[test]
    fn test_build_out_of_range() {
        assert_eq!(
            build(&Ast::new(false, Some(2), vec![(0, 2)])).unwrap_err(),
            graph_error()
        );
    }

    #[test]
    fn test_build_huge_endpoints() {
        assert_eq!(
            build(&Ast::new(true, None, vec![(0, usize::MAX)])).unwrap_err(),
            graph_error()
        );
        assert_eq!(
            build(&Ast::new(true, None, vec![(MAX_VERTICES, 0)])).unwrap_err(),
            graph_error()
        );
        assert_eq!(
            build(&Ast::new(false, Some(usize::MAX), vec![])).unwrap_err(),
            graph_error()
        );
    }
}
