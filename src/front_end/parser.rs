use super::error::Result;
use crate::{front_end::Ast, types::VId};
use itertools::Itertools;
use pest::{iterators::Pair, Parser, Span};
use pest_derive::Parser;

pub type GraphRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct GraphParser;

/// The largest vertex count a description may declare or imply.
pub const MAX_VERTICES: usize = 1 << 24;

/// Parse a graph description.
///
/// Endpoints are checked against `(vertices N)`, or against `MAX_VERTICES`
/// when no count is declared, so that the error points at the offending edge.
pub fn parse(input: &str) -> Result<Ast> {
    let mut ast = Ast::default();
    for pair in GraphParser::parse(Rule::stat, input)? {
        match pair.as_rule() {
            Rule::directed => ast.set_directed(true),
            Rule::undirected => ast.set_directed(false),
            Rule::vertices_stat => {
                ast.set_num_vertices(Some(parse_vertices_stat(pair)?));
            }
            Rule::edges_stat => {
                ast.set_edges(parse_edges_stat(pair, ast.num_vertices())?);
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(ast)
}

fn custom_error(message: &str, span: Span) -> pest::error::Error<GraphRule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: String::from(message),
        },
        span,
    )
}

fn parse_int(pair: Pair<Rule>) -> Result<usize> {
    pair.as_str()
        .parse()
        .map_err(|_| custom_error("integer too large", pair.as_span()))
}

fn parse_vertices_stat(pair: Pair<Rule>) -> Result<usize> {
    let span = pair.as_span();
    let n = match pair.into_inner().next() {
        Some(int) => parse_int(int)?,
        None => unreachable!(),
    };
    if n > MAX_VERTICES {
        return Err(custom_error("too many vertices", span));
    }
    Ok(n)
}

fn parse_edges_stat(pair: Pair<Rule>, num_vertices: Option<usize>) -> Result<Vec<(VId, VId)>> {
    let mut edges = vec![];
    for edge in pair.into_inner() {
        let span = edge.as_span();
        let (src, dst) = match edge.into_inner().next_tuple() {
            Some((src, dst)) => (parse_int(src)?, parse_int(dst)?),
            None => unreachable!(),
        };
        let n = num_vertices.unwrap_or(MAX_VERTICES);
        if src >= n || dst >= n {
            return Err(custom_error("vertex out of range", span));
        }
        edges.push((src, dst));
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            parse(
                "\
(graph directed
  (vertices 4)
  (edges (0 1) (1 2) (2 3)))
"
            ),
            Ok(Ast::new(true, Some(4), vec![(0, 1), (1, 2), (2, 3)]))
        );
        assert_eq!(
            parse(
                "\
; a triangle with a loop
(graph undirected
  (edges (0 1) (1 2) (2 0) ; the triangle
         (1 1)))
"
            ),
            Ok(Ast::new(false, None, vec![(0, 1), (1, 2), (2, 0), (1, 1)]))
        );
    }

    #[test]
    fn test_parse_optional_sections() {
        assert_eq!(
            parse("(graph undirected)"),
            Ok(Ast::new(false, None, vec![]))
        );
        assert_eq!(
            parse("(graph directed (vertices 3))"),
            Ok(Ast::new(true, Some(3), vec![]))
        );
        assert_eq!(
            parse("(graph directed (edges))"),
            Ok(Ast::new(true, None, vec![]))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("(graph (edges (0 1)))").is_err());
        assert!(parse("(graph directed (edges (0 1)) (vertices 2))").is_err());
        assert!(parse("(graph directed (edges (0 1 2)))").is_err());
        assert!(parse("(graph directed (edges (0 -1)))").is_err());
        assert!(parse("(graph directed) (graph directed)").is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = parse("(graph directed (vertices 2) (edges (0 1) (1 2)))").unwrap_err();
        assert!(err.to_string().contains("vertex out of range"));
        let err = parse("(graph directed (edges (0 99999999999999999999999)))").unwrap_err();
        assert!(err.to_string().contains("integer too large"));
    }

    #[test]
    fn test_parse_vertex_limit() {
        let err = parse("(graph directed (edges (0 18446744073709551615)))").unwrap_err();
        assert!(err.to_string().contains("vertex out of range"));
        let err = parse(&format!("(graph directed (edges ({} 0)))", MAX_VERTICES)).unwrap_err();
        assert!(err.to_string().contains("vertex out of range"));
        let err = parse(&format!("(graph undirected (vertices {}))", MAX_VERTICES + 1)).unwrap_err();
        assert!(err.to_string().contains("too many vertices"));
        assert_eq!(
            parse(&format!("(graph directed (edges (0 {})))", MAX_VERTICES - 1))
                .unwrap()
                .vertex_count(),
            Some(MAX_VERTICES)
        );
    }
}
