use crate::types::VId;

#[derive(Debug, PartialEq, Default)]
pub struct Ast {
    directed: bool,
    num_vertices: Option<usize>,
    edges: Vec<(VId, VId)>,
}

impl Ast {
    pub fn new(directed: bool, num_vertices: Option<usize>, edges: Vec<(VId, VId)>) -> Self {
        Self {
            directed,
            num_vertices,
            edges,
        }
    }

    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    pub fn set_num_vertices(&mut self, num_vertices: Option<usize>) {
        self.num_vertices = num_vertices;
    }

    pub fn set_edges(&mut self, edges: Vec<(VId, VId)>) {
        self.edges = edges;
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The declared vertex count, if any.
    pub fn num_vertices(&self) -> Option<usize> {
        self.num_vertices
    }

    pub fn edges(&self) -> &[(VId, VId)] {
        &self.edges
    }

    /// The declared vertex count, or one past the largest endpoint.
    ///
    /// `None` if the implied count does not fit in a `usize`.
    pub fn vertex_count(&self) -> Option<usize> {
        match self.num_vertices {
            Some(n) => Some(n),
            None => self
                .edges
                .iter()
                .map(|&(src, dst)| src.max(dst).checked_add(1))
                .fold(Some(0), |acc, n| Some(acc?.max(n?))),
        }
    }
}
