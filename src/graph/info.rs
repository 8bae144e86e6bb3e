use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Directedness {
    #[display(fmt = "directed")]
    Directed,
    #[display(fmt = "undirected")]
    Undirected,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{} {} {}", num_vertices, num_edges, directedness)]
pub struct GraphInfo {
    num_vertices: usize,
    num_edges: usize,
    directedness: Directedness,
}

impl GraphInfo {
    pub fn new(num_vertices: usize, num_edges: usize, directed: bool) -> Self {
        Self {
            num_vertices,
            num_edges,
            directedness: if directed {
                Directedness::Directed
            } else {
                Directedness::Undirected
            },
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_directed(&self) -> bool {
        self.directedness == Directedness::Directed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(GraphInfo::new(4, 3, true).to_string(), "4 3 directed");
        assert_eq!(GraphInfo::new(0, 0, false).to_string(), "0 0 undirected");
    }
}
