pub mod edge_list {
    use std::str::{from_utf8, FromStr};

    use tracing::debug;

    use crate::error::{GraphError, ParseError};
    use crate::graph::jagged::Edge;

    pub trait InputStream {
        /// Next whitespace-delimited token, or `None` once the input is exhausted.
        fn token(&mut self) -> Option<&[u8]>;

        fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
            let token = self.token().ok_or(ParseError::UnexpectedEof { expected })?;
            from_utf8(token)
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| ParseError::InvalidToken {
                    expected,
                    token: String::from_utf8_lossy(token).into_owned(),
                })
        }
    }

    // cheap whitespace check, treats every control byte as a separator
    #[inline]
    fn is_whitespace(c: u8) -> bool {
        c <= b' '
    }

    impl InputStream for &[u8] {
        fn token(&mut self) -> Option<&[u8]> {
            let i = self.iter().position(|&c| !is_whitespace(c))?;
            *self = &self[i..];
            let i = self
                .iter()
                .position(|&c| is_whitespace(c))
                .unwrap_or(self.len());
            let (token, rest) = self.split_at(i);
            *self = rest;
            Some(token)
        }
    }

    /// A graph as read from text, before validation against the vertex range.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct EdgeList {
        pub num_vertices: usize,
        pub edges: Vec<Edge>,
    }

    fn count(value: i64, negative: fn(i64) -> GraphError) -> Result<usize, ParseError> {
        usize::try_from(value).map_err(|_| negative(value).into())
    }

    fn endpoint(edge: usize, vertex: i64, num_vertices: usize) -> Result<usize, ParseError> {
        usize::try_from(vertex).map_err(|_| {
            GraphError::VertexOutOfRange {
                edge,
                vertex: i128::from(vertex),
                num_vertices,
            }
            .into()
        })
    }

    /// Reads `N M` followed by `M` triples `u v w`.
    ///
    /// Line breaks carry no meaning and tokens after the last edge are ignored.
    /// Negative counts and negative endpoints are reported as invalid input;
    /// the upper bound of endpoints is checked by [`Graph::from_edges`].
    ///
    /// [`Graph::from_edges`]: crate::Graph::from_edges
    pub fn read_edge_list(mut input: &[u8]) -> Result<EdgeList, ParseError> {
        let num_vertices = count(input.value("vertex count")?, GraphError::NegativeVertexCount)?;
        let num_edges = count(input.value("edge count")?, GraphError::NegativeEdgeCount)?;

        let mut edges = Vec::with_capacity(num_edges.min(input.len() / 6 + 1));
        for i in 0..num_edges {
            let u = endpoint(i, input.value("edge endpoint")?, num_vertices)?;
            let v = endpoint(i, input.value("edge endpoint")?, num_vertices)?;
            let w: i32 = input.value("edge weight")?;
            edges.push((u, v, w));
        }
        debug!(num_vertices, num_edges, "read edge list");

        Ok(EdgeList {
            num_vertices,
            edges,
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn tokens() {
            let mut input: &[u8] = b"  3\t-4\r\n\n x ";
            assert_eq!(input.token(), Some(&b"3"[..]));
            assert_eq!(input.value::<i32>("number"), Ok(-4));
            assert_eq!(
                input.value::<i32>("number"),
                Err(ParseError::InvalidToken {
                    expected: "number",
                    token: "x".into(),
                })
            );
            assert_eq!(input.token(), None);
            assert_eq!(
                input.value::<i32>("number"),
                Err(ParseError::UnexpectedEof { expected: "number" })
            );
        }

        #[test]
        fn reads_graph() {
            let list = read_edge_list(b"3 3\n1 2 1\n2 3 2\n1 3 -3\n").unwrap();
            assert_eq!(list.num_vertices, 3);
            assert_eq!(list.edges, [(1, 2, 1), (2, 3, 2), (1, 3, -3)]);
        }

        #[test]
        fn ignores_line_layout_and_trailing_tokens() {
            let list = read_edge_list(b"2 1 1\n2 7 extra").unwrap();
            assert_eq!(list.edges, [(1, 2, 7)]);
        }

        #[test]
        fn empty_graph() {
            let list = read_edge_list(b"0 0").unwrap();
            assert_eq!(list.num_vertices, 0);
            assert!(list.edges.is_empty());
        }

        #[test]
        fn truncated_input() {
            assert_eq!(
                read_edge_list(b""),
                Err(ParseError::UnexpectedEof {
                    expected: "vertex count"
                })
            );
            assert_eq!(
                read_edge_list(b"3 2\n1 2 5\n2 3"),
                Err(ParseError::UnexpectedEof {
                    expected: "edge weight"
                })
            );
        }

        #[test]
        fn negative_counts_and_endpoints() {
            assert_eq!(
                read_edge_list(b"-1 0"),
                Err(ParseError::from(GraphError::NegativeVertexCount(-1)))
            );
            assert_eq!(
                read_edge_list(b"2 -3"),
                Err(ParseError::from(GraphError::NegativeEdgeCount(-3)))
            );
            assert_eq!(
                read_edge_list(b"2 1\n1 -2 4"),
                Err(ParseError::from(GraphError::VertexOutOfRange {
                    edge: 0,
                    vertex: -2,
                    num_vertices: 2,
                }))
            );
        }

        #[test]
        fn weight_out_of_i32_range() {
            assert!(matches!(
                read_edge_list(b"2 1\n1 2 4294967296"),
                Err(ParseError::InvalidToken {
                    expected: "edge weight",
                    ..
                })
            ));
        }
    }
}
