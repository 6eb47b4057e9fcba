pub mod jagged {
    use std::fmt::Debug;
    use std::ops::Index;

    use tracing::debug;

    use crate::error::GraphError;

    /// Undirected edge `(u, v, weight)` with 1-based endpoints.
    pub type Edge = (usize, usize, i32);

    // Compressed sparse row format for jagged array.
    // Static only: rows are fixed once built.
    #[derive(Clone, PartialEq, Eq)]
    pub struct Csr<T> {
        data: Vec<T>,
        head: Vec<usize>,
    }

    impl<T: Debug> Debug for Csr<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_list()
                .entries((0..self.len()).map(|i| &self[i]))
                .finish()
        }
    }

    impl<T: Copy + Default> Csr<T> {
        /// Groups `(row, item)` pairs by row with a counting sort. Items of one row
        /// come out in reverse insertion order.
        pub fn from_pairs<I>(n: usize, pairs: I) -> Self
        where
            I: IntoIterator<Item = (u32, T)>,
            I::IntoIter: Clone,
        {
            let pairs = pairs.into_iter();
            let mut head = vec![0usize; n + 1];
            for (u, _) in pairs.clone() {
                head[u as usize] += 1;
            }
            for i in 0..n {
                head[i + 1] += head[i];
            }

            let mut data = vec![T::default(); head[n]];
            for (u, x) in pairs {
                head[u as usize] -= 1;
                data[head[u as usize]] = x;
            }
            Csr { data, head }
        }
    }

    impl<T> Csr<T> {
        fn len(&self) -> usize {
            self.head.len() - 1
        }
    }

    impl<T> Index<usize> for Csr<T> {
        type Output = [T];

        fn index(&self, index: usize) -> &Self::Output {
            &self.data[self.head[index]..self.head[index + 1]]
        }
    }

    /// Weighted undirected graph on vertices `1..=num_vertices`.
    ///
    /// Every input edge `(u, v, w)` is stored in the rows of both `u` and `v`.
    /// Parallel edges and self-loops are kept as given.
    #[derive(Clone, Debug)]
    pub struct Graph {
        num_edges: usize,
        // row u - 1 holds (v - 1, w)
        adj: Csr<(u32, i32)>,
    }

    impl Graph {
        /// Validates every endpoint, then builds the symmetric adjacency.
        ///
        /// Nothing is built if any endpoint falls outside `[1, num_vertices]`.
        pub fn from_edges(num_vertices: usize, edges: &[Edge]) -> Result<Self, GraphError> {
            if num_vertices > u32::MAX as usize {
                return Err(GraphError::TooManyVertices(num_vertices));
            }
            for (i, &(u, v, _)) in edges.iter().enumerate() {
                for x in [u, v] {
                    if !(1..=num_vertices).contains(&x) {
                        return Err(GraphError::VertexOutOfRange {
                            edge: i,
                            vertex: x as i128,
                            num_vertices,
                        });
                    }
                }
            }

            let half_edges = edges.iter().flat_map(|&(u, v, w)| {
                let (u, v) = ((u - 1) as u32, (v - 1) as u32);
                [(u, (v, w)), (v, (u, w))]
            });
            let adj = Csr::from_pairs(num_vertices, half_edges);
            debug!(num_vertices, num_edges = edges.len(), "built adjacency");

            Ok(Self {
                num_edges: edges.len(),
                adj,
            })
        }

        pub fn num_vertices(&self) -> usize {
            self.adj.len()
        }

        pub fn num_edges(&self) -> usize {
            self.num_edges
        }

        /// `(neighbor, weight)` pairs of the 1-based vertex `v`.
        ///
        /// # Panics
        /// If `v` is not in `[1, num_vertices]`.
        pub fn neighbors(&self, v: usize) -> impl Iterator<Item = (usize, i32)> + '_ {
            self.adj[v - 1].iter().map(|&(u, w)| (u as usize + 1, w))
        }

        pub(crate) fn row(&self, u: usize) -> &[(u32, i32)] {
            &self.adj[u]
        }
    }

}
