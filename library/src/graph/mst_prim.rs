pub mod prim {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use tracing::debug;

    use crate::error::GraphError;
    use crate::graph::jagged::{Edge, Graph};

    /// Outcome of an MST computation on a well-formed graph.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum MstWeight {
        /// Sum of the `num_vertices - 1` tree edge weights.
        Connected(i64),
        /// Some vertex is unreachable from the start vertex.
        Disconnected,
    }

    impl MstWeight {
        pub fn total(self) -> Option<i64> {
            match self {
                MstWeight::Connected(w) => Some(w),
                MstWeight::Disconnected => None,
            }
        }

        pub fn is_connected(self) -> bool {
            matches!(self, MstWeight::Connected(_))
        }
    }

    /// Validates `edges` against `[1, num_vertices]`, builds the adjacency and
    /// returns the MST weight.
    pub fn compute_mst_weight(num_vertices: usize, edges: &[Edge]) -> Result<MstWeight, GraphError> {
        let graph = Graph::from_edges(num_vertices, edges)?;
        Ok(mst_weight(&graph))
    }

    /// MST weight grown from vertex 1.
    pub fn mst_weight(graph: &Graph) -> MstWeight {
        match graph.num_vertices() {
            0 => MstWeight::Connected(0),
            _ => prim(graph, 0),
        }
    }

    /// MST weight grown from the 1-based vertex `start`.
    ///
    /// The result does not depend on `start`. An empty graph ignores it.
    pub fn mst_weight_from(graph: &Graph, start: usize) -> Result<MstWeight, GraphError> {
        let n = graph.num_vertices();
        if n == 0 {
            return Ok(MstWeight::Connected(0));
        }
        if !(1..=n).contains(&start) {
            return Err(GraphError::StartOutOfRange {
                vertex: start,
                num_vertices: n,
            });
        }
        Ok(prim(graph, start - 1))
    }

    /// # Prim's algorithm with a lazy-deletion frontier
    ///
    /// Time complexity: `O(E log E)`
    ///
    /// The frontier holds `(weight, vertex)` candidates, possibly several per vertex.
    /// An entry whose vertex is already in the tree is stale and dropped on pop,
    /// which replaces decrease-key. A vertex is pushed only when its best known
    /// connecting weight strictly drops, so there are at most `E + 1` pushes.
    ///
    /// The start vertex enters with weight 0, so the tree spans the graph iff all
    /// `n` vertices get included.
    fn prim(graph: &Graph, start: usize) -> MstWeight {
        let n = graph.num_vertices();

        // None stands for infinity
        let mut best: Vec<Option<i32>> = vec![None; n];
        let mut included = vec![false; n];
        let mut frontier = BinaryHeap::new();

        best[start] = Some(0);
        frontier.push(Reverse((0i32, start as u32)));

        let mut total: i64 = 0;
        let mut included_count = 0usize;
        let mut stale = 0usize;

        while included_count < n {
            let Some(Reverse((w, u))) = frontier.pop() else {
                break;
            };
            let u = u as usize;
            if included[u] {
                stale += 1;
                continue;
            }
            included[u] = true;
            total += i64::from(w);
            included_count += 1;

            for &(v, wv) in graph.row(u) {
                let v = v as usize;
                if !included[v] && best[v].map_or(true, |b| wv < b) {
                    best[v] = Some(wv);
                    frontier.push(Reverse((wv, v as u32)));
                }
            }
        }

        let result = if included_count == n {
            MstWeight::Connected(total)
        } else {
            MstWeight::Disconnected
        };
        debug!(
            num_vertices = n,
            num_edges = graph.num_edges(),
            start = start + 1,
            included = included_count,
            stale,
            leftover = frontier.len(),
            ?result,
            "prim finished"
        );
        result
    }

}
