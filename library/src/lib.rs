//! Minimum spanning tree weight of a weighted undirected graph.
//!
//! [`compute_mst_weight`] validates an edge list and runs Prim's algorithm over a
//! binary-heap frontier with lazy deletion. A graph without a spanning tree yields
//! [`MstWeight::Disconnected`], never a sentinel number.
//!
//! ```
//! use prim_mst::{compute_mst_weight, MstWeight};
//!
//! let edges = [(1, 2, 1), (2, 3, 2), (1, 3, 3)];
//! assert_eq!(compute_mst_weight(3, &edges), Ok(MstWeight::Connected(3)));
//!
//! let edges = [(1, 2, 5), (3, 4, 7)];
//! assert_eq!(compute_mst_weight(4, &edges), Ok(MstWeight::Disconnected));
//! ```

pub mod error;
pub mod graph;
pub mod io;

pub use error::{GraphError, ParseError};
pub use graph::jagged::{Edge, Graph};
pub use graph::prim::{compute_mst_weight, mst_weight, mst_weight_from, MstWeight};
pub use io::edge_list::{read_edge_list, EdgeList};
