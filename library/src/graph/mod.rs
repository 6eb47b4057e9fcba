mod jagged_csr;
mod mst_prim;

pub use jagged_csr::jagged;
pub use mst_prim::prim;
