mod edge_text;

pub use edge_text::edge_list;
