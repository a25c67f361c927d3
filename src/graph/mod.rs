//! Graph representation and structural helpers

pub mod compressed;
pub mod builder;
pub mod algorithms;

pub use builder::GraphBuilder;
pub use compressed::{CompressedGraph, NodeId};
