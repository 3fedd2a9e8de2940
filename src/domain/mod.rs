// Domain model for callscan: syntax shapes, indices and the call graph.

pub mod ast;
pub mod callgraph;
pub mod declarations;
pub mod index;
pub mod source;
