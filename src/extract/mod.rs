//! Heuristic extractors run over a function's section tree.

pub mod description;
pub mod signature;
pub mod types;
