//! Schedule model produced by the parser and consumed by the layout engine.

pub mod types;
