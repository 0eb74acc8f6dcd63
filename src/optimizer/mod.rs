/// The architecture and some components,
/// such as (/core) are referenced from sqlrs

pub mod core;
pub mod heuristic;
pub mod rule;
