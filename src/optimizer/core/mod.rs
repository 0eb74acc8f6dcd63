pub mod pattern;
pub mod rule;
