pub mod batch;
pub mod matcher;
pub mod optimizer;
