use crate::expression::{BinaryOperator, UnaryOperator};
use crate::types::LogicalType;

#[derive(thiserror::Error, Debug)]
pub enum OptimizerError {
    #[error("rule `{rule}` can not be applied: {reason}")]
    RulePrecondition { rule: &'static str, reason: String },
    #[error("plan node ids exhausted")]
    PlanNodeIdExhausted,
    #[error("unsupported binary operator: {0} for {1} and {2}")]
    UnsupportedBinaryOperator(BinaryOperator, LogicalType, LogicalType),
    #[error("unsupported unary operator: {0} for {1}")]
    UnsupportedUnaryOperator(UnaryOperator, LogicalType),
}
