use crate::expression::ScalarExpression;
use crate::planner::{LogicalPlan, PlanNodeId, PlanRef};
use std::fmt;
use std::fmt::Formatter;

use super::Operator;

/// Passes through the rows of its only child for which `predicate` is true.
/// The output columns are the child's.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct FilterOperator {
    pub predicate: ScalarExpression,
}

impl FilterOperator {
    pub fn build(id: PlanNodeId, predicate: ScalarExpression, source: PlanRef) -> LogicalPlan {
        LogicalPlan::new(
            id,
            Operator::Filter(FilterOperator { predicate }),
            vec![source],
        )
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Filter {}", self.predicate)
    }
}
