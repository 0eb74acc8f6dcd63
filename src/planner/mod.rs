pub mod id_allocator;
pub mod operator;

use crate::catalog::ColumnRef;
use crate::planner::operator::Operator;
use itertools::Itertools;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type PlanRef = Arc<LogicalPlan>;

/// Identifies a node within one plan. Unique for the lifetime of an optimization run.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct PlanNodeId(usize);

impl PlanNodeId {
    pub const fn new(id: usize) -> Self {
        PlanNodeId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PlanNodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where in the query text a node came from. Only used in diagnostics.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub const fn new(line: u32, column: u32) -> Self {
        SourceLocation { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An immutable plan node. Children are shared, so rewriting a node rebuilds
/// only the path from the root down to it.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct LogicalPlan {
    pub id: PlanNodeId,
    pub source_location: Option<SourceLocation>,
    pub operator: Operator,
    pub childrens: Vec<PlanRef>,
}

impl LogicalPlan {
    pub fn new(id: PlanNodeId, operator: Operator, childrens: Vec<PlanRef>) -> Self {
        Self {
            id,
            source_location: None,
            operator,
            childrens,
        }
    }

    pub fn with_source_location(mut self, source_location: SourceLocation) -> Self {
        self.source_location = Some(source_location);
        self
    }

    /// A copy of this node over new children, keeping its id, location and operator.
    pub fn with_childrens(&self, childrens: Vec<PlanRef>) -> Self {
        Self {
            id: self.id,
            source_location: self.source_location,
            operator: self.operator.clone(),
            childrens,
        }
    }

    pub fn output_columns(&self) -> Vec<ColumnRef> {
        match &self.operator {
            Operator::Filter(_) => self
                .childrens
                .first()
                .map(|child| child.output_columns())
                .unwrap_or_default(),
            Operator::Values(op) => op.columns.clone(),
            Operator::TableScan(op) => op.columns.clone(),
        }
    }

    /// Ids of every node in the tree, in pre-order.
    pub fn node_ids(&self) -> Vec<PlanNodeId> {
        fn collect_id(plan: &LogicalPlan, results: &mut Vec<PlanNodeId>) {
            results.push(plan.id);
            for child in plan.childrens.iter() {
                collect_id(child, results);
            }
        }

        let mut ids = Vec::new();
        collect_id(self, &mut ids);
        ids
    }

    pub fn max_id(&self) -> PlanNodeId {
        self.node_ids().into_iter().max().unwrap_or(self.id)
    }

    pub fn explain(&self, indentation: usize) -> String {
        let mut result = format!(
            "{:indent$}{} {}",
            "",
            self.id,
            self.operator,
            indent = indentation
        );

        if let Some(location) = &self.source_location {
            result.push_str(&format!(" @{}", location));
        }

        for child in self.childrens.iter() {
            result.push('\n');
            result.push_str(&child.explain(indentation + 2));
        }

        result
    }
}

impl fmt::Display for LogicalPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let columns = self
            .output_columns()
            .iter()
            .map(|column| column.name().to_string())
            .join(", ");

        write!(f, "{} -> [{}]", self.operator, columns)
    }
}


#[cfg(test)]
mod tests {
    use crate::expression::{BinaryOperator, ScalarExpression, TRUE_CONSTANT};
    use crate::planner::operator::filter::FilterOperator;
    use crate::planner::operator::values::ValuesOperator;
    use crate::planner::test::{build_t_columns, build_t_scan};
    use crate::planner::{LogicalPlan, PlanNodeId, SourceLocation};
    use std::sync::Arc;

    #[test]
    fn test_filter_output_columns() {
        let scan = build_t_scan(0);
        let filter = FilterOperator::build(PlanNodeId::new(1), TRUE_CONSTANT.clone(), scan.clone());

        assert_eq!(filter.output_columns(), scan.output_columns());
    }

    #[test]
    fn test_node_ids() {
        let scan = build_t_scan(3);
        let predicate = ScalarExpression::binary(
            BinaryOperator::Gt,
            ScalarExpression::ColumnRef(build_t_columns()[0].clone()),
            ScalarExpression::constant(5),
        );
        let inner = Arc::new(FilterOperator::build(PlanNodeId::new(7), predicate, scan));
        let outer = FilterOperator::build(PlanNodeId::new(1), TRUE_CONSTANT.clone(), inner);

        assert_eq!(
            outer.node_ids(),
            vec![PlanNodeId::new(1), PlanNodeId::new(7), PlanNodeId::new(3)]
        );
        assert_eq!(outer.max_id(), PlanNodeId::new(7));
    }

    #[test]
    fn test_with_childrens_shares_subtrees() {
        let scan = build_t_scan(0);
        let filter = FilterOperator::build(PlanNodeId::new(1), TRUE_CONSTANT.clone(), scan.clone())
            .with_source_location(SourceLocation::new(1, 20));
        let values: Arc<LogicalPlan> =
            Arc::new(ValuesOperator::build(PlanNodeId::new(2), build_t_columns(), vec![]));

        let rebuilt = filter.with_childrens(vec![values.clone()]);

        assert_eq!(rebuilt.id, filter.id);
        assert_eq!(rebuilt.source_location, filter.source_location);
        assert!(Arc::ptr_eq(&rebuilt.childrens[0], &values));
        assert!(Arc::ptr_eq(&filter.childrens[0], &scan));
    }

    #[test]
    fn test_explain() {
        let filter = FilterOperator::build(PlanNodeId::new(1), TRUE_CONSTANT.clone(), build_t_scan(0))
            .with_source_location(SourceLocation::new(1, 20));

        assert_eq!(
            filter.explain(0),
            "#1 Filter true @1:20\n  #0 TableScan t -> [a, b]"
        );
        assert_eq!(filter.to_string(), "Filter true -> [a, b]");
    }
}
