use crate::catalog::{ColumnRef, TableName};
use crate::planner::{LogicalPlan, PlanNodeId};
use itertools::Itertools;
use std::fmt;
use std::fmt::Formatter;

use super::Operator;

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct TableScanOperator {
    pub table_name: TableName,
    pub columns: Vec<ColumnRef>,
}

impl TableScanOperator {
    pub fn build(id: PlanNodeId, table_name: TableName, columns: Vec<ColumnRef>) -> LogicalPlan {
        LogicalPlan::new(
            id,
            Operator::TableScan(TableScanOperator {
                table_name,
                columns,
            }),
            vec![],
        )
    }
}

impl fmt::Display for TableScanOperator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let projection_columns = self
            .columns
            .iter()
            .map(|column| column.name().to_string())
            .join(", ");

        write!(f, "TableScan {} -> [{}]", self.table_name, projection_columns)?;

        Ok(())
    }
}
