use crate::catalog::ColumnRef;
use crate::planner::{LogicalPlan, PlanNodeId};
use crate::types::value::DataValue;
use itertools::Itertools;
use std::fmt;
use std::fmt::Formatter;

use super::Operator;

/// A literal relation. With no rows it is the empty relation over `columns`.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct ValuesOperator {
    pub rows: Vec<Vec<DataValue>>,
    pub columns: Vec<ColumnRef>,
}

impl ValuesOperator {
    pub fn build(id: PlanNodeId, columns: Vec<ColumnRef>, rows: Vec<Vec<DataValue>>) -> LogicalPlan {
        LogicalPlan::new(id, Operator::Values(ValuesOperator { rows, columns }), vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for ValuesOperator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let columns = self
            .columns
            .iter()
            .map(|column| column.name().to_string())
            .join(", ");

        write!(f, "Values [{}], RowsLen: {}", columns, self.rows.len())?;

        Ok(())
    }
}
