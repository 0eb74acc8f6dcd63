pub mod filter;
pub mod table_scan;
pub mod values;

use self::{filter::FilterOperator, table_scan::TableScanOperator, values::ValuesOperator};
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Operator {
    Filter(FilterOperator),
    TableScan(TableScanOperator),
    Values(ValuesOperator),
}

impl Operator {
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Filter(_) => "Filter",
            Operator::TableScan(_) => "TableScan",
            Operator::Values(_) => "Values",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Operator::Filter(op) => write!(f, "{}", op),
            Operator::TableScan(op) => write!(f, "{}", op),
            Operator::Values(op) => write!(f, "{}", op),
        }
    }
}
