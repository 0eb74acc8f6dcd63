use crate::catalog::TableName;
use crate::types::LogicalType;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type ColumnRef = Arc<ColumnCatalog>;

/// An output column of a plan node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnCatalog {
    pub name: String,
    pub table_name: Option<TableName>,
    pub desc: ColumnDesc,
}

impl ColumnCatalog {
    pub fn new(column_name: String, nullable: bool, column_desc: ColumnDesc) -> ColumnCatalog {
        ColumnCatalog {
            name: column_name,
            table_name: None,
            desc: ColumnDesc {
                nullable,
                ..column_desc
            },
        }
    }

    pub fn with_table(mut self, table_name: TableName) -> ColumnCatalog {
        self.table_name = Some(table_name);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn datatype(&self) -> &LogicalType {
        &self.desc.column_datatype
    }
}

impl fmt::Display for ColumnCatalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.table_name {
            Some(table_name) => write!(f, "{}.{}", table_name, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// The descriptor of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDesc {
    pub(crate) column_datatype: LogicalType,
    pub(crate) nullable: bool,
}

impl ColumnDesc {
    pub const fn new(column_datatype: LogicalType) -> ColumnDesc {
        ColumnDesc {
            column_datatype,
            nullable: true,
        }
    }
}
