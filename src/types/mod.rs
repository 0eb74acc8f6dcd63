pub mod value;

use std::fmt;
use std::fmt::Formatter;

/// Sql Data Types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    SqlNull,
    Boolean,
    Integer,
    Bigint,
    Varchar,
}

impl LogicalType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, LogicalType::Integer | LogicalType::Bigint)
    }

    /// The wider of two numeric types, used when folding mixed-width arithmetic.
    pub fn max_numeric(left: &LogicalType, right: &LogicalType) -> Option<LogicalType> {
        match (left, right) {
            (LogicalType::Integer, LogicalType::Integer) => Some(LogicalType::Integer),
            (LogicalType::Integer | LogicalType::Bigint, LogicalType::Integer | LogicalType::Bigint) => {
                Some(LogicalType::Bigint)
            }
            _ => None,
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogicalType::SqlNull => "NULL",
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::Integer => "INTEGER",
            LogicalType::Bigint => "BIGINT",
            LogicalType::Varchar => "VARCHAR",
        };

        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::LogicalType;

    #[test]
    fn test_max_numeric() {
        assert_eq!(
            LogicalType::max_numeric(&LogicalType::Integer, &LogicalType::Integer),
            Some(LogicalType::Integer)
        );
        assert_eq!(
            LogicalType::max_numeric(&LogicalType::Integer, &LogicalType::Bigint),
            Some(LogicalType::Bigint)
        );
        assert_eq!(
            LogicalType::max_numeric(&LogicalType::Boolean, &LogicalType::Integer),
            None
        );
    }
}
