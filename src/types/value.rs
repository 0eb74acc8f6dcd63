use crate::types::LogicalType;
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataValue {
    Null,
    Boolean(Option<bool>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Utf8(Option<String>),
}

impl DataValue {
    pub fn logical_type(&self) -> LogicalType {
        match self {
            DataValue::Null => LogicalType::SqlNull,
            DataValue::Boolean(_) => LogicalType::Boolean,
            DataValue::Int32(_) => LogicalType::Integer,
            DataValue::Int64(_) => LogicalType::Bigint,
            DataValue::Utf8(_) => LogicalType::Varchar,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            DataValue::Null => true,
            DataValue::Boolean(value) => value.is_none(),
            DataValue::Int32(value) => value.is_none(),
            DataValue::Int64(value) => value.is_none(),
            DataValue::Utf8(value) => value.is_none(),
        }
    }

    /// A typed null of the given type.
    pub fn none(ty: &LogicalType) -> DataValue {
        match ty {
            LogicalType::SqlNull => DataValue::Null,
            LogicalType::Boolean => DataValue::Boolean(None),
            LogicalType::Integer => DataValue::Int32(None),
            LogicalType::Bigint => DataValue::Int64(None),
            LogicalType::Varchar => DataValue::Utf8(None),
        }
    }

    /// Widens integer values to `i64`; `None` for nulls and non-integer values.
    pub fn i64(&self) -> Option<i64> {
        match self {
            DataValue::Int32(value) => value.map(i64::from),
            DataValue::Int64(value) => *value,
            _ => None,
        }
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Boolean(Some(value))
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Int32(Some(value))
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Int64(Some(value))
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Utf8(Some(value))
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Utf8(Some(value.to_string()))
    }
}

macro_rules! format_option {
    ($F:expr, $EXPR:expr) => {{
        match $EXPR {
            Some(e) => write!($F, "{}", e),
            None => write!($F, "null"),
        }
    }};
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => write!(f, "null"),
            DataValue::Boolean(e) => format_option!(f, e),
            DataValue::Int32(e) => format_option!(f, e),
            DataValue::Int64(e) => format_option!(f, e),
            DataValue::Utf8(e) => match e {
                Some(e) => write!(f, "'{}'", e),
                None => write!(f, "null"),
            },
        }
    }
}
