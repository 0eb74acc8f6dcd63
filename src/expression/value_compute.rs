use crate::errors::OptimizerError;
use crate::expression::{BinaryOperator, UnaryOperator};
use crate::types::value::DataValue;
use crate::types::LogicalType;
use std::cmp::Ordering;

fn unpack_bool(value: &DataValue, op: BinaryOperator, other: &DataValue) -> Result<Option<bool>, OptimizerError> {
    match value {
        DataValue::Null => Ok(None),
        DataValue::Boolean(v) => Ok(*v),
        _ => Err(OptimizerError::UnsupportedBinaryOperator(
            op,
            value.logical_type(),
            other.logical_type(),
        )),
    }
}

fn compare(left: &DataValue, right: &DataValue, op: BinaryOperator) -> Result<Option<Ordering>, OptimizerError> {
    if left.is_null() || right.is_null() {
        return Ok(None);
    }
    let ordering = match (left, right) {
        (DataValue::Boolean(Some(l)), DataValue::Boolean(Some(r))) => l.cmp(r),
        (DataValue::Utf8(Some(l)), DataValue::Utf8(Some(r))) => l.cmp(r),
        _ => match (left.i64(), right.i64()) {
            (Some(l), Some(r)) => l.cmp(&r),
            _ => {
                return Err(OptimizerError::UnsupportedBinaryOperator(
                    op,
                    left.logical_type(),
                    right.logical_type(),
                ))
            }
        },
    };

    Ok(Some(ordering))
}

fn narrow(value: i64, ty: &LogicalType) -> Option<DataValue> {
    match ty {
        LogicalType::Integer => i32::try_from(value).ok().map(DataValue::from),
        LogicalType::Bigint => Some(DataValue::from(value)),
        _ => None,
    }
}

/// Evaluates `left op right` over two constants.
///
/// `Ok(None)` means the expression is well-typed but must be left for runtime:
/// an integer overflow or a division by zero.
pub fn binary_op(
    left: &DataValue,
    right: &DataValue,
    op: &BinaryOperator,
    ty: &LogicalType,
) -> Result<Option<DataValue>, OptimizerError> {
    let op = *op;

    if op.is_arithmetic() {
        let unsupported = || {
            OptimizerError::UnsupportedBinaryOperator(op, left.logical_type(), right.logical_type())
        };
        let is_numeric_or_null =
            |value: &DataValue| value.logical_type().is_numeric() || matches!(value, DataValue::Null);
        if !is_numeric_or_null(left) || !is_numeric_or_null(right) {
            return Err(unsupported());
        }
        if left.is_null() || right.is_null() {
            return Ok(Some(DataValue::none(ty)));
        }
        let (l, r) = left.i64().zip(right.i64()).ok_or_else(unsupported)?;
        let value = match op {
            BinaryOperator::Plus => l.checked_add(r),
            BinaryOperator::Minus => l.checked_sub(r),
            BinaryOperator::Multiply => l.checked_mul(r),
            BinaryOperator::Divide => l.checked_div(r),
            _ => unreachable!(),
        };

        return Ok(value.and_then(|value| narrow(value, ty)));
    }
    if op.is_logical() {
        let (l, r) = (unpack_bool(left, op, right)?, unpack_bool(right, op, left)?);
        let value = match op {
            BinaryOperator::And => match (l, r) {
                (Some(false), _) | (_, Some(false)) => Some(false),
                (Some(true), Some(true)) => Some(true),
                _ => None,
            },
            BinaryOperator::Or => match (l, r) {
                (Some(true), _) | (_, Some(true)) => Some(true),
                (Some(false), Some(false)) => Some(false),
                _ => None,
            },
            _ => unreachable!(),
        };

        return Ok(Some(DataValue::Boolean(value)));
    }
    let value = compare(left, right, op)?.map(|ordering| match op {
        BinaryOperator::Gt => ordering == Ordering::Greater,
        BinaryOperator::Lt => ordering == Ordering::Less,
        BinaryOperator::GtEq => ordering != Ordering::Less,
        BinaryOperator::LtEq => ordering != Ordering::Greater,
        BinaryOperator::Eq => ordering == Ordering::Equal,
        BinaryOperator::NotEq => ordering != Ordering::Equal,
        _ => unreachable!(),
    });

    Ok(Some(DataValue::Boolean(value)))
}

/// Evaluates `op value`; `Ok(None)` on integer overflow.
pub fn unary_op(value: &DataValue, op: &UnaryOperator) -> Result<Option<DataValue>, OptimizerError> {
    let unsupported = || OptimizerError::UnsupportedUnaryOperator(*op, value.logical_type());

    match op {
        UnaryOperator::Not => match value {
            DataValue::Null => Ok(Some(DataValue::Boolean(None))),
            DataValue::Boolean(v) => Ok(Some(DataValue::Boolean(v.map(|v| !v)))),
            _ => Err(unsupported()),
        },
        UnaryOperator::Plus => match value {
            DataValue::Null | DataValue::Int32(_) | DataValue::Int64(_) => Ok(Some(value.clone())),
            _ => Err(unsupported()),
        },
        UnaryOperator::Minus => match value {
            DataValue::Null => Ok(Some(DataValue::Null)),
            DataValue::Int32(v) => Ok(v
                .map(|v| v.checked_neg().map(DataValue::from))
                .unwrap_or(Some(DataValue::Int32(None)))),
            DataValue::Int64(v) => Ok(v
                .map(|v| v.checked_neg().map(DataValue::from))
                .unwrap_or(Some(DataValue::Int64(None)))),
            _ => Err(unsupported()),
        },
    }
}
