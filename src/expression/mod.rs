use std::fmt;
use std::fmt::Formatter;

use lazy_static::lazy_static;

use crate::catalog::ColumnRef;
use crate::types::value::DataValue;
use crate::types::LogicalType;

pub mod simplify;
pub mod value_compute;

lazy_static! {
    pub static ref TRUE_CONSTANT: ScalarExpression =
        ScalarExpression::Constant(DataValue::Boolean(Some(true)));
    pub static ref FALSE_CONSTANT: ScalarExpression =
        ScalarExpression::Constant(DataValue::Boolean(Some(false)));
}

/// ScalarExpression represnet all scalar expression in a predicate.
/// a > 5  -> ScalarExpression::Binary(ColumnRef(a) > Constant(5))
/// TRUE   -> ScalarExpression::Constant(Boolean(true))
///
/// Expressions are immutable once they are attached to a plan node; rules build
/// new expressions instead of editing the ones they are given.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum ScalarExpression {
    Constant(DataValue),
    ColumnRef(ColumnRef),
    IsNull {
        negated: bool,
        expr: Box<ScalarExpression>,
    },
    Unary {
        op: UnaryOperator,
        expr: Box<ScalarExpression>,
        ty: LogicalType,
    },
    Binary {
        op: BinaryOperator,
        left_expr: Box<ScalarExpression>,
        right_expr: Box<ScalarExpression>,
        ty: LogicalType,
    },
}

impl ScalarExpression {
    pub fn constant(value: impl Into<DataValue>) -> Self {
        ScalarExpression::Constant(value.into())
    }

    pub fn unary(op: UnaryOperator, expr: ScalarExpression) -> Self {
        let ty = match op {
            UnaryOperator::Not => LogicalType::Boolean,
            UnaryOperator::Plus | UnaryOperator::Minus => expr.return_type(),
        };

        ScalarExpression::Unary {
            op,
            expr: Box::new(expr),
            ty,
        }
    }

    pub fn binary(op: BinaryOperator, left_expr: ScalarExpression, right_expr: ScalarExpression) -> Self {
        let ty = if op.is_arithmetic() {
            let (left_ty, right_ty) = (left_expr.return_type(), right_expr.return_type());

            LogicalType::max_numeric(&left_ty, &right_ty).unwrap_or(left_ty)
        } else {
            LogicalType::Boolean
        };

        ScalarExpression::Binary {
            op,
            left_expr: Box::new(left_expr),
            right_expr: Box::new(right_expr),
            ty,
        }
    }

    pub fn is_null(expr: ScalarExpression, negated: bool) -> Self {
        ScalarExpression::IsNull {
            negated,
            expr: Box::new(expr),
        }
    }

    pub fn is_true_constant(&self) -> bool {
        self == &*TRUE_CONSTANT
    }

    pub fn is_false_constant(&self) -> bool {
        self == &*FALSE_CONSTANT
    }

    pub fn return_type(&self) -> LogicalType {
        match self {
            Self::Constant(v) => v.logical_type(),
            Self::ColumnRef(col) => *col.datatype(),
            Self::IsNull { .. } => LogicalType::Boolean,
            Self::Unary {
                ty: return_type, ..
            } => *return_type,
            Self::Binary {
                ty: return_type, ..
            } => *return_type,
        }
    }

    pub fn referenced_columns(&self) -> Vec<ColumnRef> {
        fn columns_collect(expr: &ScalarExpression, vec: &mut Vec<ColumnRef>) {
            match expr {
                ScalarExpression::ColumnRef(col) => vec.push(col.clone()),
                ScalarExpression::IsNull { expr, .. } => columns_collect(expr, vec),
                ScalarExpression::Unary { expr, .. } => columns_collect(expr, vec),
                ScalarExpression::Binary {
                    left_expr,
                    right_expr,
                    ..
                } => {
                    columns_collect(left_expr, vec);
                    columns_collect(right_expr, vec);
                }
                ScalarExpression::Constant(_) => (),
            }
        }
        let mut exprs = Vec::new();

        columns_collect(self, &mut exprs);

        exprs
    }
}

impl fmt::Display for ScalarExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScalarExpression::Constant(value) => write!(f, "{}", value),
            ScalarExpression::ColumnRef(col) => write!(f, "{}", col),
            ScalarExpression::IsNull { negated, expr } => {
                let suffix = if *negated { "is not null" } else { "is null" };

                write!(f, "{} {}", expr, suffix)
            }
            ScalarExpression::Unary { op, expr, .. } => write!(f, "{}{}", op, expr),
            ScalarExpression::Binary {
                op,
                left_expr,
                right_expr,
                ..
            } => write!(f, "({} {} {})", left_expr, op, right_expr),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Minus => write!(f, "-"),
            UnaryOperator::Not => write!(f, "not "),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,

    Gt,
    Lt,
    GtEq,
    LtEq,
    Eq,
    NotEq,

    And,
    Or,
}

impl BinaryOperator {
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Plus
                | BinaryOperator::Minus
                | BinaryOperator::Multiply
                | BinaryOperator::Divide
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BinaryOperator::Plus => write!(f, "+"),
            BinaryOperator::Minus => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Gt => write!(f, ">"),
            BinaryOperator::Lt => write!(f, "<"),
            BinaryOperator::GtEq => write!(f, ">="),
            BinaryOperator::LtEq => write!(f, "<="),
            BinaryOperator::Eq => write!(f, "="),
            BinaryOperator::NotEq => write!(f, "!="),
            BinaryOperator::And => write!(f, "&&"),
            BinaryOperator::Or => write!(f, "||"),
        }
    }
}
