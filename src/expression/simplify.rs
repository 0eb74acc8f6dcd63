use crate::errors::OptimizerError;
use crate::expression::value_compute::{binary_op, unary_op};
use crate::expression::{BinaryOperator, ScalarExpression, FALSE_CONSTANT, TRUE_CONSTANT};
use crate::types::value::DataValue;
use std::mem;

impl ScalarExpression {
    /// Folds every sub-expression whose operands are all constants.
    ///
    /// Sub-expressions that would overflow or divide by zero are kept as they are.
    /// `AND` / `OR` also absorb a literal `FALSE` / `TRUE` operand and drop a
    /// neutral one, which holds under three-valued logic.
    pub fn constant_calculation(&mut self) -> Result<(), OptimizerError> {
        match self {
            ScalarExpression::Unary { expr, op, .. } => {
                expr.constant_calculation()?;

                if let ScalarExpression::Constant(unary_val) = expr.as_ref() {
                    if let Some(value) = unary_op(unary_val, op)? {
                        let _ = mem::replace(self, ScalarExpression::Constant(value));
                    }
                }
            }
            ScalarExpression::Binary {
                left_expr,
                right_expr,
                op,
                ty,
            } => {
                left_expr.constant_calculation()?;
                right_expr.constant_calculation()?;

                let folded = match (left_expr.as_ref(), right_expr.as_ref()) {
                    (ScalarExpression::Constant(left_val), ScalarExpression::Constant(right_val)) => {
                        binary_op(left_val, right_val, op, ty)?.map(ScalarExpression::Constant)
                    }
                    (left, right) => Self::logical_identity(op, left, right),
                };
                if let Some(expr) = folded {
                    let _ = mem::replace(self, expr);
                }
            }
            ScalarExpression::IsNull { negated, expr } => {
                expr.constant_calculation()?;

                if let ScalarExpression::Constant(value) = expr.as_ref() {
                    let is_null = value.is_null() != *negated;
                    let _ = mem::replace(self, ScalarExpression::Constant(DataValue::from(is_null)));
                }
            }
            ScalarExpression::Constant(_) | ScalarExpression::ColumnRef(_) => (),
        }

        Ok(())
    }

    /// `x AND FALSE`, `x OR TRUE` collapse to the constant, `x AND TRUE`, `x OR FALSE` to `x`.
    fn logical_identity(
        op: &BinaryOperator,
        left_expr: &ScalarExpression,
        right_expr: &ScalarExpression,
    ) -> Option<ScalarExpression> {
        let (absorbing, neutral) = match op {
            BinaryOperator::And => (&*FALSE_CONSTANT, &*TRUE_CONSTANT),
            BinaryOperator::Or => (&*TRUE_CONSTANT, &*FALSE_CONSTANT),
            _ => return None,
        };

        if left_expr == absorbing || right_expr == absorbing {
            Some(absorbing.clone())
        } else if left_expr == neutral {
            Some(right_expr.clone())
        } else if right_expr == neutral {
            Some(left_expr.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use crate::catalog::{ColumnCatalog, ColumnDesc};
    use crate::errors::OptimizerError;
    use crate::expression::{BinaryOperator, ScalarExpression, UnaryOperator, FALSE_CONSTANT, TRUE_CONSTANT};
    use crate::types::value::DataValue;
    use crate::types::LogicalType;
    use std::sync::Arc;

    fn column_c1() -> ScalarExpression {
        ScalarExpression::ColumnRef(Arc::new(ColumnCatalog::new(
            "c1".to_string(),
            true,
            ColumnDesc::new(LogicalType::Integer),
        )))
    }

    #[test]
    fn test_constant_calculation_omitted() -> Result<(), OptimizerError> {
        // (2 + (-1)) < -(c1 + 1)
        let mut expr = ScalarExpression::binary(
            BinaryOperator::Lt,
            ScalarExpression::binary(
                BinaryOperator::Plus,
                ScalarExpression::constant(2),
                ScalarExpression::unary(UnaryOperator::Minus, ScalarExpression::constant(1)),
            ),
            ScalarExpression::unary(
                UnaryOperator::Minus,
                ScalarExpression::binary(BinaryOperator::Plus, column_c1(), ScalarExpression::constant(1)),
            ),
        );
        expr.constant_calculation()?;

        match expr {
            ScalarExpression::Binary {
                left_expr,
                right_expr,
                ..
            } => {
                assert_eq!(*left_expr, ScalarExpression::constant(1));
                assert_eq!(right_expr.referenced_columns().len(), 1);
            }
            _ => unreachable!("the column side must stay a binary expression"),
        }

        Ok(())
    }

    #[test]
    fn test_constant_calculation_to_sentinel() -> Result<(), OptimizerError> {
        let mut eq = ScalarExpression::binary(
            BinaryOperator::Eq,
            ScalarExpression::constant(1),
            ScalarExpression::constant(1),
        );
        eq.constant_calculation()?;
        assert!(eq.is_true_constant());

        let mut not_true = ScalarExpression::unary(UnaryOperator::Not, TRUE_CONSTANT.clone());
        not_true.constant_calculation()?;
        assert!(not_true.is_false_constant());

        let mut is_null = ScalarExpression::is_null(ScalarExpression::Constant(DataValue::Null), false);
        is_null.constant_calculation()?;
        assert!(is_null.is_true_constant());

        Ok(())
    }

    #[test]
    fn test_logical_identity() -> Result<(), OptimizerError> {
        let c1_gt_5 = ScalarExpression::binary(BinaryOperator::Gt, column_c1(), ScalarExpression::constant(5));

        let mut and_false = ScalarExpression::binary(BinaryOperator::And, c1_gt_5.clone(), FALSE_CONSTANT.clone());
        and_false.constant_calculation()?;
        assert!(and_false.is_false_constant());

        let mut or_true = ScalarExpression::binary(BinaryOperator::Or, TRUE_CONSTANT.clone(), c1_gt_5.clone());
        or_true.constant_calculation()?;
        assert!(or_true.is_true_constant());

        let mut and_true = ScalarExpression::binary(BinaryOperator::And, TRUE_CONSTANT.clone(), c1_gt_5.clone());
        and_true.constant_calculation()?;
        assert_eq!(and_true, c1_gt_5);

        Ok(())
    }

    #[test]
    fn test_overflow_is_kept() -> Result<(), OptimizerError> {
        let mut expr = ScalarExpression::binary(
            BinaryOperator::Plus,
            ScalarExpression::constant(i32::MAX),
            ScalarExpression::constant(1),
        );
        let origin = expr.clone();
        expr.constant_calculation()?;

        assert_eq!(expr, origin);

        Ok(())
    }
}
