use crate::errors::OptimizerError;
use crate::optimizer::core::pattern::{Captures, Pattern, PatternChildrenPredicate};
use crate::optimizer::core::rule::{MatchPattern, NormalizationRule, RuleContext, RuleResult};
use crate::planner::operator::filter::FilterOperator;
use crate::planner::operator::values::ValuesOperator;
use crate::planner::operator::Operator;
use crate::planner::{LogicalPlan, PlanRef};
use lazy_static::lazy_static;
use log::debug;
use std::sync::Arc;

lazy_static! {
    static ref CONSTANT_CALCULATION_RULE: Pattern = {
        Pattern {
            predicate: |op| matches!(op, Operator::Filter(_)),
            capture: None,
            children: PatternChildrenPredicate::None,
        }
    };
    static ref REMOVE_TRIVIAL_FILTERS_RULE: Pattern = {
        Pattern {
            predicate: |op| matches!(op, Operator::Filter(_)),
            capture: None,
            children: PatternChildrenPredicate::None,
        }
    };
}

/// Splits a filter node into its operator and its only child.
fn filter_parts<'a>(
    rule: &'static str,
    plan: &'a LogicalPlan,
) -> Result<(&'a FilterOperator, &'a PlanRef), OptimizerError> {
    let filter_op = match &plan.operator {
        Operator::Filter(filter_op) => filter_op,
        op => {
            return Err(OptimizerError::RulePrecondition {
                rule,
                reason: format!("{} {} is not a filter", op.name(), plan.id),
            })
        }
    };
    match plan.childrens.as_slice() {
        [source] => Ok((filter_op, source)),
        childrens => Err(OptimizerError::RulePrecondition {
            rule,
            reason: format!("filter {} has {} children", plan.id, childrens.len()),
        }),
    }
}

#[derive(Copy, Clone)]
pub struct ConstantCalculation;

impl MatchPattern for ConstantCalculation {
    fn pattern(&self) -> &Pattern {
        &CONSTANT_CALCULATION_RULE
    }
}

impl NormalizationRule for ConstantCalculation {
    fn name(&self) -> &'static str {
        "ConstantCalculation"
    }

    fn apply(
        &self,
        plan: &PlanRef,
        _captures: &Captures,
        _context: &mut RuleContext<'_>,
    ) -> Result<RuleResult, OptimizerError> {
        let (filter_op, _) = filter_parts(self.name(), plan)?;
        let mut predicate = filter_op.predicate.clone();
        predicate.constant_calculation()?;

        if predicate == filter_op.predicate {
            return Ok(RuleResult::NoChange);
        }
        // same node, same id: only the predicate changes
        let mut filter = LogicalPlan::clone(plan);
        filter.operator = Operator::Filter(FilterOperator { predicate });

        Ok(RuleResult::Replace(Arc::new(filter)))
    }
}

/// Removes filters whose predicate is the literal `TRUE` or `FALSE`.
///
/// A `TRUE` filter is replaced by its source. A `FALSE` filter is replaced by an
/// empty `Values` node with the filter's output columns, dropping the whole
/// source sub-tree. Any other predicate is left alone, even one that would fold
/// to a constant: that is [`ConstantCalculation`]'s job.
#[derive(Copy, Clone)]
pub struct RemoveTrivialFilters;

impl MatchPattern for RemoveTrivialFilters {
    fn pattern(&self) -> &Pattern {
        &REMOVE_TRIVIAL_FILTERS_RULE
    }
}

impl NormalizationRule for RemoveTrivialFilters {
    fn name(&self) -> &'static str {
        "RemoveTrivialFilters"
    }

    fn apply(
        &self,
        plan: &PlanRef,
        _captures: &Captures,
        context: &mut RuleContext<'_>,
    ) -> Result<RuleResult, OptimizerError> {
        let (filter_op, source) = filter_parts(self.name(), plan)?;

        if filter_op.predicate.is_true_constant() {
            debug!("Filter {} is always true, lifting {}", plan.id, source.id);

            return Ok(RuleResult::Replace(source.clone()));
        }
        if filter_op.predicate.is_false_constant() {
            let id = context.id_allocator().next_id()?;
            debug!("Filter {} is always false, replacing it with empty values {}", plan.id, id);

            let mut values = ValuesOperator::build(id, plan.output_columns(), vec![]);
            values.source_location = plan.source_location;

            return Ok(RuleResult::Replace(Arc::new(values)));
        }

        Ok(RuleResult::NoChange)
    }
}
