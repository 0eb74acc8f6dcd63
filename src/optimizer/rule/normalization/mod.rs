use crate::errors::OptimizerError;
use crate::optimizer::core::pattern::{Captures, Pattern};
use crate::optimizer::core::rule::{MatchPattern, NormalizationRule, RuleContext, RuleResult};
use crate::optimizer::rule::normalization::simplification::{ConstantCalculation, RemoveTrivialFilters};
use crate::planner::PlanRef;

pub mod simplification;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NormalizationRuleImpl {
    // Simplification
    ConstantCalculation,
    RemoveTrivialFilters,
}

impl MatchPattern for NormalizationRuleImpl {
    fn pattern(&self) -> &Pattern {
        match self {
            NormalizationRuleImpl::ConstantCalculation => ConstantCalculation.pattern(),
            NormalizationRuleImpl::RemoveTrivialFilters => RemoveTrivialFilters.pattern(),
        }
    }
}

impl NormalizationRule for NormalizationRuleImpl {
    fn name(&self) -> &'static str {
        match self {
            NormalizationRuleImpl::ConstantCalculation => ConstantCalculation.name(),
            NormalizationRuleImpl::RemoveTrivialFilters => RemoveTrivialFilters.name(),
        }
    }

    fn apply(
        &self,
        plan: &PlanRef,
        captures: &Captures,
        context: &mut RuleContext<'_>,
    ) -> Result<RuleResult, OptimizerError> {
        match self {
            NormalizationRuleImpl::ConstantCalculation => {
                ConstantCalculation.apply(plan, captures, context)
            }
            NormalizationRuleImpl::RemoveTrivialFilters => {
                RemoveTrivialFilters.apply(plan, captures, context)
            }
        }
    }
}
