use crate::errors::OptimizerError;
use crate::optimizer::core::pattern::{Captures, Pattern};
use crate::planner::id_allocator::PlanNodeIdAllocator;
use crate::planner::PlanRef;

pub trait MatchPattern {
    fn pattern(&self) -> &Pattern;
}

/// What applying a rule to a node produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleResult {
    /// The rule does not apply; the node stays as it is.
    NoChange,
    /// The matched node is to be replaced, in the surrounding tree, by this node.
    Replace(PlanRef),
}

impl RuleResult {
    pub fn is_no_change(&self) -> bool {
        matches!(self, RuleResult::NoChange)
    }

    pub fn transformed_plan(&self) -> Option<&PlanRef> {
        match self {
            RuleResult::NoChange => None,
            RuleResult::Replace(plan) => Some(plan),
        }
    }
}

/// Services available to a rule while it is applied.
pub struct RuleContext<'a> {
    id_allocator: &'a mut PlanNodeIdAllocator,
}

impl<'a> RuleContext<'a> {
    pub fn new(id_allocator: &'a mut PlanNodeIdAllocator) -> Self {
        RuleContext { id_allocator }
    }

    pub fn id_allocator(&mut self) -> &mut PlanNodeIdAllocator {
        self.id_allocator
    }
}

/// A local rewrite of one plan node.
///
/// Rules are only offered nodes their [`pattern`](MatchPattern::pattern) accepts.
/// They must not mutate the plan they are given: a rewrite is expressed by
/// returning [`RuleResult::Replace`], and the caller splices it into the tree.
pub trait NormalizationRule: MatchPattern {
    fn name(&self) -> &'static str;

    fn apply(
        &self,
        plan: &PlanRef,
        captures: &Captures,
        context: &mut RuleContext<'_>,
    ) -> Result<RuleResult, OptimizerError>;
}
