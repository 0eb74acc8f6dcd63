use crate::errors::OptimizerError;
use crate::planner::{LogicalPlan, PlanNodeId};

/// Hands out plan node ids for the duration of one optimization run.
///
/// The allocator is owned by whoever drives the run and lent to rules through
/// [`RuleContext`](crate::optimizer::core::rule::RuleContext); it is never shared
/// between runs. Ids are never reused, even after a node they named was removed.
/// Once `usize::MAX` has been handed out the allocator is exhausted and
/// [`next_id`](Self::next_id) fails.
#[derive(Debug)]
pub struct PlanNodeIdAllocator {
    next_id: Option<usize>,
}

impl Default for PlanNodeIdAllocator {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl PlanNodeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next_id: usize) -> Self {
        PlanNodeIdAllocator {
            next_id: Some(next_id),
        }
    }

    /// Starts past every id already present in `plan`.
    pub fn starting_after(plan: &LogicalPlan) -> Self {
        PlanNodeIdAllocator {
            next_id: plan.max_id().index().checked_add(1),
        }
    }

    pub fn next_id(&mut self) -> Result<PlanNodeId, OptimizerError> {
        let id = self.next_id.ok_or(OptimizerError::PlanNodeIdExhausted)?;
        self.next_id = id.checked_add(1);

        Ok(PlanNodeId::new(id))
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> Option<PlanNodeId> {
        self.next_id.map(PlanNodeId::new)
    }
}
