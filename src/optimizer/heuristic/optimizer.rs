use crate::errors::OptimizerError;
use crate::optimizer::core::pattern::PatternMatcher;
use crate::optimizer::core::rule::{MatchPattern, NormalizationRule, RuleContext, RuleResult};
use crate::optimizer::heuristic::batch::{HepBatch, HepBatchStrategy, HepMatchOrder};
use crate::optimizer::heuristic::matcher::HepMatcher;
use crate::optimizer::rule::normalization::NormalizationRuleImpl;
use crate::planner::id_allocator::PlanNodeIdAllocator;
use crate::planner::PlanRef;
use log::debug;
use std::mem;
use std::sync::Arc;

/// Runs batches of normalization rules over a plan.
///
/// The optimizer owns the id allocator for the whole run. Rewrites never touch
/// the input plan: every pass produces a new root that shares all unchanged
/// sub-trees with the previous one.
pub struct HepOptimizer {
    batches: Vec<HepBatch>,
    plan: PlanRef,
    id_allocator: PlanNodeIdAllocator,
}

impl HepOptimizer {
    pub fn new(root: PlanRef) -> Self {
        Self {
            batches: vec![],
            id_allocator: PlanNodeIdAllocator::starting_after(&root),
            plan: root,
        }
    }

    pub fn batch(
        mut self,
        name: String,
        strategy: HepBatchStrategy,
        rules: Vec<NormalizationRuleImpl>,
    ) -> Self {
        self.batches.push(HepBatch::new(name, strategy, rules));
        self
    }

    /// Replaces the allocator seeded from the plan, e.g. with a range reserved for this run.
    pub fn with_id_allocator(mut self, id_allocator: PlanNodeIdAllocator) -> Self {
        self.id_allocator = id_allocator;
        self
    }

    pub fn find_best(mut self) -> Result<PlanRef, OptimizerError> {
        for batch in mem::take(&mut self.batches) {
            let mut iteration = 1usize;
            let mut fix_point = false;

            while iteration <= batch.strategy.max_iteration {
                if !self.apply_batch(&batch)? {
                    fix_point = true;
                    break;
                }

                iteration += 1;
            }

            if fix_point {
                debug!("Batch `{}` reached fix point after {} iteration(s)", batch.name, iteration);
            } else {
                debug!(
                    "Batch `{}` stopped at max iteration {}",
                    batch.name, batch.strategy.max_iteration
                );
            }
        }

        Ok(self.plan)
    }

    /// One pass over the whole plan. Returns whether anything was rewritten.
    fn apply_batch(
        &mut self,
        HepBatch {
            rules, strategy, ..
        }: &HepBatch,
    ) -> Result<bool, OptimizerError> {
        let root = self.plan.clone();
        let (plan, has_apply) = self.rewrite(&root, rules, strategy.match_order)?;

        self.plan = plan;
        Ok(has_apply)
    }

    fn rewrite(
        &mut self,
        plan: &PlanRef,
        rules: &[NormalizationRuleImpl],
        order: HepMatchOrder,
    ) -> Result<(PlanRef, bool), OptimizerError> {
        match order {
            HepMatchOrder::TopDown => {
                let (plan, applied) = self.apply_rules(plan, rules)?;
                let (plan, childrens_applied) = self.rewrite_childrens(&plan, rules, order)?;

                Ok((plan, applied || childrens_applied))
            }
            HepMatchOrder::BottomUp => {
                let (plan, childrens_applied) = self.rewrite_childrens(plan, rules, order)?;
                let (plan, applied) = self.apply_rules(&plan, rules)?;

                Ok((plan, applied || childrens_applied))
            }
        }
    }

    fn rewrite_childrens(
        &mut self,
        plan: &PlanRef,
        rules: &[NormalizationRuleImpl],
        order: HepMatchOrder,
    ) -> Result<(PlanRef, bool), OptimizerError> {
        let mut has_apply = false;
        let mut childrens = Vec::with_capacity(plan.childrens.len());

        for child in plan.childrens.iter() {
            let (child, applied) = self.rewrite(child, rules, order)?;

            has_apply |= applied;
            childrens.push(child);
        }
        if !has_apply {
            return Ok((plan.clone(), false));
        }

        Ok((Arc::new(plan.with_childrens(childrens)), true))
    }

    fn apply_rules(
        &mut self,
        plan: &PlanRef,
        rules: &[NormalizationRuleImpl],
    ) -> Result<(PlanRef, bool), OptimizerError> {
        let mut plan = plan.clone();
        let mut has_apply = false;

        for rule in rules {
            let Some(captures) = HepMatcher::new(rule.pattern(), &plan).match_opt_expr() else {
                continue;
            };
            let mut context = RuleContext::new(&mut self.id_allocator);

            if let RuleResult::Replace(new_plan) = rule.apply(&plan, &captures, &mut context)? {
                debug!(
                    "Rule `{}` rewrote {} into {} {}",
                    rule.name(),
                    plan.id,
                    new_plan.id,
                    new_plan.operator
                );
                plan = new_plan;
                has_apply = true;
            }
        }

        Ok((plan, has_apply))
    }
}
