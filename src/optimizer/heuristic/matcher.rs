use crate::optimizer::core::pattern::{Captures, Pattern, PatternChildrenPredicate, PatternMatcher};
use crate::planner::operator::Operator;
use crate::planner::PlanRef;

/// Use pattern to determines which rule can be applied
pub struct HepMatcher<'a, 'b> {
    pattern: &'a Pattern,
    plan: &'b PlanRef,
}

impl<'a, 'b> HepMatcher<'a, 'b> {
    pub fn new(pattern: &'a Pattern, plan: &'b PlanRef) -> Self {
        Self { pattern, plan }
    }

    fn match_with_captures(pattern: &Pattern, plan: &PlanRef, captures: &mut Captures) -> bool {
        // check the root node predicate
        if !(pattern.predicate)(&plan.operator) {
            return false;
        }
        if let Some(name) = pattern.capture {
            captures.insert(name, plan.clone());
        }

        match &pattern.children {
            PatternChildrenPredicate::Recursive => {
                fn all_match(predicate: fn(&Operator) -> bool, plan: &PlanRef) -> bool {
                    plan.childrens
                        .iter()
                        .all(|child| predicate(&child.operator) && all_match(predicate, child))
                }

                all_match(pattern.predicate, plan)
            }
            PatternChildrenPredicate::Predicate(patterns) => {
                patterns.len() == plan.childrens.len()
                    && patterns
                        .iter()
                        .zip(plan.childrens.iter())
                        .all(|(pattern, child)| Self::match_with_captures(pattern, child, captures))
            }
            PatternChildrenPredicate::None => true,
        }
    }
}

impl PatternMatcher for HepMatcher<'_, '_> {
    fn match_opt_expr(&self) -> Option<Captures> {
        let mut captures = Captures::empty();

        Self::match_with_captures(self.pattern, self.plan, &mut captures).then_some(captures)
    }
}

#[cfg(test)]
mod tests {
    use crate::expression::{FALSE_CONSTANT, TRUE_CONSTANT};
    use crate::optimizer::core::pattern::{Pattern, PatternChildrenPredicate, PatternMatcher};
    use crate::optimizer::heuristic::matcher::HepMatcher;
    use crate::planner::operator::filter::FilterOperator;
    use crate::planner::operator::values::ValuesOperator;
    use crate::planner::operator::Operator;
    use crate::planner::test::{build_t_columns, build_t_scan};
    use crate::planner::PlanNodeId;
    use std::sync::Arc;

    #[test]
    fn test_predicate() {
        let scan = build_t_scan(0);
        let plan = Arc::new(FilterOperator::build(PlanNodeId::new(1), TRUE_CONSTANT.clone(), scan.clone()));

        let filter_into_table_scan_pattern = Pattern {
            predicate: |op| matches!(op, Operator::Filter(_)),
            capture: None,
            children: PatternChildrenPredicate::Predicate(vec![Pattern {
                predicate: |op| matches!(op, Operator::TableScan(_)),
                capture: Some("scan"),
                children: PatternChildrenPredicate::None,
            }]),
        };

        let captures = HepMatcher::new(&filter_into_table_scan_pattern, &plan).match_opt_expr();
        let captures = captures.expect("filter over a scan should match");

        assert_eq!(captures.len(), 1);
        assert!(Arc::ptr_eq(captures.get("scan").unwrap(), &scan));
        assert!(captures.get("filter").is_none());

        // the root predicate fails on the scan itself
        assert!(HepMatcher::new(&filter_into_table_scan_pattern, &scan)
            .match_opt_expr()
            .is_none());
    }

    #[test]
    fn test_child_mismatch() {
        let values = Arc::new(ValuesOperator::build(PlanNodeId::new(0), build_t_columns(), vec![]));
        let plan = Arc::new(FilterOperator::build(PlanNodeId::new(1), TRUE_CONSTANT.clone(), values));

        let filter_into_table_scan_pattern = Pattern {
            predicate: |op| matches!(op, Operator::Filter(_)),
            capture: Some("filter"),
            children: PatternChildrenPredicate::Predicate(vec![Pattern {
                predicate: |op| matches!(op, Operator::TableScan(_)),
                capture: None,
                children: PatternChildrenPredicate::None,
            }]),
        };

        assert!(HepMatcher::new(&filter_into_table_scan_pattern, &plan)
            .match_opt_expr()
            .is_none());
    }

    #[test]
    fn test_recursive() {
        let inner = Arc::new(FilterOperator::build(PlanNodeId::new(1), FALSE_CONSTANT.clone(), build_t_scan(0)));
        let plan = Arc::new(FilterOperator::build(PlanNodeId::new(2), TRUE_CONSTANT.clone(), inner.clone()));

        let only_filter_pattern = Pattern {
            predicate: |op| matches!(op, Operator::Filter(_)),
            capture: None,
            children: PatternChildrenPredicate::Recursive,
        };
        let no_values_pattern = Pattern {
            predicate: |op| !matches!(op, Operator::Values(_)),
            capture: Some("root"),
            children: PatternChildrenPredicate::Recursive,
        };

        assert!(HepMatcher::new(&only_filter_pattern, &plan)
            .match_opt_expr()
            .is_none());

        let captures = HepMatcher::new(&no_values_pattern, &plan)
            .match_opt_expr()
            .expect("no values node in the plan");
        assert!(Arc::ptr_eq(captures.get("root").unwrap(), &plan));
    }
}
