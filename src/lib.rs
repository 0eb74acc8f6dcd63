//! Rule-based rewriting of logical query plans.
//!
//! Plans are immutable [`planner::LogicalPlan`] trees shared through `Arc`.
//! A [`optimizer::core::rule::NormalizationRule`] is offered the nodes its
//! pattern matches and answers with a [`optimizer::core::rule::RuleResult`];
//! the [`optimizer::heuristic::optimizer::HepOptimizer`] splices the results
//! back into a new tree.
pub mod catalog;
pub mod errors;
pub mod expression;
pub mod optimizer;
pub mod planner;
pub mod types;
