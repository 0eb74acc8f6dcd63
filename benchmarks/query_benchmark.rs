use criterion::{criterion_group, criterion_main, Criterion};
use plan_rewriter::catalog::{ColumnCatalog, ColumnDesc};
use plan_rewriter::expression::{BinaryOperator, ScalarExpression, FALSE_CONSTANT, TRUE_CONSTANT};
use plan_rewriter::optimizer::heuristic::batch::HepBatchStrategy;
use plan_rewriter::optimizer::heuristic::optimizer::HepOptimizer;
use plan_rewriter::optimizer::rule::normalization::NormalizationRuleImpl;
use plan_rewriter::planner::operator::filter::FilterOperator;
use plan_rewriter::planner::operator::table_scan::TableScanOperator;
use plan_rewriter::planner::{PlanNodeId, PlanRef};
use plan_rewriter::types::LogicalType;
use std::sync::Arc;

const FILTER_DEPTH: usize = 256;

/// A chain of filters over one scan, mixing sentinels and foldable predicates.
fn filter_chain() -> PlanRef {
    let columns = vec![Arc::new(ColumnCatalog::new(
        "c1".to_string(),
        true,
        ColumnDesc::new(LogicalType::Integer),
    ))];
    let mut plan: PlanRef = Arc::new(TableScanOperator::build(PlanNodeId::new(0), "t1".into(), columns));

    for id in 1..=FILTER_DEPTH {
        let predicate = match id % 3 {
            0 => TRUE_CONSTANT.clone(),
            1 => ScalarExpression::binary(
                BinaryOperator::Eq,
                ScalarExpression::constant(id as i32),
                ScalarExpression::constant(id as i32),
            ),
            2 if id == FILTER_DEPTH - 2 => FALSE_CONSTANT.clone(),
            _ => ScalarExpression::binary(
                BinaryOperator::Lt,
                ScalarExpression::constant(1),
                ScalarExpression::constant(2),
            ),
        };
        plan = Arc::new(FilterOperator::build(PlanNodeId::new(id), predicate, plan));
    }

    plan
}

fn rewrite_benchmark(c: &mut Criterion) {
    let plan = filter_chain();

    c.bench_function("remove trivial filters over a filter chain", |b| {
        b.iter(|| {
            HepOptimizer::new(plan.clone())
                .batch(
                    "simplification".to_string(),
                    HepBatchStrategy::fix_point_bottomup(10),
                    vec![
                        NormalizationRuleImpl::ConstantCalculation,
                        NormalizationRuleImpl::RemoveTrivialFilters,
                    ],
                )
                .find_best()
        })
    });
}

criterion_group!(
    name = query_benches;
    config = Criterion::default().sample_size(10);
    targets = rewrite_benchmark
);

criterion_main!(query_benches);
