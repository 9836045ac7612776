use crate::runner::{call, col, lit, optimize, optimize_with, table};
use ast::expr::Expression;
use ast::rel::logical::{JoinType, LogicalPlan};
use data::DataType;
use planner::config::{OptimizerConfig, StrategyConfig};
use planner::Optimizer;
use std::sync::Arc;

/// where 1 = 2 over an inner join
fn impossible_join() -> Arc<LogicalPlan> {
    let l = table("l", &[("a", DataType::Integer)]);
    let r = table("r", &[("b", DataType::Integer), ("c", DataType::Integer)]);
    LogicalPlan::filter(
        call("=", vec![lit(1), lit(2)]),
        LogicalPlan::join(l, r, JoinType::Inner, None),
    )
}

#[test]
fn folding_before_pushdown() {
    // Folding first notices the filter can never pass and the whole join goes away.
    optimize(
        &impossible_join(),
        "
        |LOCAL_RELATION||||
        | |columns:||||
        | |  a|0|INTEGER||
        | |  b|1|INTEGER||
        | |  c|2|INTEGER||
        ",
    );
}

#[test]
fn pushdown_before_folding() {
    // With the batches swapped the constant condition gets pushed into the join first,
    // only the right side ends up empty and we're left still doing the join.
    let mut config = OptimizerConfig::default();
    config.batches.reverse();
    let optimizer = Optimizer::from_config(&config).unwrap();

    optimize_with(
        &optimizer,
        &impossible_join(),
        "
        |JOIN(INNER)||||
        | |left:||||
        | |  TABLE(l)||||
        | |   |columns:||||
        | |   |  a|0|INTEGER||
        | |right:||||
        | |  LOCAL_RELATION||||
        | |   |columns:||||
        | |   |  b|0|INTEGER||
        | |   |  c|1|INTEGER||
        ",
    );
}

/// where z > 2 over (select y + 1 as z from (select x + 1 as y from t where y > 1))
fn stacked_projects() -> Arc<LogicalPlan> {
    let t = table("t", &[("x", DataType::Integer)]);
    let inner = LogicalPlan::project(
        vec![Expression::alias(call("+", vec![col(&t, "x"), lit(1)]), "y")],
        t,
    );
    let inner = LogicalPlan::filter(call(">", vec![col(&inner, "y"), lit(1)]), inner);
    let outer = LogicalPlan::project(
        vec![Expression::alias(call("+", vec![col(&inner, "y"), lit(1)]), "z")],
        inner,
    );
    LogicalPlan::filter(call(">", vec![col(&outer, "z"), lit(2)]), outer)
}

fn pushdown_optimizer(strategy: StrategyConfig) -> Optimizer {
    let mut config = OptimizerConfig::default();
    config.batches.retain(|batch| batch.name == "Filter Pushdown");
    config.batches[0].strategy = strategy;
    Optimizer::from_config(&config).unwrap()
}

#[test]
fn pushdown_to_fixed_point() {
    let optimizer = pushdown_optimizer(StrategyConfig::FixedPoint(10));
    let plan = stacked_projects();

    optimize_with(
        &optimizer,
        &plan,
        "
        |PROJECT||||
        | |output_exprs:||||
        | |  z|0|INTEGER|(y + 1)|
        | |source:||||
        | |  PROJECT||||
        | |   |output_exprs:||||
        | |   |  y|0|INTEGER|(x + 1)|
        | |   |source:||||
        | |   |  FILTER||||
        | |   |   |predicate:||||
        | |   |   |||BOOLEAN|and(((x + 1) > 1), (((x + 1) + 1) > 2))|
        | |   |   |source:||||
        | |   |   |  TABLE(t)||||
        | |   |   |   |columns:||||
        | |   |   |   |  x|0|INTEGER||
        ",
    );

    let (_, trace) = optimizer.optimize_with_trace(&plan).unwrap();
    let batch = &trace.batches[0];
    // Push both filters down, combine them, then one more pass to see nothing changes.
    assert_eq!(batch.passes, 3);
    assert!(batch.converged);
    assert_eq!(
        batch.effective_rules,
        vec!["PushPredicateThroughProject", "CombineFilters"]
    );
}

#[test]
fn pushdown_iteration_cap() {
    // Running out of iterations isn't an error, the optimizer hands back the plan from the
    // last pass even though it could have gone further.
    let optimizer = pushdown_optimizer(StrategyConfig::FixedPoint(1));
    let plan = stacked_projects();

    optimize_with(
        &optimizer,
        &plan,
        "
        |PROJECT||||
        | |output_exprs:||||
        | |  z|0|INTEGER|(y + 1)|
        | |source:||||
        | |  PROJECT||||
        | |   |output_exprs:||||
        | |   |  y|0|INTEGER|(x + 1)|
        | |   |source:||||
        | |   |  FILTER||||
        | |   |   |predicate:||||
        | |   |   |||BOOLEAN|(((x + 1) + 1) > 2)|
        | |   |   |source:||||
        | |   |   |  FILTER||||
        | |   |   |   |predicate:||||
        | |   |   |   |||BOOLEAN|((x + 1) > 1)|
        | |   |   |   |source:||||
        | |   |   |   |  TABLE(t)||||
        | |   |   |   |   |columns:||||
        | |   |   |   |   |  x|0|INTEGER||
        ",
    );

    let (_, trace) = optimizer.optimize_with_trace(&plan).unwrap();
    assert_eq!(trace.batches[0].passes, 1);
    assert!(!trace.batches[0].converged);
}

#[test]
fn default_trace() {
    let (_, trace) = Optimizer::default()
        .optimize_with_trace(&impossible_join())
        .unwrap();

    let names: Vec<_> = trace.batches.iter().map(|batch| batch.name.as_str()).collect();
    assert_eq!(names, vec!["ConstantFolding", "Filter Pushdown"]);
    assert_eq!(
        trace.batches[0].effective_rules,
        vec!["ConstantFolding", "SimplifyFilters"]
    );
    assert!(trace.batches[1].effective_rules.is_empty());
}
