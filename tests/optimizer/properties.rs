use crate::runner::{assert_same_output, call, col, lit, table};
use ast::expr::Expression;
use ast::rel::logical::{JoinType, LogicalPlan};
use data::DataType;
use planner::p2_optimization::rule_by_name;
use planner::Optimizer;
use std::sync::Arc;
use std::thread;

const RULES: &[&str] = &[
    "ConstantFolding",
    "BooleanSimplification",
    "SimplifyFilters",
    "SimplifyCasts",
    "CombineFilters",
    "PushPredicateThroughProject",
    "PushPredicateThroughInnerJoin",
];

/// A handful of plans covering every rule
fn sample_plans() -> Vec<Arc<LogicalPlan>> {
    let t = table("t", &[("x", DataType::Integer), ("s", DataType::Text)]);
    let l = table("l", &[("a", DataType::Integer)]);
    let r = table("r", &[("b", DataType::Integer), ("c", DataType::Integer)]);

    let folded_project = LogicalPlan::project(
        vec![
            Expression::alias(call("+", vec![lit(1), lit(2)]), "three"),
            Expression::alias(Expression::cast(col(&t, "x"), DataType::Integer), "x2"),
            col(&t, "s"),
        ],
        Arc::clone(&t),
    );

    let nested_filters = LogicalPlan::filter(
        Expression::or(
            call(">", vec![col(&t, "x"), lit(1)]),
            Expression::from(false),
        ),
        LogicalPlan::filter(
            Expression::and(Expression::from(true), call("is_null", vec![col(&t, "s")])),
            Arc::clone(&t),
        ),
    );

    let impossible = LogicalPlan::filter(
        Expression::null(DataType::Boolean),
        Arc::clone(&t),
    );

    let project = LogicalPlan::project(
        vec![
            Expression::alias(call("+", vec![col(&l, "a"), lit(1)]), "y"),
            col(&r, "b"),
            col(&r, "c"),
        ],
        LogicalPlan::join(Arc::clone(&l), Arc::clone(&r), JoinType::Inner, None),
    );
    let filtered_project = LogicalPlan::filter(
        Expression::and(
            call(">", vec![col(&project, "y"), lit(5)]),
            call("=", vec![col(&project, "b"), col(&project, "c")]),
        ),
        project,
    );

    let join = LogicalPlan::filter(
        call("=", vec![col(&l, "a"), col(&r, "c")]),
        LogicalPlan::join(
            Arc::clone(&l),
            Arc::clone(&r),
            JoinType::Inner,
            Some(call(">", vec![col(&r, "b"), call("*", vec![lit(2), lit(3)])])),
        ),
    );

    let s = table("s", &[("d", DataType::Integer)]);
    let nested_joins = LogicalPlan::filter(
        Expression::and(
            call(">", vec![col(&l, "a"), lit(1)]),
            call(">", vec![col(&r, "b"), lit(2)]),
        ),
        LogicalPlan::join(
            LogicalPlan::join(Arc::clone(&l), Arc::clone(&r), JoinType::Inner, None),
            s,
            JoinType::Inner,
            None,
        ),
    );

    let inner = LogicalPlan::project(
        vec![Expression::alias(call("+", vec![col(&t, "x"), lit(1)]), "y")],
        Arc::clone(&t),
    );
    let outer = LogicalPlan::project(
        vec![Expression::alias(call("+", vec![col(&inner, "y"), lit(1)]), "z")],
        inner,
    );
    let stacked_projects = LogicalPlan::filter(call(">", vec![col(&outer, "z"), lit(2)]), outer);

    vec![
        folded_project,
        nested_filters,
        impossible,
        filtered_project,
        join,
        nested_joins,
        stacked_projects,
    ]
}

#[test]
fn optimizing_preserves_output() {
    let optimizer = Optimizer::default();
    for plan in sample_plans() {
        let optimized = optimizer.optimize(&plan).unwrap();
        assert_same_output(&plan, &optimized);
    }
}

#[test]
fn rules_are_idempotent() {
    for name in RULES {
        let rule = rule_by_name(name).unwrap();
        for plan in sample_plans() {
            let once = rule.apply(&plan).unwrap();
            let twice = rule.apply(&once).unwrap();
            assert_eq!(once, twice, "{} isn't idempotent for {:?}", name, plan);
            assert_same_output(&plan, &once);
        }
    }
}

#[test]
fn optimize_from_many_threads() {
    let optimizer = Arc::new(Optimizer::default());
    let plans = sample_plans();
    let expected: Vec<_> = plans
        .iter()
        .map(|plan| optimizer.optimize(plan).unwrap())
        .collect();

    let handles: Vec<_> = plans
        .into_iter()
        .map(|plan| {
            let optimizer = Arc::clone(&optimizer);
            thread::spawn(move || optimizer.optimize(&plan).unwrap())
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
