use crate::runner::{call, col, lit, optimize, table};
use ast::expr::Expression;
use ast::rel::logical::{JoinType, LogicalPlan};
use data::DataType;
use std::sync::Arc;

fn left_right() -> (Arc<LogicalPlan>, Arc<LogicalPlan>) {
    (
        table("l", &[("a", DataType::Integer)]),
        table("r", &[("b", DataType::Integer), ("c", DataType::Integer)]),
    )
}

#[test]
fn push_through_project() {
    let t = table("t", &[("x", DataType::Integer)]);
    let project = LogicalPlan::project(
        vec![Expression::alias(call("+", vec![col(&t, "x"), lit(1)]), "y")],
        t,
    );
    let plan = LogicalPlan::filter(call(">", vec![col(&project, "y"), lit(5)]), project);

    optimize(
        &plan,
        "
        |PROJECT||||
        | |output_exprs:||||
        | |  y|0|INTEGER|(x + 1)|
        | |source:||||
        | |  FILTER||||
        | |   |predicate:||||
        | |   |||BOOLEAN|((x + 1) > 5)|
        | |   |source:||||
        | |   |  TABLE(t)||||
        | |   |   |columns:||||
        | |   |   |  x|0|INTEGER||
        ",
    );
}

#[test]
fn push_through_inner_join() {
    let (l, r) = left_right();
    let condition = Expression::and(
        Expression::and(
            call(">", vec![col(&l, "a"), lit(1)]),
            call(">", vec![col(&r, "b"), lit(2)]),
        ),
        call("=", vec![col(&l, "a"), col(&r, "c")]),
    );
    let plan = LogicalPlan::filter(condition, LogicalPlan::join(l, r, JoinType::Inner, None));

    optimize(
        &plan,
        "
        |JOIN(INNER)||||
        | |on:||||
        | |||BOOLEAN|(a = c)|
        | |left:||||
        | |  FILTER||||
        | |   |predicate:||||
        | |   |||BOOLEAN|(a > 1)|
        | |   |source:||||
        | |   |  TABLE(l)||||
        | |   |   |columns:||||
        | |   |   |  a|0|INTEGER||
        | |right:||||
        | |  FILTER||||
        | |   |predicate:||||
        | |   |||BOOLEAN|(b > 2)|
        | |   |source:||||
        | |   |  TABLE(r)||||
        | |   |   |columns:||||
        | |   |   |  b|0|INTEGER||
        | |   |   |  c|1|INTEGER||
        ",
    );
}

#[test]
fn combine_then_push_through_join() {
    let (l, r) = left_right();
    let plan = LogicalPlan::filter(
        call(">", vec![col(&r, "b"), lit(2)]),
        LogicalPlan::filter(
            call(">", vec![col(&l, "a"), lit(1)]),
            LogicalPlan::join(Arc::clone(&l), Arc::clone(&r), JoinType::Inner, None),
        ),
    );

    optimize(
        &plan,
        "
        |JOIN(INNER)||||
        | |left:||||
        | |  FILTER||||
        | |   |predicate:||||
        | |   |||BOOLEAN|(a > 1)|
        | |   |source:||||
        | |   |  TABLE(l)||||
        | |   |   |columns:||||
        | |   |   |  a|0|INTEGER||
        | |right:||||
        | |  FILTER||||
        | |   |predicate:||||
        | |   |||BOOLEAN|(b > 2)|
        | |   |source:||||
        | |   |  TABLE(r)||||
        | |   |   |columns:||||
        | |   |   |  b|0|INTEGER||
        | |   |   |  c|1|INTEGER||
        ",
    );
}

#[test]
fn push_through_project_then_join() {
    let (l, r) = left_right();
    let join = LogicalPlan::join(Arc::clone(&l), Arc::clone(&r), JoinType::Inner, None);
    let project = LogicalPlan::project(
        vec![
            Expression::alias(call("+", vec![col(&l, "a"), lit(1)]), "y"),
            col(&r, "b"),
        ],
        join,
    );
    let plan = LogicalPlan::filter(
        Expression::and(
            call(">", vec![col(&project, "y"), lit(5)]),
            call("=", vec![col(&project, "b"), lit(2)]),
        ),
        project,
    );

    optimize(
        &plan,
        "
        |PROJECT||||
        | |output_exprs:||||
        | |  y|0|INTEGER|(a + 1)|
        | |  b|1|INTEGER|b|
        | |source:||||
        | |  JOIN(INNER)||||
        | |   |left:||||
        | |   |  FILTER||||
        | |   |   |predicate:||||
        | |   |   |||BOOLEAN|((a + 1) > 5)|
        | |   |   |source:||||
        | |   |   |  TABLE(l)||||
        | |   |   |   |columns:||||
        | |   |   |   |  a|0|INTEGER||
        | |   |right:||||
        | |   |  FILTER||||
        | |   |   |predicate:||||
        | |   |   |||BOOLEAN|(b = 2)|
        | |   |   |source:||||
        | |   |   |  TABLE(r)||||
        | |   |   |   |columns:||||
        | |   |   |   |  b|0|INTEGER||
        | |   |   |   |  c|1|INTEGER||
        ",
    );
}

#[test]
fn outer_join_not_pushed() {
    let (l, r) = left_right();
    let plan = LogicalPlan::filter(
        call(">", vec![col(&r, "b"), lit(2)]),
        LogicalPlan::join(l, r, JoinType::LeftOuter, None),
    );

    optimize(
        &plan,
        "
        |FILTER||||
        | |predicate:||||
        | |||BOOLEAN|(b > 2)|
        | |source:||||
        | |  JOIN(LEFT_OUTER)||||
        | |   |left:||||
        | |   |  TABLE(l)||||
        | |   |   |columns:||||
        | |   |   |  a|0|INTEGER||
        | |   |right:||||
        | |   |  TABLE(r)||||
        | |   |   |columns:||||
        | |   |   |  b|0|INTEGER||
        | |   |   |  c|1|INTEGER||
        ",
    );
}
