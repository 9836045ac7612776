use crate::runner::{call, col, lit, optimize, table};
use ast::eval::EvalError;
use ast::expr::Expression;
use ast::rel::logical::LogicalPlan;
use data::DataType;
use functions::FunctionError;
use planner::{Optimizer, PlannerError};

#[test]
fn fold_project() {
    let t = table("t", &[("x", DataType::Integer)]);
    let plan = LogicalPlan::project(
        vec![
            Expression::alias(
                call("+", vec![lit(1), call("*", vec![lit(2), lit(3)])]),
                "a",
            ),
            Expression::alias(
                call("+", vec![col(&t, "x"), call("-", vec![lit(4), lit(1)])]),
                "b",
            ),
        ],
        t,
    );

    optimize(
        &plan,
        "
        |PROJECT||||
        | |output_exprs:||||
        | |  a|0|INTEGER|7|
        | |  b|1|INTEGER|(x + 3)|
        | |source:||||
        | |  TABLE(t)||||
        | |   |columns:||||
        | |   |  x|0|INTEGER||
        ",
    );
}

#[test]
fn fold_filter_to_empty() {
    let t = table("t", &[("x", DataType::Integer)]);
    let plan = LogicalPlan::filter(call(">", vec![lit(1), lit(2)]), t);

    optimize(
        &plan,
        "
        |LOCAL_RELATION||||
        | |columns:||||
        | |  x|0|INTEGER||
        ",
    );
}

#[test]
fn fold_then_simplify_boolean() {
    let t = table("t", &[("x", DataType::Integer)]);
    let plan = LogicalPlan::filter(
        Expression::and(
            call(">", vec![col(&t, "x"), lit(1)]),
            call("<", vec![lit(1), lit(2)]),
        ),
        t,
    );

    optimize(
        &plan,
        "
        |FILTER||||
        | |predicate:||||
        | |||BOOLEAN|(x > 1)|
        | |source:||||
        | |  TABLE(t)||||
        | |   |columns:||||
        | |   |  x|0|INTEGER||
        ",
    );
}

#[test]
fn fold_always_true_filter_away() {
    let t = table("t", &[("x", DataType::Integer)]);
    let plan = LogicalPlan::filter(
        Expression::or(
            call(">", vec![col(&t, "x"), lit(1)]),
            call("=", vec![lit(2), lit(2)]),
        ),
        t.clone(),
    );

    let optimized = optimize(
        &plan,
        "
        |TABLE(t)||||
        | |columns:||||
        | |  x|0|INTEGER||
        ",
    );
    assert!(std::sync::Arc::ptr_eq(&optimized, &t));
}

#[test]
fn fold_and_remove_casts() {
    let t = table("t", &[("x", DataType::Integer)]);
    let plan = LogicalPlan::project(
        vec![
            Expression::alias(Expression::cast(col(&t, "x"), DataType::Integer), "y"),
            Expression::alias(Expression::cast(Expression::from("12"), DataType::BigInt), "z"),
        ],
        t,
    );

    optimize(
        &plan,
        "
        |PROJECT||||
        | |output_exprs:||||
        | |  y|0|INTEGER|x|
        | |  z|1|BIGINT|12|
        | |source:||||
        | |  TABLE(t)||||
        | |   |columns:||||
        | |   |  x|0|INTEGER||
        ",
    );
}

#[test]
fn fold_error_is_reported() {
    let t = table("t", &[("x", DataType::Integer)]);
    let plan = LogicalPlan::project(
        vec![Expression::alias(call("/", vec![lit(1), lit(0)]), "a")],
        t,
    );

    let err = Optimizer::default().optimize(&plan).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error folding constant expression (1 / 0): Error evaluating /: Division by zero"
    );
    match err {
        PlannerError::ConstantFolding { source, .. } => assert_eq!(
            source,
            EvalError::Function {
                function: "/",
                source: FunctionError::DivideByZero
            }
        ),
        other => panic!("Expected a folding error, got {:?}", other),
    }
}

#[test]
fn bad_cast_is_reported() {
    let t = table("t", &[("x", DataType::Integer)]);
    let plan = LogicalPlan::filter(
        call(
            ">",
            vec![
                col(&t, "x"),
                Expression::cast(Expression::from("abc"), DataType::Integer),
            ],
        ),
        t,
    );

    match Optimizer::default().optimize(&plan) {
        Err(PlannerError::ConstantFolding { expression, .. }) => {
            assert_eq!(expression, "cast('abc' as INTEGER)")
        }
        other => panic!("Expected a folding error, got {:?}", other),
    }
}
