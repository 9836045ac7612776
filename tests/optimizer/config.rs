use crate::runner::{call, col, lit, optimize_with, table};
use ast::expr::Expression;
use ast::rel::logical::{JoinType, LogicalPlan};
use data::DataType;
use planner::config::OptimizerConfig;
use planner::{Optimizer, PlannerError};

const DEFAULT_TOML: &str = r#"
[[batches]]
name = "ConstantFolding"
strategy = "once"
rules = ["ConstantFolding", "BooleanSimplification", "SimplifyFilters", "SimplifyCasts"]

[[batches]]
name = "Filter Pushdown"
strategy = "once"
rules = ["CombineFilters", "PushPredicateThroughProject", "PushPredicateThroughInnerJoin"]
"#;

#[test]
fn default_config_from_toml() {
    assert_eq!(
        OptimizerConfig::from_toml_str(DEFAULT_TOML).unwrap(),
        OptimizerConfig::default()
    );
}

#[test]
fn optimizer_from_toml() {
    let config = OptimizerConfig::from_toml_str(DEFAULT_TOML).unwrap();
    let optimizer = Optimizer::from_config(&config).unwrap();

    let l = table("l", &[("a", DataType::Integer)]);
    let r = table("r", &[("b", DataType::Integer)]);
    let plan = LogicalPlan::filter(
        Expression::and(
            call("=", vec![col(&l, "a"), col(&r, "b")]),
            call("<", vec![col(&r, "b"), call("+", vec![lit(1), lit(2)])]),
        ),
        LogicalPlan::join(l, r, JoinType::Inner, None),
    );

    let expected = "
        |JOIN(INNER)||||
        | |on:||||
        | |||BOOLEAN|(a = b)|
        | |left:||||
        | |  TABLE(l)||||
        | |   |columns:||||
        | |   |  a|0|INTEGER||
        | |right:||||
        | |  FILTER||||
        | |   |predicate:||||
        | |   |||BOOLEAN|(b < 3)|
        | |   |source:||||
        | |   |  TABLE(r)||||
        | |   |   |columns:||||
        | |   |   |  b|0|INTEGER||
        ";
    let from_toml = optimize_with(&optimizer, &plan, expected);
    let from_default = optimize_with(&Optimizer::default(), &plan, expected);
    assert_eq!(from_toml, from_default);
}

#[test]
fn unknown_rule_in_toml() {
    let config = OptimizerConfig::from_toml_str(
        r#"
        [[batches]]
        name = "Everything"
        strategy = { fixed_point = 100 }
        rules = ["ConstantFolding", "JoinReorder"]
        "#,
    )
    .unwrap();

    match Optimizer::from_config(&config) {
        Err(PlannerError::UnknownRule(name)) => assert_eq!(name, "JoinReorder"),
        other => panic!("Expected an unknown rule error, got {:?}", other),
    }
}

#[test]
fn malformed_toml() {
    let result = OptimizerConfig::from_toml_str("[[batches]]\nname = 5");
    assert!(matches!(result, Err(PlannerError::Config(_))));
}
