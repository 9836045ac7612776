use super::changed;
use crate::rule::Rule;
use crate::PlannerError;
use ast::expr::Expression;
use ast::rel::logical::LogicalPlan;
use ast::transform::{transform_expressions_up, transform_plan};
use data::Datum;
use std::sync::Arc;

/// Removes literal true/false operands from ands and ors.
/// Runs bottom up so nested operands have already been simplified by the time their parent
/// is looked at.
#[derive(Debug)]
pub struct BooleanSimplification {}

impl Rule for BooleanSimplification {
    fn name(&self) -> &'static str {
        "BooleanSimplification"
    }

    fn apply(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        transform_plan(plan, |node| {
            let new_node = transform_expressions_up(node, simplify_expression)?;
            Ok(changed(node, new_node))
        })
    }
}

fn simplify_expression(expr: &Expression) -> Result<Option<Expression>, PlannerError> {
    let simplified = match expr {
        Expression::And(left, right) => match (literal_bool(left), literal_bool(right)) {
            (Some(true), _) => Some(right.as_ref().clone()),
            (_, Some(true)) => Some(left.as_ref().clone()),
            (Some(false), _) | (_, Some(false)) => Some(Expression::from(false)),
            _ => None,
        },
        Expression::Or(left, right) => match (literal_bool(left), literal_bool(right)) {
            (Some(false), _) => Some(right.as_ref().clone()),
            (_, Some(false)) => Some(left.as_ref().clone()),
            (Some(true), _) | (_, Some(true)) => Some(Expression::from(true)),
            _ => None,
        },
        _ => None,
    };
    Ok(simplified)
}

fn literal_bool(expr: &Expression) -> Option<bool> {
    match expr {
        Expression::Literal(Datum::Boolean(b), _) => Some(*b),
        _ => None,
    }
}
