use super::changed;
use crate::rule::Rule;
use crate::PlannerError;
use ast::eval::{EvalScalar, InputRow};
use ast::expr::Expression;
use ast::rel::logical::LogicalPlan;
use ast::transform::{transform_expressions_down, transform_plan};
use std::sync::Arc;

/// Replaces expressions that don't depend on the input row with their value.
/// Any error evaluating an expression is reported now rather than at execution time.
#[derive(Debug)]
pub struct ConstantFolding {}

impl Rule for ConstantFolding {
    fn name(&self) -> &'static str {
        "ConstantFolding"
    }

    fn apply(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        transform_plan(plan, |node| {
            let new_node = transform_expressions_down(node, fold_expression)?;
            Ok(changed(node, new_node))
        })
    }
}

fn fold_expression(expr: &Expression) -> Result<Option<Expression>, PlannerError> {
    match expr {
        // Already a constant
        Expression::Literal(..) => Ok(None),
        expr if expr.foldable() => {
            let value = expr
                .eval_scalar(&InputRow::empty())
                .map_err(|source| PlannerError::ConstantFolding {
                    expression: expr.to_string(),
                    source,
                })?;
            Ok(Some(Expression::Literal(value, expr.data_type())))
        }
        _ => Ok(None),
    }
}
