use crate::rule::Rule;
use crate::PlannerError;
use ast::expr::Expression;
use ast::rel::logical::LogicalPlan;
use ast::transform::transform_all_expressions;
use std::sync::Arc;

/// Removes casts to the type the expression already has, anywhere in the plan.
#[derive(Debug)]
pub struct SimplifyCasts {}

impl Rule for SimplifyCasts {
    fn name(&self) -> &'static str {
        "SimplifyCasts"
    }

    fn apply(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        transform_all_expressions(plan, remove_redundant_cast)
    }
}

fn remove_redundant_cast(expr: &Expression) -> Result<Option<Expression>, PlannerError> {
    match expr {
        Expression::Cast(cast) if cast.expr.data_type() == cast.datatype => {
            Ok(Some(cast.expr.as_ref().clone()))
        }
        _ => Ok(None),
    }
}
