use crate::rule::Rule;
use crate::PlannerError;
use ast::expr::Expression;
use ast::rel::logical::LogicalPlan;
use ast::transform::transform_plan;
use std::sync::Arc;

/// Merges directly nested filters into a single filter, the inner condition goes first.
#[derive(Debug)]
pub struct CombineFilters {}

impl Rule for CombineFilters {
    fn name(&self) -> &'static str {
        "CombineFilters"
    }

    fn apply(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        transform_plan(plan, combine_filters)
    }
}

fn combine_filters(node: &Arc<LogicalPlan>) -> Result<Option<Arc<LogicalPlan>>, PlannerError> {
    if let LogicalPlan::Filter(outer) = node.as_ref() {
        if let LogicalPlan::Filter(inner) = outer.source.as_ref() {
            return Ok(Some(LogicalPlan::filter(
                Expression::and(inner.condition.clone(), outer.condition.clone()),
                Arc::clone(&inner.source),
            )));
        }
    }
    Ok(None)
}
