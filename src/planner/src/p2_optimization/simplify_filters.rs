use crate::rule::Rule;
use crate::PlannerError;
use ast::expr::Expression;
use ast::rel::logical::LogicalPlan;
use ast::transform::transform_plan;
use data::Datum;
use std::sync::Arc;

/// Removes filters that always pass, and replaces filters that never pass with an empty
/// relation producing the same attributes.
#[derive(Debug)]
pub struct SimplifyFilters {}

impl Rule for SimplifyFilters {
    fn name(&self) -> &'static str {
        "SimplifyFilters"
    }

    fn apply(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        transform_plan(plan, simplify_filter)
    }
}

fn simplify_filter(node: &Arc<LogicalPlan>) -> Result<Option<Arc<LogicalPlan>>, PlannerError> {
    if let LogicalPlan::Filter(filter) = node.as_ref() {
        match &filter.condition {
            Expression::Literal(Datum::Boolean(true), _) => {
                return Ok(Some(Arc::clone(&filter.source)))
            }
            Expression::Literal(Datum::Boolean(false), _) | Expression::Literal(Datum::Null, _) => {
                return Ok(Some(LogicalPlan::local_relation(filter.source.output())))
            }
            _ => {}
        }
    }
    Ok(None)
}
