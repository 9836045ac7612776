use crate::rule::Rule;
use crate::PlannerError;
use ast::expr::{ExprId, Expression};
use ast::rel::logical::LogicalPlan;
use ast::transform::transform_plan;
use std::collections::HashMap;
use std::sync::Arc;

/// Pushes a filter below the projection it sits on.
/// References in the condition to attributes produced by aliases are replaced with the
/// aliased expression, so `y > 5` over `x + 1 AS y` becomes `(x + 1) > 5`.
#[derive(Debug)]
pub struct PushPredicateThroughProject {}

impl Rule for PushPredicateThroughProject {
    fn name(&self) -> &'static str {
        "PushPredicateThroughProject"
    }

    fn apply(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        transform_plan(plan, push_through_project)
    }
}

fn push_through_project(node: &Arc<LogicalPlan>) -> Result<Option<Arc<LogicalPlan>>, PlannerError> {
    let (filter, project) = match node.as_ref() {
        LogicalPlan::Filter(filter) => match filter.source.as_ref() {
            LogicalPlan::Project(project) => (filter, project),
            _ => return Ok(None),
        },
        _ => return Ok(None),
    };

    let aliases: HashMap<ExprId, &Expression> = project
        .fields
        .iter()
        .filter_map(|field| match field {
            Expression::Alias(alias) => Some((alias.id, alias.expr.as_ref())),
            _ => None,
        })
        .collect();

    // Bottom up so substituted expressions are never visited themselves.
    let condition = filter.condition.transform_up(|expr| match expr {
        Expression::AttributeReference(attribute) => {
            Ok::<_, PlannerError>(aliases.get(&attribute.id).map(|source| (*source).clone()))
        }
        _ => Ok(None),
    })?;

    // The new filter sits below the part of the plan transform_plan has already visited, so
    // keep going if it landed on another projection.
    let filter = LogicalPlan::filter(condition, Arc::clone(&project.source));
    let source = push_through_project(&filter)?.unwrap_or(filter);

    Ok(Some(LogicalPlan::project(project.fields.clone(), source)))
}
