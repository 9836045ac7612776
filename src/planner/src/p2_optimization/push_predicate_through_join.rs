use crate::rule::Rule;
use crate::utils::expr::{combine_conjunctive_predicates, split_filter_and_join};
use crate::PlannerError;
use ast::expr::Expression;
use ast::rel::logical::{JoinType, LogicalPlan};
use ast::transform::transform_plan;
use std::sync::Arc;

/// Pushes the parts of a filter over an inner join down to the side of the join they need.
///
/// The filter's conjuncts and those of the join condition are pooled and each one goes to the
/// right side if it only references the right side, otherwise the left side if it only
/// references the left side, otherwise it stays as part of the join condition.
/// Conjuncts that reference nothing at all end up on the right side.
#[derive(Debug)]
pub struct PushPredicateThroughInnerJoin {}

impl Rule for PushPredicateThroughInnerJoin {
    fn name(&self) -> &'static str {
        "PushPredicateThroughInnerJoin"
    }

    fn apply(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        transform_plan(plan, push_through_join)
    }
}

fn push_through_join(node: &Arc<LogicalPlan>) -> Result<Option<Arc<LogicalPlan>>, PlannerError> {
    let (filter, join) = match node.as_ref() {
        LogicalPlan::Filter(filter) => match filter.source.as_ref() {
            LogicalPlan::Join(join) if join.join_type == JoinType::Inner => (filter, join),
            _ => return Ok(None),
        },
        _ => return Ok(None),
    };

    let left_set = join.left.output_set();
    let right_set = join.right.output_set();

    let mut left_predicates = vec![];
    let mut right_predicates = vec![];
    let mut join_predicates = vec![];
    for predicate in split_filter_and_join(&filter.condition, join.condition.as_ref()) {
        let references = predicate.references();
        if references.is_subset(&right_set) {
            right_predicates.push(predicate);
        } else if references.is_subset(&left_set) {
            left_predicates.push(predicate);
        } else {
            join_predicates.push(predicate);
        }
    }

    Ok(Some(LogicalPlan::join(
        filter_side(left_predicates, &join.left)?,
        filter_side(right_predicates, &join.right)?,
        JoinType::Inner,
        combine_conjunctive_predicates(join_predicates),
    )))
}

/// Wraps one side of the join in a filter. transform_plan has already been past the side, so
/// if it's another inner join the new filter gets pushed through it here.
fn filter_side(
    predicates: Vec<Expression>,
    side: &Arc<LogicalPlan>,
) -> Result<Arc<LogicalPlan>, PlannerError> {
    match combine_conjunctive_predicates(predicates) {
        Some(condition) => {
            let filter = LogicalPlan::filter(condition, Arc::clone(side));
            Ok(push_through_join(&filter)?.unwrap_or(filter))
        }
        None => Ok(Arc::clone(side)),
    }
}
