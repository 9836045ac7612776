use crate::rule::Rule;
use ast::rel::logical::LogicalPlan;
use std::sync::Arc;

mod boolean_simplification;
mod combine_filters;
mod constant_folding;
mod push_predicate_through_join;
mod push_predicate_through_project;
mod simplify_casts;
mod simplify_filters;

pub use boolean_simplification::BooleanSimplification;
pub use combine_filters::CombineFilters;
pub use constant_folding::ConstantFolding;
pub use push_predicate_through_join::PushPredicateThroughInnerJoin;
pub use push_predicate_through_project::PushPredicateThroughProject;
pub use simplify_casts::SimplifyCasts;
pub use simplify_filters::SimplifyFilters;

/// Looks up one of the builtin rules by the name it reports
pub fn rule_by_name(name: &str) -> Option<Arc<dyn Rule>> {
    let rule: Arc<dyn Rule> = match name {
        "ConstantFolding" => Arc::new(ConstantFolding {}),
        "BooleanSimplification" => Arc::new(BooleanSimplification {}),
        "SimplifyFilters" => Arc::new(SimplifyFilters {}),
        "SimplifyCasts" => Arc::new(SimplifyCasts {}),
        "CombineFilters" => Arc::new(CombineFilters {}),
        "PushPredicateThroughProject" => Arc::new(PushPredicateThroughProject {}),
        "PushPredicateThroughInnerJoin" => Arc::new(PushPredicateThroughInnerJoin {}),
        _ => return None,
    };
    Some(rule)
}

/// Turns the result of rewriting a node back into the partial form, None if nothing changed.
fn changed(node: &Arc<LogicalPlan>, new_node: Arc<LogicalPlan>) -> Option<Arc<LogicalPlan>> {
    if Arc::ptr_eq(node, &new_node) {
        None
    } else {
        Some(new_node)
    }
}
