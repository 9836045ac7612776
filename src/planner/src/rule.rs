use crate::PlannerError;
use ast::rel::logical::LogicalPlan;
use std::fmt::Debug;
use std::sync::Arc;

/// A single named rewrite of a logical plan.
///
/// Rules are pure, the input plan is never modified and any untouched parts of it should be
/// handed back as is. Applying a rule to its own output is expected not to change it any
/// further, this isn't checked at runtime.
pub trait Rule: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError>;
}

/// How many times a batch gets run
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Strategy {
    /// Each rule is applied exactly once
    Once,
    /// The rules are reapplied until the plan stops changing, or we run out of iterations
    FixedPoint { max_iterations: usize },
}

/// An ordered group of rules sharing a strategy
#[derive(Debug, Clone)]
pub struct Batch {
    pub name: String,
    pub strategy: Strategy,
    pub rules: Vec<Arc<dyn Rule>>,
}

impl Batch {
    pub fn new<S: Into<String>>(name: S, strategy: Strategy, rules: Vec<Arc<dyn Rule>>) -> Self {
        Batch {
            name: name.into(),
            strategy,
            rules,
        }
    }
}
