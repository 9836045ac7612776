use crate::explain::explain;
use crate::rule::{Batch, Strategy};
use crate::PlannerError;
use ast::rel::logical::LogicalPlan;
use log::{debug, log_enabled, trace, warn, Level};
use std::sync::Arc;

/// Runs an ordered list of batches over a plan.
/// The executor holds no per query state, the same one can be shared between threads and
/// used to optimize many plans at once.
#[derive(Debug, Clone, Default)]
pub struct RuleExecutor {
    batches: Vec<Batch>,
}

/// What happened while running a single batch
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct BatchTrace {
    pub name: String,
    pub passes: usize,
    /// False if a fixed point batch gave up after hitting its iteration cap
    pub converged: bool,
    /// The rules that changed the plan, in the order they were applied.
    pub effective_rules: Vec<&'static str>,
}

#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct ExecutionTrace {
    pub batches: Vec<BatchTrace>,
}

impl RuleExecutor {
    pub fn new(batches: Vec<Batch>) -> Self {
        RuleExecutor { batches }
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn execute(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        let (plan, _trace) = self.execute_with_trace(plan)?;
        Ok(plan)
    }

    pub fn execute_with_trace(
        &self,
        plan: &Arc<LogicalPlan>,
    ) -> Result<(Arc<LogicalPlan>, ExecutionTrace), PlannerError> {
        let mut current = Arc::clone(plan);
        let mut trace = ExecutionTrace::default();

        for batch in &self.batches {
            let mut batch_trace = BatchTrace {
                name: batch.name.clone(),
                passes: 0,
                converged: true,
                effective_rules: vec![],
            };

            match batch.strategy {
                Strategy::Once => {
                    current = run_pass(batch, &current, &mut batch_trace)?;
                }
                Strategy::FixedPoint { max_iterations } => {
                    batch_trace.converged = false;
                    while batch_trace.passes < max_iterations {
                        let start = Arc::clone(&current);
                        current = run_pass(batch, &start, &mut batch_trace)?;
                        if same_plan(&start, &current) {
                            batch_trace.converged = true;
                            break;
                        }
                    }

                    if !batch_trace.converged {
                        warn!(
                            "Batch {} did not reach a fixed point after {} iterations, continuing with the last plan",
                            batch.name, max_iterations
                        );
                    }
                }
            }

            debug!(
                "Batch {} finished after {} pass(es), effective rules: [{}]",
                batch.name,
                batch_trace.passes,
                batch_trace.effective_rules.join(", ")
            );
            trace.batches.push(batch_trace);
        }

        Ok((current, trace))
    }
}

/// Applies each rule in the batch once, in order
fn run_pass(
    batch: &Batch,
    plan: &Arc<LogicalPlan>,
    batch_trace: &mut BatchTrace,
) -> Result<Arc<LogicalPlan>, PlannerError> {
    batch_trace.passes += 1;
    let mut current = Arc::clone(plan);
    for rule in &batch.rules {
        let new_plan = rule.apply(&current)?;
        if !same_plan(&current, &new_plan) {
            debug!(
                "Rule {} changed the plan in batch {} (pass {})",
                rule.name(),
                batch.name,
                batch_trace.passes
            );
            if log_enabled!(Level::Trace) {
                trace!("Plan after {}:\n{}", rule.name(), explain(new_plan.as_ref()).join("\n"));
            }
            batch_trace.effective_rules.push(rule.name());
        }
        current = new_plan;
    }
    Ok(current)
}

fn same_plan(a: &Arc<LogicalPlan>, b: &Arc<LogicalPlan>) -> bool {
    Arc::ptr_eq(a, b) || a == b
}
