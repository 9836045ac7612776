use crate::config::{OptimizerConfig, StrategyConfig};
use crate::executor::{ExecutionTrace, RuleExecutor};
use crate::p2_optimization::{
    rule_by_name, BooleanSimplification, CombineFilters, ConstantFolding,
    PushPredicateThroughInnerJoin, PushPredicateThroughProject, SimplifyCasts, SimplifyFilters,
};
use crate::rule::{Batch, Strategy};
use crate::PlannerError;
use ast::rel::logical::LogicalPlan;
use std::sync::Arc;

/// Rewrites analyzed plans into cheaper equivalent plans.
#[derive(Debug, Clone)]
pub struct Optimizer {
    executor: RuleExecutor,
}

impl Default for Optimizer {
    /// Folds constants first, then pushes the filters down.
    /// Pushdown relies on folding having already cleaned up the conditions.
    fn default() -> Self {
        Optimizer::new(vec![
            Batch::new(
                "ConstantFolding",
                Strategy::Once,
                vec![
                    Arc::new(ConstantFolding {}),
                    Arc::new(BooleanSimplification {}),
                    Arc::new(SimplifyFilters {}),
                    Arc::new(SimplifyCasts {}),
                ],
            ),
            Batch::new(
                "Filter Pushdown",
                Strategy::Once,
                vec![
                    Arc::new(CombineFilters {}),
                    Arc::new(PushPredicateThroughProject {}),
                    Arc::new(PushPredicateThroughInnerJoin {}),
                ],
            ),
        ])
    }
}

impl Optimizer {
    pub fn new(batches: Vec<Batch>) -> Self {
        Optimizer {
            executor: RuleExecutor::new(batches),
        }
    }

    /// Builds an optimizer from config, looking the rules up by name.
    pub fn from_config(config: &OptimizerConfig) -> Result<Self, PlannerError> {
        let batches = config
            .batches
            .iter()
            .map(|batch| {
                let strategy = match batch.strategy {
                    StrategyConfig::Once => Strategy::Once,
                    StrategyConfig::FixedPoint(0) => {
                        return Err(PlannerError::InvalidStrategy(batch.name.clone()))
                    }
                    StrategyConfig::FixedPoint(max_iterations) => {
                        Strategy::FixedPoint { max_iterations }
                    }
                };
                let rules = batch
                    .rules
                    .iter()
                    .map(|name| {
                        rule_by_name(name).ok_or_else(|| PlannerError::UnknownRule(name.clone()))
                    })
                    .collect::<Result<_, _>>()?;
                Ok(Batch::new(batch.name.clone(), strategy, rules))
            })
            .collect::<Result<_, _>>()?;
        Ok(Optimizer::new(batches))
    }

    pub fn executor(&self) -> &RuleExecutor {
        &self.executor
    }

    /// Optimizes the query by rewriting parts of it to be more efficient.
    /// The output attributes of the plan are unchanged.
    pub fn optimize(&self, plan: &Arc<LogicalPlan>) -> Result<Arc<LogicalPlan>, PlannerError> {
        self.executor.execute(plan)
    }

    pub fn optimize_with_trace(
        &self,
        plan: &Arc<LogicalPlan>,
    ) -> Result<(Arc<LogicalPlan>, ExecutionTrace), PlannerError> {
        self.executor.execute_with_trace(plan)
    }
}
