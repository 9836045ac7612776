use crate::PlannerError;
use serde::Deserialize;

/// The batches the optimizer runs, as loaded from toml.
///
/// ```toml
/// [[batches]]
/// name = "ConstantFolding"
/// strategy = "once"
/// rules = ["ConstantFolding", "BooleanSimplification", "SimplifyFilters", "SimplifyCasts"]
///
/// [[batches]]
/// name = "Filter Pushdown"
/// strategy = { fixed_point = 10 }
/// rules = ["CombineFilters", "PushPredicateThroughProject", "PushPredicateThroughInnerJoin"]
/// ```
#[derive(Debug, Eq, PartialEq, Clone, Deserialize)]
pub struct OptimizerConfig {
    pub batches: Vec<BatchConfig>,
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize)]
pub struct BatchConfig {
    pub name: String,
    pub strategy: StrategyConfig,
    pub rules: Vec<String>,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyConfig {
    Once,
    FixedPoint(usize),
}

impl OptimizerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, PlannerError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            batches: vec![
                BatchConfig {
                    name: "ConstantFolding".to_string(),
                    strategy: StrategyConfig::Once,
                    rules: vec![
                        "ConstantFolding".to_string(),
                        "BooleanSimplification".to_string(),
                        "SimplifyFilters".to_string(),
                        "SimplifyCasts".to_string(),
                    ],
                },
                BatchConfig {
                    name: "Filter Pushdown".to_string(),
                    strategy: StrategyConfig::Once,
                    rules: vec![
                        "CombineFilters".to_string(),
                        "PushPredicateThroughProject".to_string(),
                        "PushPredicateThroughInnerJoin".to_string(),
                    ],
                },
            ],
        }
    }
}
