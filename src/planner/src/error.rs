use ast::eval::EvalError;
use thiserror::Error;

/// An error from the optimizer.
/// Rules themselves never fail to match, the only failure while optimizing is an expression
/// that blows up when evaluated at plan time. The rest are configuration errors.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Error folding constant expression {expression}: {source}")]
    ConstantFolding {
        expression: String,
        #[source]
        source: EvalError,
    },
    #[error("Unknown optimizer rule {0}")]
    UnknownRule(String),
    #[error("Invalid strategy for batch {0}, fixed point batches need at least one iteration")]
    InvalidStrategy(String),
    #[error("Invalid optimizer config: {0}")]
    Config(#[from] toml::de::Error),
}
