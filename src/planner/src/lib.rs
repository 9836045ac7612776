pub mod config;
mod error;
pub mod executor;
pub mod explain;
mod optimize;
pub mod p2_optimization;
pub mod rule;
pub mod utils;

pub use error::*;
pub use optimize::Optimizer;
