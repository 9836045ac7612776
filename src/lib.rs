//! A rule based optimizer for analyzed logical query plans.
//!
//! The pieces live in their own crates, re-exported here:
//! * `data` - sql values and types
//! * `functions` - scalar functions and casts
//! * `ast` - expressions, logical plans and the rewrite machinery
//! * `planner` - the rules, batches and the optimizer itself
pub use ast;
pub use data;
pub use functions;
pub use planner;

pub use planner::{Optimizer, PlannerError};
