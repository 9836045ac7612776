pub mod eval;
pub mod expr;
pub mod rel;
pub mod transform;
