mod datatype;
mod datum;

pub use datatype::*;
pub use datum::*;
pub use rust_decimal;
