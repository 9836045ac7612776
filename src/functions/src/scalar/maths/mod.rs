use crate::registry::Registry;
use data::{DataType, DECIMAL_MAX_PRECISION};
use std::cmp::{max, min};

mod add;
mod divide;
mod multiply;
mod subtract;

pub fn register_builtins(registry: &mut Registry) {
    add::register_builtins(registry);
    divide::register_builtins(registry);
    multiply::register_builtins(registry);
    subtract::register_builtins(registry);
}

/// Return type for the decimal versions of + and -
fn additive_decimal_type(args: &[DataType]) -> DataType {
    if let (DataType::Decimal(p1, s1), DataType::Decimal(p2, s2)) = (args[0], args[1]) {
        DataType::Decimal(min(max(p1, p2) + 1, DECIMAL_MAX_PRECISION), max(s1, s2))
    } else {
        DataType::Decimal(DECIMAL_MAX_PRECISION, 0)
    }
}
