use crate::registry::Registry;
use data::DataType;

mod eq;
mod gte;
mod is_null;
mod lte;
mod not;

pub fn register_builtins(registry: &mut Registry) {
    eq::register_builtins(registry);
    gte::register_builtins(registry);
    is_null::register_builtins(registry);
    lte::register_builtins(registry);
    not::register_builtins(registry);
}

/// The types the comparison operators are defined for
const COMPARABLE_TYPES: [DataType; 5] = [
    DataType::Boolean,
    DataType::Integer,
    DataType::BigInt,
    DataType::Decimal(0, 0),
    DataType::Text,
];
