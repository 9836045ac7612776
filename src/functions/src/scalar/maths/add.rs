use super::additive_decimal_type;
use crate::registry::Registry;
use crate::{Function, FunctionDefinition, FunctionError, FunctionSignature};
use data::{DataType, Datum};

#[derive(Debug)]
struct AddInteger {}

impl Function for AddInteger {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_integer(), args[1].as_integer()) {
            a.checked_add(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("+"))
        } else {
            Ok(Datum::Null)
        }
    }
}

#[derive(Debug)]
struct AddBigint {}

impl Function for AddBigint {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_bigint(), args[1].as_bigint()) {
            a.checked_add(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("+"))
        } else {
            Ok(Datum::Null)
        }
    }
}

#[derive(Debug)]
struct AddDecimal {}

impl Function for AddDecimal {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_decimal(), args[1].as_decimal()) {
            a.checked_add(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("+"))
        } else {
            Ok(Datum::Null)
        }
    }
}

pub fn register_builtins(registry: &mut Registry) {
    registry.register_function(FunctionDefinition::new(
        "+",
        vec![DataType::Integer, DataType::Integer],
        DataType::Integer,
        &AddInteger {},
    ));

    registry.register_function(FunctionDefinition::new(
        "+",
        vec![DataType::BigInt, DataType::BigInt],
        DataType::BigInt,
        &AddBigint {},
    ));

    registry.register_function(FunctionDefinition::new_with_type_resolver(
        "+",
        vec![DataType::Decimal(0, 0), DataType::Decimal(0, 0)],
        additive_decimal_type,
        &AddDecimal {},
    ));
}
