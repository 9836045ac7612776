use super::additive_decimal_type;
use crate::registry::Registry;
use crate::{Function, FunctionDefinition, FunctionError, FunctionSignature};
use data::{DataType, Datum};

#[derive(Debug)]
struct SubtractInteger {}

impl Function for SubtractInteger {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_integer(), args[1].as_integer()) {
            a.checked_sub(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("-"))
        } else {
            Ok(Datum::Null)
        }
    }
}

#[derive(Debug)]
struct SubtractBigint {}

impl Function for SubtractBigint {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_bigint(), args[1].as_bigint()) {
            a.checked_sub(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("-"))
        } else {
            Ok(Datum::Null)
        }
    }
}

#[derive(Debug)]
struct SubtractDecimal {}

impl Function for SubtractDecimal {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_decimal(), args[1].as_decimal()) {
            a.checked_sub(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("-"))
        } else {
            Ok(Datum::Null)
        }
    }
}

pub fn register_builtins(registry: &mut Registry) {
    registry.register_function(FunctionDefinition::new(
        "-",
        vec![DataType::Integer, DataType::Integer],
        DataType::Integer,
        &SubtractInteger {},
    ));

    registry.register_function(FunctionDefinition::new(
        "-",
        vec![DataType::BigInt, DataType::BigInt],
        DataType::BigInt,
        &SubtractBigint {},
    ));

    registry.register_function(FunctionDefinition::new_with_type_resolver(
        "-",
        vec![DataType::Decimal(0, 0), DataType::Decimal(0, 0)],
        additive_decimal_type,
        &SubtractDecimal {},
    ));
}
