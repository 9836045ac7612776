use crate::registry::Registry;
use crate::{Function, FunctionDefinition, FunctionError, FunctionSignature};
use data::{DataType, Datum, DECIMAL_MAX_PRECISION};
use std::cmp::min;

#[derive(Debug)]
struct MultiplyInteger {}

impl Function for MultiplyInteger {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_integer(), args[1].as_integer()) {
            a.checked_mul(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("*"))
        } else {
            Ok(Datum::Null)
        }
    }
}

#[derive(Debug)]
struct MultiplyBigint {}

impl Function for MultiplyBigint {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_bigint(), args[1].as_bigint()) {
            a.checked_mul(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("*"))
        } else {
            Ok(Datum::Null)
        }
    }
}

#[derive(Debug)]
struct MultiplyDecimal {}

impl Function for MultiplyDecimal {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_decimal(), args[1].as_decimal()) {
            a.checked_mul(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("*"))
        } else {
            Ok(Datum::Null)
        }
    }
}

pub fn register_builtins(registry: &mut Registry) {
    registry.register_function(FunctionDefinition::new(
        "*",
        vec![DataType::Integer, DataType::Integer],
        DataType::Integer,
        &MultiplyInteger {},
    ));

    registry.register_function(FunctionDefinition::new(
        "*",
        vec![DataType::BigInt, DataType::BigInt],
        DataType::BigInt,
        &MultiplyBigint {},
    ));

    registry.register_function(FunctionDefinition::new_with_type_resolver(
        "*",
        vec![DataType::Decimal(0, 0), DataType::Decimal(0, 0)],
        |args| {
            if let (DataType::Decimal(p1, s1), DataType::Decimal(p2, s2)) = (args[0], args[1]) {
                DataType::Decimal(min(p1 + p2, DECIMAL_MAX_PRECISION), s1 + s2)
            } else {
                DataType::Decimal(DECIMAL_MAX_PRECISION, 0)
            }
        },
        &MultiplyDecimal {},
    ));
}
