use crate::registry::Registry;
use crate::{Function, FunctionDefinition, FunctionError, FunctionSignature};
use data::{DataType, Datum, DECIMAL_MAX_PRECISION, DECIMAL_MAX_SCALE};

#[derive(Debug)]
struct DivideInteger {}

impl Function for DivideInteger {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_integer(), args[1].as_integer()) {
            if b == 0 {
                return Err(FunctionError::DivideByZero);
            }
            a.checked_div(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("/"))
        } else {
            Ok(Datum::Null)
        }
    }
}

#[derive(Debug)]
struct DivideBigint {}

impl Function for DivideBigint {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_bigint(), args[1].as_bigint()) {
            if b == 0 {
                return Err(FunctionError::DivideByZero);
            }
            a.checked_div(b)
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("/"))
        } else {
            Ok(Datum::Null)
        }
    }
}

#[derive(Debug)]
struct DivideDecimal {}

impl Function for DivideDecimal {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let (Some(a), Some(b)) = (args[0].as_decimal(), args[1].as_decimal()) {
            if b.is_zero() {
                return Err(FunctionError::DivideByZero);
            }
            let mut d = a.checked_div(b).ok_or(FunctionError::Overflow("/"))?;
            if d.scale() > DECIMAL_MAX_SCALE as u32 {
                d.rescale(DECIMAL_MAX_SCALE as u32);
            }
            Ok(Datum::from(d))
        } else {
            Ok(Datum::Null)
        }
    }
}

pub fn register_builtins(registry: &mut Registry) {
    registry.register_function(FunctionDefinition::new(
        "/",
        vec![DataType::Integer, DataType::Integer],
        DataType::Integer,
        &DivideInteger {},
    ));

    registry.register_function(FunctionDefinition::new(
        "/",
        vec![DataType::BigInt, DataType::BigInt],
        DataType::BigInt,
        &DivideBigint {},
    ));

    registry.register_function(FunctionDefinition::new(
        "/",
        vec![DataType::Decimal(0, 0), DataType::Decimal(0, 0)],
        DataType::Decimal(DECIMAL_MAX_PRECISION, DECIMAL_MAX_SCALE),
        &DivideDecimal {},
    ));
}
