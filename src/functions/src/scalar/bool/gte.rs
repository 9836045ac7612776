use super::COMPARABLE_TYPES;
use crate::registry::Registry;
use crate::{Function, FunctionDefinition, FunctionError, FunctionSignature};
use data::{DataType, Datum};

#[derive(Debug)]
struct Gt {}

impl Function for Gt {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if args[0].is_null() || args[1].is_null() {
            Ok(Datum::Null)
        } else {
            Ok(Datum::from(args[0] > args[1]))
        }
    }
}

#[derive(Debug)]
struct Gte {}

impl Function for Gte {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if args[0].is_null() || args[1].is_null() {
            Ok(Datum::Null)
        } else {
            Ok(Datum::from(args[0] >= args[1]))
        }
    }
}

pub fn register_builtins(registry: &mut Registry) {
    for datatype in &COMPARABLE_TYPES {
        registry.register_function(FunctionDefinition::new(
            ">",
            vec![*datatype, *datatype],
            DataType::Boolean,
            &Gt {},
        ));
        registry.register_function(FunctionDefinition::new(
            ">=",
            vec![*datatype, *datatype],
            DataType::Boolean,
            &Gte {},
        ));
    }
}
