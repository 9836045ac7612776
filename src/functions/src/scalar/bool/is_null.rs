use crate::registry::Registry;
use crate::{Function, FunctionDefinition, FunctionError, FunctionSignature};
use data::{DataType, Datum};

#[derive(Debug)]
struct IsNull {}

impl Function for IsNull {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        Ok(Datum::from(args[0].is_null()))
    }
}

pub fn register_builtins(registry: &mut Registry) {
    for datatype in &[
        DataType::Null,
        DataType::Boolean,
        DataType::Integer,
        DataType::BigInt,
        DataType::Decimal(0, 0),
        DataType::Text,
    ] {
        registry.register_function(FunctionDefinition::new(
            "is_null",
            vec![*datatype],
            DataType::Boolean,
            &IsNull {},
        ));
    }
}
