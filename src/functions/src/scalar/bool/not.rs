use crate::registry::Registry;
use crate::{Function, FunctionDefinition, FunctionError, FunctionSignature};
use data::{DataType, Datum};

#[derive(Debug)]
struct Not {}

impl Function for Not {
    fn execute(
        &self,
        _signature: &FunctionSignature,
        args: &[Datum],
    ) -> Result<Datum, FunctionError> {
        if let Some(b) = args[0].as_boolean() {
            Ok(Datum::from(!b))
        } else {
            Ok(Datum::Null)
        }
    }
}

pub fn register_builtins(registry: &mut Registry) {
    registry.register_function(FunctionDefinition::new(
        "not",
        vec![DataType::Boolean],
        DataType::Boolean,
        &Not {},
    ));
}
