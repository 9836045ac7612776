pub mod casts;
pub mod registry;
mod scalar;
use crate::registry::Registry;
use data::{DataType, Datum};
use std::fmt::{Debug, Formatter};
use thiserror::Error;

/// The signature for a function. Signatures are scanned to find a match during analysis.
/// For decimal types etc the matching process will ignore the type parameters.
/// When using this to lookup a function the ret type is populated
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub args: Vec<DataType>,
    pub ret: DataType,
}

/// The definition of a function, enough info for resolving types etc
pub struct FunctionDefinition {
    pub signature: FunctionSignature,
    pub custom_return_type_resolver: Option<fn(&[DataType]) -> DataType>,
    pub function: &'static dyn Function,
}

impl Debug for FunctionDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("FunctionDefinition[")?;
        self.signature.fmt(f)?;
        f.write_str("]")
    }
}

impl FunctionDefinition {
    pub fn new(
        name: &'static str,
        args: Vec<DataType>,
        ret: DataType,
        function: &'static dyn Function,
    ) -> Self {
        FunctionDefinition {
            signature: FunctionSignature { name, args, ret },
            custom_return_type_resolver: None,
            function,
        }
    }

    pub fn new_with_type_resolver(
        name: &'static str,
        args: Vec<DataType>,
        return_type_resolver: fn(&[DataType]) -> DataType,
        function: &'static dyn Function,
    ) -> Self {
        let ret = return_type_resolver(&args);
        FunctionDefinition {
            signature: FunctionSignature { name, args, ret },
            custom_return_type_resolver: Some(return_type_resolver),
            function,
        }
    }
}

/// A function implementation.
/// Functions never see an input row, only the already evaluated values of their arguments.
pub trait Function: Debug + Sync + 'static {
    fn execute(&self, signature: &FunctionSignature, args: &[Datum])
        -> Result<Datum, FunctionError>;

    /// Whether the same inputs always produce the same output. Only deterministic functions
    /// may be evaluated ahead of time by the optimizer.
    fn deterministic(&self) -> bool {
        true
    }
}

/// A failure while executing a function
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FunctionError {
    #[error("Division by zero")]
    DivideByZero,
    #[error("Numeric overflow in {0}")]
    Overflow(&'static str),
    #[error("Cannot cast '{value}' to {target}")]
    InvalidCast { value: String, target: DataType },
}

fn register_builtins(registry: &mut Registry) {
    scalar::register_builtins(registry)
}
