use crate::{register_builtins, Function, FunctionDefinition, FunctionSignature};
use data::DataType;
use std::collections::HashMap;
use thiserror::Error;

/// A repository for functions. Used when building expressions to resolve the correct functions
#[derive(Debug)]
pub struct Registry {
    functions: HashMap<&'static str, Vec<FunctionDefinition>>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(true)
    }
}

#[derive(Debug, Eq, PartialEq, Error)]
pub enum FunctionResolutionError {
    #[error("Function {0} not found")]
    FunctionNotFound(String),
    #[error("No signature for {0} matches ({1})")]
    MatchingSignatureNotFound(String, String),
}

impl Registry {
    pub fn new(with_builtins: bool) -> Self {
        let mut registry = Registry {
            functions: HashMap::new(),
        };

        if with_builtins {
            register_builtins(&mut registry)
        }

        registry
    }

    pub fn register_function(&mut self, function_definition: FunctionDefinition) {
        self.functions
            .entry(function_definition.signature.name)
            .or_insert_with(Vec::new)
            .push(function_definition);
    }

    /// Looks up a function by name and argument types, returning the signature with its return
    /// type populated along with the function itself.
    pub fn resolve_scalar_function(
        &self,
        name: &str,
        args: &[DataType],
    ) -> Result<(FunctionSignature, &'static dyn Function), FunctionResolutionError> {
        let candidates = self
            .functions
            .get(name)
            .ok_or_else(|| FunctionResolutionError::FunctionNotFound(name.to_string()))?;

        let candidate = candidates
            .iter()
            .rev()
            .find(|candidate| {
                candidate.signature.args.len() == args.len()
                    && candidate
                        .signature
                        .args
                        .iter()
                        .zip(args.iter())
                        .all(|(d1, d2)| {
                            if let (DataType::Decimal(..), DataType::Decimal(..)) = (d1, d2) {
                                true
                            } else {
                                d1 == d2
                            }
                        })
            })
            .ok_or_else(|| {
                let arg_list = args
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                FunctionResolutionError::MatchingSignatureNotFound(name.to_string(), arg_list)
            })?;

        // Populate return type
        let ret = if let Some(type_resolver) = candidate.custom_return_type_resolver {
            type_resolver(args)
        } else {
            candidate.signature.ret
        };

        let signature = FunctionSignature {
            name: candidate.signature.name,
            args: args.to_vec(),
            ret,
        };
        Ok((signature, candidate.function))
    }
}
