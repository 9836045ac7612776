use crate::expr::{AttributeReference, ExprId, Expression};
use data::Datum;
use functions::casts::cast_datum;
use functions::FunctionError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    #[error("Error evaluating {function}: {source}")]
    Function {
        function: &'static str,
        #[source]
        source: FunctionError,
    },
    #[error("Attribute {0} is not bound to an input value")]
    UnboundAttribute(String),
}

/// The values an expression gets evaluated against, keyed by attribute.
#[derive(Debug, Default)]
pub struct InputRow<'a> {
    attributes: &'a [AttributeReference],
    values: &'a [Datum],
}

impl<'a> InputRow<'a> {
    pub fn new(attributes: &'a [AttributeReference], values: &'a [Datum]) -> Self {
        InputRow { attributes, values }
    }

    /// A row with nothing bound, enough to evaluate any foldable expression.
    pub fn empty() -> Self {
        InputRow::default()
    }

    pub fn get(&self, id: ExprId) -> Option<&'a Datum> {
        self.attributes
            .iter()
            .position(|attribute| attribute.id == id)
            .and_then(|idx| self.values.get(idx))
    }
}

pub trait EvalScalar {
    fn eval_scalar(&self, row: &InputRow) -> Result<Datum, EvalError>;
}

impl EvalScalar for Expression {
    fn eval_scalar(&self, row: &InputRow) -> Result<Datum, EvalError> {
        match self {
            Expression::Literal(datum, _) => Ok(datum.clone()),
            Expression::AttributeReference(attribute) => match row.get(attribute.id) {
                Some(datum) => Ok(datum.clone()),
                None => Err(EvalError::UnboundAttribute(attribute.name.clone())),
            },
            Expression::Alias(alias) => alias.expr.eval_scalar(row),
            // Three valued logic, false and true short circuit even against a null.
            Expression::And(left, right) => {
                let left = left.eval_scalar(row)?;
                if left.as_boolean() == Some(false) {
                    return Ok(Datum::from(false));
                }
                let right = right.eval_scalar(row)?;
                Ok(match (left.as_boolean(), right.as_boolean()) {
                    (_, Some(false)) => Datum::from(false),
                    (Some(true), Some(true)) => Datum::from(true),
                    _ => Datum::Null,
                })
            }
            Expression::Or(left, right) => {
                let left = left.eval_scalar(row)?;
                if left.as_boolean() == Some(true) {
                    return Ok(Datum::from(true));
                }
                let right = right.eval_scalar(row)?;
                Ok(match (left.as_boolean(), right.as_boolean()) {
                    (_, Some(true)) => Datum::from(true),
                    (Some(false), Some(false)) => Datum::from(false),
                    _ => Datum::Null,
                })
            }
            Expression::Cast(cast) => {
                let datum = cast.expr.eval_scalar(row)?;
                cast_datum(&datum, cast.datatype).map_err(|source| EvalError::Function {
                    function: "CAST",
                    source,
                })
            }
            Expression::FunctionCall(function_call) => {
                let args = function_call
                    .args
                    .iter()
                    .map(|arg| arg.eval_scalar(row))
                    .collect::<Result<Vec<_>, _>>()?;
                function_call
                    .function
                    .execute(&function_call.signature, &args)
                    .map_err(|source| EvalError::Function {
                        function: function_call.signature.name,
                        source,
                    })
            }
        }
    }
}
