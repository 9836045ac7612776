//! The cast kernels backing `CAST(expr AS type)`.
//! Unlike most functions casts aren't looked up through the registry, the target type alone
//! decides which conversion runs.

use crate::FunctionError;
use data::rust_decimal::prelude::ToPrimitive;
use data::rust_decimal::Decimal;
use data::{DataType, Datum};
use std::convert::TryFrom;
use std::str::FromStr;

/// Converts a datum into the target type. Nulls cast to null for every target.
pub fn cast_datum(datum: &Datum, target: DataType) -> Result<Datum, FunctionError> {
    if datum.is_null() {
        return Ok(Datum::Null);
    }
    let invalid = || FunctionError::InvalidCast {
        value: datum.to_string(),
        target,
    };

    match target {
        DataType::Null => Err(invalid()),
        DataType::Boolean => match datum {
            Datum::Boolean(_) => Ok(datum.clone()),
            Datum::Integer(i) => Ok(Datum::from(*i != 0)),
            Datum::BigInt(i) => Ok(Datum::from(*i != 0)),
            Datum::Decimal(d) => Ok(Datum::from(!d.is_zero())),
            Datum::Text(s) => {
                if s.eq_ignore_ascii_case("true") {
                    Ok(Datum::from(true))
                } else if s.eq_ignore_ascii_case("false") {
                    Ok(Datum::from(false))
                } else {
                    Err(invalid())
                }
            }
            Datum::Null => Ok(Datum::Null),
        },
        DataType::Integer => match datum {
            Datum::Boolean(b) => Ok(Datum::from(if *b { 1 } else { 0 })),
            Datum::Integer(_) => Ok(datum.clone()),
            Datum::BigInt(i) => i32::try_from(*i)
                .map(Datum::from)
                .map_err(|_| FunctionError::Overflow("CAST")),
            Datum::Decimal(d) => d
                .trunc()
                .to_i32()
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("CAST")),
            Datum::Text(s) => s.trim().parse::<i32>().map(Datum::from).map_err(|_| invalid()),
            Datum::Null => Ok(Datum::Null),
        },
        DataType::BigInt => match datum {
            Datum::Boolean(b) => Ok(Datum::from(if *b { 1_i64 } else { 0_i64 })),
            Datum::Integer(i) => Ok(Datum::from(i64::from(*i))),
            Datum::BigInt(_) => Ok(datum.clone()),
            Datum::Decimal(d) => d
                .trunc()
                .to_i64()
                .map(Datum::from)
                .ok_or(FunctionError::Overflow("CAST")),
            Datum::Text(s) => s.trim().parse::<i64>().map(Datum::from).map_err(|_| invalid()),
            Datum::Null => Ok(Datum::Null),
        },
        DataType::Decimal(_p, s) => {
            let mut d = match datum {
                Datum::Boolean(b) => Decimal::new(if *b { 1 } else { 0 }, 0),
                Datum::Integer(i) => Decimal::from(*i),
                Datum::BigInt(i) => Decimal::from(*i),
                Datum::Decimal(d) => *d,
                Datum::Text(text) => Decimal::from_str(text.trim()).map_err(|_| invalid())?,
                Datum::Null => return Ok(Datum::Null),
            };
            // Down scaling only, upscaling gains nothing
            if (s as u32) < d.scale() {
                d.rescale(s as u32);
            }
            Ok(Datum::from(d))
        }
        DataType::Text => match datum {
            Datum::Text(_) => Ok(datum.clone()),
            other => Ok(Datum::from(other.to_string())),
        },
    }
}
