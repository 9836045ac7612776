use crate::DataType;
use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};

/// Datum - in memory representation of sql value.
/// Datums only get compared against datums of the same type, the derived ordering
/// between different variants has no meaning.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd)]
pub enum Datum {
    Null,
    Boolean(bool),
    // On-heap text type, the planner only ever deals in owned values
    Text(Box<str>),
    Integer(i32),
    BigInt(i64),
    Decimal(Decimal),
}

// From builders to build datums from the native rust types
impl Default for Datum {
    fn default() -> Self {
        Datum::Null
    }
}

impl From<bool> for Datum {
    fn from(b: bool) -> Self {
        Datum::Boolean(b)
    }
}

impl From<i32> for Datum {
    fn from(i: i32) -> Self {
        Datum::Integer(i)
    }
}

impl From<i64> for Datum {
    fn from(i: i64) -> Self {
        Datum::BigInt(i)
    }
}

impl From<Decimal> for Datum {
    fn from(d: Decimal) -> Self {
        Datum::Decimal(d)
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Text(s.into_boxed_str())
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(Box::from(s))
    }
}

impl Display for Datum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Datum::Null => f.write_str("NULL"),
            Datum::Text(s) => f.write_str(s),
            Datum::Boolean(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Datum::Integer(i) => i.fmt(f),
            Datum::BigInt(i) => i.fmt(f),
            Datum::Decimal(d) => d.fmt(f),
        }
    }
}

// Accessors to get back rust types from datums, these are just "dumb" and simply map 1-1 without
// any attempts to do any casting
impl Datum {
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Datum::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        if let Datum::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_bigint(&self) -> Option<i64> {
        if let Datum::BigInt(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        if let Datum::Decimal(d) = self {
            Some(*d)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Datum::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn datatype(&self) -> DataType {
        match self {
            Datum::Null => DataType::Null,
            Datum::Boolean(_) => DataType::Boolean,
            Datum::Integer(_) => DataType::Integer,
            Datum::BigInt(_) => DataType::BigInt,
            Datum::Decimal(d) => DataType::Decimal(28, d.scale() as u8),
            Datum::Text(_) => DataType::Text,
        }
    }
}
