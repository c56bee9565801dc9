use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

use crate::types::Type;

/// A concrete value of a source type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Decimal(BigDecimal),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{text}' as {ty}")]
pub struct ValueParseError {
    pub ty: Type,
    pub text: String,
}

impl Value {
    pub fn ty(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Int32(_) => Type::Int32,
            Value::Int64(_) => Type::Int64,
            Value::Float32(_) => Type::Float32,
            Value::Float64(_) => Type::Float64,
            Value::Decimal(_) => Type::Decimal,
        }
    }

    /// Parse `text` as a value of `ty`.
    pub fn parse(ty: Type, text: &str) -> Result<Value, ValueParseError> {
        let err = || ValueParseError {
            ty,
            text: text.to_string(),
        };
        let text = text.trim();
        match ty {
            Type::Bool => text.parse().map(Value::Bool).map_err(|_| err()),
            Type::Int32 => text.parse().map(Value::Int32).map_err(|_| err()),
            Type::Int64 => text.parse().map(Value::Int64).map_err(|_| err()),
            Type::Float32 => text.parse().map(Value::Float32).map_err(|_| err()),
            Type::Float64 => text.parse().map(Value::Float64).map_err(|_| err()),
            Type::Decimal => BigDecimal::from_str(text)
                .map(Value::Decimal)
                .map_err(|_| err()),
        }
    }

    /// Literal zero of the value's own type. Decimal and boolean values never
    /// count as zero.
    pub fn is_exact_zero(&self) -> bool {
        match self {
            Value::Int32(v) => *v == 0,
            Value::Int64(v) => *v == 0,
            Value::Float32(v) => *v == 0.0,
            Value::Float64(v) => *v == 0.0,
            Value::Bool(_) | Value::Decimal(_) => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric value as `f64`; decimals are rounded to the nearest double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Bool(_) => None,
            Value::Int32(v) => Some(f64::from(*v)),
            Value::Int64(v) => Some(*v as f64),
            Value::Float32(v) => Some(f64::from(*v)),
            Value::Float64(v) => Some(*v),
            Value::Decimal(d) => d.to_f64(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Decimal(d) => d.is_zero(),
            other => other.is_exact_zero(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Decimal(d) => write!(f, "{d}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(d: BigDecimal) -> Self {
        Value::Decimal(d)
    }
}
