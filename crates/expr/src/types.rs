use std::fmt;
use std::str::FromStr;

/// Declared type of a source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    Bool,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    Float32,
    Float64,
    /// Arbitrary-precision decimal
    Decimal,
}

impl Type {
    pub fn is_integral(self) -> bool {
        matches!(self, Type::Int32 | Type::Int64)
    }

    /// Real types, including the decimal type.
    pub fn is_real(self) -> bool {
        matches!(self, Type::Float32 | Type::Float64 | Type::Decimal)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integral() || self.is_real()
    }

    /// Binary numeric promotion: the wider of two numeric types.
    ///
    /// Order is `Int32 < Int64 < Float32 < Float64 < Decimal`.
    pub fn promote(self, other: Type) -> Option<Type> {
        fn rank(t: Type) -> Option<u8> {
            match t {
                Type::Bool => None,
                Type::Int32 => Some(0),
                Type::Int64 => Some(1),
                Type::Float32 => Some(2),
                Type::Float64 => Some(3),
                Type::Decimal => Some(4),
            }
        }
        let (a, b) = (rank(self)?, rank(other)?);
        Some(if a >= b { self } else { other })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Int32 => write!(f, "sint32"),
            Type::Int64 => write!(f, "sint64"),
            Type::Float32 => write!(f, "float"),
            Type::Float64 => write!(f, "double"),
            Type::Decimal => write!(f, "decimal"),
        }
    }
}

impl FromStr for Type {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(Type::Bool),
            "sint32" | "int" | "i32" => Ok(Type::Int32),
            "sint64" | "long" | "i64" => Ok(Type::Int64),
            "float" | "f32" => Ok(Type::Float32),
            "double" | "f64" => Ok(Type::Float64),
            "decimal" | "bigdecimal" => Ok(Type::Decimal),
            _ => Err(format!("Unknown type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_picks_wider_type() {
        assert_eq!(Type::Int32.promote(Type::Int64), Some(Type::Int64));
        assert_eq!(Type::Int64.promote(Type::Float32), Some(Type::Float32));
        assert_eq!(Type::Float64.promote(Type::Float32), Some(Type::Float64));
        assert_eq!(Type::Decimal.promote(Type::Int32), Some(Type::Decimal));
        assert_eq!(Type::Bool.promote(Type::Int32), None);
    }

    #[test]
    fn parse_and_display_round_trip() {
        for ty in [
            Type::Bool,
            Type::Int32,
            Type::Int64,
            Type::Float32,
            Type::Float64,
            Type::Decimal,
        ] {
            assert_eq!(ty.to_string().parse::<Type>(), Ok(ty));
        }
        assert!("string".parse::<Type>().is_err());
    }

    #[test]
    fn decimal_is_real_not_integral() {
        assert!(Type::Decimal.is_real());
        assert!(!Type::Decimal.is_integral());
        assert!(!Type::Bool.is_numeric());
    }
}
