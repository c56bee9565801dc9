use std::fmt;

use crate::kind::Kind;

/// A concrete value of one symbolic kind, as held in a solution environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl SymValue {
    /// The "zero" of a kind, used to seed fresh literals.
    ///
    /// Booleans seed `true`.
    pub fn seed(kind: Kind) -> Self {
        match kind {
            Kind::Bool => SymValue::Bool(true),
            Kind::Int => SymValue::Int(0),
            Kind::Long => SymValue::Long(0),
            Kind::Float => SymValue::Float(0.0),
            Kind::Double => SymValue::Double(0.0),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            SymValue::Bool(_) => Kind::Bool,
            SymValue::Int(_) => Kind::Int,
            SymValue::Long(_) => Kind::Long,
            SymValue::Float(_) => Kind::Float,
            SymValue::Double(_) => Kind::Double,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SymValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric value narrowed to `i32`.
    ///
    /// Floats saturate (NaN becomes 0) and longs keep their low 32 bits.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            SymValue::Bool(_) => None,
            SymValue::Int(v) => Some(v),
            SymValue::Long(v) => Some(v as i32),
            SymValue::Float(v) => Some(v as i32),
            SymValue::Double(v) => Some(v as i32),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            SymValue::Bool(_) => None,
            SymValue::Int(v) => Some(i64::from(v)),
            SymValue::Long(v) => Some(v),
            SymValue::Float(v) => Some(v as i64),
            SymValue::Double(v) => Some(v as i64),
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            SymValue::Bool(_) => None,
            SymValue::Int(v) => Some(v as f32),
            SymValue::Long(v) => Some(v as f32),
            SymValue::Float(v) => Some(v),
            SymValue::Double(v) => Some(v as f32),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            SymValue::Bool(_) => None,
            SymValue::Int(v) => Some(f64::from(v)),
            SymValue::Long(v) => Some(v as f64),
            SymValue::Float(v) => Some(f64::from(v)),
            SymValue::Double(v) => Some(v),
        }
    }
}

/// Native text form: the value printed without any kind suffix.
impl fmt::Display for SymValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymValue::Bool(b) => write!(f, "{b}"),
            SymValue::Int(v) => write!(f, "{v}"),
            SymValue::Long(v) => write!(f, "{v}"),
            SymValue::Float(v) => write!(f, "{v}"),
            SymValue::Double(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_kind_zeroes() {
        assert_eq!(SymValue::seed(Kind::Bool), SymValue::Bool(true));
        assert_eq!(SymValue::seed(Kind::Int), SymValue::Int(0));
        assert_eq!(SymValue::seed(Kind::Long), SymValue::Long(0));
        assert_eq!(SymValue::seed(Kind::Float), SymValue::Float(0.0));
        assert_eq!(SymValue::seed(Kind::Double), SymValue::Double(0.0));
    }

    #[test]
    fn double_to_int_truncates_toward_zero() {
        assert_eq!(SymValue::Double(2.35).as_i32(), Some(2));
        assert_eq!(SymValue::Double(-2.9).as_i32(), Some(-2));
        assert_eq!(SymValue::Double(f64::NAN).as_i32(), Some(0));
        assert_eq!(SymValue::Double(1e20).as_i32(), Some(i32::MAX));
    }

    #[test]
    fn long_to_int_keeps_low_bits() {
        assert_eq!(SymValue::Long(1 << 32).as_i32(), Some(0));
        assert_eq!(SymValue::Long(-1).as_i32(), Some(-1));
    }

    #[test]
    fn booleans_have_no_numeric_view() {
        assert_eq!(SymValue::Bool(true).as_f64(), None);
        assert_eq!(SymValue::Int(1).as_bool(), None);
    }

    #[test]
    fn native_text_form() {
        assert_eq!(SymValue::Int(-7).to_string(), "-7");
        assert_eq!(SymValue::Double(2.5).to_string(), "2.5");
        assert_eq!(SymValue::Bool(false).to_string(), "false");
    }
}
