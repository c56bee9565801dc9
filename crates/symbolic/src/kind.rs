use std::fmt;

/// Kind of a symbolic node.
///
/// Kinds are strict: the engine never converts between them implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Boolean
    Bool,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit IEEE 754 float
    Float,
    /// 64-bit IEEE 754 float
    Double,
}

impl Kind {
    /// `Int` or `Long`.
    pub fn is_integral(self) -> bool {
        matches!(self, Kind::Int | Kind::Long)
    }

    /// `Float` or `Double`.
    pub fn is_real(self) -> bool {
        matches!(self, Kind::Float | Kind::Double)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integral() || self.is_real()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Bool => write!(f, "bool"),
            Kind::Int => write!(f, "int"),
            Kind::Long => write!(f, "long"),
            Kind::Float => write!(f, "float"),
            Kind::Double => write!(f, "double"),
        }
    }
}
