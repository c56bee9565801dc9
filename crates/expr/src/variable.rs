use std::fmt;

use crate::types::Type;

/// A named unknown with a declared type.
///
/// Two variables are the same variable only if both name and type agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, Type::Bool)
    }

    pub fn int32(name: impl Into<String>) -> Self {
        Self::new(name, Type::Int32)
    }

    pub fn int64(name: impl Into<String>) -> Self {
        Self::new(name, Type::Int64)
    }

    pub fn float32(name: impl Into<String>) -> Self {
        Self::new(name, Type::Float32)
    }

    pub fn float64(name: impl Into<String>) -> Self {
        Self::new(name, Type::Float64)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_includes_type() {
        assert_eq!(Variable::int32("x"), Variable::new("x", Type::Int32));
        assert_ne!(Variable::int32("x"), Variable::int64("x"));
    }
}
