use std::collections::BTreeMap;
use std::fmt;

use crate::value::{Value, ValueParseError};
use crate::variable::Variable;

/// Assignment of values to variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Valuation {
    values: BTreeMap<Variable, Value>,
}

impl Valuation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, var: Variable, value: impl Into<Value>) {
        self.values.insert(var, value.into());
    }

    /// Parse `text` into the variable's declared type and store it.
    ///
    /// On error the valuation is left unchanged.
    pub fn set_parsed(&mut self, var: &Variable, text: &str) -> Result<(), ValueParseError> {
        let value = Value::parse(var.ty, text)?;
        self.values.insert(var.clone(), value);
        Ok(())
    }

    pub fn get(&self, var: &Variable) -> Option<&Value> {
        self.values.get(var)
    }

    pub fn contains(&self, var: &Variable) -> bool {
        self.values.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Value)> {
        self.values.iter()
    }
}

impl FromIterator<(Variable, Value)> for Valuation {
    fn from_iter<I: IntoIterator<Item = (Variable, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{var}:={value}")?;
        }
        write!(f, "}}")
    }
}
