use std::collections::HashMap;

use crate::literal::LiteralId;
use crate::value::SymValue;

/// Solution environment returned by the engine: one value per literal.
///
/// The engine is free to report a value of a different kind than the
/// literal was declared with; consumers convert as needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Env {
    values: HashMap<LiteralId, SymValue>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: impl IntoIterator<Item = (LiteralId, SymValue)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, id: LiteralId, value: SymValue) -> Option<SymValue> {
        self.values.insert(id, value)
    }

    pub fn get(&self, id: LiteralId) -> Option<SymValue> {
        self.values.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LiteralId, SymValue)> + '_ {
        self.values.iter().map(|(id, v)| (*id, *v))
    }
}
