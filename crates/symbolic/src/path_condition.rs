use std::collections::HashSet;

use crate::kind::Kind;
use crate::literal::LiteralId;
use crate::node::{SymBool, VisitLiterals};

/// A conjunction of boolean constraints handed to the engine in one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathCondition {
    constraints: Vec<SymBool>,
}

impl PathCondition {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    pub fn with_constraints(constraints: Vec<SymBool>) -> Self {
        Self { constraints }
    }

    pub fn push(&mut self, constraint: SymBool) {
        self.constraints.push(constraint);
    }

    pub fn constraints(&self) -> &[SymBool] {
        &self.constraints
    }

    pub fn into_constraints(self) -> Vec<SymBool> {
        self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Distinct literals in order of first occurrence.
    pub fn literals(&self) -> Vec<(LiteralId, Kind)> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for c in &self.constraints {
            c.visit_literals(&mut |id, kind| {
                if seen.insert(id) {
                    out.push((id, kind));
                }
            });
        }
        out
    }
}
