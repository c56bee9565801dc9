use std::cell::Cell;
use std::fmt;

use crate::kind::Kind;
use crate::node::{Sym, SymBool, SymDouble, SymFloat, SymInt, SymLong, SymNumber};
use crate::value::SymValue;

/// Identifier of a symbolic literal (a named unknown of the engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LiteralId(pub u32);

impl fmt::Display for LiteralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonically increasing source of literal ids.
///
/// One counter is shared by every lowering pass of a solver session and is
/// reset between sessions so that literal names stay small.
#[derive(Debug, Default)]
pub struct LiteralIds {
    next: Cell<u32>,
}

impl LiteralIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id.
    pub fn fresh(&self) -> LiteralId {
        let id = self.next.get();
        self.next.set(id + 1);
        LiteralId(id)
    }

    /// Number of ids handed out since the last reset.
    pub fn issued(&self) -> u32 {
        self.next.get()
    }

    pub fn reset(&self) {
        self.next.set(0);
    }
}

/// A symbolic literal together with the placeholder value it starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymLiteral {
    pub id: LiteralId,
    pub seed: SymValue,
}

impl SymLiteral {
    /// Fresh literal of `kind`, seeded with the kind's zero.
    pub fn fresh(ids: &LiteralIds, kind: Kind) -> Self {
        Self {
            id: ids.fresh(),
            seed: SymValue::seed(kind),
        }
    }

    pub fn kind(&self) -> Kind {
        self.seed.kind()
    }

    /// Node referring to this literal.
    pub fn to_sym(&self) -> Sym {
        match self.kind() {
            Kind::Bool => Sym::Bool(SymBool::Lit(self.id)),
            Kind::Int => Sym::Num(SymNumber::Int(SymInt::Lit(self.id))),
            Kind::Long => Sym::Num(SymNumber::Long(SymLong::Lit(self.id))),
            Kind::Float => Sym::Num(SymNumber::Float(SymFloat::Lit(self.id))),
            Kind::Double => Sym::Num(SymNumber::Double(SymDouble::Lit(self.id))),
        }
    }
}
