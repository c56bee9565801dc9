//! Numeric unification of binary operands.
//!
//! Operands are classified as integral (`int`, `long`) or real (`float`,
//! `double`):
//!
//! - different classes: the integral side becomes a `double`, the real side
//!   is kept as is;
//! - both real, different widths: the `float` side becomes a `double`;
//! - both integral, different widths: the `long` side is narrowed to `int`.
//!
//! The result is a [`NumPair`] or, when the kinds still differ (a `float`
//! against a promoted integral), an error.

use symlower_symbolic::{Kind, NumPair, SymNumber};

use crate::error::LowerError;

/// Bring two lowered operands to one common kind.
pub fn unify(lhs: SymNumber, rhs: SymNumber) -> Result<NumPair, LowerError> {
    let (lk, rk) = (lhs.kind(), rhs.kind());
    let (lhs, rhs) = if lk == rk {
        (lhs, rhs)
    } else {
        match (lk.is_integral(), rk.is_integral()) {
            (true, false) => (to_double(lhs), rhs),
            (false, true) => (lhs, to_double(rhs)),
            (false, false) if lk == Kind::Double => (lhs, to_double(rhs)),
            (false, false) => (to_double(lhs), rhs),
            (true, true) if lk == Kind::Long => (narrow(lhs), rhs),
            (true, true) => (lhs, narrow(rhs)),
        }
    };
    SymNumber::pair(lhs, rhs).map_err(|(l, r)| LowerError::IncompatibleOperands {
        left: l.kind(),
        right: r.kind(),
    })
}

fn to_double(n: SymNumber) -> SymNumber {
    tracing::trace!(from = %n.kind(), "Promoting operand to double");
    SymNumber::Double(n.into_double())
}

fn narrow(n: SymNumber) -> SymNumber {
    tracing::warn!(from = %n.kind(), "Narrowing long operand to int; high bits are lost");
    SymNumber::Int(n.into_int())
}
