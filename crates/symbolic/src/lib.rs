//! # symlower-symbolic
//!
//! The symbolic value model of the search engine: typed constants, literals
//! and operators over `bool`, `int`, `long`, `float` and `double`.
//!
//! Kinds never mix implicitly. Each kind has its own node enum and binary
//! numeric operators are built from a [`NumPair`], which can only hold two
//! operands of the same kind. Crossing kinds requires an explicit
//! [`SymInt::AsInt`] or [`SymDouble::AsDouble`] node.
//!
//! ```
//! use symlower_symbolic::{CmpOp, LiteralIds, NumPair, SymDouble, SymLiteral, Kind, Sym, SymNumber};
//!
//! let ids = LiteralIds::new();
//! let x = SymLiteral::fresh(&ids, Kind::Double);
//! let Sym::Num(SymNumber::Double(x)) = x.to_sym() else { unreachable!() };
//! let c = NumPair::Double(x, SymDouble::Const(1.5)).compare(CmpOp::Lt);
//! assert_eq!(c.to_string(), "(< DVAR(0) 1.5d)");
//! ```

pub mod env;
pub mod eval;
mod formatter;
pub mod kind;
pub mod literal;
pub mod node;
pub mod path_condition;
pub mod value;

pub use env::Env;
pub use eval::EvalError;
pub use kind::Kind;
pub use literal::{LiteralId, LiteralIds, SymLiteral};
pub use node::{
    ArithOp, BitOp, BoolOp, CmpOp, IntShift, LongShift, MathFn, MathFn2, NumPair, Sym, SymBool,
    SymDouble, SymFloat, SymInt, SymLong, SymNumber,
};
pub use path_condition::PathCondition;
pub use value::SymValue;
