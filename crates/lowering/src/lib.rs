//! # symlower-lowering
//!
//! Translates typed source [`Expression`](symlower_expr::Expression)s into the
//! strict-kind symbolic model of the search engine.
//!
//! The source language mixes integer and real operands of any width; the
//! engine does not. Every binary numeric node goes through [`unify`], which
//! inserts explicit conversions until both operands share a kind, and
//! anything without a faithful counterpart fails with a [`LowerError`].
//!
//! ```
//! use symlower_expr::{Expression, NumericComparator, Variable};
//! use symlower_lowering::Lowering;
//! use symlower_symbolic::LiteralIds;
//!
//! let ids = LiteralIds::new();
//! let mut lowering = Lowering::new(&ids);
//! let x = Expression::var(Variable::int32("x"));
//! let pc = lowering
//!     .lower(&Expression::compare(x, NumericComparator::Eq, Expression::constant(2.5f64)))
//!     .unwrap();
//! assert_eq!(pc.to_string(), "(== (as-double IVAR(0)) 2.5d)");
//! assert_eq!(lowering.bindings().len(), 1);
//! ```

pub mod error;
pub mod lower;
pub mod unify;

pub use error::LowerError;
pub use lower::{Bindings, Lowering, kind_of};
pub use unify::unify;
