//! # symlower-expr
//!
//! Typed source expressions over booleans, 32/64-bit integers, 32/64-bit
//! floats and arbitrary-precision decimals, together with valuations and a
//! reference evaluator.
//!
//! The source type system lets integer and real operands of different widths
//! mix freely; [`Type::promote`] gives the common type the evaluator computes
//! in.

pub mod eval;
pub mod expression;
pub mod operator;
pub mod types;
pub mod valuation;
pub mod value;
pub mod variable;

pub use eval::EvaluateError;
pub use expression::{Expression, IS_NAN, and_all};
pub use operator::{BitvectorOperator, LogicalOperator, NumericComparator, NumericOperator};
pub use types::Type;
pub use valuation::Valuation;
pub use value::{Value, ValueParseError};
pub use variable::Variable;
