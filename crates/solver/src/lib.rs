//! # symlower-solver
//!
//! Constraint solving on top of a black-box search engine.
//!
//! [`ConstraintSolver`] lowers a boolean [`Expression`](symlower_expr::Expression)
//! into the engine's symbolic model, runs one search and maps the engine's
//! answer to a three-valued [`SolveResult`]. Engine failures never escape:
//! an error or a panic inside the engine is reported as
//! [`SolveResult::Unknown`]. Lowering failures do escape, as
//! [`LowerError`](symlower_lowering::LowerError).
//!
//! [`SolverContext`] adds an incremental assertion stack on top.
//!
//! ## Usage
//!
//! ```
//! use symlower_expr::{Expression, NumericComparator, Valuation, Variable};
//! use symlower_solver::{
//!     ConstraintSolver, EngineError, SearchEngine, SearchSettings, Solution, SolveResult,
//! };
//! use symlower_symbolic::{Env, PathCondition, SymValue};
//!
//! /// Answers every query with the first literal set to 7.
//! struct Seven;
//!
//! impl SearchEngine for Seven {
//!     fn search(&self, pc: &PathCondition, _: &SearchSettings) -> Result<Solution, EngineError> {
//!         let (id, _) = pc.literals()[0];
//!         Ok(Solution::sat(Env::with_values([(id, SymValue::Int(7))])))
//!     }
//! }
//!
//! let solver = ConstraintSolver::with_default_config(Seven);
//! let x = Variable::int32("x");
//! let formula = Expression::compare(
//!     Expression::var(x.clone()),
//!     NumericComparator::Gt,
//!     Expression::constant(5),
//! );
//!
//! let mut valuation = Valuation::new();
//! assert_eq!(solver.solve_with(&formula, &mut valuation), Ok(SolveResult::Sat));
//! assert_eq!(valuation.get(&x).map(|v| v.to_string()), Some("7".to_string()));
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod result;
pub mod solver;
mod translate;

pub use config::{IntervalSolver, SearchSettings, SearchStrategy, SolverConfig};
pub use context::SolverContext;
pub use engine::{EngineVerdict, SearchEngine, Solution};
pub use error::{ConfigError, ContextError, EngineError};
pub use result::SolveResult;
pub use solver::ConstraintSolver;
