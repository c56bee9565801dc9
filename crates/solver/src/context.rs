//! Incremental assertion stack.

use symlower_expr::{Expression, Valuation, and_all};
use symlower_lowering::LowerError;

use crate::engine::SearchEngine;
use crate::error::ContextError;
use crate::result::SolveResult;
use crate::solver::ConstraintSolver;

/// A stack of assertion frames solved as one conjunction.
///
/// The stack starts with no frame at all; assertions can only be added
/// after a [`push`](Self::push).
#[derive(Debug)]
pub struct SolverContext<'s, E> {
    solver: &'s ConstraintSolver<E>,
    frames: Vec<Vec<Expression>>,
}

impl<'s, E: SearchEngine> SolverContext<'s, E> {
    pub(crate) fn new(solver: &'s ConstraintSolver<E>) -> Self {
        Self {
            solver,
            frames: Vec::new(),
        }
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Open a new, empty frame.
    pub fn push(&mut self) {
        self.frames.push(Vec::new());
        tracing::trace!(depth = self.depth(), "push");
    }

    /// Discard the `n` topmost frames with their assertions.
    pub fn pop(&mut self, n: usize) -> Result<(), ContextError> {
        let depth = self.depth();
        if n > depth {
            return Err(ContextError::PopUnderflow {
                requested: n,
                depth,
            });
        }
        self.frames.truncate(depth - n);
        tracing::trace!(depth = self.depth(), "pop");
        Ok(())
    }

    /// Append assertions to the topmost frame.
    pub fn add<I>(&mut self, exprs: I) -> Result<(), ContextError>
    where
        I: IntoIterator<Item = Expression>,
    {
        let frame = self.frames.last_mut().ok_or(ContextError::NoFrame)?;
        frame.extend(exprs);
        Ok(())
    }

    /// Conjunction of all frames, bottom to top; `None` without frames.
    pub fn assertion(&self) -> Option<Expression> {
        if self.frames.is_empty() {
            return None;
        }
        Some(and_all(
            self.frames.iter().map(|frame| and_all(frame.iter().cloned())),
        ))
    }

    pub fn solve(&self) -> Result<SolveResult, LowerError> {
        match self.assertion() {
            Some(formula) => self.solver.solve(&formula),
            None => Ok(SolveResult::Unsat),
        }
    }

    pub fn solve_with(&self, valuation: &mut Valuation) -> Result<SolveResult, LowerError> {
        match self.assertion() {
            Some(formula) => self.solver.solve_with(&formula, valuation),
            None => Ok(SolveResult::Unsat),
        }
    }

    /// Close the context. Engine resources go with the solver itself.
    pub fn dispose(self) {
        tracing::trace!(depth = self.depth(), "dispose");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchSettings;
    use crate::engine::Solution;
    use crate::error::EngineError;
    use symlower_expr::{NumericComparator, Variable};
    use symlower_symbolic::PathCondition;

    struct Undecided;

    impl SearchEngine for Undecided {
        fn search(
            &self,
            _pc: &PathCondition,
            _settings: &SearchSettings,
        ) -> Result<Solution, EngineError> {
            Ok(Solution::unknown())
        }
    }

    fn gt(name: &str, bound: i32) -> Expression {
        Expression::compare(
            Expression::var(Variable::int32(name)),
            NumericComparator::Gt,
            Expression::constant(bound),
        )
    }

    #[test]
    fn starts_without_frames() {
        let solver = ConstraintSolver::with_default_config(Undecided);
        let mut ctx = solver.create_context();
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.add([gt("x", 1)]), Err(ContextError::NoFrame));
        assert_eq!(ctx.solve(), Ok(SolveResult::Unsat));
    }

    #[test]
    fn pop_underflow_leaves_stack_untouched() {
        let solver = ConstraintSolver::with_default_config(Undecided);
        let mut ctx = solver.create_context();
        ctx.push();
        ctx.add([gt("x", 1)]).unwrap();
        assert_eq!(
            ctx.pop(2),
            Err(ContextError::PopUnderflow {
                requested: 2,
                depth: 1
            })
        );
        assert_eq!(ctx.depth(), 1);
        assert!(ctx.assertion().is_some());
    }

    #[test]
    fn frames_conjoin_bottom_to_top() {
        let solver = ConstraintSolver::with_default_config(Undecided);
        let mut ctx = solver.create_context();
        ctx.push();
        ctx.add([gt("x", 1), gt("y", 2)]).unwrap();
        ctx.push();
        ctx.push();
        ctx.add([gt("z", 3)]).unwrap();
        assert_eq!(
            ctx.assertion().unwrap().to_string(),
            "((((x > 1) && (y > 2)) && true) && (z > 3))"
        );

        ctx.pop(2).unwrap();
        assert_eq!(ctx.depth(), 1);
        assert_eq!(
            ctx.assertion().unwrap().to_string(),
            "((x > 1) && (y > 2))"
        );
        ctx.dispose();
    }

    #[test]
    fn pop_zero_is_noop() {
        let solver = ConstraintSolver::with_default_config(Undecided);
        let mut ctx = solver.create_context();
        ctx.push();
        ctx.pop(0).unwrap();
        assert_eq!(ctx.depth(), 1);
        assert_eq!(ctx.assertion(), Some(Expression::constant(true)));
    }
}
