use std::panic::{self, AssertUnwindSafe};

use symlower_expr::{Expression, Valuation};
use symlower_lowering::{LowerError, Lowering};
use symlower_symbolic::{LiteralIds, PathCondition};

use crate::config::{SearchSettings, SolverConfig};
use crate::context::SolverContext;
use crate::engine::{EngineVerdict, SearchEngine, Solution};
use crate::error::ConfigError;
use crate::result::SolveResult;
use crate::translate::translate;

/// Constraint solver on top of a black-box [`SearchEngine`].
///
/// Each solve lowers the formula afresh, invokes the engine once and, on a
/// satisfiable verdict, translates the engine's environment back into the
/// caller's valuation.
#[derive(Debug)]
pub struct ConstraintSolver<E> {
    engine: E,
    config: SolverConfig,
    settings: SearchSettings,
    ids: LiteralIds,
}

impl<E: SearchEngine> ConstraintSolver<E> {
    /// Create a solver after validating `config`.
    pub fn new(engine: E, config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let settings = config.settings();
        tracing::debug!(
            strategy = %settings.strategy,
            seed = settings.seed,
            interval_solver = %settings.interval_solver,
            "Created constraint solver"
        );
        Ok(Self {
            engine,
            config,
            settings,
            ids: LiteralIds::new(),
        })
    }

    /// Create a solver with the default configuration.
    pub fn with_default_config(engine: E) -> Self {
        let config = SolverConfig::default();
        let settings = config.settings();
        Self {
            engine,
            config,
            settings,
            ids: LiteralIds::new(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Restart literal numbering at zero.
    pub fn reset_ids(&self) {
        self.ids.reset();
    }

    /// Open an empty assertion stack on this solver.
    pub fn create_context(&self) -> SolverContext<'_, E> {
        SolverContext::new(self)
    }

    /// Decide satisfiability of `formula`.
    pub fn solve(&self, formula: &Expression) -> Result<SolveResult, LowerError> {
        self.run(formula, None)
    }

    /// Decide satisfiability of `formula` and, if satisfiable, store a
    /// satisfying value for each of its variables in `valuation`.
    pub fn solve_with(
        &self,
        formula: &Expression,
        valuation: &mut Valuation,
    ) -> Result<SolveResult, LowerError> {
        self.run(formula, Some(valuation))
    }

    fn run(
        &self,
        formula: &Expression,
        valuation: Option<&mut Valuation>,
    ) -> Result<SolveResult, LowerError> {
        self.reset_ids();
        let mut lowering = Lowering::new(&self.ids);
        let pc = lowering.lower(formula)?;
        let bindings = lowering.into_bindings();
        tracing::trace!(formula = %pc, literals = bindings.len(), "Lowered formula");

        let Some(solution) = self.search(&pc) else {
            return Ok(SolveResult::Unknown);
        };
        let result = SolveResult::from(solution.verdict);

        if let Some(valuation) = valuation
            && solution.verdict == EngineVerdict::Sat
        {
            if let Err(e) = translate(&bindings, &solution.env, valuation) {
                tracing::error!(error = %e, "Engine returned an inconsistent environment");
                return Ok(SolveResult::Unknown);
            }
            tracing::trace!(valuation = %valuation, "Satisfiable");
        }
        Ok(result)
    }

    /// Invoke the engine once. Errors and panics yield `None`.
    fn search(&self, pc: &PathCondition) -> Option<Solution> {
        let start = std::time::Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.engine.search(pc, &self.settings)
        }));
        match outcome {
            Ok(Ok(solution)) => {
                tracing::debug!(
                    verdict = ?solution.verdict,
                    "Search finished in {:?}",
                    start.elapsed()
                );
                Some(solution)
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Search engine failed; returning DONT_KNOW");
                None
            }
            Err(payload) => {
                let msg = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!(panic = %msg, "Search engine panicked; returning DONT_KNOW");
                None
            }
        }
    }
}
