//! Seam to the external search engine.
//!
//! The engine is a black box: it receives a path condition and the resolved
//! settings and answers with a verdict and an environment holding a value for
//! every literal it assigned.

use symlower_symbolic::{Env, PathCondition};

use crate::config::SearchSettings;
use crate::error::EngineError;

/// Verdict reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineVerdict {
    Sat,
    Unsat,
    Unknown,
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub verdict: EngineVerdict,
    /// Literal values; meaningful only for [`EngineVerdict::Sat`].
    pub env: Env,
}

impl Solution {
    pub fn sat(env: Env) -> Self {
        Self {
            verdict: EngineVerdict::Sat,
            env,
        }
    }

    pub fn unsat() -> Self {
        Self {
            verdict: EngineVerdict::Unsat,
            env: Env::new(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            verdict: EngineVerdict::Unknown,
            env: Env::new(),
        }
    }
}

/// A constraint search engine.
///
/// Implementations may fail with an [`EngineError`] or even panic; callers
/// in this crate treat both as an undecided search.
pub trait SearchEngine {
    /// Search for an assignment satisfying every constraint of `pc`.
    fn search(&self, pc: &PathCondition, settings: &SearchSettings)
    -> Result<Solution, EngineError>;
}

impl<E: SearchEngine + ?Sized> SearchEngine for Box<E> {
    fn search(
        &self,
        pc: &PathCondition,
        settings: &SearchSettings,
    ) -> Result<Solution, EngineError> {
        (**self).search(pc, settings)
    }
}

impl<E: SearchEngine + ?Sized> SearchEngine for &E {
    fn search(
        &self,
        pc: &PathCondition,
        settings: &SearchSettings,
    ) -> Result<Solution, EngineError> {
        (**self).search(pc, settings)
    }
}
