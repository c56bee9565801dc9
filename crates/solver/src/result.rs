use std::fmt;

use crate::engine::EngineVerdict;

/// Three-valued outcome of a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    /// Satisfiable; a requested valuation has been filled in.
    Sat,
    /// Proven unsatisfiable.
    Unsat,
    /// The engine could not decide, or failed.
    Unknown,
}

impl SolveResult {
    /// Returns `true` if the result is `Sat`.
    pub fn is_sat(&self) -> bool {
        matches!(self, SolveResult::Sat)
    }

    /// Returns `true` if the result is `Unsat`.
    pub fn is_unsat(&self) -> bool {
        matches!(self, SolveResult::Unsat)
    }

    /// Returns `true` if the result is `Unknown`.
    pub fn is_unknown(&self) -> bool {
        matches!(self, SolveResult::Unknown)
    }
}

impl From<EngineVerdict> for SolveResult {
    fn from(verdict: EngineVerdict) -> Self {
        match verdict {
            EngineVerdict::Sat => SolveResult::Sat,
            EngineVerdict::Unsat => SolveResult::Unsat,
            EngineVerdict::Unknown => SolveResult::Unknown,
        }
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveResult::Sat => write!(f, "SAT"),
            SolveResult::Unsat => write!(f, "UNSAT"),
            SolveResult::Unknown => write!(f, "DONT_KNOW"),
        }
    }
}
