//! Search engines used by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use symlower_solver::{EngineError, SearchEngine, SearchSettings, Solution};
use symlower_symbolic::{Env, Kind, PathCondition, SymValue};

const MAX_POINTS: usize = 200_000;

fn candidates(kind: Kind) -> Vec<SymValue> {
    const INTS: [i32; 13] = [0, 1, -1, 2, -2, 3, -3, 5, 6, 7, 10, -10, 100];
    const REALS: [f64; 11] = [0.0, 1.0, -1.0, 0.5, 2.0, 2.5, 3.0, -2.5, 6.0, 10.0, -10.0];
    match kind {
        Kind::Bool => vec![SymValue::Bool(true), SymValue::Bool(false)],
        Kind::Int => INTS.iter().map(|v| SymValue::Int(*v)).collect(),
        Kind::Long => INTS.iter().map(|v| SymValue::Long(i64::from(*v))).collect(),
        Kind::Float => REALS.iter().map(|v| SymValue::Float(*v as f32)).collect(),
        Kind::Double => REALS.iter().map(|v| SymValue::Double(*v)).collect(),
    }
}

/// Deterministic grid search.
///
/// Ground formulas are decided exactly. Formulas with unknowns are SAT at
/// the first satisfying grid point and UNKNOWN otherwise; the grid engine
/// never claims UNSAT for them.
#[derive(Default)]
pub struct GridEngine {
    pub calls: Cell<usize>,
    pub seen: RefCell<Vec<String>>,
    pub last_settings: RefCell<Option<SearchSettings>>,
}

impl GridEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchEngine for GridEngine {
    fn search(
        &self,
        pc: &PathCondition,
        settings: &SearchSettings,
    ) -> Result<Solution, EngineError> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(pc.to_string());
        *self.last_settings.borrow_mut() = Some(settings.clone());

        let literals = pc.literals();
        if literals.is_empty() {
            return match pc.eval(&Env::new()) {
                Ok(true) => Ok(Solution::sat(Env::new())),
                Ok(false) => Ok(Solution::unsat()),
                Err(e) => Err(EngineError::Failed(e.to_string())),
            };
        }

        let axes: Vec<Vec<SymValue>> = literals.iter().map(|(_, k)| candidates(*k)).collect();
        let mut index = vec![0usize; axes.len()];
        for _ in 0..MAX_POINTS {
            let env = Env::with_values(
                literals
                    .iter()
                    .zip(&index)
                    .zip(&axes)
                    .map(|(((id, _), i), axis)| (*id, axis[*i])),
            );
            if let Ok(true) = pc.eval(&env) {
                return Ok(Solution::sat(env));
            }
            // Odometer step; stop after the last point.
            let mut pos = 0;
            loop {
                if pos == axes.len() {
                    return Ok(Solution::unknown());
                }
                index[pos] += 1;
                if index[pos] < axes[pos].len() {
                    break;
                }
                index[pos] = 0;
                pos += 1;
            }
        }
        Ok(Solution::unknown())
    }
}

/// Always fails.
pub struct FailingEngine;

impl SearchEngine for FailingEngine {
    fn search(&self, _: &PathCondition, _: &SearchSettings) -> Result<Solution, EngineError> {
        Err(EngineError::Failed("native library not loaded".into()))
    }
}

/// Always panics.
pub struct PanickingEngine;

impl SearchEngine for PanickingEngine {
    fn search(&self, _: &PathCondition, _: &SearchSettings) -> Result<Solution, EngineError> {
        panic!("index out of bounds in particle swarm")
    }
}

/// Replays a fixed solution.
pub struct ScriptedEngine(pub Solution);

impl SearchEngine for ScriptedEngine {
    fn search(&self, _: &PathCondition, _: &SearchSettings) -> Result<Solution, EngineError> {
        Ok(self.0.clone())
    }
}
