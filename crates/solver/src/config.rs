use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Property keys understood by [`SolverConfig::from_properties`].
pub mod keys {
    pub const SEED: &str = "coral.seed";
    pub const ITERATIONS: &str = "coral.iterations";
    pub const SOLVER: &str = "coral.solver";
    pub const OPTIMIZE: &str = "coral.optimize";
    pub const INTERVAL_SOLVER: &str = "coral.interval_solver";
    pub const INTERVAL_SOLVER_PATH: &str = "coral.interval_solver.path";
}

/// Search strategy run by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum SearchStrategy {
    /// Particle swarm optimisation.
    #[default]
    PsoOpt4j,
    Random,
    /// Alternating variable method.
    Avm,
    /// Genetic algorithm.
    GaOpt4j,
    /// Differential evolution.
    DeOpt4j,
    /// Simulated annealing.
    SaOpt4j,
}

impl SearchStrategy {
    pub fn name(self) -> &'static str {
        match self {
            SearchStrategy::PsoOpt4j => "PSO_OPT4J",
            SearchStrategy::Random => "RANDOM",
            SearchStrategy::Avm => "AVM",
            SearchStrategy::GaOpt4j => "GA_OPT4J",
            SearchStrategy::DeOpt4j => "DE_OPT4J",
            SearchStrategy::SaOpt4j => "SA_OPT4J",
        }
    }

    /// Whether the engine takes an iteration budget for this strategy.
    pub fn has_iteration_budget(self) -> bool {
        matches!(
            self,
            SearchStrategy::PsoOpt4j | SearchStrategy::Random | SearchStrategy::Avm
        )
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PSO_OPT4J" => Ok(SearchStrategy::PsoOpt4j),
            "RANDOM" => Ok(SearchStrategy::Random),
            "AVM" => Ok(SearchStrategy::Avm),
            "GA_OPT4J" => Ok(SearchStrategy::GaOpt4j),
            "DE_OPT4J" => Ok(SearchStrategy::DeOpt4j),
            "SA_OPT4J" => Ok(SearchStrategy::SaOpt4j),
            _ => Err(format!(
                "Unknown search strategy: {s}. Valid options: pso_opt4j, random, avm, ga_opt4j, de_opt4j, sa_opt4j"
            )),
        }
    }
}

impl TryFrom<String> for SearchStrategy {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Optional interval solver used by the engine to prune the search space.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IntervalSolver {
    #[default]
    None,
    RealPaver {
        path: PathBuf,
    },
    Icos {
        path: PathBuf,
    },
}

impl IntervalSolver {
    pub fn name(&self) -> &'static str {
        match self {
            IntervalSolver::None => "NONE",
            IntervalSolver::RealPaver { .. } => "REALPAVER",
            IntervalSolver::Icos { .. } => "ICOS",
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            IntervalSolver::None => None,
            IntervalSolver::RealPaver { path } | IntervalSolver::Icos { path } => Some(path),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, IntervalSolver::None)
    }

    /// Build from a solver name and an optional installation path.
    pub fn from_name(name: &str, path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidProperty {
            key: keys::INTERVAL_SOLVER.to_string(),
            value: name.to_string(),
            reason: reason.to_string(),
        };
        match (name.to_uppercase().as_str(), path) {
            ("NONE", _) => Ok(IntervalSolver::None),
            ("REALPAVER", Some(path)) => Ok(IntervalSolver::RealPaver { path }),
            ("ICOS", Some(path)) => Ok(IntervalSolver::Icos { path }),
            (s @ ("REALPAVER" | "ICOS"), None) => {
                Err(ConfigError::MissingIntervalSolverPath(s.to_string()))
            }
            _ => Err(invalid("expected none, realpaver or icos")),
        }
    }
}

impl fmt::Display for IntervalSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Seed of the engine's random number generator.
    pub seed: i64,
    /// Iteration budget; `None` keeps the engine's default.
    pub iterations: Option<u32>,
    pub solver_kind: SearchStrategy,
    /// Let the interval solver simplify the formula first.
    pub optimize: bool,
    pub interval_solver: IntervalSolver,
}

pub const DEFAULT_SEED: i64 = 464_655;

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            iterations: None,
            solver_kind: SearchStrategy::default(),
            optimize: true,
            interval_solver: IntervalSolver::None,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn with_solver_kind(mut self, kind: SearchStrategy) -> Self {
        self.solver_kind = kind;
        self
    }

    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn with_interval_solver(mut self, interval_solver: IntervalSolver) -> Self {
        self.interval_solver = interval_solver;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == Some(0) {
            return Err(ConfigError::ZeroIterations);
        }
        if let Some(path) = self.interval_solver.path()
            && path.as_os_str().is_empty()
        {
            return Err(ConfigError::MissingIntervalSolverPath(
                self.interval_solver.name().to_string(),
            ));
        }
        Ok(())
    }

    /// Read a configuration from `coral.*` properties.
    ///
    /// Absent keys keep their defaults. A non-positive iteration count means
    /// the engine default.
    pub fn from_properties(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
        where
            T::Err: fmt::Display,
        {
            value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidProperty {
                    key: key.to_string(),
                    value: value.to_string(),
                    reason: e.to_string(),
                })
        }

        let mut config = Self::default();
        if let Some(v) = props.get(keys::SEED) {
            config.seed = parse(keys::SEED, v)?;
        }
        if let Some(v) = props.get(keys::ITERATIONS) {
            let n: i64 = parse(keys::ITERATIONS, v)?;
            config.iterations = u32::try_from(n).ok().filter(|n| *n > 0);
        }
        if let Some(v) = props.get(keys::SOLVER) {
            config.solver_kind = parse(keys::SOLVER, v)?;
        }
        if let Some(v) = props.get(keys::OPTIMIZE) {
            config.optimize = parse(keys::OPTIMIZE, &v.to_lowercase())?;
        }
        if let Some(v) = props.get(keys::INTERVAL_SOLVER) {
            let path = props.get(keys::INTERVAL_SOLVER_PATH).map(PathBuf::from);
            config.interval_solver = IntervalSolver::from_name(v.trim(), path)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Settings handed to the engine on every search.
    pub fn settings(&self) -> SearchSettings {
        let interval = self.interval_solver.is_enabled();
        SearchSettings {
            seed: self.seed,
            strategy: self.solver_kind,
            iterations: self
                .iterations
                .filter(|_| self.solver_kind.has_iteration_budget()),
            interval_solver: self.interval_solver.clone(),
            simplify_with_interval_solver: interval && self.optimize,
        }
    }
}

/// Resolved engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub seed: i64,
    pub strategy: SearchStrategy,
    /// Budget for the selected strategy, if it takes one and one was set.
    pub iterations: Option<u32>,
    pub interval_solver: IntervalSolver,
    /// Only ever set together with an interval solver.
    pub simplify_with_interval_solver: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SolverConfig::default().settings()
    }
}
