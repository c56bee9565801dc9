use thiserror::Error;

/// Invalid solver configuration, reported before any solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("iteration budget must be positive")]
    ZeroIterations,

    #[error("interval solver {0} needs a path")]
    MissingIntervalSolverPath(String),

    #[error("invalid value '{value}' for property {key}: {reason}")]
    InvalidProperty {
        key: String,
        value: String,
        reason: String,
    },
}

/// Failure inside the search engine.
///
/// Never escapes a solve call: the orchestrator turns it into an unknown
/// verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("search engine failed: {0}")]
    Failed(String),

    #[error("search engine rejected the formula: {0}")]
    Unsupported(String),
}

/// Misuse of the assertion stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("no assertion frame; call push() first")]
    NoFrame,

    #[error("cannot pop {requested} frame(s) from a stack of depth {depth}")]
    PopUnderflow { requested: usize, depth: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config_errors() {
        assert_eq!(
            ConfigError::ZeroIterations.to_string(),
            "iteration budget must be positive"
        );
        assert_eq!(
            ConfigError::MissingIntervalSolverPath("REALPAVER".into()).to_string(),
            "interval solver REALPAVER needs a path"
        );
        let err = ConfigError::InvalidProperty {
            key: "coral.seed".into(),
            value: "abc".into(),
            reason: "invalid digit found in string".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'abc' for property coral.seed: invalid digit found in string"
        );
    }

    #[test]
    fn display_engine_error() {
        let err = EngineError::Failed("out of memory".into());
        assert_eq!(err.to_string(), "search engine failed: out of memory");
    }

    #[test]
    fn display_context_errors() {
        assert_eq!(
            ContextError::NoFrame.to_string(),
            "no assertion frame; call push() first"
        );
        let err = ContextError::PopUnderflow {
            requested: 3,
            depth: 1,
        };
        assert_eq!(
            err.to_string(),
            "cannot pop 3 frame(s) from a stack of depth 1"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(ContextError::NoFrame, ContextError::NoFrame);
        assert_ne!(
            EngineError::Failed("x".into()),
            EngineError::Unsupported("x".into())
        );
    }
}
