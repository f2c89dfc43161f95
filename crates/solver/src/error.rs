use std::path::PathBuf;

use smtkit_smtlib::Sort;
use thiserror::Error;

use crate::config::SolverKind;

/// Errors from solver interaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Solver binary not found at the specified path.
    #[error("{0} binary not found at: {path}", path = .1.display())]
    NotFound(SolverKind, PathBuf),
    /// Process failed to start or crashed.
    #[error("Solver process error: {0}")]
    ProcessError(String),
    /// Failed to parse solver output.
    #[error("Failed to parse solver output: {0}")]
    ParseError(String),
    /// Invalid configuration value (e.g. from the environment).
    #[error("Invalid solver configuration: {0}")]
    Config(String),
    /// Only `Bool` terms can be asserted.
    #[error("Assertion must have sort Bool, got {0}")]
    NotBoolean(Sort),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = SolverError::NotFound(SolverKind::Z3, PathBuf::from("/no/z3"));
        assert_eq!(err.to_string(), "Z3 binary not found at: /no/z3");
        let err = SolverError::NotFound(SolverKind::Cvc5, PathBuf::from("cvc5"));
        assert_eq!(err.to_string(), "CVC5 binary not found at: cvc5");
    }

    #[test]
    fn display_process_error() {
        let err = SolverError::ProcessError("crashed".to_string());
        assert_eq!(err.to_string(), "Solver process error: crashed");
    }

    #[test]
    fn display_parse_error() {
        let err = SolverError::ParseError("bad output".to_string());
        assert_eq!(err.to_string(), "Failed to parse solver output: bad output");
    }

    #[test]
    fn display_config() {
        let err = SolverError::Config("SMTKIT_TIMEOUT_MS=soon".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid solver configuration: SMTKIT_TIMEOUT_MS=soon"
        );
    }

    #[test]
    fn display_not_boolean() {
        let err = SolverError::NotBoolean(Sort::BitVec(8));
        assert_eq!(err.to_string(), "Assertion must have sort Bool, got (_ BitVec 8)");
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            SolverError::NotBoolean(Sort::Int),
            SolverError::NotBoolean(Sort::Int)
        );
        assert_ne!(
            SolverError::NotBoolean(Sort::Int),
            SolverError::ProcessError("x".into())
        );
    }
}
