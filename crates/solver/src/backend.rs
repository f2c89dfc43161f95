//! Abstraction over SMT solver backends.
//!
//! The `SolverBackend` trait is the seam between finished scripts and
//! whatever answers them: the subprocess-based [`CliSolver`] in production,
//! or a scripted stand-in in tests.

use smtkit_smtlib::Script;

use crate::config::{SolverConfig, SolverKind};
use crate::error::SolverError;
use crate::result::SolverResult;
use crate::solver::CliSolver;

/// Trait abstracting over different SMT solver backends.
pub trait SolverBackend {
    /// Check satisfiability of the given SMT script.
    ///
    /// Returns:
    /// - `Ok(SolverResult::Sat(model))` if satisfiable
    /// - `Ok(SolverResult::Unsat)` if unsatisfiable
    /// - `Ok(SolverResult::Unknown(reason))` if solver couldn't determine
    /// - `Err(SolverError)` if the solver invocation failed
    fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError>;
}

impl SolverBackend for CliSolver {
    fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError> {
        CliSolver::check_sat(self, script)
    }
}

/// Create a subprocess backend for the specified solver kind.
pub fn create_backend(kind: SolverKind) -> Result<Box<dyn SolverBackend>, SolverError> {
    tracing::debug!("Using {kind} subprocess backend");
    let solver = CliSolver::with_default_config_for(kind)?;
    Ok(Box::new(solver))
}

/// Create the default backend, honoring `SMTKIT_SOLVER`,
/// `SMTKIT_SOLVER_PATH` and `SMTKIT_TIMEOUT_MS`.
pub fn create_default_backend() -> Result<Box<dyn SolverBackend>, SolverError> {
    let config = SolverConfig::from_env()?;
    tracing::debug!("Using {} subprocess backend", config.kind);
    Ok(Box::new(CliSolver::new(config)))
}
