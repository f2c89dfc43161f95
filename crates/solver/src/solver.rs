use std::io::Write;
use std::process::{Command, Stdio};

use smtkit_smtlib::{Command as SmtCmd, Script};

use crate::config::{SolverConfig, SolverKind};
use crate::error::SolverError;
use crate::parser::parse_solver_output;
use crate::result::SolverResult;

/// SMT solver driven as a subprocess (Z3 or CVC5).
///
/// Each check spawns the configured binary, pipes SMT-LIB2 text into its
/// stdin, and parses the verdict and model from its stdout.
#[derive(Debug, Clone)]
pub struct CliSolver {
    config: SolverConfig,
}

impl CliSolver {
    /// Create a new `CliSolver` with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Auto-detected Z3 with default settings.
    pub fn with_default_config() -> Result<Self, SolverError> {
        Self::with_default_config_for(SolverKind::Z3)
    }

    /// Auto-detected solver of the given kind with default settings.
    pub fn with_default_config_for(kind: SolverKind) -> Result<Self, SolverError> {
        Ok(Self::new(SolverConfig::auto_detect_for(kind)?))
    }

    /// Get a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn kind(&self) -> SolverKind {
        self.config.kind
    }

    /// Check satisfiability of a Script.
    ///
    /// Sends [`solver_input`] for the script and parses the reply.
    pub fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError> {
        self.check_sat_raw(&solver_input(script))
    }

    /// Check satisfiability from a raw SMT-LIB2 string.
    pub fn check_sat_raw(&self, smtlib: &str) -> Result<SolverResult, SolverError> {
        self.config.validate()?;

        let kind = self.config.kind;
        let args = self.config.build_args();
        tracing::debug!(
            solver = %kind,
            path = %self.config.solver_path.display(),
            ?args,
            "Spawning solver"
        );

        let mut child = Command::new(&self.config.solver_path)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SolverError::ProcessError(format!("Failed to start {kind}: {e}")))?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin
                .write_all(smtlib.as_bytes())
                .map_err(|e| format!("Failed to write to {kind} stdin: {e}")),
            None => Err(format!("Failed to open {kind} stdin")),
        };
        if let Err(msg) = written {
            // Reap the child so a failed write leaves no process behind.
            let _ = child.kill();
            let _ = child.wait();
            return Err(SolverError::ProcessError(msg));
        }

        let output = child
            .wait_with_output()
            .map_err(|e| SolverError::ProcessError(format!("Failed to wait for {kind}: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if stderr.contains("timeout") || stdout.trim() == "timeout" {
            tracing::debug!(solver = %kind, "Solver timed out");
            return Ok(SolverResult::Unknown("timeout".to_string()));
        }

        let result = parse_solver_output(&stdout, &stderr)?;
        tracing::debug!(solver = %kind, verdict = %result.verdict(), "Solver finished");
        Ok(result)
    }
}

const PRODUCE_MODELS: &str = "produce-models";

/// Text piped to the solver for `script`.
///
/// Requests model production first, since neither solver keeps models by
/// default, then appends `(check-sat)` and `(get-model)` unless present.
pub fn solver_input(script: &Script) -> String {
    let commands = script.commands();
    let mut smtlib = String::new();
    if !commands
        .iter()
        .any(|c| matches!(c, SmtCmd::SetOption(key, _) if key == PRODUCE_MODELS))
    {
        smtlib.push_str(&SmtCmd::SetOption(PRODUCE_MODELS.into(), "true".into()).to_string());
        smtlib.push('\n');
    }
    if !commands.is_empty() {
        smtlib.push_str(&script.to_string());
        smtlib.push('\n');
    }
    if !commands.iter().any(|c| matches!(c, SmtCmd::CheckSat)) {
        smtlib.push_str("(check-sat)\n");
    }
    if !commands.iter().any(|c| matches!(c, SmtCmd::GetModel)) {
        smtlib.push_str("(get-model)\n");
    }
    smtlib
}
