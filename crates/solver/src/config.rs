use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::SolverError;

const ENV_SOLVER: &str = "SMTKIT_SOLVER";
const ENV_SOLVER_PATH: &str = "SMTKIT_SOLVER_PATH";
const ENV_TIMEOUT_MS: &str = "SMTKIT_TIMEOUT_MS";

/// Searched after `PATH`.
const FALLBACK_DIRS: &[&str] = &["/opt/homebrew/bin", "/usr/local/bin", "/usr/bin"];

/// Solvers that accept the scripts this crate writes: SMT-LIB2 on stdin,
/// no `set-logic`, models requested by `(set-option :produce-models true)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    Z3,
    Cvc5,
}

impl SolverKind {
    pub const ALL: [SolverKind; 2] = [SolverKind::Z3, SolverKind::Cvc5];

    pub fn binary_name(&self) -> &'static str {
        match self {
            SolverKind::Z3 => "z3",
            SolverKind::Cvc5 => "cvc5",
        }
    }

    /// Flags that make the solver read SMT-LIB2 from stdin.
    fn input_flags(&self) -> &'static [&'static str] {
        match self {
            SolverKind::Z3 => &["-in"],
            SolverKind::Cvc5 => &["--lang", "smt2"],
        }
    }

    /// Per-check time limit flag. Both solvers take milliseconds.
    fn timeout_flag(&self, timeout_ms: u64) -> String {
        match self {
            SolverKind::Z3 => format!("-t:{timeout_ms}"),
            SolverKind::Cvc5 => format!("--tlimit-per={timeout_ms}"),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Z3 => write!(f, "Z3"),
            SolverKind::Cvc5 => write!(f, "CVC5"),
        }
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverKind::ALL
            .into_iter()
            .find(|kind| kind.binary_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown solver `{s}` (expected z3 or cvc5)"))
    }
}

/// How to launch one solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub kind: SolverKind,
    pub solver_path: PathBuf,
    /// Milliseconds per check; 0 disables the limit.
    pub timeout_ms: u64,
    /// Appended after the generated flags.
    pub extra_args: Vec<String>,
}

impl SolverConfig {
    pub fn new(kind: SolverKind, solver_path: PathBuf) -> Self {
        Self {
            kind,
            solver_path,
            timeout_ms: 0,
            extra_args: Vec::new(),
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Locate the binary for `kind` on `PATH`, then in the usual install
    /// directories.
    pub fn auto_detect_for(kind: SolverKind) -> Result<Self, SolverError> {
        let search_path = std::env::var_os("PATH").unwrap_or_default();
        let dirs = std::env::split_paths(&search_path)
            .chain(FALLBACK_DIRS.iter().map(PathBuf::from));
        match locate(kind.binary_name(), dirs) {
            Some(path) => {
                tracing::debug!(solver = %kind, path = %path.display(), "Found solver");
                Ok(Self::new(kind, path))
            }
            None => {
                tracing::debug!(solver = %kind, "Solver not found");
                Err(SolverError::NotFound(kind, PathBuf::from(kind.binary_name())))
            }
        }
    }

    /// Auto-detect Z3, the default solver.
    pub fn auto_detect() -> Result<Self, SolverError> {
        Self::auto_detect_for(SolverKind::Z3)
    }

    /// Configuration from the process environment.
    ///
    /// - `SMTKIT_SOLVER`: `z3` (default) or `cvc5`
    /// - `SMTKIT_SOLVER_PATH`: binary path; auto-detected when unset
    /// - `SMTKIT_TIMEOUT_MS`: per-check timeout, `0` for none
    pub fn from_env() -> Result<Self, SolverError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// [`SolverConfig::from_env`] over an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SolverError> {
        let kind = match lookup(ENV_SOLVER) {
            Some(name) => name
                .parse::<SolverKind>()
                .map_err(|e| SolverError::Config(format!("{ENV_SOLVER}: {e}")))?,
            None => SolverKind::Z3,
        };

        let mut config = match lookup(ENV_SOLVER_PATH) {
            Some(path) => Self::new(kind, PathBuf::from(path)),
            None => Self::auto_detect_for(kind)?,
        };

        if let Some(timeout) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = timeout.trim().parse().map_err(|e| {
                SolverError::Config(format!("{ENV_TIMEOUT_MS}={timeout}: {e}"))
            })?;
        }
        Ok(config)
    }

    /// Command-line arguments: input flags, time limit, then `extra_args`.
    pub fn build_args(&self) -> Vec<String> {
        let mut args: Vec<String> = self
            .kind
            .input_flags()
            .iter()
            .map(|flag| flag.to_string())
            .collect();
        if self.timeout_ms > 0 {
            args.push(self.kind.timeout_flag(self.timeout_ms));
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Fails with `NotFound` unless the configured binary exists.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.solver_path.exists() {
            return Err(SolverError::NotFound(self.kind, self.solver_path.clone()));
        }
        Ok(())
    }
}

/// First `dir/binary` that is an existing file.
fn locate(binary: &str, dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}
