//! Term construction errors.

use thiserror::Error;

use crate::sort::Sort;
use crate::term::OperatorKind;

/// Errors raised while building sorts, constants, or operator applications.
///
/// All of them are construction-time failures: no partially built term
/// survives an error, so callers can retry with corrected operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    /// Malformed sort parameter (a zero-width bit-vector).
    #[error("[TERM_INVALID_SORT] invalid sort: bit-vector width must be positive, got {width}")]
    InvalidSort { width: u32 },

    /// A host literal that cannot be encoded exactly into the requested sort.
    #[error("[TERM_UNSUPPORTED_LITERAL] unsupported literal: {literal}")]
    UnsupportedLiteral { literal: String },

    /// Operand sorts are incompatible with the operator.
    #[error("[TERM_SORT_MISMATCH] sort mismatch for `{op}`: {}", format_sorts(.sorts))]
    SortMismatch { op: OperatorKind, sorts: Vec<Sort> },
}

impl TermError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            TermError::InvalidSort { .. } => "TERM_INVALID_SORT",
            TermError::UnsupportedLiteral { .. } => "TERM_UNSUPPORTED_LITERAL",
            TermError::SortMismatch { .. } => "TERM_SORT_MISMATCH",
        }
    }

    pub(crate) fn mismatch(op: OperatorKind, sorts: impl IntoIterator<Item = Sort>) -> Self {
        TermError::SortMismatch {
            op,
            sorts: sorts.into_iter().collect(),
        }
    }
}

fn format_sorts(sorts: &[Sort]) -> String {
    sorts
        .iter()
        .map(Sort::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result alias used throughout the crate.
pub type TermResult<T> = Result<T, TermError>;
