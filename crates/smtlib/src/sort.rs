use serde::{Deserialize, Serialize};

use crate::error::{TermError, TermResult};

/// SMT-LIB sort (type) representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sort {
    /// Boolean sort
    Bool,
    /// Mathematical integer sort
    Int,
    /// Real number sort
    Real,
    /// Fixed-width bitvector: `(_ BitVec n)`, `n > 0`
    BitVec(u32),
}

/// Families of sorts that may be combined by one operator application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortFamily {
    /// `Int` and `Real`
    Numeric,
    /// `Bool`
    Boolean,
    /// Bit-vectors of one width
    BitVec(u32),
}

impl Sort {
    pub fn int() -> Self {
        Sort::Int
    }

    pub fn real() -> Self {
        Sort::Real
    }

    pub fn bool() -> Self {
        Sort::Bool
    }

    /// Bit-vector sort of the given width. Zero is rejected with
    /// [`TermError::InvalidSort`].
    pub fn bitvector(width: u32) -> TermResult<Self> {
        if width == 0 {
            return Err(TermError::InvalidSort { width });
        }
        Ok(Sort::BitVec(width))
    }

    pub fn family(&self) -> SortFamily {
        match self {
            Sort::Int | Sort::Real => SortFamily::Numeric,
            Sort::Bool => SortFamily::Boolean,
            Sort::BitVec(width) => SortFamily::BitVec(*width),
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.family() == SortFamily::Numeric
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Sort::Bool)
    }
}
