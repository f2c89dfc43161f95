//! Host literals and the sort-tagged constants they encode into.
//!
//! Floating literals are never kept as binary floats: they are read back
//! through their shortest round-trip decimal text and turned into an exact,
//! reduced rational (`3.14` becomes `157/50`).

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed};

use crate::error::{TermError, TermResult};
use crate::sort::Sort;

/// A raw host value waiting to be encoded against a target sort.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(BigInt),
    Float(f64),
    Bool(bool),
}

macro_rules! literal_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::Int(BigInt::from(value))
                }
            }
        )*
    };
}

literal_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Literal {
    fn from(value: BigInt) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<f32> for Literal {
    /// Widens through the `f32`'s own shortest decimal text so that
    /// `3.14f32` encodes as `157/50` rather than the nearest binary double.
    fn from(value: f32) -> Self {
        let widened = f64::from_str(&value.to_string()).unwrap_or(f64::from(value));
        Literal::Float(widened)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Float(x) => write!(f, "{x}"),
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Literal {
    /// Sort a literal takes when nothing in its context asks for another one.
    pub fn default_sort(&self) -> Sort {
        match self {
            Literal::Int(_) => Sort::Int,
            Literal::Float(_) => Sort::Real,
            Literal::Bool(_) => Sort::Bool,
        }
    }

    /// Encode at the default sort.
    pub fn encode_default(&self) -> TermResult<Constant> {
        self.encode(self.default_sort())
    }

    /// Encode into `target`.
    ///
    /// Integers go into `Int`, `Real` (as `n/1`) and bit-vectors (wrapped
    /// modulo `2^width`); floats only into `Real`; booleans only into `Bool`.
    pub fn encode(&self, target: Sort) -> TermResult<Constant> {
        match (self, target) {
            (Literal::Int(n), Sort::Int) => Ok(Constant::Int(n.clone())),
            (Literal::Int(n), Sort::Real) => {
                Ok(Constant::Real(BigRational::from_integer(n.clone())))
            }
            (Literal::Int(n), Sort::BitVec(width)) => Constant::bitvec(n, width),
            (Literal::Float(x), Sort::Real) => exact_rational(*x).map(Constant::Real),
            (Literal::Bool(b), Sort::Bool) => Ok(Constant::Bool(*b)),
            (literal, target) => Err(TermError::UnsupportedLiteral {
                literal: format!("{literal} as {target}"),
            }),
        }
    }
}

/// Exact rational value of a finite float, taken from its shortest
/// round-trip decimal text.
pub fn exact_rational(value: f64) -> TermResult<BigRational> {
    if !value.is_finite() {
        return Err(TermError::UnsupportedLiteral {
            literal: value.to_string(),
        });
    }
    // `Display` for f64 is the shortest round-trip form and never uses
    // exponent notation.
    let text = value.to_string();
    let rational =
        rational_from_decimal(&text).ok_or_else(|| TermError::UnsupportedLiteral {
            literal: text.clone(),
        })?;
    tracing::trace!(literal = %text, rational = %rational, "Encoded float literal");
    Ok(rational)
}

/// Parse plain decimal text (`-12.375`, `42`, `0.0000001`) into a reduced
/// rational. Returns `None` for anything else, including exponents.
pub fn rational_from_decimal(text: &str) -> Option<BigRational> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{whole}{fraction}");
    let mut numerator = BigInt::from_str(&digits).ok()?;
    if negative {
        numerator = -numerator;
    }
    let denominator = num_traits::pow(BigInt::from(10u8), fraction.len());

    let divisor = numerator.gcd(&denominator);
    Some(BigRational::new_raw(numerator / &divisor, denominator / divisor))
}

/// A sort-tagged constant payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Exact integer
    Int(BigInt),
    /// Exact rational, reduced, with a positive denominator
    Real(BigRational),
    /// Boolean
    Bool(bool),
    /// Unsigned bit pattern, `value < 2^width`
    BitVec { value: BigUint, width: u32 },
}

impl Constant {
    /// Bit-vector constant; negative values wrap to their two's-complement
    /// pattern.
    pub fn bitvec(value: &BigInt, width: u32) -> TermResult<Self> {
        if width == 0 {
            return Err(TermError::InvalidSort { width });
        }
        let modulus = BigInt::one() << width;
        let (_, magnitude) = value.mod_floor(&modulus).into_parts();
        Ok(Constant::BitVec {
            value: magnitude,
            width,
        })
    }

    pub fn sort(&self) -> Sort {
        match self {
            Constant::Int(_) => Sort::Int,
            Constant::Real(_) => Sort::Real,
            Constant::Bool(_) => Sort::Bool,
            Constant::BitVec { width, .. } => Sort::BitVec(*width),
        }
    }

    /// Re-wrap an integer payload as the rational `n/1`.
    pub fn to_real(&self) -> Option<Constant> {
        match self {
            Constant::Int(n) => Some(Constant::Real(BigRational::from_integer(n.clone()))),
            Constant::Real(_) => Some(self.clone()),
            _ => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Constant::Int(n) => n.sign() == Sign::Minus,
            Constant::Real(r) => r.is_negative(),
            _ => false,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(n) => write!(f, "{n}"),
            Constant::Real(r) if r.denom().is_one() => write!(f, "{}", r.numer()),
            Constant::Real(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Constant::Bool(b) => write!(f, "{b}"),
            Constant::BitVec { value, .. } => write!(f, "{value}"),
        }
    }
}

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        Constant::Bool(value)
    }
}
