//! Operand coercion shared by every operator.
//!
//! Rules, in order:
//! 1. Operands of one concrete sort combine as they are.
//! 2. `Int` and `Real` operands combine as `Real`; integer constants are
//!    re-wrapped as `n/1`.
//! 3. Host literals are encoded toward the family of the term operands: an
//!    integer literal stays `Int` unless the context is `Real`, a float
//!    literal makes the whole application `Real`, a boolean literal only
//!    fits `Bool`.
//! 4. Numeric and boolean operands never combine, whatever the operator.
//! 5. Each operator constrains the family: `not`/`and`/`or` need booleans,
//!    arithmetic and ordering need numerics, `=`/`distinct` accept any
//!    single family.
//!
//! Bit-vectors are a family per width and only meet `=`/`distinct`.

use num_bigint::BigInt;

use crate::error::{TermError, TermResult};
use crate::literal::Literal;
use crate::sort::{Sort, SortFamily};
use crate::term::{OperatorKind, Term};

/// One operand handed to an operator: a built term or a raw host literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Term(Term),
    Literal(Literal),
}

impl Operand {
    /// Sort used to describe the operand in errors: the term's sort, or the
    /// literal's default sort.
    pub fn sort(&self) -> Sort {
        match self {
            Operand::Term(term) => term.sort(),
            Operand::Literal(literal) => literal.default_sort(),
        }
    }

    fn fits(&self, family: SortFamily) -> bool {
        match self {
            Operand::Term(term) => term.sort().family() == family,
            Operand::Literal(literal) => matches!(
                (literal, family),
                (Literal::Int(_) | Literal::Float(_), SortFamily::Numeric)
                    | (Literal::Bool(_), SortFamily::Boolean)
                    | (Literal::Int(_), SortFamily::BitVec(_))
            ),
        }
    }

    fn forces_real(&self) -> bool {
        match self {
            Operand::Term(term) => term.sort() == Sort::Real,
            Operand::Literal(literal) => matches!(literal, Literal::Float(_)),
        }
    }

    /// Turn the operand into a term of sort `target` (or, for non-constant
    /// integer terms in a real context, leave it as is).
    fn settle(self, target: Sort) -> TermResult<Term> {
        match self {
            Operand::Literal(literal) => literal.encode(target).map(Term::Const),
            Operand::Term(Term::Const(constant))
                if target == Sort::Real && constant.sort() == Sort::Int =>
            {
                tracing::trace!(constant = %constant, "Promoting integer constant to Real");
                Ok(Term::Const(constant.to_real().unwrap_or(constant)))
            }
            Operand::Term(term) => Ok(term),
        }
    }
}

impl From<Term> for Operand {
    fn from(term: Term) -> Self {
        Operand::Term(term)
    }
}

impl From<&Term> for Operand {
    fn from(term: &Term) -> Self {
        Operand::Term(term.clone())
    }
}

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Operand::Literal(literal)
    }
}

macro_rules! operand_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Literal(Literal::from(value))
                }
            }
        )*
    };
}

operand_from_literal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, BigInt
);

/// Operands that passed coercion, plus the sort of the application.
#[derive(Debug)]
pub(crate) struct Coerced {
    pub sort: Sort,
    pub args: Vec<Term>,
}

pub(crate) fn coerce(op: OperatorKind, operands: Vec<Operand>) -> TermResult<Coerced> {
    let mismatch =
        |operands: &[Operand]| TermError::mismatch(op, operands.iter().map(Operand::sort));

    if !op.arity().accepts(operands.len()) {
        return Err(mismatch(&operands));
    }

    let Some(family) = common_family(&operands) else {
        return Err(mismatch(&operands));
    };
    if !op.accepts_family(family) {
        return Err(mismatch(&operands));
    }

    let operand_sort = match family {
        SortFamily::Numeric if operands.iter().any(Operand::forces_real) => Sort::Real,
        SortFamily::Numeric => Sort::Int,
        SortFamily::Boolean => Sort::Bool,
        SortFamily::BitVec(width) => Sort::BitVec(width),
    };

    let args = operands
        .into_iter()
        .map(|operand| operand.settle(operand_sort))
        .collect::<TermResult<Vec<_>>>()?;

    let sort = op.result_sort(operand_sort);
    tracing::trace!(op = %op, operand_sort = %operand_sort, sort = %sort, "Coerced operands");
    Ok(Coerced { sort, args })
}

/// Family every operand belongs to. Term operands decide it; an all-literal
/// operand list takes the family of its first literal.
fn common_family(operands: &[Operand]) -> Option<SortFamily> {
    let family = operands
        .iter()
        .find_map(|operand| match operand {
            Operand::Term(term) => Some(term.sort().family()),
            Operand::Literal(_) => None,
        })
        .or_else(|| operands.first().map(|operand| operand.sort().family()))?;

    operands
        .iter()
        .all(|operand| operand.fits(family))
        .then_some(family)
}
