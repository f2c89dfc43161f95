//! Operator surface of [`Term`].
//!
//! Every overload is fallible: `Output = TermResult<Term>`. Chains therefore
//! need a `?` between steps, e.g. `((&a + &b)? * &c)?`. Trees stay
//! left-leaning; nothing is flattened.
//!
//! Equality, ordering, `mod` and `rem` have no operator overload that can
//! return a term, so they are named methods instead.

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Not, Sub};

use crate::coerce::Operand;
use crate::error::TermResult;
use crate::term::{OperatorKind, Term};

impl Term {
    fn binary(&self, op: OperatorKind, rhs: impl Into<Operand>) -> TermResult<Term> {
        Term::apply(op, [Operand::from(self), rhs.into()])
    }

    /// `(and self rhs)`
    pub fn and(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::And, rhs)
    }

    /// `(or self rhs)`
    pub fn or(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Or, rhs)
    }

    /// `(= self rhs)`: the `==` of the expression language.
    pub fn equal(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Eq, rhs)
    }

    /// `(distinct self rhs)`: the `!=` of the expression language.
    pub fn distinct(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Distinct, rhs)
    }

    pub fn modulo(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Mod, rhs)
    }

    pub fn rem(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Rem, rhs)
    }

    pub fn ge(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Ge, rhs)
    }

    pub fn gt(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Gt, rhs)
    }

    pub fn le(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Le, rhs)
    }

    pub fn lt(&self, rhs: impl Into<Operand>) -> TermResult<Term> {
        self.binary(OperatorKind::Lt, rhs)
    }
}

macro_rules! binary_operator {
    ($($trait:ident::$method:ident => $op:ident;)*) => {
        $(
            impl<R: Into<Operand>> $trait<R> for Term {
                type Output = TermResult<Term>;

                fn $method(self, rhs: R) -> Self::Output {
                    Term::apply(OperatorKind::$op, [Operand::from(self), rhs.into()])
                }
            }

            impl<R: Into<Operand>> $trait<R> for &Term {
                type Output = TermResult<Term>;

                fn $method(self, rhs: R) -> Self::Output {
                    Term::apply(OperatorKind::$op, [Operand::from(self), rhs.into()])
                }
            }
        )*
    };
}

binary_operator! {
    Add::add => Add;
    Sub::sub => Sub;
    Mul::mul => Mul;
    Div::div => Div;
    BitAnd::bitand => And;
    BitOr::bitor => Or;
}

/// `literal OP term`, keeping the literal as the left operand.
///
/// One integer and one float type only: with a single candidate impl an
/// unsuffixed `1 + &a` infers `i64`.
macro_rules! literal_on_left {
    ($($lit:ty),* => $trait:ident::$method:ident => $op:ident) => {
        $(
            impl $trait<Term> for $lit {
                type Output = TermResult<Term>;

                fn $method(self, rhs: Term) -> Self::Output {
                    Term::apply(OperatorKind::$op, [Operand::from(self), Operand::from(rhs)])
                }
            }

            impl $trait<&Term> for $lit {
                type Output = TermResult<Term>;

                fn $method(self, rhs: &Term) -> Self::Output {
                    Term::apply(OperatorKind::$op, [Operand::from(self), Operand::from(rhs)])
                }
            }
        )*
    };
}

literal_on_left!(i64, f64 => Add::add => Add);
literal_on_left!(i64, f64 => Sub::sub => Sub);
literal_on_left!(i64, f64 => Mul::mul => Mul);
literal_on_left!(i64, f64 => Div::div => Div);
literal_on_left!(bool => BitAnd::bitand => And);
literal_on_left!(bool => BitOr::bitor => Or);

impl Neg for Term {
    type Output = TermResult<Term>;

    fn neg(self) -> Self::Output {
        Term::apply(OperatorKind::Neg, [self])
    }
}

impl Neg for &Term {
    type Output = TermResult<Term>;

    fn neg(self) -> Self::Output {
        Term::apply(OperatorKind::Neg, [self])
    }
}

impl Not for Term {
    type Output = TermResult<Term>;

    fn not(self) -> Self::Output {
        Term::apply(OperatorKind::Not, [self])
    }
}

impl Not for &Term {
    type Output = TermResult<Term>;

    fn not(self) -> Self::Output {
        Term::apply(OperatorKind::Not, [self])
    }
}
