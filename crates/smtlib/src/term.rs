use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::coerce::{self, Operand};
use crate::error::TermResult;
use crate::literal::{Constant, Literal};
use crate::sort::{Sort, SortFamily};

/// How many operands an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    /// Two or more.
    Variadic,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Unary => count == 1,
            Arity::Binary => count == 2,
            Arity::Variadic => count >= 2,
        }
    }
}

/// Operator carried by an application node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    // === Boolean ===
    /// `(not a)`
    Not,
    /// `(and a b ...)`
    And,
    /// `(or a b ...)`
    Or,

    // === Equality ===
    /// `(= a b)`
    Eq,
    /// `(distinct a b)`
    Distinct,

    // === Arithmetic ===
    /// `(+ a b)`
    Add,
    /// `(- a b)`
    Sub,
    /// `(* a b)`
    Mul,
    /// `(div a b)` on integers, `(/ a b)` on reals
    Div,
    /// `(mod a b)`
    Mod,
    /// `(rem a b)`
    Rem,
    /// `(- a)`
    Neg,

    // === Comparison ===
    /// `(>= a b)`
    Ge,
    /// `(> a b)`
    Gt,
    /// `(<= a b)`
    Le,
    /// `(< a b)`
    Lt,
}

impl OperatorKind {
    pub fn arity(self) -> Arity {
        match self {
            OperatorKind::Not | OperatorKind::Neg => Arity::Unary,
            OperatorKind::And | OperatorKind::Or => Arity::Variadic,
            _ => Arity::Binary,
        }
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, OperatorKind::Not | OperatorKind::And | OperatorKind::Or)
    }

    pub fn is_equality(self) -> bool {
        matches!(self, OperatorKind::Eq | OperatorKind::Distinct)
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            OperatorKind::Add
                | OperatorKind::Sub
                | OperatorKind::Mul
                | OperatorKind::Div
                | OperatorKind::Mod
                | OperatorKind::Rem
                | OperatorKind::Neg
        )
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            OperatorKind::Ge | OperatorKind::Gt | OperatorKind::Le | OperatorKind::Lt
        )
    }

    /// Whether operands drawn from `family` may be combined by this operator.
    pub fn accepts_family(self, family: SortFamily) -> bool {
        if self.is_boolean() {
            family == SortFamily::Boolean
        } else if self.is_arithmetic() || self.is_comparison() {
            family == SortFamily::Numeric
        } else {
            true
        }
    }

    /// Result sort given the common (post-coercion) operand sort.
    pub fn result_sort(self, operand_sort: Sort) -> Sort {
        if self.is_arithmetic() {
            operand_sort
        } else {
            Sort::Bool
        }
    }

    /// SMT-LIB symbol for an application of this operator whose result
    /// sort is `sort`.
    pub fn symbol(self, sort: Sort) -> &'static str {
        match self {
            OperatorKind::Not => "not",
            OperatorKind::And => "and",
            OperatorKind::Or => "or",
            OperatorKind::Eq => "=",
            OperatorKind::Distinct => "distinct",
            OperatorKind::Add => "+",
            OperatorKind::Sub | OperatorKind::Neg => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div if sort == Sort::Real => "/",
            OperatorKind::Div => "div",
            OperatorKind::Mod => "mod",
            OperatorKind::Rem => "rem",
            OperatorKind::Ge => ">=",
            OperatorKind::Gt => ">",
            OperatorKind::Le => "<=",
            OperatorKind::Lt => "<",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol(Sort::Int))
    }
}

/// An operator applied to already-coerced operands.
///
/// Only the coercion engine builds these, so `sort` always matches what
/// `op` yields for the operand sorts.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Application {
    op: OperatorKind,
    sort: Sort,
    args: Vec<Arc<Term>>,
}

impl Application {
    pub fn op(&self) -> OperatorKind {
        self.op
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn args(&self) -> &[Arc<Term>] {
        &self.args
    }

    /// SMT-LIB symbol for this node.
    pub fn symbol(&self) -> &'static str {
        self.op.symbol(self.sort)
    }
}

/// Typed expression tree node.
///
/// Terms are immutable once built; operands are shared through `Arc`, so
/// cloning a term and reusing it in several trees never copies subtrees.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Declared constant (solver variable)
    Var { name: String, sort: Sort },
    /// Literal value
    Const(Constant),
    /// Operator application
    App(Application),
}

impl Term {
    // === Constructors ===

    pub fn var(name: impl Into<String>, sort: Sort) -> Self {
        Term::Var {
            name: name.into(),
            sort,
        }
    }

    pub fn int(name: impl Into<String>) -> Self {
        Term::var(name, Sort::Int)
    }

    pub fn real(name: impl Into<String>) -> Self {
        Term::var(name, Sort::Real)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Term::var(name, Sort::Bool)
    }

    pub fn bitvec(name: impl Into<String>, width: u32) -> TermResult<Self> {
        Ok(Term::var(name, Sort::bitvector(width)?))
    }

    pub fn bool_const(value: bool) -> Self {
        Term::Const(Constant::Bool(value))
    }

    /// Constant at the literal's default sort.
    pub fn constant(literal: impl Into<Literal>) -> TermResult<Self> {
        literal.into().encode_default().map(Term::Const)
    }

    /// Apply `op` to `operands`, coercing literals and mixed numeric sorts.
    pub fn apply<I>(op: OperatorKind, operands: I) -> TermResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let operands = operands.into_iter().map(Into::into).collect();
        let coerced = coerce::coerce(op, operands)?;
        Ok(Term::App(Application {
            op,
            sort: coerced.sort,
            args: coerced.args.into_iter().map(Arc::new).collect(),
        }))
    }

    // === Accessors ===

    pub fn sort(&self) -> Sort {
        match self {
            Term::Var { sort, .. } => *sort,
            Term::Const(constant) => constant.sort(),
            Term::App(app) => app.sort,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Term::App(_))
    }

    pub fn op(&self) -> Option<OperatorKind> {
        match self {
            Term::App(app) => Some(app.op),
            _ => None,
        }
    }

    /// Operands of an application; empty for leaves.
    pub fn args(&self) -> &[Arc<Term>] {
        match self {
            Term::App(app) => &app.args,
            _ => &[],
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Term::Var { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Term::Const(constant) => Some(constant),
            _ => None,
        }
    }

    /// Variables occurring in the term, deduplicated, in first-occurrence
    /// order (left to right, depth first).
    pub fn variables(&self) -> Vec<(&str, Sort)> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        self.collect_variables(&mut seen, &mut out);
        out
    }

    pub(crate) fn collect_variables<'a>(
        &'a self,
        seen: &mut FxHashSet<(&'a str, Sort)>,
        out: &mut Vec<(&'a str, Sort)>,
    ) {
        match self {
            Term::Var { name, sort } => {
                if seen.insert((name.as_str(), *sort)) {
                    out.push((name.as_str(), *sort));
                }
            }
            Term::Const(_) => {}
            Term::App(app) => {
                for arg in &app.args {
                    arg.collect_variables(seen, out);
                }
            }
        }
    }
}

impl Sort {
    /// Encode a host literal directly as a constant of this sort.
    pub fn from_const(&self, literal: impl Into<Literal>) -> TermResult<Term> {
        literal.into().encode(*self).map(Term::Const)
    }
}

impl From<Constant> for Term {
    fn from(constant: Constant) -> Self {
        Term::Const(constant)
    }
}

impl fmt::Debug for Term {
    /// `<canonical text> :: <sort>`, e.g. `(+ e f) :: Real`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} :: {}", self.sort())
    }
}
