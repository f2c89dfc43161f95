//! Canonical prefix and infix renderers.
//!
//! Both are pure functions of the tree. Canonical text is fully
//! parenthesized `(op arg ...)`; it is also what `Display` for [`Term`]
//! prints. Infix text wraps an operand in parentheses exactly when that
//! operand is an application laid out with an operator symbol, whatever
//! the precedence. Call syntax (`mod(a, b)`) is never wrapped.

use std::fmt;

use crate::term::{Application, OperatorKind, Term};

/// Output notation for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `(+ a (* b c))`
    #[default]
    Canonical,
    /// `a + (b * c)`
    Infix,
}

/// Render `term` in the requested notation.
pub fn render(term: &Term, notation: Notation) -> String {
    match notation {
        Notation::Canonical => Canonical(term).to_string(),
        Notation::Infix => Infix(term).to_string(),
    }
}

/// Canonical prefix view of a term.
#[derive(Debug, Clone, Copy)]
pub struct Canonical<'a>(pub &'a Term);

/// Infix view of a term.
#[derive(Debug, Clone, Copy)]
pub struct Infix<'a>(pub &'a Term);

impl Term {
    pub fn to_canonical(&self) -> String {
        render(self, Notation::Canonical)
    }

    pub fn to_infix(&self) -> String {
        render(self, Notation::Infix)
    }

    /// Infix view usable in format strings: `format!("{}", t.infix())`.
    pub fn infix(&self) -> Infix<'_> {
        Infix(self)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Canonical(self), f)
    }
}

fn fmt_leaf(term: &Term, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match term {
        Term::Var { name, .. } => f.write_str(name),
        Term::Const(constant) => write!(f, "{constant}"),
        Term::App(_) => Ok(()),
    }
}

impl fmt::Display for Canonical<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Term::App(app) = self.0 else {
            return fmt_leaf(self.0, f);
        };
        write!(f, "({}", app.symbol())?;
        for arg in app.args() {
            write!(f, " {}", Canonical(arg))?;
        }
        write!(f, ")")
    }
}

/// How an operator is laid out in infix text.
enum InfixForm {
    /// `l OP r`
    Binary(&'static str),
    /// `-x`
    Prefix(&'static str),
    /// `name(a, b, ...)`
    Call(&'static str),
}

fn infix_form(op: OperatorKind) -> InfixForm {
    match op {
        OperatorKind::Add => InfixForm::Binary("+"),
        OperatorKind::Sub => InfixForm::Binary("-"),
        OperatorKind::Mul => InfixForm::Binary("*"),
        OperatorKind::Ge => InfixForm::Binary(">="),
        OperatorKind::Gt => InfixForm::Binary(">"),
        OperatorKind::Le => InfixForm::Binary("<="),
        OperatorKind::Lt => InfixForm::Binary("<"),
        OperatorKind::Eq => InfixForm::Binary("="),
        OperatorKind::Distinct => InfixForm::Binary("!="),
        OperatorKind::Neg => InfixForm::Prefix("-"),
        OperatorKind::Div => InfixForm::Call("div"),
        OperatorKind::Mod => InfixForm::Call("mod"),
        OperatorKind::Rem => InfixForm::Call("rem"),
        OperatorKind::Not => InfixForm::Call("not"),
        OperatorKind::And => InfixForm::Call("and"),
        OperatorKind::Or => InfixForm::Call("or"),
    }
}

/// Whether `app` prints as `name(args)` rather than with a symbol.
fn uses_call_syntax(app: &Application) -> bool {
    !matches!(
        (infix_form(app.op()), app.args().len()),
        (InfixForm::Binary(_), 2) | (InfixForm::Prefix(_), 1)
    )
}

/// Infix operand: parenthesized iff it is a symbolic application.
struct Wrapped<'a>(&'a Term);

impl fmt::Display for Wrapped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Term::App(app) if !uses_call_syntax(app) => write!(f, "({})", Infix(self.0)),
            _ => fmt::Display::fmt(&Infix(self.0), f),
        }
    }
}

impl fmt::Display for Infix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Term::App(app) = self.0 else {
            return fmt_leaf(self.0, f);
        };
        let args = app.args();
        match (infix_form(app.op()), args) {
            (InfixForm::Binary(symbol), [lhs, rhs]) => {
                write!(f, "{} {symbol} {}", Wrapped(lhs), Wrapped(rhs))
            }
            (InfixForm::Prefix(symbol), [operand]) => write!(f, "{symbol}{}", Wrapped(operand)),
            // Calls, plus any arity the symbolic forms cannot lay out.
            (InfixForm::Call(name) | InfixForm::Binary(name) | InfixForm::Prefix(name), _) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Infix(arg))?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (Term, Term, Term) {
        (Term::int("a"), Term::int("b"), Term::int("c"))
    }

    #[test]
    fn leaves_render_bare() {
        assert_eq!(Term::int("a").to_infix(), "a");
        assert_eq!(Term::constant(-42).unwrap().to_canonical(), "-42");
        assert_eq!(Term::constant(3.14).unwrap().to_infix(), "157/50");
        assert_eq!(Term::bool_const(true).to_string(), "true");
    }

    #[test]
    fn canonical_is_fully_parenthesized() {
        let (a, b, c) = abc();
        let t = (&a + (&b * &c).unwrap()).unwrap();
        assert_eq!(t.to_canonical(), "(+ a (* b c))");
        assert_eq!(render(&t, Notation::Canonical), t.to_string());
    }

    #[test]
    fn infix_wraps_only_applications() {
        let (a, b, c) = abc();
        let t = ((&a + &b).unwrap() + &c).unwrap();
        assert_eq!(t.to_infix(), "(a + b) + c");
        let t = (&a + (&b * &c).unwrap()).unwrap();
        assert_eq!(t.to_infix(), "a + (b * c)");
    }

    #[test]
    fn infix_call_syntax_is_self_delimiting() {
        let (a, b, c) = abc();
        let t = a.modulo((&b + &c).unwrap()).unwrap();
        assert_eq!(t.to_infix(), "mod(a, b + c)");
        let t = (&a / &b).unwrap();
        assert_eq!(t.to_infix(), "div(a, b)");
    }

    #[test]
    fn call_syntax_operands_are_not_wrapped() {
        let (a, b, c) = abc();
        let t = (a.modulo(&b).unwrap() + &c).unwrap();
        assert_eq!(t.to_infix(), "mod(a, b) + c");
        let t = (&c * (&a / &b).unwrap()).unwrap();
        assert_eq!(t.to_infix(), "c * div(a, b)");
        let t = (-a.rem(&b).unwrap()).unwrap();
        assert_eq!(t.to_infix(), "-rem(a, b)");

        let p = Term::bool("p");
        let q = Term::bool("q");
        let t = (!&p).unwrap().equal((&p | &q).unwrap()).unwrap();
        assert_eq!(t.to_infix(), "not(p) = or(p, q)");
        // Symbolic operands inside a call still wrap nothing.
        let t = a.modulo((&b + &c).unwrap()).unwrap();
        assert_eq!(t.to_infix(), "mod(a, b + c)");
    }

    #[test]
    fn integer_division_prints_div_and_real_division_prints_slash() {
        let (a, b, _) = abc();
        let t = (&a / &b).unwrap();
        assert_eq!(t.to_canonical(), "(div a b)");
        assert_eq!(t.to_smtlib(), "(div a b)");

        let e = Term::real("e");
        let t = (&e / &a).unwrap();
        assert_eq!(t.to_canonical(), "(/ e a)");
        assert_eq!(t.to_smtlib(), "(/ e (to_real a))");
        assert_eq!(t.to_infix(), "div(e, a)");
    }

    #[test]
    fn infix_boolean_operators_use_call_syntax() {
        let c = Term::bool("c");
        let d = Term::bool("d");
        assert_eq!((!&c).unwrap().to_infix(), "not(c)");
        assert_eq!((&c & &d).unwrap().to_infix(), "and(c, d)");
        let three = Term::apply(OperatorKind::Or, [&c, &d, &c]).unwrap();
        assert_eq!(three.to_infix(), "or(c, d, c)");
        assert_eq!(three.to_canonical(), "(or c d c)");
    }

    #[test]
    fn infix_comparisons() {
        let (a, b, _) = abc();
        assert_eq!(a.ge(&b).unwrap().to_infix(), "a >= b");
        assert_eq!(a.distinct(&b).unwrap().to_infix(), "a != b");
        let t = (&a + 1).unwrap().equal(&b).unwrap();
        assert_eq!(t.to_infix(), "(a + 1) = b");
    }

    #[test]
    fn infix_view_formats_in_place() {
        let (a, b, _) = abc();
        let t = (&a - &b).unwrap();
        assert_eq!(format!("[{}]", t.infix()), "[a - b]");
        assert_eq!(Notation::default(), Notation::Canonical);
    }
}
