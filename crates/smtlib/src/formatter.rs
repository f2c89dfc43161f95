//! SMT-LIB2 text formatting.
//!
//! Implements `Display` for [`Sort`], [`Command`], and [`Script`], and
//! provides [`SmtLib`], the solver-facing rendering of a [`Term`]. It differs
//! from the canonical `Display` of a term only where SMT-LIB syntax demands:
//! negative numbers, rationals, bit-vector constants, and `Int` operands of
//! a `Real` application (wrapped in `to_real`).

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed};

use crate::command::Command;
use crate::literal::Constant;
use crate::script::Script;
use crate::sort::Sort;
use crate::term::Term;

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Bool => write!(f, "Bool"),
            Sort::Int => write!(f, "Int"),
            Sort::Real => write!(f, "Real"),
            Sort::BitVec(width) => write!(f, "(_ BitVec {width})"),
        }
    }
}

// ---------------------------------------------------------------------------
// Term
// ---------------------------------------------------------------------------

/// SMT-LIB2 view of a term: `format!("{}", SmtLib(&term))`.
#[derive(Debug, Clone, Copy)]
pub struct SmtLib<'a>(pub &'a Term);

impl Term {
    pub fn to_smtlib(&self) -> String {
        SmtLib(self).to_string()
    }
}

/// Write an exact integer; SMT-LIB has no negative numerals.
fn fmt_int(n: &BigInt, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_negative() {
        write!(f, "(- {})", n.abs())
    } else {
        write!(f, "{n}")
    }
}

/// Write a rational as decimals: `p.0`, `(/ p.0 q.0)`, negated with `(- ...)`.
fn fmt_real(numer: &BigInt, denom: &BigInt, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let magnitude = numer.abs();
    let negative = numer.is_negative();
    if negative {
        write!(f, "(- ")?;
    }
    if denom.is_one() {
        write!(f, "{magnitude}.0")?;
    } else {
        write!(f, "(/ {magnitude}.0 {denom}.0)")?;
    }
    if negative {
        write!(f, ")")?;
    }
    Ok(())
}

fn fmt_constant(constant: &Constant, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match constant {
        Constant::Int(n) => fmt_int(n, f),
        Constant::Real(r) => fmt_real(r.numer(), r.denom(), f),
        Constant::Bool(true) => write!(f, "true"),
        Constant::Bool(false) => write!(f, "false"),
        Constant::BitVec { value, width } => write!(f, "(_ bv{value} {width})"),
    }
}

impl fmt::Display for SmtLib<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Term::Var { name, .. } => write!(f, "{name}"),
            Term::Const(constant) => fmt_constant(constant, f),
            Term::App(app) => {
                let real_context = app.args().iter().any(|arg| arg.sort() == Sort::Real);
                write!(f, "({}", app.symbol())?;
                for arg in app.args() {
                    if real_context && arg.sort() == Sort::Int {
                        write!(f, " (to_real {})", SmtLib(arg))?;
                    } else {
                        write!(f, " {}", SmtLib(arg))?;
                    }
                }
                write!(f, ")")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Write a space-separated list of terms.
fn fmt_term_list(terms: &[Term], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, t) in terms.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", SmtLib(t))?;
    }
    Ok(())
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetLogic(logic) => write!(f, "(set-logic {logic})"),
            Command::SetOption(key, value) => write!(f, "(set-option :{key} {value})"),
            Command::DeclareConst(name, sort) => {
                write!(f, "(declare-const {name} {sort})")
            }
            Command::Assert(term) => write!(f, "(assert {})", SmtLib(term)),
            Command::CheckSat => write!(f, "(check-sat)"),
            Command::GetModel => write!(f, "(get-model)"),
            Command::GetValue(terms) => {
                write!(f, "(get-value (")?;
                fmt_term_list(terms, f)?;
                write!(f, "))")
            }
            Command::Echo(msg) => write!(f, "(echo \"{msg}\")"),
            Command::Comment(text) => write!(f, ";; {text}"),
            Command::Exit => write!(f, "(exit)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use num_rational::BigRational;

    use super::*;

    fn real(n: i64, d: i64) -> Term {
        Term::Const(Constant::Real(BigRational::new(n.into(), d.into())))
    }

    // -----------------------------------------------------------------------
    // Sort formatting
    // -----------------------------------------------------------------------

    #[test]
    fn sort_names() {
        assert_eq!(Sort::Bool.to_string(), "Bool");
        assert_eq!(Sort::Int.to_string(), "Int");
        assert_eq!(Sort::Real.to_string(), "Real");
    }

    #[test]
    fn sort_bitvec() {
        assert_eq!(Sort::BitVec(32).to_string(), "(_ BitVec 32)");
        assert_eq!(Sort::BitVec(1).to_string(), "(_ BitVec 1)");
    }

    // -----------------------------------------------------------------------
    // Term lowering
    // -----------------------------------------------------------------------

    #[test]
    fn int_constants() {
        assert_eq!(Term::constant(42).unwrap().to_smtlib(), "42");
        assert_eq!(Term::constant(-5).unwrap().to_smtlib(), "(- 5)");
        assert_eq!(Term::constant(0).unwrap().to_smtlib(), "0");
    }

    #[test]
    fn real_constants() {
        assert_eq!(real(157, 50).to_smtlib(), "(/ 157.0 50.0)");
        assert_eq!(real(-157, 50).to_smtlib(), "(- (/ 157.0 50.0))");
        assert_eq!(real(42, 1).to_smtlib(), "42.0");
        assert_eq!(real(-42, 1).to_smtlib(), "(- 42.0)");
    }

    #[test]
    fn bitvec_constants() {
        let t = Sort::BitVec(8).from_const(-1).unwrap();
        assert_eq!(t.to_smtlib(), "(_ bv255 8)");
        let t = Sort::BitVec(32).from_const(42).unwrap();
        assert_eq!(t.to_smtlib(), "(_ bv42 32)");
    }

    #[test]
    fn applications_match_canonical_for_plain_operands() {
        let a = Term::int("a");
        let b = Term::int("b");
        let t = ((&a + &b).unwrap() * 2).unwrap();
        assert_eq!(t.to_smtlib(), t.to_canonical());
        assert_eq!(t.to_smtlib(), "(* (+ a b) 2)");
    }

    #[test]
    fn negative_literals_are_lowered_inside_applications() {
        let a = Term::int("a");
        let t = a.ge(-3).unwrap();
        assert_eq!(t.to_canonical(), "(>= a -3)");
        assert_eq!(t.to_smtlib(), "(>= a (- 3))");
    }

    #[test]
    fn int_operands_of_real_applications_are_converted() {
        let a = Term::int("a");
        let e = Term::real("e");
        let t = (&a + &e).unwrap();
        assert_eq!(t.to_canonical(), "(+ a e)");
        assert_eq!(t.to_smtlib(), "(+ (to_real a) e)");

        let t = a.equal(&e).unwrap();
        assert_eq!(t.to_smtlib(), "(= (to_real a) e)");

        let t = (&e / 2).unwrap();
        assert_eq!(t.to_smtlib(), "(/ e 2.0)");
    }

    // -----------------------------------------------------------------------
    // Command formatting
    // -----------------------------------------------------------------------

    #[test]
    fn command_set_logic() {
        assert_eq!(
            Command::SetLogic("QF_LIA".into()).to_string(),
            "(set-logic QF_LIA)"
        );
    }

    #[test]
    fn command_set_option() {
        let cmd = Command::SetOption("produce-models".into(), "true".into());
        assert_eq!(cmd.to_string(), "(set-option :produce-models true)");
    }

    #[test]
    fn command_declare_const() {
        let cmd = Command::DeclareConst("v".into(), Sort::BitVec(8));
        assert_eq!(cmd.to_string(), "(declare-const v (_ BitVec 8))");
    }

    #[test]
    fn command_assert_uses_smtlib_lowering() {
        let a = Term::int("a");
        let cmd = Command::Assert(a.lt(-1).unwrap());
        assert_eq!(cmd.to_string(), "(assert (< a (- 1)))");
    }

    #[test]
    fn command_get_value() {
        let cmd = Command::GetValue(vec![Term::int("a"), Term::real("e")]);
        assert_eq!(cmd.to_string(), "(get-value (a e))");
    }

    #[test]
    fn command_misc() {
        assert_eq!(Command::CheckSat.to_string(), "(check-sat)");
        assert_eq!(Command::GetModel.to_string(), "(get-model)");
        assert_eq!(Command::Echo("done".into()).to_string(), "(echo \"done\")");
        assert_eq!(Command::Comment("note".into()).to_string(), ";; note");
        assert_eq!(Command::Exit.to_string(), "(exit)");
    }

    // -----------------------------------------------------------------------
    // Script formatting
    // -----------------------------------------------------------------------

    #[test]
    fn script_is_newline_separated() {
        let script = Script::with_commands(vec![
            Command::DeclareConst("a".into(), Sort::Int),
            Command::CheckSat,
        ]);
        assert_eq!(script.to_string(), "(declare-const a Int)\n(check-sat)");
    }

    #[test]
    fn empty_script_is_empty_text() {
        assert_eq!(Script::new().to_string(), "");
    }
}
