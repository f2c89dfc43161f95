//! Assert-check-model session over a [`SolverBackend`].
//!
//! A session owns the asserted terms. Each [`Session::check`] lowers all of
//! them into a fresh script (declarations first), so the backend never has
//! to keep state between checks.

use smtkit_smtlib::{Script, Sort, Term};

use crate::backend::{SolverBackend, create_default_backend};
use crate::error::SolverError;
use crate::model::Model;
use crate::result::{SolverResult, Verdict};

pub struct Session {
    backend: Box<dyn SolverBackend>,
    assertions: Vec<Term>,
    last: Option<SolverResult>,
}

impl Session {
    pub fn new(backend: Box<dyn SolverBackend>) -> Self {
        Self {
            backend,
            assertions: Vec::new(),
            last: None,
        }
    }

    /// Session over the backend configured by the environment.
    pub fn with_default_backend() -> Result<Self, SolverError> {
        Ok(Self::new(create_default_backend()?))
    }

    /// Add a `Bool` term to the assertion set. Clears the previous result.
    pub fn assert(&mut self, term: &Term) -> Result<(), SolverError> {
        if term.sort() != Sort::Bool {
            return Err(SolverError::NotBoolean(term.sort()));
        }
        self.assertions.push(term.clone());
        self.last = None;
        Ok(())
    }

    /// Check the current assertions.
    pub fn check(&mut self) -> Result<Verdict, SolverError> {
        let script = self.script();
        tracing::debug!(assertions = self.assertions.len(), "Checking session");
        let result = self.backend.check_sat(&script)?;
        let verdict = result.verdict();
        self.last = Some(result);
        Ok(verdict)
    }

    /// Model of the last `check`, if it was `sat` and printed one.
    pub fn model(&self) -> Option<&Model> {
        self.last.as_ref()?.model()
    }

    /// Full result of the last `check`.
    pub fn last_result(&self) -> Option<&SolverResult> {
        self.last.as_ref()
    }

    pub fn assertions(&self) -> &[Term] {
        &self.assertions
    }

    /// Script that the next `check` will send.
    pub fn script(&self) -> Script {
        Script::from_assertions(&self.assertions)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use num_bigint::BigInt;
    use smtkit_smtlib::Constant;

    use super::*;
    use crate::model::ModelValue;

    /// Backend answering with a fixed result and recording what it was sent.
    struct Scripted {
        answer: SolverResult,
        sent: Rc<RefCell<Vec<String>>>,
    }

    impl SolverBackend for Scripted {
        fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError> {
            self.sent.borrow_mut().push(script.to_string());
            Ok(self.answer.clone())
        }
    }

    fn session(answer: SolverResult) -> (Session, Rc<RefCell<Vec<String>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let backend = Scripted {
            answer,
            sent: Rc::clone(&sent),
        };
        (Session::new(Box::new(backend)), sent)
    }

    #[test]
    fn rejects_non_boolean_assertions() {
        let (mut s, _) = session(SolverResult::Unsat);
        let a = Term::int("a");
        assert_eq!(s.assert(&a), Err(SolverError::NotBoolean(Sort::Int)));
        assert!(s.assertions().is_empty());
    }

    #[test]
    fn check_sends_declarations_then_assertions() {
        let (mut s, sent) = session(SolverResult::Unsat);
        let a = Term::int("a");
        let e = Term::real("e");
        s.assert(&a.gt(&e).unwrap()).unwrap();
        s.assert(&a.lt(-2).unwrap()).unwrap();

        assert_eq!(s.check().unwrap(), Verdict::Unsat);
        assert_eq!(
            sent.borrow().as_slice(),
            &["(declare-const a Int)\n\
               (declare-const e Real)\n\
               (assert (> (to_real a) e))\n\
               (assert (< a (- 2)))"
                .to_string()]
        );
        assert!(s.model().is_none());
    }

    #[test]
    fn sat_exposes_model() {
        let model = Model::with_assignments(vec![(
            "a".to_string(),
            ModelValue::Constant(Constant::Int(BigInt::from(7))),
        )]);
        let (mut s, _) = session(SolverResult::Sat(Some(model)));
        let a = Term::int("a");
        s.assert(&a.equal(7).unwrap()).unwrap();

        assert_eq!(s.check().unwrap(), Verdict::Sat);
        assert_eq!(
            s.model().and_then(|m| m.get_for(&a)),
            Some(&Constant::Int(BigInt::from(7)))
        );
    }

    #[test]
    fn new_assertion_clears_previous_result() {
        let (mut s, _) = session(SolverResult::Sat(Some(Model::default())));
        let c = Term::bool("c");
        s.assert(&c).unwrap();
        s.check().unwrap();
        assert!(s.last_result().is_some());

        s.assert(&(!&c).unwrap()).unwrap();
        assert!(s.last_result().is_none());
        assert_eq!(s.assertions().len(), 2);
    }

    #[test]
    fn unknown_verdict() {
        let (mut s, _) = session(SolverResult::Unknown("timeout".into()));
        assert_eq!(s.check().unwrap(), Verdict::Unknown);
    }
}
