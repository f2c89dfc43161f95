//! # smtkit-solver
//!
//! Runs terms built with `smtkit-smtlib` through an external SMT solver.
//!
//! The solver (Z3 or CVC5) is spawned as a subprocess and fed
//! SMT-LIB2 text; its verdict and model are parsed back into
//! [`SolverResult`] and [`Model`].
//!
//! ## Usage
//!
//! ```no_run
//! use smtkit_smtlib::Term;
//! use smtkit_solver::{Session, Verdict};
//!
//! let x = Term::int("x");
//! let mut session = Session::with_default_backend().unwrap();
//! session.assert(&x.gt(0).unwrap()).unwrap();
//! session.assert(&x.lt(10).unwrap()).unwrap();
//!
//! match session.check().unwrap() {
//!     Verdict::Sat => println!("x = {:?}", session.model().and_then(|m| m.get_for(&x))),
//!     Verdict::Unsat => println!("no solution"),
//!     Verdict::Unknown => println!("solver gave up"),
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
mod parser;
pub mod result;
pub mod session;
pub mod solver;

pub use backend::{SolverBackend, create_backend, create_default_backend};
pub use config::{SolverConfig, SolverKind};
pub use error::SolverError;
pub use model::{Model, ModelValue};
pub use result::{SolverResult, Verdict};
pub use session::Session;
pub use solver::{CliSolver, solver_input};
