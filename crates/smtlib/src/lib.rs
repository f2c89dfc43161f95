//! # smtkit-smtlib
//!
//! Typed SMT terms over integers, reals, booleans, and fixed-width
//! bit-vectors.
//!
//! Terms are built from variables, host literals, and overloaded operators.
//! Every operator checks the sorts of its operands, coerces host literals
//! and mixed `Int`/`Real` operands, and records the result sort on the new
//! node. Finished terms print in canonical prefix notation (`Display`), in
//! a minimized infix notation, or as SMT-LIB2 for an external solver.
//!
//! ## Usage
//!
//! ```
//! use smtkit_smtlib::{Sort, Term, TermError};
//!
//! # fn main() -> Result<(), TermError> {
//! let a = Term::int("a");
//! let b = Term::int("b");
//! let c = Term::int("c");
//!
//! let t = ((&a + &b)? * &c)?;
//! assert_eq!(t.to_string(), "(* (+ a b) c)");
//! assert_eq!(t.to_infix(), "(a + b) * c");
//!
//! let half = (&a * 0.5)?;
//! assert_eq!(half.sort(), Sort::Real);
//! assert_eq!(half.to_string(), "(* a 1/2)");
//!
//! assert!(a.equal(true).is_err());
//! # Ok(())
//! # }
//! ```

pub mod coerce;
pub mod command;
pub mod error;
pub mod formatter;
pub mod literal;
mod ops;
pub mod printer;
pub mod script;
pub mod sort;
pub mod term;

// Re-export primary types for ergonomic use
pub use coerce::Operand;
pub use command::Command;
pub use error::{TermError, TermResult};
pub use formatter::SmtLib;
pub use literal::{Constant, Literal};
pub use printer::{Notation, render};
pub use script::Script;
pub use sort::{Sort, SortFamily};
pub use term::{Application, Arity, OperatorKind, Term};
