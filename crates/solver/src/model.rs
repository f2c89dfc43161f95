use std::fmt;

use smtkit_smtlib::{Constant, Term};

/// Value of one model entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValue {
    /// Decoded against the declared sort of the variable.
    Constant(Constant),
    /// Solver text the decoder could not read (e.g. an array value).
    Raw(String),
}

impl fmt::Display for ModelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelValue::Constant(constant) => write!(f, "{constant}"),
            ModelValue::Raw(text) => f.write_str(text),
        }
    }
}

/// A model from the solver.
///
/// Contains variable assignments extracted from `(get-model)` output, in
/// the order the solver printed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    /// Variable assignments: `(name, value)` pairs.
    pub assignments: Vec<(String, ModelValue)>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    /// Create a model from assignment pairs.
    pub fn with_assignments(assignments: Vec<(String, ModelValue)>) -> Self {
        Self { assignments }
    }

    /// Look up a variable's value by name.
    pub fn get(&self, name: &str) -> Option<&ModelValue> {
        self.assignments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Decoded constant for `name`, if the value could be decoded.
    pub fn constant(&self, name: &str) -> Option<&Constant> {
        match self.get(name)? {
            ModelValue::Constant(constant) => Some(constant),
            ModelValue::Raw(_) => None,
        }
    }

    /// Value of a variable term. Only variables of the same sort match.
    pub fn get_for(&self, term: &Term) -> Option<&Constant> {
        let constant = self.constant(term.name()?)?;
        (constant.sort() == term.sort()).then_some(constant)
    }

    /// Return the number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Return whether the model is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// `{"name": "value", ...}` with values in canonical text.
    pub fn to_json(&self) -> serde_json::Value {
        let entries = self
            .assignments
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::String(value.to_string())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(entries)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
