use rustc_hash::FxHashSet;

use crate::command::Command;
use crate::term::Term;

/// An SMT-LIB script: a sequence of commands.
#[derive(Debug, Clone, Default)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn with_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Declarations for every variable of `assertions` (each once, in
    /// first-use order) followed by one `assert` per term.
    pub fn from_assertions<'a>(assertions: impl IntoIterator<Item = &'a Term>) -> Self {
        let assertions: Vec<&Term> = assertions.into_iter().collect();

        let mut seen = FxHashSet::default();
        let mut variables = Vec::new();
        for term in assertions.iter().copied() {
            term.collect_variables(&mut seen, &mut variables);
        }

        let mut script = Self::new();
        script.extend(
            variables
                .into_iter()
                .map(|(name, sort)| Command::DeclareConst(name.to_string(), sort)),
        );
        script.extend(assertions.into_iter().cloned().map(Command::Assert));
        script
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    pub fn extend(&mut self, cmds: impl IntoIterator<Item = Command>) {
        self.commands.extend(cmds);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
