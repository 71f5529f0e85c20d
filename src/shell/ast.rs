/// One parsed input line: the command name and the untouched argument tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    // None when nothing but whitespace follows the name
    pub args: Option<String>,
}

/// How many arguments a command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Optional,
    Required,
}

/// Result of one executed line.
#[derive(Debug, Default)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub error: Option<crate::shell::error::ShellError>,
    /// The output pane should be emptied.
    pub clear: bool,
}

impl Outcome {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
