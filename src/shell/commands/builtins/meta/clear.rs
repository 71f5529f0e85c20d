// Clear command

use anyhow::Result;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

/// Empties the output pane; the session is untouched.
pub struct ClearCommand;
impl Executable for ClearCommand {
    fn arity(&self) -> Arity {
        Arity::None
    }

    fn execute(&self, _args: Option<&str>, _ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        out.clear = true;
        Ok(())
    }
}
