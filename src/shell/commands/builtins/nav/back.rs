// Back command

use anyhow::{Result, bail};
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;

/// Returns to the directory second from the top of the history stack.
///
/// The top entry is popped, the new top becomes the current directory and the
/// popped entry is pushed back, so repeated `back` lands on the same place.
pub struct BackCommand;
impl Executable for BackCommand {
    fn arity(&self) -> Arity {
        Arity::None
    }

    fn execute(&self, _args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let Some(dir) = ctx.session.go_back().map(|dir| dir.display().to_string()) else {
            bail!(ShellError::NotFound(ctx.msg(Msg::NoPreviousDir).to_string()));
        };
        out.push(ctx.messages.with(Msg::ReturnedTo, &dir));
        ctx.trail(&format!("BACK: {}", dir));
        Ok(())
    }
}
