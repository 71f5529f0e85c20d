// Pwd command

use anyhow::Result;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

pub struct PwdCommand;
impl Executable for PwdCommand {
    fn arity(&self) -> Arity {
        Arity::None
    }

    fn execute(&self, _args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        out.push(ctx.cwd().display().to_string());
        Ok(())
    }
}
