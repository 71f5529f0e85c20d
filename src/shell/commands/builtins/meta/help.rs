// Help command

use anyhow::Result;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

pub struct HelpCommand;
impl Executable for HelpCommand {
    fn arity(&self) -> Arity {
        Arity::None
    }

    fn execute(&self, _args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        for line in ctx.msg(Msg::Help).lines() {
            out.push(line);
        }
        Ok(())
    }
}
