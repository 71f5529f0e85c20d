// History command

use anyhow::Result;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

pub struct HistoryCommand;
impl Executable for HistoryCommand {
    fn arity(&self) -> Arity {
        Arity::None
    }

    fn execute(&self, _args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let lines = ctx.session.command_lines();
        if lines.is_empty() {
            out.push(ctx.msg(Msg::HistoryEmpty));
            return Ok(());
        }

        out.push(ctx.msg(Msg::HistoryHeader));
        for (i, line) in lines.iter().enumerate() {
            out.push(format!("{}: {}", i + 1, line));
        }
        ctx.trail(&format!("HISTORY: shown {} commands", lines.len()));
        Ok(())
    }
}
