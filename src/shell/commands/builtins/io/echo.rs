// Echo command

use anyhow::Result;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::parser::strip_quotes;

pub struct EchoCommand;

impl Executable for EchoCommand {
    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn usage(&self) -> Option<Msg> {
        Some(Msg::UsageEcho)
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let text = strip_quotes(args.unwrap_or_default());
        out.push(text);
        ctx.trail(&format!("ECHO: {}", text));
        Ok(())
    }
}
