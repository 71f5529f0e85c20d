// Date command

use anyhow::Result;
use chrono::Local;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

pub struct DateCommand;
impl Executable for DateCommand {
    fn arity(&self) -> Arity {
        Arity::None
    }

    fn execute(&self, _args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        ctx.trail(&format!("DATE: {}", now));
        out.push(now);
        Ok(())
    }
}
