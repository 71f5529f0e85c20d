// Write command

use anyhow::{Result, bail};
use std::fs;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::parser::parse_write_args;
use crate::shell::commands::builtins::common::resolve_path;
use super::prepare_parent;

/// `write file "text"` replaces the file's content with exactly `text`.
pub struct WriteCommand;
impl Executable for WriteCommand {
    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn usage(&self) -> Option<Msg> {
        Some(Msg::UsageWrite)
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let m = ctx.messages;
        let Some((filename, text)) = args.and_then(parse_write_args) else {
            bail!(ShellError::BadUsage(m.get(Msg::UsageWrite).to_string()));
        };

        let p = resolve_path(ctx, &filename);
        prepare_parent(&p, ctx)?;

        fs::write(&p, text.as_bytes())
            .map_err(|e| ShellError::Io(m.with(Msg::WriteError, e)))?;

        out.push(m.with(Msg::TextWritten, &filename));
        ctx.trail(&format!("WRITE: {} - OK ({} chars)", filename, text.chars().count()));
        Ok(())
    }
}
