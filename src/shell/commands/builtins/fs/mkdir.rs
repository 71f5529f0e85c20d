// Mkdir command

use anyhow::{Result, bail};
use std::fs;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::commands::builtins::common::resolve_path;
use super::check_parent_writable;

pub struct MkdirCommand;
impl Executable for MkdirCommand {
    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn usage(&self) -> Option<Msg> {
        Some(Msg::UsageMkdir)
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let name = args.unwrap_or_default();
        let p = resolve_path(ctx, name);

        if p.exists() {
            bail!(ShellError::AlreadyExists(ctx.messages.with(Msg::DirExists, name)));
        }
        check_parent_writable(&p, ctx)?;

        // One level only; missing parents were rejected above.
        fs::create_dir(&p).map_err(|e| {
            log::debug!("mkdir {}: {}", p.display(), e);
            ShellError::Io(ctx.messages.with(Msg::DirCreateError, name))
        })?;

        out.push(ctx.messages.with(Msg::DirCreated, name));
        ctx.trail(&format!("MKDIR: {} - OK", name));
        Ok(())
    }
}
