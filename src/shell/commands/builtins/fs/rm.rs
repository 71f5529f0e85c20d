// Rm command

use anyhow::{Result, bail};
use std::fs;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::commands::builtins::common::{resolve_path, can_write, is_dir_empty};

/// Removes a file or an empty directory. Never recursive.
pub struct RmCommand;
impl Executable for RmCommand {
    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn usage(&self) -> Option<Msg> {
        Some(Msg::UsageRm)
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let name = args.unwrap_or_default();
        let p = resolve_path(ctx, name);
        let m = ctx.messages;

        if !p.exists() {
            bail!(ShellError::NotFound(m.with(Msg::FileNotFound, name)));
        }
        if !can_write(&p) {
            bail!(ShellError::AccessDenied(m.with(Msg::AccessDenied, name)));
        }

        let removed = if p.is_dir() {
            match is_dir_empty(&p) {
                Ok(false) => bail!(ShellError::NotEmpty(m.get(Msg::DirNotEmpty).to_string())),
                Ok(true) => fs::remove_dir(&p),
                Err(e) => Err(e),
            }
        } else {
            fs::remove_file(&p)
        };

        if let Err(e) = removed {
            log::debug!("rm {}: {}", p.display(), e);
            bail!(ShellError::Io(m.with(Msg::DeleteError, name)));
        }

        out.push(m.with(Msg::Deleted, name));
        ctx.trail(&format!("RM: {} - OK", name));
        Ok(())
    }
}
