// Touch command

use anyhow::{Result, bail};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::commands::builtins::common::resolve_path;
use super::check_parent_writable;

/// Creates an empty file; an existing file is left alone.
pub struct TouchCommand;
impl Executable for TouchCommand {
    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn usage(&self) -> Option<Msg> {
        Some(Msg::UsageTouch)
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let name = args.unwrap_or_default();
        let p = resolve_path(ctx, name);
        let m = ctx.messages;

        if p.exists() {
            bail!(ShellError::AlreadyExists(m.with(Msg::FileExists, name)));
        }
        check_parent_writable(&p, ctx)?;

        match OpenOptions::new().write(true).create_new(true).open(&p) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                bail!(ShellError::AlreadyExists(m.with(Msg::FileExists, name)));
            }
            Err(e) => {
                log::debug!("touch {}: {}", p.display(), e);
                bail!(ShellError::Io(m.with(Msg::FileCreateError, name)));
            }
        }

        out.push(m.with(Msg::FileCreated, name));
        ctx.trail(&format!("TOUCH: {} - OK", name));
        Ok(())
    }
}
