// Cd command

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::commands::builtins::common::can_read;

/// Where a `cd` argument points, or why it goes nowhere.
enum Target {
    Dir(PathBuf),
    /// Nothing to change; print the message and stop.
    Stay(Msg),
}

fn resolve_target(arg: &str, ctx: &mut ShellContext) -> Target {
    match arg {
        ".." => match ctx.cwd().parent() {
            Some(parent) => Target::Dir(parent.to_path_buf()),
            None => Target::Stay(Msg::AlreadyAtRoot),
        },
        "~" => Target::Dir(ctx.base_dir.clone()),
        // Popped before validation: a failed `cd -` still consumes the entry.
        "-" => match ctx.session.pop_previous() {
            Some(previous) => Target::Dir(previous),
            None => Target::Stay(Msg::NoPreviousDir),
        },
        _ if Path::new(arg).is_absolute() => Target::Dir(PathBuf::from(arg)),
        _ => Target::Dir(ctx.cwd().join(arg)),
    }
}

pub struct CdCommand;
impl Executable for CdCommand {
    fn arity(&self) -> Arity {
        Arity::Optional
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let (label, target) = match args {
            Some(arg) => (arg.to_string(), resolve_target(arg, ctx)),
            // Bare `cd` goes home
            None => (ctx.base_dir.display().to_string(), Target::Dir(ctx.base_dir.clone())),
        };

        let new_path = match target {
            Target::Dir(path) => path,
            Target::Stay(msg) => {
                out.push(ctx.msg(msg));
                return Ok(());
            }
        };

        if !new_path.is_dir() {
            bail!(ShellError::NotFound(ctx.messages.with(Msg::DirNotFound, &label)));
        }
        if !can_read(&new_path) {
            bail!(ShellError::AccessDenied(ctx.messages.with(Msg::AccessDenied, &label)));
        }

        // Canonicalize to remove .. and .
        let resolved = new_path.canonicalize().unwrap_or(new_path);
        ctx.trail(&format!("CD: {}", resolved.display()));
        ctx.session.change_dir(resolved);
        log::debug!("dir stack: {:?}", ctx.session.dir_history());
        Ok(())
    }
}
