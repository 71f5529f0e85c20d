// Mv command

use anyhow::{Result, bail};
use std::fs;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::parser::split_pair;
use crate::shell::commands::builtins::common::{resolve_path, can_write};
use super::prepare_parent;

pub struct MvCommand;
impl Executable for MvCommand {
    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn usage(&self) -> Option<Msg> {
        Some(Msg::UsageMv)
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let m = ctx.messages;
        let Some((source, destination)) = args.and_then(split_pair) else {
            bail!(ShellError::BadUsage(m.get(Msg::UsageMv).to_string()));
        };

        let src_path = resolve_path(ctx, source);
        let dest_path = resolve_path(ctx, destination);

        if !src_path.exists() {
            bail!(ShellError::NotFound(m.with(Msg::SourceNotFound, source)));
        }
        if !can_write(&src_path) {
            bail!(ShellError::AccessDenied(m.with(Msg::AccessDenied, source)));
        }

        // Moving onto an existing directory moves into it.
        let target = if dest_path.is_dir() {
            match src_path.file_name() {
                Some(file_name) => dest_path.join(file_name),
                None => dest_path,
            }
        } else {
            dest_path
        };

        prepare_parent(&target, ctx)?;

        let moved = format!("{}{}{}", source, m.get(Msg::MoveTo), destination);
        if let Err(e) = fs::rename(&src_path, &target) {
            log::debug!("mv {} -> {}: {}", src_path.display(), target.display(), e);
            bail!(ShellError::Io(m.with(Msg::MoveError, &moved)));
        }

        out.push(m.with(Msg::Moved, &moved));
        ctx.trail(&format!("MV: {} -> {} - OK", source, destination));
        Ok(())
    }
}
