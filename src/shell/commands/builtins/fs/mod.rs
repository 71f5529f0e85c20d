pub mod ls;
pub mod rm;
pub mod mkdir;
pub mod touch;
pub mod mv;
pub mod write;
pub mod find;

use anyhow::{Result, bail};
use std::path::Path;
use crate::locale::Msg;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use super::common::can_write;

/// The parent of `target` must exist and accept writes.
pub fn check_parent_writable(target: &Path, ctx: &ShellContext) -> Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.exists() {
            bail!(ShellError::NotFound(ctx.messages.with(Msg::ParentNotFound, parent.display())));
        }
        if !can_write(parent) {
            bail!(ShellError::AccessDenied(ctx.messages.with(Msg::AccessDenied, parent.display())));
        }
    }
    Ok(())
}

/// Creates a missing parent chain, then checks it accepts writes (`mv`, `write`).
pub fn prepare_parent(target: &Path, ctx: &ShellContext) -> Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|_| {
                ShellError::Io(ctx.messages.with(Msg::DirCreateError, parent.display()))
            })?;
        }
    }
    check_parent_writable(target, ctx)
}
