// Ls command

use std::fs;
use std::path::Path;
use anyhow::{Result, bail};
use chrono::{DateTime, Local};
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::commands::builtins::common::{can_read, format_file_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One row of a directory listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Files only.
    pub size: Option<u64>,
    pub modified: DateTime<Local>,
}

impl FileEntry {
    pub fn read(path: &Path, name: String) -> std::io::Result<Self> {
        let meta = fs::metadata(path)?;
        let kind = if meta.is_dir() { EntryKind::Directory } else { EntryKind::File };
        Ok(Self {
            name,
            kind,
            size: meta.is_file().then(|| meta.len()),
            modified: DateTime::<Local>::from(meta.modified()?),
        })
    }

    pub fn render(&self) -> String {
        let marker = match self.kind {
            EntryKind::Directory => "📁 DIR",
            EntryKind::File => "📄 FILE",
        };
        let size = self
            .size
            .map(|s| format!(" ({})", format_file_size(s)))
            .unwrap_or_default();
        format!(
            "{}\t{}\t{}{}",
            marker,
            self.modified.format("%Y-%m-%d %H:%M"),
            self.name,
            size
        )
    }
}

pub struct LsCommand;
impl Executable for LsCommand {
    fn arity(&self) -> Arity {
        Arity::None
    }

    fn execute(&self, _args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let cwd = ctx.cwd().to_path_buf();
        if !can_read(&cwd) {
            bail!(ShellError::AccessDenied(ctx.msg(Msg::AccessDeniedBare).to_string()));
        }

        let read_dir = fs::read_dir(&cwd)
            .map_err(|_| ShellError::Io(ctx.msg(Msg::ReadDirError).to_string()))?;

        let mut entries: Vec<_> = read_dir.filter_map(|entry| entry.ok()).collect();
        if entries.is_empty() {
            out.push(ctx.msg(Msg::DirEmpty));
            return Ok(());
        }

        // Sort for consistent output
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            if !can_read(&path) {
                out.push(format!("📄 {}{}", name, ctx.msg(Msg::EntryAccessDenied)));
                continue;
            }
            match FileEntry::read(&path, name.clone()) {
                Ok(file_entry) => out.push(file_entry.render()),
                Err(_) => out.push(format!("📄 {}{}", name, ctx.msg(Msg::EntryError))),
            }
        }
        Ok(())
    }
}
