// Find command

use anyhow::Result;
use std::sync::atomic::Ordering;
use walkdir::WalkDir;
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::commands::builtins::common::can_read;

/// Deepest directory level descended into, counted from the current directory.
pub const MAX_DEPTH: usize = 5;

/// Case-insensitive substring search over entry names below the current directory.
pub struct FindCommand;
impl Executable for FindCommand {
    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn usage(&self) -> Option<Msg> {
        Some(Msg::UsageFind)
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let pattern = args.unwrap_or_default();
        out.push(format!("{}{}'...", ctx.msg(Msg::Searching), pattern));

        let needle = pattern.to_lowercase();
        let root = ctx.cwd().to_path_buf();
        if !can_read(&root) {
            return Ok(());
        }

        // Entries of a directory at depth MAX_DEPTH sit one level further down.
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(MAX_DEPTH + 1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| can_read(entry.path()));

        for entry in walker.filter_map(|entry| entry.ok()) {
            if ctx.interrupted.load(Ordering::SeqCst) {
                out.push(ctx.msg(Msg::SearchInterrupted));
                break;
            }
            let name = entry.file_name().to_string_lossy().to_lowercase();
            if name.contains(&needle) {
                out.push(format!("🔍 {}", entry.path().display()));
            }
        }
        Ok(())
    }
}
