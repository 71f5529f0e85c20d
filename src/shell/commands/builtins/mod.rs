pub mod fs;
pub mod nav;
pub mod io;
pub mod meta;
pub mod sys;
pub mod common; // Private helpers

use crate::shell::context::ShellContext;

/// Names offered by tab completion, in match order.
pub const COMMAND_NAMES: &[&str] = &[
    "help", "pwd", "ls", "dir", "cd", "cat", "rm", "mkdir", "touch", "echo", "mv", "clear",
    "find", "date", "write", "bkuzn", "history", "back",
];

/// Helper to register all built-in commands at once
pub fn register_all_builtins(ctx: &mut ShellContext) {
    // FS commands
    ctx.register_command("ls", Box::new(fs::ls::LsCommand));
    ctx.register_command("dir", Box::new(fs::ls::LsCommand));
    ctx.register_command("rm", Box::new(fs::rm::RmCommand));
    ctx.register_command("mkdir", Box::new(fs::mkdir::MkdirCommand));
    ctx.register_command("touch", Box::new(fs::touch::TouchCommand));
    ctx.register_command("mv", Box::new(fs::mv::MvCommand));
    ctx.register_command("write", Box::new(fs::write::WriteCommand));
    ctx.register_command("find", Box::new(fs::find::FindCommand));

    // Navigation
    ctx.register_command("cd", Box::new(nav::cd::CdCommand));
    ctx.register_command("pwd", Box::new(nav::pwd::PwdCommand));
    ctx.register_command("back", Box::new(nav::back::BackCommand));

    // IO
    ctx.register_command("cat", Box::new(io::cat::CatCommand));
    ctx.register_command("echo", Box::new(io::echo::EchoCommand));
    ctx.register_command("date", Box::new(io::date::DateCommand));

    // Session
    ctx.register_command("help", Box::new(meta::help::HelpCommand));
    ctx.register_command("history", Box::new(meta::history::HistoryCommand));
    ctx.register_command("clear", Box::new(meta::clear::ClearCommand));

    // Device
    ctx.register_command("bkuzn", Box::new(sys::reboot::RebootCommand));
}

/// First command name that starts with the trimmed input (case-sensitive).
pub fn complete_command(partial: &str) -> Option<&'static str> {
    let partial = partial.trim();
    if partial.is_empty() {
        return None;
    }
    COMMAND_NAMES.iter().copied().find(|name| name.starts_with(partial))
}
