pub mod context;
pub mod commands;
pub mod parser;
pub mod ast;
pub mod executor;
pub mod error;
pub mod session;

use chrono::Local;
use context::ShellContext;
use ast::Outcome;
use executor::execute_command;
use crate::logger::AuditLevel;


/// Parses and runs one line without touching the command history.
pub fn run_command_line(line: &str, ctx: &mut ShellContext) -> Option<Outcome> {
    let cmd = parser::parse_command_line(line)?;
    Some(execute_command(&cmd, line.trim(), ctx))
}

/// A line submitted from the console: recorded in history, then run.
/// Blank input is ignored.
pub fn submit(line: &str, ctx: &mut ShellContext) -> Option<Outcome> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if ctx.session.record_command(line) {
        ctx.audit.append(AuditLevel::Command, line);
    }
    run_command_line(line, ctx)
}

pub fn start_session(ctx: &ShellContext) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    ctx.audit.append(AuditLevel::Info, &format!("Terminal session started: {}", now));
    ctx.audit.append(AuditLevel::AppInfo, &format!("Application started: {}", now));
    log::info!("Session started in {}", ctx.cwd().display());
}

pub fn end_session(ctx: &ShellContext) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    ctx.audit.append(AuditLevel::Info, &format!("Terminal session ended: {}", now));
    log::info!("Session ended");
}
