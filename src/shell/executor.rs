use crate::locale::Msg;
use crate::logger::AuditLevel;
use crate::shell::ast::{Arity, Command, Outcome};
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use std::sync::atomic::Ordering;

/// Dispatches one parsed command. Every failure is reported through `Outcome::error`.
pub fn execute_command(cmd: &Command, line: &str, ctx: &mut ShellContext) -> Outcome {
    let mut out = Outcome::default();
    ctx.interrupted.store(false, Ordering::SeqCst);

    let registry = ctx.registry.clone();
    let result: anyhow::Result<()> = match registry.get(&cmd.name) {
        Some(handler) => match (handler.arity(), cmd.args.as_deref()) {
            (Arity::None, Some(_)) => Err(unknown_command(line, ctx).into()),
            (Arity::Required, None) => {
                let err = match handler.usage() {
                    Some(usage) => ShellError::BadUsage(ctx.msg(usage).to_string()),
                    None => unknown_command(line, ctx),
                };
                Err(err.into())
            }
            (_, args) => handler.execute(args, ctx, &mut out),
        },
        None => Err(unknown_command(line, ctx).into()),
    };

    if let Err(err) = result {
        out.error = Some(report_error(err, line, ctx));
    }
    out
}

fn unknown_command(line: &str, ctx: &ShellContext) -> ShellError {
    ShellError::UnknownCommand(ctx.messages.with(Msg::UnknownCommand, line))
}

fn report_error(err: anyhow::Error, line: &str, ctx: &ShellContext) -> ShellError {
    match err.downcast::<ShellError>() {
        Ok(shell_err) => {
            log::debug!("'{}' failed ({}): {}", line, shell_err.kind(), shell_err);
            ctx.audit.append(AuditLevel::Error, &shell_err.to_string());
            shell_err
        }
        Err(other) => {
            let message = format!("{}{}': {:#}", ctx.msg(Msg::ExecError), line, other);
            log::error!("{}", message);
            ctx.audit.append(AuditLevel::Error, &message);
            ctx.audit.append(AuditLevel::AppError, &message);
            ShellError::Internal(message)
        }
    }
}
