// Reboot command (`bkuzn`)

use anyhow::Result;
use crate::locale::Msg;
use crate::logger::AuditLevel;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

/// Asks the host to reboot through the injected capability and reports how it went.
pub struct RebootCommand;
impl Executable for RebootCommand {
    fn arity(&self) -> Arity {
        Arity::None
    }

    fn execute(&self, _args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let m = ctx.messages;
        out.push(m.get(Msg::RebootAttempt));
        ctx.audit.append(AuditLevel::AppInfo, m.get(Msg::RebootAttempt));

        if !ctx.reboot.is_enabled() {
            let line = m.with(Msg::RebootAllFailed, m.get(Msg::RebootDisabled));
            ctx.audit.append(AuditLevel::AppError, &line);
            out.push(line);
            out.push(m.get(Msg::RebootHint));
            return Ok(());
        }

        let report = ctx.reboot.run();
        let failed = report.failures.len();
        for (i, failure) in report.failures.iter().enumerate() {
            // The last failure of a fully failed run is reported as the overall verdict.
            let line = if report.succeeded.is_none() && i + 1 == failed {
                m.with(Msg::RebootAllFailed, failure)
            } else {
                format!("{}{}", m.method_failed(i + 1), failure)
            };
            ctx.audit.append(AuditLevel::AppError, &line);
            out.push(line);
        }

        match report.succeeded {
            Some(success) => {
                out.push(m.get(success));
                ctx.audit.append(AuditLevel::AppInfo, m.get(success));
            }
            None => out.push(m.get(Msg::RebootHint)),
        }
        Ok(())
    }
}
