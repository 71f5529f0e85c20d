pub mod batch;
pub mod interactive;

use anyhow::{Context, Result, bail};
use colored::*;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use crate::cli::Cli;
use crate::config::TmConfig;
use crate::locale::{Lang, Messages};
use crate::logger::{AuditSink, FileAudit, NullAudit};
use crate::reboot::RebootCapability;
use crate::shell::context::ShellContext;
use crate::transcript::Span;

const AUDIT_SUBDIR: &str = ".tm/logs";

/// Wires CLI flags and configuration into a ready shell context.
pub fn build_context(cli: &Cli, config: &TmConfig) -> Result<ShellContext> {
    let lang = resolve_lang(cli.lang.as_deref().or(config.language()))?;
    let base_dir = resolve_base_dir(cli.dir.as_deref(), config.base_dir().map(PathBuf::as_path))?;

    let audit: Arc<dyn AuditSink> = if cli.no_audit || !config.audit_enabled() {
        Arc::new(NullAudit)
    } else {
        let dir = config
            .audit_dir()
            .cloned()
            .unwrap_or_else(|| base_dir.join(AUDIT_SUBDIR));
        let file_audit = FileAudit::open(&dir, config.audit_plain())?;
        log::info!("Audit logs: {}", file_audit.dir().display());
        Arc::new(file_audit)
    };

    let reboot = if config.reboot_enabled() {
        RebootCapability::host(Duration::from_secs(config.reboot_timeout()))
    } else {
        RebootCapability::disabled()
    };

    log::info!("Base directory: {}", base_dir.display());
    Ok(ShellContext::new(base_dir, Messages::new(lang))
        .with_audit(audit)
        .with_reboot(reboot)
        .with_interrupt_flag(install_interrupt_flag()))
}

fn resolve_lang(code: Option<&str>) -> Result<Lang> {
    match code {
        Some(code) => match Lang::from_code(code) {
            Some(lang) => Ok(lang),
            None => bail!("Unsupported language: {} (expected en, ru or auto)", code),
        },
        None => Ok(Lang::detect()),
    }
}

// --dir, then config, then $HOME, then the current directory.
fn resolve_base_dir(flag: Option<&Path>, configured: Option<&Path>) -> Result<PathBuf> {
    let candidate = match flag.or(configured) {
        Some(dir) => dir.to_path_buf(),
        None => match env::var_os("HOME") {
            Some(home) => PathBuf::from(home),
            None => env::current_dir()?,
        },
    };
    if !candidate.is_dir() {
        bail!("Base directory does not exist: {}", candidate.display());
    }
    candidate
        .canonicalize()
        .with_context(|| format!("Failed to resolve base directory: {}", candidate.display()))
}

// Ctrl-C only raises the flag; commands that loop check it.
fn install_interrupt_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = flag.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        log::warn!("Failed to install Ctrl-C handler: {}", e);
    }
    flag
}

/// Draws transcript spans; `echo` is off when the line editor already shows the input.
pub fn print_spans(spans: Vec<Span>, echo: bool) {
    for span in spans {
        match span {
            Span::Banner(line) => println!("{}", line.bold()),
            Span::Echo(line) if echo => println!("{}", line.cyan()),
            Span::Echo(_) => {}
            Span::Output(line) => println!("{}", line.green()),
            Span::Error(line) => println!("{}", line.red()),
        }
    }
}
