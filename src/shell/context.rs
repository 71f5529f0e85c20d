use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use crate::locale::{Messages, Msg};
use crate::logger::{AuditLevel, AuditSink, NullAudit};
use crate::reboot::RebootCapability;
use crate::shell::commands::Executable;
use crate::shell::session::Session;

pub struct ShellContext {
    pub session: Session,
    /// Target of a bare `cd` and of `cd ~`.
    pub base_dir: PathBuf,
    pub messages: Messages,
    pub audit: Arc<dyn AuditSink>,
    pub reboot: Arc<RebootCapability>,
    /// Set by the Ctrl-C handler while a command runs.
    pub interrupted: Arc<AtomicBool>,
    pub registry: Arc<HashMap<String, Box<dyn Executable + Send + Sync>>>,
}

impl ShellContext {
    pub fn new(base_dir: PathBuf, messages: Messages) -> Self {
        let mut ctx = Self {
            session: Session::new(base_dir.clone()),
            base_dir,
            messages,
            audit: Arc::new(NullAudit),
            reboot: Arc::new(RebootCapability::disabled()),
            interrupted: Arc::new(AtomicBool::new(false)),
            registry: Arc::new(HashMap::new()),
        };
        crate::shell::commands::builtins::register_all_builtins(&mut ctx);
        ctx
    }

    pub fn with_audit(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_reboot(mut self, reboot: RebootCapability) -> Self {
        self.reboot = Arc::new(reboot);
        self
    }

    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }

    pub fn register_command(&mut self, name: &str, command: Box<dyn Executable + Send + Sync>) {
        if let Some(map) = Arc::get_mut(&mut self.registry) {
            map.insert(name.to_string(), command);
        } else {
            // This should not happen during initialization phase
            panic!("Cannot register command: Registry is shared");
        }
    }

    pub fn cwd(&self) -> &Path {
        self.session.cwd()
    }

    pub fn msg(&self, key: Msg) -> &'static str {
        self.messages.get(key)
    }

    /// Appends a line to the session trail of the audit log.
    pub fn trail(&self, message: &str) {
        self.audit.append(AuditLevel::Info, message);
    }
}
