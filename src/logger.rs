use anyhow::{Context, Result};
use chrono::Local;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("static ANSI pattern"));

pub const SESSION_LOG: &str = "terminal.log";
pub const APP_LOG: &str = "terminal_app.log";
pub const APP_ERROR_LOG: &str = "terminal_app_error.log";

pub fn strip_ansi(content: &str) -> String {
    ANSI_RE.replace_all(content, "").to_string()
}

/// Severity-like label of an audit line. Also decides which file it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditLevel {
    /// Session trail: start/stop and successful operations.
    Info,
    /// A submitted command line.
    Command,
    /// A failed command.
    Error,
    AppInfo,
    AppError,
}

impl AuditLevel {
    pub fn label(self) -> &'static str {
        match self {
            AuditLevel::Info => "INFO",
            AuditLevel::Command => "COMMAND",
            AuditLevel::Error => "ERROR",
            AuditLevel::AppInfo => "APP INFO",
            AuditLevel::AppError => "APP ERROR",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            AuditLevel::Info | AuditLevel::Command | AuditLevel::Error => SESSION_LOG,
            AuditLevel::AppInfo => APP_LOG,
            AuditLevel::AppError => APP_ERROR_LOG,
        }
    }
}

/// Persistent record of notable shell events.
pub trait AuditSink: Send + Sync {
    fn append(&self, level: AuditLevel, message: &str);
}

/// Drops everything. Used with `--no-audit`.
pub struct NullAudit;

impl AuditSink for NullAudit {
    fn append(&self, _level: AuditLevel, _message: &str) {}
}

/// Writes `[YYYY-MM-DD HH:MM:SS] LABEL: message` lines into the audit directory.
pub struct FileAudit {
    dir: PathBuf,
    plain: bool,
}

impl FileAudit {
    pub fn open(dir: &Path, plain: bool) -> Result<Self> {
        fs::create_dir_all(dir).context("Failed to create audit log directory")?;
        Ok(Self {
            dir: dir.to_path_buf(),
            plain,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_line(&self, level: AuditLevel, message: &str) -> Result<()> {
        let body = if self.plain {
            strip_ansi(message)
        } else {
            message.to_string()
        };
        let line = format_line(level, &body);

        let path = self.dir.join(level.file_name());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open audit log: {}", path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("Failed to write audit log: {}", path.display()))?;
        Ok(())
    }
}

impl AuditSink for FileAudit {
    fn append(&self, level: AuditLevel, message: &str) {
        if let Err(e) = self.write_line(level, message) {
            log::warn!("audit: {:#}", e);
        }
    }
}

pub fn format_line(level: AuditLevel, message: &str) -> String {
    let now = Local::now();
    format!("[{}] {}: {}\n", now.format("%Y-%m-%d %H:%M:%S"), level.label(), message)
}

/// Keeps audit lines in memory so tests can inspect them.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryAudit {
    pub entries: std::sync::Mutex<Vec<(AuditLevel, String)>>,
}

#[cfg(test)]
impl MemoryAudit {
    pub fn messages(&self, level: AuditLevel) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl AuditSink for MemoryAudit {
    fn append(&self, level: AuditLevel, message: &str) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\x1b[31mred\x1b[0m text"), "red text");
    }

    #[test]
    fn test_line_format() {
        let line = format_line(AuditLevel::Command, "ls");
        let re = Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] COMMAND: ls\n$").unwrap();
        assert!(re.is_match(&line), "unexpected line: {:?}", line);
    }

    #[test]
    fn test_file_audit_routes_levels() {
        let tmp = tempfile::tempdir().unwrap();
        let audit = FileAudit::open(&tmp.path().join("logs"), true).unwrap();

        audit.append(AuditLevel::Command, "pwd");
        audit.append(AuditLevel::Error, "\x1b[31mboom\x1b[0m");
        audit.append(AuditLevel::AppError, "bad");

        let session = fs::read_to_string(audit.dir().join(SESSION_LOG)).unwrap();
        assert!(session.contains("COMMAND: pwd"));
        assert!(session.contains("ERROR: boom"));
        assert!(!session.contains('\x1b'));

        let app_err = fs::read_to_string(audit.dir().join(APP_ERROR_LOG)).unwrap();
        assert!(app_err.contains("APP ERROR: bad"));
        assert!(!audit.dir().join(APP_LOG).exists());
    }
}
