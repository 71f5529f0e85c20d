use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;
use crate::locale::Msg;

/// One way of asking the host to reboot.
pub trait RebootStrategy: Send + Sync {
    /// Message reported when this strategy goes through.
    fn success(&self) -> Msg;
    fn attempt(&self) -> Result<()>;
}

/// Spawns a helper program found on `PATH`.
pub struct ProcessStrategy {
    program: &'static str,
    args: &'static [&'static str],
    success: Msg,
    timeout: Duration,
}

impl ProcessStrategy {
    pub fn new(program: &'static str, args: &'static [&'static str], success: Msg, timeout: Duration) -> Self {
        Self { program, args, success, timeout }
    }
}

impl RebootStrategy for ProcessStrategy {
    fn success(&self) -> Msg {
        self.success
    }

    fn attempt(&self) -> Result<()> {
        let path = which::which(self.program)
            .with_context(|| format!("{} not found on PATH", self.program))?;

        let mut child = Command::new(&path)
            .args(self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn {}", path.display()))?;

        // Still running at the deadline means the reboot is under way.
        match child.wait_timeout(self.timeout)? {
            Some(status) if !status.success() => {
                bail!("{} exited with {:?}", self.program, status.code())
            }
            _ => Ok(()),
        }
    }
}

/// Outcome of a reboot request, strategy by strategy.
#[derive(Debug, Default)]
pub struct RebootReport {
    /// Failure detail of every strategy tried before the one that went through.
    pub failures: Vec<String>,
    pub succeeded: Option<Msg>,
}

/// Ordered list of reboot strategies; the first that succeeds wins.
pub struct RebootCapability {
    strategies: Vec<Box<dyn RebootStrategy>>,
}

impl RebootCapability {
    pub fn new(strategies: Vec<Box<dyn RebootStrategy>>) -> Self {
        Self { strategies }
    }

    /// No strategies at all; every request fails.
    pub fn disabled() -> Self {
        Self { strategies: Vec::new() }
    }

    /// Power manager, then superuser shell, then plain `reboot`.
    pub fn host(timeout: Duration) -> Self {
        Self::new(vec![
            Box::new(ProcessStrategy::new("systemctl", &["reboot"], Msg::RebootSent, timeout)),
            Box::new(ProcessStrategy::new("su", &["-c", "reboot"], Msg::RebootRoot, timeout)),
            Box::new(ProcessStrategy::new("reboot", &[], Msg::RebootStandard, timeout)),
        ])
    }

    pub fn is_enabled(&self) -> bool {
        !self.strategies.is_empty()
    }

    pub fn run(&self) -> RebootReport {
        let mut report = RebootReport::default();
        for strategy in &self.strategies {
            match strategy.attempt() {
                Ok(()) => {
                    report.succeeded = Some(strategy.success());
                    break;
                }
                Err(e) => report.failures.push(format!("{:#}", e)),
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fake {
        ok: bool,
        success: Msg,
        calls: Arc<AtomicUsize>,
    }

    impl RebootStrategy for Fake {
        fn success(&self) -> Msg {
            self.success
        }
        fn attempt(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.ok { Ok(()) } else { bail!("denied") }
        }
    }

    fn fake(ok: bool, success: Msg, calls: &Arc<AtomicUsize>) -> Box<dyn RebootStrategy> {
        Box::new(Fake { ok, success, calls: calls.clone() })
    }

    #[test]
    fn test_first_success_stops() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cap = RebootCapability::new(vec![
            fake(false, Msg::RebootSent, &calls),
            fake(true, Msg::RebootRoot, &calls),
            fake(true, Msg::RebootStandard, &calls),
        ]);
        let report = cap.run();
        assert_eq!(report.succeeded, Some(Msg::RebootRoot));
        assert_eq!(report.failures, vec!["denied".to_string()]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_all_fail() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cap = RebootCapability::new(vec![
            fake(false, Msg::RebootSent, &calls),
            fake(false, Msg::RebootRoot, &calls),
        ]);
        let report = cap.run();
        assert!(report.succeeded.is_none());
        assert_eq!(report.failures.len(), 2);
    }

    #[test]
    fn test_missing_program_fails() {
        let strategy = ProcessStrategy::new(
            "definitely-not-a-real-reboot-helper",
            &[],
            Msg::RebootStandard,
            Duration::from_millis(10),
        );
        assert!(strategy.attempt().is_err());
        assert!(!RebootCapability::disabled().is_enabled());
    }
}
