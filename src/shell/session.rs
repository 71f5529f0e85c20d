use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Stack of previously visited directories. Never empty.
#[derive(Debug, Clone)]
pub struct DirHistory {
    stack: Vec<PathBuf>,
}

impl DirHistory {
    pub fn new(initial: PathBuf) -> Self {
        Self { stack: vec![initial] }
    }

    pub fn push(&mut self, dir: PathBuf) {
        self.stack.push(dir);
    }

    /// Removes and returns the top entry, provided one would remain.
    pub fn pop_previous(&mut self) -> Option<PathBuf> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Pops the top, reads the new top, pushes the old top back.
    /// Returns the entry now second from the top; the stack is unchanged.
    pub fn swap_back(&mut self) -> Option<PathBuf> {
        let top = self.pop_previous()?;
        let below = self.stack.last().cloned();
        self.stack.push(top);
        below
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.stack
    }
}

/// What the input buffer should show after a recall step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    Replace(String),
    Clear,
    Keep,
}

/// Submitted command lines plus the recall cursor used by the line editor.
#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    // 0 is the newest entry; None when not browsing
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Appends `line` unless it repeats the last entry. Always ends browsing.
    pub fn record(&mut self, line: &str) -> bool {
        self.cursor = None;
        if self.entries.last().is_some_and(|last| last == line) {
            return false;
        }
        self.entries.push(line.to_string());
        true
    }

    /// One step toward the oldest entry ("up").
    pub fn recall_older(&mut self) -> Recall {
        if self.entries.is_empty() {
            return Recall::Keep;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) if i + 1 < self.entries.len() => i + 1,
            Some(i) => i,
        };
        self.cursor = Some(next);
        Recall::Replace(self.entry_at(next))
    }

    /// One step toward the newest entry ("down"); past the newest clears the input.
    pub fn recall_newer(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Keep,
            Some(0) => {
                self.cursor = None;
                Recall::Clear
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                Recall::Replace(self.entry_at(i - 1))
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn entry_at(&self, from_newest: usize) -> String {
        self.entries[self.entries.len() - 1 - from_newest].clone()
    }
}

/// Command history shared with the line editor's recall key handlers.
pub type SharedHistory = Arc<Mutex<CommandHistory>>;

pub fn lock_history(history: &SharedHistory) -> MutexGuard<'_, CommandHistory> {
    history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Navigation state of one interactive session.
#[derive(Debug)]
pub struct Session {
    cwd: PathBuf,
    dirs: DirHistory,
    commands: SharedHistory,
}

impl Session {
    pub fn new(start: PathBuf) -> Self {
        Self {
            dirs: DirHistory::new(start.clone()),
            cwd: start,
            commands: SharedHistory::default(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Moves to `dir`, remembering the directory being left.
    pub fn change_dir(&mut self, dir: PathBuf) {
        let previous = std::mem::replace(&mut self.cwd, dir);
        self.dirs.push(previous);
    }

    /// Takes the most recent history entry off the stack (`cd -`).
    pub fn pop_previous(&mut self) -> Option<PathBuf> {
        self.dirs.pop_previous()
    }

    /// `back`: cwd becomes the second entry from the top; the stack keeps its size.
    pub fn go_back(&mut self) -> Option<&Path> {
        let target = self.dirs.swap_back()?;
        self.cwd = target;
        Some(&self.cwd)
    }

    pub fn dir_history(&self) -> &[PathBuf] {
        self.dirs.entries()
    }

    pub fn commands(&self) -> SharedHistory {
        self.commands.clone()
    }

    pub fn record_command(&self, line: &str) -> bool {
        lock_history(&self.commands).record(line)
    }

    pub fn command_lines(&self) -> Vec<String> {
        lock_history(&self.commands).entries().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_history_never_empties() {
        let mut dirs = DirHistory::new(PathBuf::from("/start"));
        assert_eq!(dirs.pop_previous(), None);
        assert_eq!(dirs.swap_back(), None);
        assert_eq!(dirs.entries().len(), 1);
    }

    #[test]
    fn test_change_dir_pushes_previous() {
        let mut session = Session::new(PathBuf::from("/s"));
        session.change_dir(PathBuf::from("/a"));
        session.change_dir(PathBuf::from("/b"));
        assert_eq!(session.cwd(), Path::new("/b"));
        assert_eq!(
            session.dir_history(),
            &[PathBuf::from("/s"), PathBuf::from("/s"), PathBuf::from("/a")]
        );
    }

    #[test]
    fn test_go_back_swaps_without_shrinking() {
        let mut session = Session::new(PathBuf::from("/s"));
        session.change_dir(PathBuf::from("/a"));
        session.change_dir(PathBuf::from("/b"));

        assert_eq!(session.go_back(), Some(Path::new("/s")));
        assert_eq!(session.dir_history().len(), 3);
        assert_eq!(session.dir_history().last(), Some(&PathBuf::from("/a")));

        // Same answer again: the top entry is put back every time.
        assert_eq!(session.go_back(), Some(Path::new("/s")));
    }

    #[test]
    fn test_recall_walk() {
        let mut history = CommandHistory::default();
        history.record("ls");
        history.record("pwd");

        assert_eq!(history.recall_older(), Recall::Replace("pwd".into()));
        assert_eq!(history.recall_older(), Recall::Replace("ls".into()));
        // stops at the oldest
        assert_eq!(history.recall_older(), Recall::Replace("ls".into()));
        assert_eq!(history.recall_newer(), Recall::Replace("pwd".into()));
        assert_eq!(history.recall_newer(), Recall::Clear);
        assert_eq!(history.cursor, None);
        assert_eq!(history.recall_newer(), Recall::Keep);
    }

    #[test]
    fn test_recall_on_empty_history() {
        let mut history = CommandHistory::default();
        assert_eq!(history.recall_older(), Recall::Keep);
        assert_eq!(history.recall_newer(), Recall::Keep);
    }

    #[test]
    fn test_record_suppresses_adjacent_duplicates() {
        let mut history = CommandHistory::default();
        assert!(history.record("ls"));
        assert!(!history.record("ls"));
        assert!(history.record("pwd"));
        assert!(history.record("ls"));
        assert_eq!(history.entries(), &["ls", "pwd", "ls"]);
    }

    #[test]
    fn test_record_resets_cursor() {
        let mut history = CommandHistory::default();
        history.record("ls");
        history.recall_older();
        assert_eq!(history.cursor, Some(0));
        history.record("ls");
        assert_eq!(history.cursor, None);
    }
}
