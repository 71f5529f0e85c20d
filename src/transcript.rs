use crate::shell::ast::Outcome;

/// Token appended after every completed command.
pub const PROMPT: &str = "\n$ ";
const BARE_PROMPT: &str = "$ ";
/// Oldest lines are dropped once the pane text grows past this many bytes.
pub const MAX_TEXT: usize = 64 * 1024;

/// A piece of transcript waiting to be drawn on the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Banner(String),
    /// `➜ <line>`
    Echo(String),
    Output(String),
    Error(String),
}

/// Append-only model of the output pane.
///
/// Text is appended per command as `➜ <line>`, the handler output, then the prompt
/// token. A trailing bare prompt is stripped before the next echo. Spans not yet
/// drawn queue up in `pending`; the prompt itself is never queued since the line
/// editor draws its own. The text keeps at most `MAX_TEXT` bytes of the newest lines.
#[derive(Debug, Default)]
pub struct Transcript {
    text: String,
    pending: Vec<Span>,
}

impl Transcript {
    pub fn new(banner: &str) -> Self {
        let mut transcript = Self::default();
        for line in banner.lines() {
            transcript.push(Span::Banner(line.to_string()));
        }
        transcript.text.push_str(PROMPT);
        transcript
    }

    pub fn begin(&mut self, command: &str) {
        if self.text.ends_with(BARE_PROMPT) {
            self.text.truncate(self.text.len() - BARE_PROMPT.len());
        }
        self.push(Span::Echo(format!("➜ {}", command)));
    }

    pub fn apply(&mut self, outcome: &Outcome) {
        if outcome.clear {
            self.text.clear();
            self.pending.clear();
            return;
        }
        for line in &outcome.lines {
            self.push(Span::Output(line.clone()));
        }
        if let Some(err) = &outcome.error {
            self.push(Span::Error(err.to_string()));
        }
    }

    pub fn end(&mut self) {
        self.text.push_str(PROMPT);
        self.trim_front();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn take_pending(&mut self) -> Vec<Span> {
        std::mem::take(&mut self.pending)
    }

    fn push(&mut self, span: Span) {
        let line = match &span {
            Span::Banner(s) | Span::Echo(s) | Span::Output(s) | Span::Error(s) => s,
        };
        self.text.push_str(line);
        self.text.push('\n');
        self.pending.push(span);
        self.trim_front();
    }

    fn trim_front(&mut self) {
        if self.text.len() <= MAX_TEXT {
            return;
        }
        let mut cut = self.text.len() - MAX_TEXT;
        match self.text.as_bytes()[cut..].iter().position(|&b| b == b'\n') {
            Some(offset) => cut += offset + 1,
            None => {
                while !self.text.is_char_boundary(cut) {
                    cut += 1;
                }
            }
        }
        self.text.drain(..cut);
    }
}
