use anyhow::{Context as _, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{
    Cmd, ConditionalEventHandler, Editor, Event, EventContext, EventHandler, KeyCode, KeyEvent,
    Modifiers, Movement, RepeatCount,
};
use crate::handlers::print_spans;
use crate::locale::Msg;
use crate::shell::{self, context::ShellContext};
use crate::shell::commands::builtins::complete_command;
use crate::shell::session::{Recall, SharedHistory, lock_history};
use crate::transcript::Transcript;

const EDITOR_PROMPT: &str = "$ ";

type LineEditor = Editor<(), DefaultHistory>;

/// Tab: the first command matching the whole buffer replaces it, wherever the cursor is.
struct CompleteHandler;

impl ConditionalEventHandler for CompleteHandler {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, ctx: &EventContext) -> Option<Cmd> {
        Some(complete_buffer(ctx.line()))
    }
}

fn complete_buffer(line: &str) -> Cmd {
    match complete_command(line) {
        Some(name) => Cmd::Replace(Movement::WholeBuffer, Some(name.to_string())),
        None => Cmd::Noop,
    }
}

/// Up/Down walk the session's command history instead of the editor's own.
struct RecallHandler {
    history: SharedHistory,
    older: bool,
}

impl ConditionalEventHandler for RecallHandler {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, _ctx: &EventContext) -> Option<Cmd> {
        let mut history = lock_history(&self.history);
        let step = if self.older {
            history.recall_older()
        } else {
            history.recall_newer()
        };
        Some(recall_cmd(step))
    }
}

fn recall_cmd(step: Recall) -> Cmd {
    match step {
        Recall::Replace(line) => Cmd::Replace(Movement::WholeBuffer, Some(line)),
        Recall::Clear => Cmd::Replace(Movement::WholeBuffer, Some(String::new())),
        Recall::Keep => Cmd::Noop,
    }
}

fn bind_keys(rl: &mut LineEditor, history: &SharedHistory) {
    for (code, older) in [(KeyCode::Up, true), (KeyCode::Down, false)] {
        let handler = RecallHandler {
            history: history.clone(),
            older,
        };
        rl.bind_sequence(
            KeyEvent(code, Modifiers::NONE),
            EventHandler::Conditional(Box::new(handler)),
        );
    }
    rl.bind_sequence(
        KeyEvent(KeyCode::Tab, Modifiers::NONE),
        EventHandler::Conditional(Box::new(CompleteHandler)),
    );
}

pub fn handle_interactive(mut ctx: ShellContext) -> Result<()> {
    let mut rl = LineEditor::new().context("Failed to initialise the line editor")?;
    bind_keys(&mut rl, &ctx.session.commands());

    let banner = format!(
        "Terminal Manager v{}\n{}",
        env!("CARGO_PKG_VERSION"),
        ctx.msg(Msg::BannerHint)
    );
    let mut transcript = Transcript::new(&banner);
    shell::start_session(&ctx);

    let result = loop {
        print_spans(transcript.take_pending(), false);

        match rl.readline(EDITOR_PROMPT) {
            Ok(line) => {
                let Some(outcome) = shell::submit(&line, &mut ctx) else {
                    continue;
                };
                transcript.begin(line.trim());
                transcript.apply(&outcome);
                transcript.end();
                if outcome.clear {
                    if let Err(e) = rl.clear_screen() {
                        log::warn!("Failed to clear screen: {}", e);
                    }
                }
            }
            // Ctrl-C at the prompt only drops the pending input.
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break Ok(()),
            Err(e) => break Err(e).context("Failed to read input"),
        }
    };

    shell::end_session(&ctx);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_replaces_whole_buffer() {
        assert_eq!(
            complete_buffer(" ca "),
            Cmd::Replace(Movement::WholeBuffer, Some("cat".into()))
        );
        // a tail after the cursor is part of the buffer being matched
        assert_eq!(complete_buffer("caxyz"), Cmd::Noop);
        assert_eq!(complete_buffer(""), Cmd::Noop);
    }

    #[test]
    fn test_recall_steps_map_to_buffer_edits() {
        assert_eq!(
            recall_cmd(Recall::Replace("ls".into())),
            Cmd::Replace(Movement::WholeBuffer, Some("ls".into()))
        );
        assert_eq!(
            recall_cmd(Recall::Clear),
            Cmd::Replace(Movement::WholeBuffer, Some(String::new()))
        );
        assert_eq!(recall_cmd(Recall::Keep), Cmd::Noop);
    }
}
