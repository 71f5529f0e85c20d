use anyhow::{Result, bail};
use crate::handlers::print_spans;
use crate::shell::{self, context::ShellContext};
use crate::transcript::Transcript;

/// Runs each `-c` line in order, as if typed at the prompt.
pub fn handle_batch(mut ctx: ShellContext, lines: &[String]) -> Result<()> {
    let mut transcript = Transcript::default();
    let mut failed = 0;

    shell::start_session(&ctx);
    for line in lines {
        let Some(outcome) = shell::submit(line, &mut ctx) else {
            continue;
        };
        if !outcome.is_ok() {
            failed += 1;
        }
        transcript.begin(line.trim());
        transcript.apply(&outcome);
        transcript.end();
        print_spans(transcript.take_pending(), true);
    }
    shell::end_session(&ctx);
    log::debug!("Transcript:\n{}", transcript.text());

    if failed > 0 {
        bail!("{} of {} commands failed", failed, lines.len());
    }
    Ok(())
}
