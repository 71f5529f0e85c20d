// Cat command

use anyhow::{Result, bail};
use std::fs::File;
use std::io::{BufRead, BufReader};
use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::commands::builtins::common::{resolve_path, can_read};

pub const MAX_LINES: usize = 100;

pub struct CatCommand;
impl Executable for CatCommand {
    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn usage(&self) -> Option<Msg> {
        Some(Msg::UsageCat)
    }

    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()> {
        let filename = args.unwrap_or_default();
        let m = ctx.messages;
        let path = resolve_path(ctx, filename);

        if !path.exists() || path.is_dir() {
            bail!(ShellError::NotFound(m.with(Msg::FileNotFound, filename)));
        }
        if !can_read(&path) {
            bail!(ShellError::AccessDenied(m.with(Msg::AccessDenied, filename)));
        }

        let read_error = |e: std::io::Error| ShellError::Io(m.with(Msg::ReadError, e));
        let file = File::open(&path).map_err(read_error)?;
        let mut reader = BufReader::new(file);

        let mut line_count = 0;
        let mut truncated = false;
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer).map_err(read_error)? == 0 {
                break;
            }
            if line_count == MAX_LINES {
                truncated = true;
                break;
            }
            while matches!(buffer.last(), Some(b'\n' | b'\r')) {
                buffer.pop();
            }
            out.push(String::from_utf8_lossy(&buffer).into_owned());
            line_count += 1;
        }

        if truncated {
            out.push(m.get(Msg::FileTruncated));
        }
        ctx.trail(&format!("CAT: {} ({} lines read)", filename, line_count));
        Ok(())
    }
}
