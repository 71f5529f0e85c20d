pub mod builtins;

use crate::locale::Msg;
use crate::shell::ast::{Arity, Outcome};
use crate::shell::context::ShellContext;
use anyhow::Result;

pub trait Executable: Send + Sync {
    fn arity(&self) -> Arity;

    /// Usage line reported when a required argument is missing.
    fn usage(&self) -> Option<Msg> {
        None
    }

    /// `args` is the trimmed tail after the command name; None when absent.
    fn execute(&self, args: Option<&str>, ctx: &mut ShellContext, out: &mut Outcome) -> Result<()>;
}
