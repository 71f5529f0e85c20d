use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tm", version, about = "Terminal Manager: a minimal interactive file shell")]
pub struct Cli {
    /// Start (and home) directory of the session
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Directory holding tm.toml and .env
    #[arg(long = "config-dir")]
    pub config_dir: Option<PathBuf>,

    /// Interface language: en, ru or auto
    #[arg(long)]
    pub lang: Option<String>,

    /// Do not write audit logs
    #[arg(long = "no-audit")]
    pub no_audit: bool,

    /// Run a command line and exit (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,
}
