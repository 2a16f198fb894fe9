use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "kana",
    version,
    about = "Learn the Japanese kana: browse the syllabary, hear it, drill it"
)]
pub struct Args {
    /// JSON profile to load instead of the environment defaults
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long = "log-json")]
    pub log_json: bool,
}
