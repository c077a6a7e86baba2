use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptline", version, about = "Cross-shell prompt segment engine")]
pub struct Cli {
    /// Create the default configuration file
    #[arg(long)]
    pub init: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    pub check: bool,

    /// Print only the console title escape sequence
    #[arg(long)]
    pub title: bool,

    /// Print collected segments as JSON instead of a prompt line
    #[arg(long)]
    pub print: bool,

    /// Host shell name (overrides $SHELL detection)
    #[arg(long)]
    pub shell: Option<String>,

    /// Use an explicit configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
