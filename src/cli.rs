use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "skcheck",
    version,
    about = "Validate SKILL.md metadata and structure conformance"
)]
pub struct Cli {
    /// Log discovery and per-file details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check SKILL.md files; defaults to <root>/*/SKILL.md
    Check {
        paths: Vec<String>,
        #[arg(long)]
        root: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
    Completions {
        #[arg(long)]
        shell: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    Get { key: String },
    Set { key: String, value: String },
}
