use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io::{IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use skcheck::cli::{Cli, Commands, ConfigCmd};
use skcheck::config::{self, ColorMode};
use skcheck::report::Report;
use skcheck::{check, completions, discover, logging, Schema};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match cli.command {
        Commands::Check { paths, root, json } => cmd_check(&paths, root.as_deref(), json),
        Commands::Config { cmd } => {
            cmd_config(cmd)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            completions::generate(&shell, &mut Cli::command())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_check(paths: &[String], root_flag: Option<&str>, json: bool) -> Result<ExitCode> {
    let cfg = config::load_or_default()?;
    let schema = Schema::standard()?;
    let root = root_flag.unwrap_or(&cfg.default_root);

    let files = discover::resolve_skill_files(paths, Path::new(root), schema.skill_file_name);
    if files.is_empty() {
        println!("No skills found.");
        return Ok(ExitCode::FAILURE);
    }
    debug!(count = files.len(), "resolved skill files");

    let issues = check::check_all(&files, &schema);
    let report = Report::new(files.len(), issues);

    let rendered = if json {
        let mut out = report.render_json()?;
        out.push('\n');
        out
    } else {
        let colored = match cfg.color {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        report.render_text(colored)
    };
    std::io::stdout()
        .write_all(rendered.as_bytes())
        .context("writing report")?;

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn cmd_config(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Get { key } => {
            let cfg = config::load_or_default()?;
            println!("{}", cfg.get(&key)?);
        }
        ConfigCmd::Set { key, value } => {
            let mut cfg = config::load_or_default()?;
            cfg.set(&key, &value)?;
            config::save(&cfg)?;
            println!("ok");
        }
    }
    Ok(())
}
