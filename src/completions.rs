use anyhow::{bail, Context, Result};
use clap::Command;
use clap_complete::Shell;
use std::io::{self, Write};

pub fn generate(shell_name: &str, cmd: &mut Command) -> Result<()> {
    let shell = match shell_name {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" => Shell::PowerShell,
        other => bail!("Unsupported shell: {other}"),
    };

    let mut buffer = Vec::new();
    clap_complete::generate(shell, cmd, "skcheck", &mut buffer);
    io::stdout()
        .write_all(&buffer)
        .context("writing completion script")?;
    Ok(())
}
