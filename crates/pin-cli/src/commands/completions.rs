use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::aot::{generate, Generator, Shell};

use crate::cli::Cli;
use crate::error::CliError;

const BIN_NAME: &str = "pin";

pub fn run_completions(shell: Shell, output_dir: Option<&Path>) -> Result<(), CliError> {
    let script = completion_script(shell);

    match output_dir {
        Some(dir) => {
            let path = install_completion_script(shell, &script, dir)?;
            println!("{}", path.display());
        }
        None => io::stdout().write_all(&script)?,
    }
    Ok(())
}

pub fn completion_script(shell: Shell) -> Vec<u8> {
    let mut script = Vec::new();
    generate(shell, &mut Cli::command(), BIN_NAME, &mut script);
    script
}

/// Writes `script` as `<dir>/<file name the shell looks for>`, e.g. `_pin` for zsh.
pub fn install_completion_script(
    shell: Shell,
    script: &[u8],
    dir: &Path,
) -> Result<PathBuf, CliError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(shell.file_name(BIN_NAME));
    std::fs::write(&path, script)?;
    Ok(path)
}

/// Names of the visible top-level `pin` subcommands
pub fn subcommand_names() -> Vec<String> {
    Cli::command()
        .get_subcommands()
        .filter(|command| !command.is_hide_set())
        .map(|command| command.get_name().to_string())
        .collect()
}
