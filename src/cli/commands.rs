//! Command dispatch for the morsetree CLI

use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, DecodeError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{CodeTree, TreeBuilder, TreeNodeConvert, ALPHABET};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Some(Commands::Decode {
            messages,
            file,
            strict,
        }) => cmd_decode(config, messages, file.as_deref(), *strict),
        Some(Commands::Tree) => cmd_tree(config),
        Some(Commands::Table) => cmd_table(config),
        Some(Commands::Config { command }) => cmd_config(config, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see `morsetree --help`".to_string(),
        )),
    }
}

fn load_settings(config: Option<&Path>) -> CliResult<Settings> {
    let settings = Settings::load(config)?;
    output::configure(settings.color);
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Read one message per line from `file`, or from stdin when no file is given.
pub fn read_messages(file: Option<&Path>) -> ApplicationResult<Vec<String>> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path).with_path_context("read messages", path)?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .with_context("read messages from stdin")?;
            buf
        }
    };
    Ok(content.lines().map(str::to_string).collect())
}

/// Decode messages with the configured decoder, in parallel if enabled.
pub fn decode_messages(
    settings: &Settings,
    messages: &[String],
) -> Vec<Result<String, DecodeError>> {
    let decoder = settings.decoder();
    if settings.parallel {
        decoder.try_decode_batch(messages)
    } else {
        messages
            .iter()
            .map(|message| decoder.try_decode(message.as_str()))
            .collect()
    }
}

#[instrument(skip(messages))]
fn cmd_decode(
    config: Option<&Path>,
    messages: &[String],
    file: Option<&Path>,
    strict: bool,
) -> CliResult<()> {
    let settings = load_settings(config)?;
    let messages = if messages.is_empty() {
        read_messages(file)?
    } else {
        messages.to_vec()
    };
    debug!("cmd_decode: {} messages", messages.len());

    let results = decode_messages(&settings, &messages);
    let mut failed = 0;
    for result in &results {
        match result {
            Ok(text) => output::decoded(text, false),
            Err(e) => {
                failed += 1;
                output::decoded(&e.to_string(), true);
            }
        }
    }

    if strict && failed > 0 {
        return Err(CliError::Undecodable {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Build the code tree for display commands, reporting a bad alphabet as an error.
fn morse_tree() -> CliResult<CodeTree> {
    Ok(TreeBuilder::from_alphabet(&ALPHABET).map_err(ApplicationError::from)?)
}

/// Table rows `(letter, code)` sorted by letter.
pub fn table_rows(tree: &CodeTree) -> Vec<(char, String)> {
    tree.entries()
        .into_iter()
        .map(|(code, letter)| (letter, code))
        .sorted_by_key(|(letter, _)| *letter)
        .collect()
}

#[instrument]
fn cmd_tree(config: Option<&Path>) -> CliResult<()> {
    load_settings(config)?;
    output::info(&morse_tree()?.to_tree_string());
    Ok(())
}

#[instrument]
fn cmd_table(config: Option<&Path>) -> CliResult<()> {
    load_settings(config)?;
    for (letter, code) in table_rows(&morse_tree()?) {
        output::row(&letter, &code);
    }
    Ok(())
}

#[instrument]
fn cmd_config(config: Option<&Path>, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(config)?;
            output::header("# effective settings");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                if !path.exists() {
                    output::warning(&format!("{} does not exist", path.display()));
                }
                output::info(&path.display());
            }
            None => output::warning("no home directory, global config disabled"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
