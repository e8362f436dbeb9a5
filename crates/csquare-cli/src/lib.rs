//! Line-oriented front end for the club terminal.
//!
//! Wraps a [`Session`] around stdin/stdout: each input line is submitted as
//! if typed and entered, and the resulting output lines are printed.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use csquare_core::config::PROMPT_SEPARATOR;
use csquare_core::{OutputLine, Session, TerminalConfig, VirtualFs};

/// ANSI "erase screen, cursor home".
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Leaves the REPL. Handled here, not by the interpreter.
const EXIT: &str = "exit";

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(
    name = "csquare-cli",
    version,
    about = "The C-Square Club terminal, on your terminal"
)]
pub struct Cli {
    /// TOML file overriding prompt, limits and welcome banner
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON directory tree to mount instead of the built-in one
    #[arg(long = "fs", value_name = "FILE")]
    pub filesystem: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// Run these commands in order and exit instead of reading stdin
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    pub commands: Vec<String>,
}

/// Load the runtime config, or defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<TerminalConfig> {
    let Some(path) = path else {
        return Ok(TerminalConfig::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    TerminalConfig::from_toml_str(&source)
        .with_context(|| format!("parsing config {}", path.display()))
}

/// Load a filesystem manifest, or the built-in tree when no file is given.
pub fn load_filesystem(path: Option<&Path>) -> Result<VirtualFs> {
    let Some(path) = path else {
        return Ok(VirtualFs::builtin());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("reading filesystem {}", path.display()))?;
    VirtualFs::from_json(&source).with_context(|| format!("parsing filesystem {}", path.display()))
}

/// Build a session from the command line.
pub fn build_session(cli: &Cli) -> Result<Session> {
    let config = load_config(cli.config.as_deref())?;
    let fs = load_filesystem(cli.filesystem.as_deref())?;
    log::info!("session for {} ready", config.identity());
    Ok(Session::new(Arc::new(fs), &config))
}

fn write_lines(out: &mut impl Write, lines: &[OutputLine]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line.plain())?;
    }
    Ok(())
}

/// Run each command once, printing its output.
pub fn run_commands(session: &mut Session, commands: &[String], out: &mut impl Write) -> Result<()> {
    for command in commands {
        if let Some(output) = session.submit(command) {
            write_lines(out, &output)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Read lines until EOF or `exit`, submitting each.
///
/// When `interactive`, the prompt is printed before every read and `clear`
/// wipes the screen.
pub fn run_repl(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
    interactive: bool,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{}{}", session.prompt(), PROMPT_SEPARATOR)?;
            out.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("reading stdin")?;
        if line.trim() == EXIT {
            break;
        }

        let Some(output) = session.submit(&line) else {
            continue;
        };
        if interactive && session.transcript().is_empty() {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        write_lines(out, &output)?;
    }
    if interactive {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Entry point shared by the binary and tests.
pub fn run(cli: &Cli, input: impl BufRead, out: &mut impl Write, interactive: bool) -> Result<()> {
    let mut session = build_session(cli)?;

    if !cli.commands.is_empty() {
        return run_commands(&mut session, &cli.commands, out);
    }

    if !cli.no_banner {
        session.push_welcome();
        let banner = session.transcript().to_vec();
        write_lines(out, &banner)?;
    }
    run_repl(&mut session, input, out, interactive)
}
