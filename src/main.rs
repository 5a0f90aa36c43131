mod app;
mod cli;
mod command;
mod config;
mod consts;
mod options;
mod util;
mod view;
use crate::app::App;
use crate::cli::{Cli, USAGE};
use crate::config::{Config, ConfigError};
use anyhow::Context;
use lexopt::Parser;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    pretty_env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match Cli::from_parser(Parser::from_env())? {
        Cli::Run(args) => args,
        Cli::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Cli::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };
    let config = if args.no_config {
        Config::default()
    } else if let Some(ref path) = args.config {
        Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    } else {
        match Config::default_path() {
            Ok(path) => Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            Err(ConfigError::NoPath) => {
                log::warn!("Could not locate configuration directory; using default options");
                Config::default()
            }
            Err(e) => return Err(e.into()),
        }
    };
    let options = args.apply(config.options);
    let setup = options.setup().context("invalid game options")?;
    log::debug!("Starting game with options {options:?}");
    let terminal = ratatui::init();
    let r = App::new(options, setup).run(terminal);
    ratatui::restore();
    r.map_err(Into::into)
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
