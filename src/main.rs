mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod logo;
mod ticker;
mod util;
mod view;
use crate::app::App;
use crate::args::{CliCommand, USAGE};
use crate::config::Config;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match CliCommand::from_args() {
        Ok(CliCommand::Run { config }) => match setup(config) {
            Ok(config) => play(&config),
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Ok(CliCommand::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

/// Load the configuration and start logging
fn setup(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(p) => Config::load(&p, false)
            .with_context(|| format!("failed to load configuration from {}", p.display()))?,
        None => match Config::default_path() {
            Ok(p) => Config::load(&p, true).with_context(|| {
                format!("failed to load configuration from {}", p.display())
            })?,
            Err(_) => Config::default(),
        },
    };
    logging::init(&config.logging)?;
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    Ok(config)
}

fn play(config: &Config) -> ExitCode {
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(config.speed.curve, rand::rng()).run(terminal));
    // Not every terminal supports focus reporting
    let _ = execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal I/O failed: {e}");
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}
