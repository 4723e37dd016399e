mod command;
mod paths;
mod session;

use std::fs::File;
use std::io::{self, BufRead, Write};

use cohort_lib::TableDefinition;
use cohort_lib::error::DefinitionError;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use command::Command;
use session::Session;

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: cohort-cli <table.json>")]
    Usage,
    #[error(transparent)]
    Definition(#[from] DefinitionError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let path = paths::log_file();
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("warning: failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("warning: cannot create log file {}: {}", path.display(), e),
    }
}

fn run() -> Result<(), CliError> {
    let path = std::env::args().nth(1).ok_or(CliError::Usage)?;
    let definition = TableDefinition::load(&path)?;
    log::info!(
        "loaded {} ({} columns, {} rows)",
        path,
        definition.columns.len(),
        definition.rows.len()
    );

    let mut session = Session::new(definition);
    let mut out = io::stdout().lock();
    session.show(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => session.execute(command, &mut out)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
        out.flush()?;
    }

    log::info!("session ended");
    Ok(())
}
