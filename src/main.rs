//! Normalizes a relation into First Normal Form.

use anyhow::{Context, Result};
use clap::Parser;
use either::Either;
use normalform::{Normalizer, Relation};
use normalform_cli::{
    input::load_relation,
    logging::{init_logging, LogConfig},
    prompt::Prompter,
    render::{render, Format},
};
use std::{
    fs::File,
    io::{self, BufWriter, IsTerminal, Write},
};
use tracing::info;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: cli.log_format.into(),
        with_ansi: io::stderr().is_terminal(),
    };
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let relation = match &cli.input {
        Some(path) => load_relation(path)?,
        None => read_interactively()?,
    };
    let format = Format::from(cli.format);

    let mut writer = match &cli.output {
        Some(path) => Either::Left(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?)),
        None => Either::Right(io::stdout().lock()),
    };

    if format != Format::Json {
        render(&mut writer, None, std::slice::from_ref(&relation), format)?;
    }

    let normalizer = Normalizer::new().with_key_policy(cli.key_policy.into());
    let relations = normalizer.normalize_1nf(relation)?;
    info!(relations = relations.len(), "normalized relation");

    render(&mut writer, Some("NORMALIZE 1NF"), &relations, format)?;
    writer.flush()?;
    Ok(())
}

fn read_interactively() -> Result<Relation> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());
    prompter.read_relation()
}
