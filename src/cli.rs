//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use normalform::KeyPolicy;
use normalform_cli::{logging::LogFormat, render::Format};

#[derive(Parser)]
#[command(
    name = "normalform",
    version,
    about = "Decompose a relation with multi-valued attributes into First Normal Form",
    long_about = "Decompose a relation with multi-valued attributes into First Normal Form.\n\n\
                  The relation is read from a JSON document or, without --input, from\n\
                  interactive prompts. Multi-valued values are written as {v1, v2, ...}."
)]
pub struct Cli {
    /// JSON document describing the relation (prompts on stdin when omitted).
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the rendered relations to a file instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format of the rendered relations.
    #[arg(long, value_enum, default_value = "table")]
    pub format: FormatArg,

    /// Primary key given to the produced relations.
    #[arg(long = "key-policy", value_enum, default_value = "cumulative")]
    pub key_policy: KeyPolicyArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Table,
    Plain,
    Json,
}

impl From<FormatArg> for Format {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Table => Format::Table,
            FormatArg::Plain => Format::Plain,
            FormatArg::Json => Format::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KeyPolicyArg {
    /// Each relation's key grows with every non-atomic attribute processed.
    Cumulative,
    /// Each relation is keyed by the primary key and its own attribute.
    PerAttribute,
}

impl From<KeyPolicyArg> for KeyPolicy {
    fn from(policy: KeyPolicyArg) -> Self {
        match policy {
            KeyPolicyArg::Cumulative => KeyPolicy::Cumulative,
            KeyPolicyArg::PerAttribute => KeyPolicy::PerAttribute,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
