//! Command line configuration
//!
//! `pattern_demos [SCENARIO] [--json] [--answer TEXT]`

use clap::{Parser, ValueEnum};

/// Which demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scenario {
    /// Run every demo
    #[default]
    All,
    /// Devices, commands and undo
    #[value(alias = "commands")]
    Command,
    /// Beverage preparation
    #[value(aliases = ["beverage", "beverages"])]
    Template,
    /// Chat room
    #[value(alias = "chat")]
    Mediator,
}

/// How events are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pattern_demos")]
#[command(about = "Command, Template Method and Mediator pattern demos", long_about = None)]
pub struct Config {
    /// Demo to run
    #[arg(value_enum, default_value = "all", ignore_case = true)]
    pub scenario: Scenario,

    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Answer the condiment prompt without reading stdin
    #[arg(long, value_name = "TEXT")]
    pub answer: Option<String>,
}

impl Config {
    /// Event rendering selected by `--json`
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
