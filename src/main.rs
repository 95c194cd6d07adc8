//! Design Pattern Demonstrations - Entry Point
//!
//! Parses the command line with clap, wires console I/O and runs the selected demos.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pattern_demos::{demo, Config, Console, Input, Output, ScriptedInput, Stdin};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with environment filter
    // Use RUST_LOG env var to control log level
    // e.g., RUST_LOG=debug or RUST_LOG=pattern_demos=trace
    // Logs go to stderr; stdout carries the demo output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pattern_demos=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let format = config.format();
    info!(
        "Running {:?} scenario with {:?} output",
        config.scenario, format
    );

    // Pre-supplied answer replaces the interactive prompt
    let mut input: Box<dyn Input> = match config.answer {
        Some(answer) => Box::new(ScriptedInput::new([answer])),
        None => Box::new(Stdin),
    };

    demo::run(
        config.scenario,
        || Box::new(Console::stdout(format)) as Box<dyn Output>,
        input.as_mut(),
    );

    Ok(())
}
