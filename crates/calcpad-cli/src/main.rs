use anyhow::Context;
use calcpad_calculator::{CalcpadConfig, Calculator, Operation, OperationSet};
use calcpad_cli::{LinePrompter, RustylinePrompter, Session};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Simple menu-driven calculator
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to $CALCPAD_CONFIG_PATH, then ./calcpad.toml)
    #[arg(short, long, env = "CALCPAD_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Enable only these operations (repeatable); overrides the configuration file
    #[arg(short, long = "enable", value_name = "OPERATION")]
    enable: Vec<Operation>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => CalcpadConfig::load_or_default(path),
        None => CalcpadConfig::load(),
    }
    .context("loading configuration")?;

    let enabled = if args.enable.is_empty() {
        config.operations.enabled
    } else {
        args.enable.iter().copied().collect::<OperationSet>()
    };
    info!(?enabled, "starting calcpad");

    let calculator = Calculator::new(enabled);
    if io::stdin().is_terminal() {
        let prompter = RustylinePrompter::new().context("opening terminal")?;
        Session::new(calculator, prompter, io::stdout().lock()).run()
    } else {
        // rustyline does not echo prompts for piped input.
        let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        Session::new(calculator, prompter, io::stdout()).run()
    }
}
