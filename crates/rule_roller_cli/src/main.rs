use std::io;
use std::sync::Arc;

use clap::Parser;
use config_manager::FileSystemDocumentSource;
use rule_roller_cli::{
    diagnostic, generate_rules, license_text, version_line, write_resolved, write_rules, Error,
    DEFAULT_CONFIG_PATH,
};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

const PROGRAM_NAME: &str = "rule-roller";

/// Environment variable holding the log filter.
const LOG_ENV_VAR: &str = "RULE_ROLLER_LOG";

/// RuleRoller CLI: Generate alerting rules from a monitoring configuration
#[derive(Parser, Debug)]
#[command(name = "rule-roller", disable_version_flag = true)]
#[command(about = "Generate alerting rules from a monitoring configuration", long_about = None)]
struct Cli {
    /// Path of the root configuration document
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Show version information and exit
    #[arg(long)]
    version: bool,

    /// Show license information and exit
    #[arg(long)]
    license: bool,

    /// Write the resolved configuration as JSON to stderr before emitting
    #[arg(long)]
    dump_resolved: bool,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let generated = generate_rules(&cli.config, Arc::new(FileSystemDocumentSource::new()))?;

    if cli.dump_resolved {
        write_resolved(&mut io::stderr().lock(), &generated.resolved)?;
    }

    write_rules(&mut io::stdout().lock(), &generated.document)
}

fn main() {
    // Logs go to stderr; stdout carries only the rule document.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line(PROGRAM_NAME));
        std::process::exit(0);
    }

    if cli.license {
        print!("{}", license_text(PROGRAM_NAME));
        std::process::exit(0);
    }

    if let Err(e) = run(&cli) {
        error!("Error: {e}");
        eprintln!("{}", diagnostic(PROGRAM_NAME, &e));
        std::process::exit(1);
    }
}
