use std::io::Write;

use clap::{Parser, Subcommand};
use snafu::{ResultExt, Snafu};

use crate::commands::{MigrateArgs, PrintArgs};

mod commands;
mod logging;

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to initialize logging"))]
    InitializeLogging {
        source: tracing_subscriber::util::TryInitError,
    },

    #[snafu(display("failed to migrate manifest"))]
    Migrate { source: commands::Error },

    #[snafu(display("failed to print example manifest"))]
    Print { source: commands::Error },

    #[snafu(display("failed to write to stdout"))]
    WriteOutput { source: std::io::Error },
}

/// Work with KubeOneCluster manifests.
#[derive(Debug, Parser)]
#[command(name = "kubeone", version, about)]
struct Cli {
    /// Log at DEBUG level unless KUBEONE_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage cluster manifests.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Migrate a manifest to the latest API version.
    Migrate(MigrateArgs),

    /// Print an example manifest.
    Print(PrintArgs),
}

#[snafu::report]
fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    logging::initialize_logging(cli.verbose).context(InitializeLoggingSnafu)?;

    let output = match cli.command {
        Command::Config(config_command) => match config_command {
            ConfigCommand::Migrate(args) => commands::migrate(&args).context(MigrateSnafu)?,
            ConfigCommand::Print(args) => commands::print(&args).context(PrintSnafu)?,
        },
    };

    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context(WriteOutputSnafu)
}
