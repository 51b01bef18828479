//! extend-file CLI - normalizes file-like JSON into canonical file records.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{keys, normalize, sift};

#[derive(Parser)]
#[command(name = "extend-file")]
#[command(about = "Normalize file-like inputs into canonical file records")]
struct Cli {
    /// Log normalization steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a file record (JSON) or raw content
    Normalize {
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// JSON file holding the options mapping
        #[arg(long)]
        options: Option<String>,
        /// Inline JSON object merged over the options' locals
        #[arg(long)]
        locals: Option<String>,
        /// Treat the input text as content instead of JSON
        #[arg(long)]
        raw: bool,
        /// Emit canonical (RFC 8785) JSON instead of pretty JSON
        #[arg(long)]
        canonical: bool,
    },
    /// Split a JSON object into canonical fields and `orig`
    Sift {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Additional key to relocate into `orig` (repeatable)
        #[arg(long = "known")]
        known: Vec<String>,
        /// Emit canonical (RFC 8785) JSON instead of pretty JSON
        #[arg(long)]
        canonical: bool,
    },
    /// Print the canonical field names
    Keys,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Normalize {
            input,
            options,
            locals,
            raw,
            canonical,
        } => normalize::run(input, options, locals, raw, canonical),
        Commands::Sift {
            input,
            known,
            canonical,
        } => sift::run(input, known, canonical),
        Commands::Keys => keys::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
