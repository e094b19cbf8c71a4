//! dlx - DL expressivity checker CLI
//!
//! Classifies an ontology behind a SPARQL endpoint or in a local RDF file
//! and prints the minimal covering languages plus the DL name.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use dlx_core::{
    CheckerOptions, ExpressivityChecker, ExpressivityResult, MemoryGraphSource,
    SparqlEndpointSource,
};

#[derive(Parser)]
#[command(name = "dlx")]
#[command(version = "0.2.1")]
#[command(about = "Detects the DL expressivity of an ontology", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an ontology behind a SPARQL query endpoint
    Endpoint {
        /// Endpoint URL (e.g. http://localhost:3030/ds/sparql)
        endpoint: String,
        /// Restrict queries to a named graph of the endpoint's dataset
        #[arg(long, short = 'g')]
        graph: Option<String>,
        /// Per-query timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
        /// Maximum concurrent construct checks against the endpoint
        #[arg(long, default_value_t = 4)]
        max_concurrent: usize,
    },
    /// Classify a local RDF file (Turtle, N-Triples or RDF/XML)
    File {
        /// Path to the ontology document
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Endpoint {
            endpoint,
            graph,
            timeout_secs,
            max_concurrent,
        } => {
            let source = SparqlEndpointSource::with_timeout(
                &endpoint,
                graph,
                Duration::from_secs(timeout_secs),
            )?;
            ExpressivityChecker::new(source)
                .with_options(CheckerOptions { max_concurrent })
                .classify()
                .await
                .with_context(|| format!("classification against {} failed", endpoint))?
        }
        Commands::File { path } => {
            let source = MemoryGraphSource::from_file(&path)
                .with_context(|| format!("cannot load {}", path.display()))?;
            ExpressivityChecker::new(source)
                .classify()
                .await
                .with_context(|| format!("classification of {} failed", path.display()))?
        }
    };

    print_result(&result);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "dlx_core=debug,dlx=debug" } else { "dlx_core=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_result(result: &ExpressivityResult) {
    let languages: Vec<&str> = result
        .expressible_in_languages()
        .iter()
        .map(|l| l.name())
        .collect();
    println!("{} {}", "expressivity:".bold(), languages.join(", ").cyan());

    let name = result.description_logic_name();
    if name.is_empty() {
        println!("{} {}", "DL name:".bold(), "(no constructs detected)".dimmed());
    } else {
        println!("{} {}", "DL name:".bold(), name.green());
    }
}
