/// Example: classify a local ontology document
///
/// Loads an RDF file into the in-memory source, runs the checker and prints
/// every view the result offers.
///
/// Usage:
///   cargo run --example classify_file path/to/ontology.ttl

use std::env;
use std::path::PathBuf;

use dlx_core::{by_name, ExpressivityChecker, MemoryGraphSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example classify_file <ONTOLOGY_FILE>");
        std::process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let source = MemoryGraphSource::from_file(&path)?;
    let result = ExpressivityChecker::new(source).classify().await?;

    println!("constructs:");
    for construct in result.constructs().iter() {
        println!("  - {:?} ({})", construct, construct.token());
    }

    println!("DL name: {}", result.description_logic_name());

    println!("minimal covering languages:");
    for language in result.expressible_in_languages() {
        println!("  - {}", language);
    }

    if let Some(sroiq_d) = by_name("SROIQ(D)") {
        println!("within SROIQ(D): {}", result.is_within(sroiq_d));
    }

    Ok(())
}
