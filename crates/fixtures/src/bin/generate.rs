//! Fixture generation CLI - emits a graph document and a matching query set.
//!
//! Run with:
//! ```
//! cargo run -p fixtures --bin generate -- --nodes 100 --edges 200 --events 50
//! ```

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use fixtures::generators::{EventGenerator, GraphGenerator};
use fixtures::output::write_document;
use fixtures::schema::QuerySetDocument;

#[derive(Parser)]
#[command(name = "generate")]
#[command(about = "Generate road-network graph and query-set fixtures", long_about = None)]
struct Cli {
    /// Number of graph nodes
    #[arg(long, default_value_t = 100)]
    nodes: usize,

    /// Number of graph edges
    #[arg(long, default_value_t = 200)]
    edges: usize,

    /// Number of query/update events
    #[arg(long, default_value_t = 50)]
    events: usize,

    /// Output path for the graph document
    #[arg(long, alias = "graph_file", default_value = "graph.json")]
    graph_file: PathBuf,

    /// Output path for the query-set document
    #[arg(long, alias = "queries_file", default_value = "queries.json")]
    queries_file: PathBuf,

    /// RNG seed for reproducible fixtures (seeded from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            tracing::info!("Seeding RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        "Generating graph with {} nodes and {} edges",
        cli.nodes,
        cli.edges
    );
    let graph = GraphGenerator::new().generate(cli.nodes, cli.edges, &mut rng)?;

    tracing::info!("Generating {} query/update events", cli.events);
    let events = EventGenerator::new().generate(&graph, cli.events, &mut rng)?;

    write_document(&cli.graph_file, &graph)?;
    write_document(
        &cli.queries_file,
        &QuerySetDocument::new("test_qset_1", events),
    )?;

    tracing::info!("Fixtures written!");
    tracing::info!("  Graph: {}", cli.graph_file.display());
    tracing::info!("  Queries: {}", cli.queries_file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_both_flag_spellings() {
        let cli = Cli::try_parse_from([
            "generate",
            "--graph_file",
            "g.json",
            "--queries_file",
            "q.json",
        ])
        .unwrap();
        assert_eq!(cli.graph_file, PathBuf::from("g.json"));
        assert_eq!(cli.queries_file, PathBuf::from("q.json"));

        let cli = Cli::try_parse_from([
            "generate",
            "--graph-file",
            "g.json",
            "--queries-file",
            "q.json",
        ])
        .unwrap();
        assert_eq!(cli.graph_file, PathBuf::from("g.json"));
        assert_eq!(cli.queries_file, PathBuf::from("q.json"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["generate"]).unwrap();

        assert_eq!(cli.nodes, 100);
        assert_eq!(cli.edges, 200);
        assert_eq!(cli.events, 50);
        assert_eq!(cli.graph_file, PathBuf::from("graph.json"));
        assert_eq!(cli.queries_file, PathBuf::from("queries.json"));
        assert_eq!(cli.seed, None);
    }
}
