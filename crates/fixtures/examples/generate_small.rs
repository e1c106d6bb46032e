//! Example: Generate a small fixture pair and write it to disk.
//!
//! Produces a 20-node graph and a 50-event query set, the kind of fixture
//! that is small enough to read by eye when debugging an engine.
//!
//! Run with:
//! ```
//! cargo run --example generate_small
//! ```

use fixtures::generators::{EventGenerator, GraphGenerator};
use fixtures::output::write_document;
use fixtures::schema::QuerySetDocument;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fixed seed so repeated runs produce identical files
    let mut rng = StdRng::seed_from_u64(12345);

    let graph = GraphGenerator::new().generate(20, 35, &mut rng)?;
    let events = EventGenerator::new().generate(&graph, 50, &mut rng)?;

    write_document("small_graph.json", &graph)?;
    write_document(
        "small_queries.json",
        &QuerySetDocument::new("small_qset", events),
    )?;

    tracing::info!("Fixture pair written!");
    tracing::info!("  Nodes: {}", graph.nodes.len());
    tracing::info!("  Edges: {}", graph.edges.len());

    let tagged = graph.nodes.iter().filter(|n| !n.pois.is_empty()).count();
    tracing::info!("  Nodes with POIs: {}", tagged);

    tracing::info!("  Graph: small_graph.json");
    tracing::info!("  Queries: small_queries.json");

    Ok(())
}
