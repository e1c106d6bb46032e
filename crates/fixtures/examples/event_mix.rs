//! Example: Inspect the event-kind mix over a large in-memory run.
//!
//! Generates 2000 events against a Pune-region graph and logs how the
//! weighted kinds and optional fields actually came out.
//!
//! Run with:
//! ```
//! cargo run --example event_mix
//! ```

use std::collections::BTreeMap;

use fixtures::config::Region;
use fixtures::generators::{EventGenerator, GraphGenConfig, GraphGenerator};
use fixtures::schema::EventKind;
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

    let mut rng = StdRng::seed_from_u64(2024);

    let config = GraphGenConfig {
        bounds: Region::PUNE,
        ..GraphGenConfig::default()
    };
    let graph = GraphGenerator::with_config(config).generate(100, 250, &mut rng)?;
    let events = EventGenerator::new().generate(&graph, 2000, &mut rng)?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut constrained = 0usize;
    let mut patchless = 0usize;

    for event in &events {
        *counts.entry(event.kind.name()).or_default() += 1;
        match &event.kind {
            EventKind::ShortestPath {
                constraints: Some(_),
                ..
            } => constrained += 1,
            EventKind::ModifyEdge { patch: None, .. } => patchless += 1,
            _ => {}
        }
    }

    tracing::info!("Event mix over {} events:", events.len());
    for (kind, count) in &counts {
        tracing::info!(
            "  {:<14} {:>5}  ({:.1}%)",
            kind,
            count,
            *count as f64 / events.len() as f64 * 100.0
        );
    }

    tracing::info!("Constrained shortest-path queries: {}", constrained);
    tracing::info!("Patchless modify_edge events: {}", patchless);

    Ok(())
}
