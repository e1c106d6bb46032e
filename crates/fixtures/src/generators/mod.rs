//! Stochastic generators for fixture documents.
//!
//! - [`GraphGenerator`]: random road-network graphs with uniform topology
//!   and per-edge attributes
//! - [`EventGenerator`]: weighted query/update event streams referencing a
//!   generated graph

pub mod event;
pub mod graph;

pub use event::{EventGenConfig, EventGenerator};
pub use graph::{GraphGenConfig, GraphGenerator};

use rand::Rng;

use crate::error::GenError;
use crate::schema::{Event, GraphDocument};

/// Generates a graph with default configuration.
pub fn generate_graph(
    num_nodes: usize,
    num_edges: usize,
    rng: &mut impl Rng,
) -> Result<GraphDocument, GenError> {
    GraphGenerator::new().generate(num_nodes, num_edges, rng)
}

/// Generates an event stream with default configuration.
pub fn generate_events(
    graph: &GraphDocument,
    num_events: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Event>, GenError> {
    EventGenerator::new().generate(graph, num_events, rng)
}

/// Rounds to 2 decimals, the precision of lengths, times and speeds.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 6 decimals, the precision of jittered coordinates.
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round2(123.456789), 123.46);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round6(19.1234567), 19.123457);
        assert_eq!(round6(-0.0049999), -0.005);

        // Values just under a range end round onto it.
        assert_eq!(round2(59.996), 60.0);
        assert_eq!(round2(499.997), 500.0);
    }
}
