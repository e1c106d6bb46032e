//! Test fixture generation for road-network query engines.
//!
//! This crate produces matched fixture pairs: a random road-network graph
//! and a stream of query/update events to replay against it. Both are
//! plain JSON documents; nothing here executes queries or maintains graph
//! state. Graphs are simple (no self-loops, no duplicate node pairs) but
//! connectivity is not guaranteed, and events are not validated against
//! each other, so downstream engines also get exercised on unreachable
//! targets and updates to already-removed edges.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fixtures::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let graph = GraphGenerator::new().generate(100, 200, &mut rng)?;
//! let events = EventGenerator::new().generate(&graph, 50, &mut rng)?;
//!
//! write_document("graph.json", &graph)?;
//! write_document("queries.json", &QuerySetDocument::new("test_qset_1", events))?;
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod output;
pub mod schema;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BoundingBox, Region, POI_VOCABULARY};
    pub use crate::error::GenError;
    pub use crate::generators::{
        generate_events, generate_graph, EventGenConfig, EventGenerator, GraphGenConfig,
        GraphGenerator,
    };
    pub use crate::output::{read_document, write_document, WriteError};
    pub use crate::schema::{
        Constraints, Edge, EdgePatch, Event, EventKind, GraphDocument, GraphMeta, KnnMetric,
        Node, QueryMeta, QueryPoint, QuerySetDocument, RoadType, TravelMode,
        SPEED_PROFILE_BINS,
    };
}
