//! Document schema for the generated fixtures.
//!
//! Two JSON documents make up a fixture pair: a road-network graph and a
//! query set replayed against it. Field declaration order matters: serde
//! emits struct fields in declaration order, and the downstream harness
//! diffs fixtures textually, so the order here is the wire contract.

use serde::{Deserialize, Serialize};

/// Number of bins in an edge speed profile: one per 15-minute slot of a day.
pub const SPEED_PROFILE_BINS: usize = 96;

/// A road-network vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: u64,
    pub lat: f64,
    pub lon: f64,
    /// Point-of-interest categories present at this node (0-2 entries).
    pub pois: Vec<String>,
}

/// A road segment between two nodes.
///
/// `u` and `v` keep the order they were drawn in; for `oneway` edges that
/// order is the direction of travel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: u64,
    pub u: u64,
    pub v: u64,
    /// Length in meters, rounded to 2 decimals.
    pub length: f64,
    /// Free-flow traversal time in seconds, rounded to 2 decimals.
    pub average_time: f64,
    /// Speed in km/h per 15-minute slot, exactly [`SPEED_PROFILE_BINS`] entries.
    pub speed_profile: Vec<f64>,
    pub oneway: bool,
    pub road_type: RoadType,
}

/// Road classification attached to every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadType {
    Primary,
    Secondary,
    Tertiary,
    Local,
    Expressway,
}

impl RoadType {
    pub const ALL: [RoadType; 5] = [
        RoadType::Primary,
        RoadType::Secondary,
        RoadType::Tertiary,
        RoadType::Local,
        RoadType::Expressway,
    ];
}

/// The graph document: metadata plus flat node and edge arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub meta: GraphMeta,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMeta {
    pub id: String,
    /// Node count, duplicated into the header for quick inspection.
    pub nodes: usize,
    pub description: String,
}

/// The query-set document: metadata plus an ordered event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySetDocument {
    pub meta: QueryMeta,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMeta {
    pub id: String,
}

impl QuerySetDocument {
    pub fn new(id: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            meta: QueryMeta { id: id.into() },
            events,
        }
    }
}

/// One replayable event: a query against the graph or an update to it.
///
/// `id` is flattened ahead of the `type` tag so the serialized object reads
/// `{"id": ..., "type": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Point-to-point route query. `source == target` is legal; the engine
    /// under test decides what a degenerate route means.
    ShortestPath {
        source: u64,
        target: u64,
        mode: TravelMode,
        #[serde(skip_serializing_if = "Option::is_none")]
        constraints: Option<Constraints>,
    },
    /// k-nearest-neighbours query for a POI category.
    Knn {
        k: u32,
        poi: String,
        query_point: QueryPoint,
        metric: KnnMetric,
    },
    /// In-place edge attribute update. `patch: None` (key omitted) is a
    /// deliberate schema case: a no-op update the engine must tolerate.
    ModifyEdge {
        edge_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        patch: Option<EdgePatch>,
    },
    /// Edge deletion. Ids are not tracked across events, so later events
    /// may reference an edge removed here.
    RemoveEdge { edge_id: u64 },
}

impl EventKind {
    /// The wire name of this kind, as it appears in the `type` field.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::ShortestPath { .. } => "shortest_path",
            EventKind::Knn { .. } => "knn",
            EventKind::ModifyEdge { .. } => "modify_edge",
            EventKind::RemoveEdge { .. } => "remove_edge",
        }
    }
}

/// Cost function for shortest-path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Distance,
    Time,
}

/// Distance metric for kNN queries. Only network distance exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnnMetric {
    ShortestPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Optional restrictions on a shortest-path query.
///
/// Constructed only when at least one field is populated; a query without
/// restrictions omits the `constraints` key entirely rather than carrying
/// an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_nodes: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_road_types: Option<Vec<RoadType>>,
}

/// A single-attribute edge update.
///
/// Serialized as a one-key object (`{"length": 312.5}`), so "exactly one
/// field per patch" holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePatch {
    Length(f64),
    /// Whole-profile replacement: always all [`SPEED_PROFILE_BINS`] values.
    SpeedProfile(Vec<f64>),
    RoadType(RoadType),
}
