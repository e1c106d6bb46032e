//! Weighted query/update event generation.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{round2, round6};
use crate::config::POI_VOCABULARY;
use crate::error::GenError;
use crate::schema::{
    Constraints, EdgePatch, Event, EventKind, GraphDocument, KnnMetric, Node, QueryPoint,
    RoadType, TravelMode, SPEED_PROFILE_BINS,
};

/// Configuration for event generation.
#[derive(Debug, Clone)]
pub struct EventGenConfig {
    /// Relative weights for `[shortest_path, knn, modify_edge, remove_edge]`.
    pub kind_weights: [u32; 4],
    /// Probability that a shortest-path query attempts constraints at all.
    pub constraint_probability: f64,
    /// Probability of a `forbidden_nodes` set, given the attempt. Only
    /// fires on graphs with more than 5 nodes.
    pub forbidden_nodes_probability: f64,
    /// Probability of a `forbidden_road_types` set, given the attempt.
    pub forbidden_road_types_probability: f64,
    /// Probability that a modify_edge event carries a patch.
    pub patch_probability: f64,
    /// Inclusive range for kNN `k`.
    pub k_range: (u32, u32),
    /// Half-width in degrees of the jitter applied to kNN query points.
    pub coordinate_jitter: f64,
    /// Length range for patch values, in meters.
    pub patch_length_range: (f64, f64),
    /// Speed range for patch profile values, in km/h.
    pub patch_speed_range: (f64, f64),
}

impl Default for EventGenConfig {
    fn default() -> Self {
        Self {
            kind_weights: [40, 30, 20, 10],
            constraint_probability: 0.6,
            forbidden_nodes_probability: 0.5,
            forbidden_road_types_probability: 0.5,
            patch_probability: 0.8,
            k_range: (3, 10),
            coordinate_jitter: 0.005,
            patch_length_range: (50.0, 500.0),
            patch_speed_range: (20.0, 60.0),
        }
    }
}

/// Id pools drawn from once, up front.
///
/// `pois` is the multiset of tags across all nodes, so category popularity
/// in the graph carries through to query frequency.
struct Pools<'a> {
    nodes: &'a [Node],
    edge_ids: Vec<u64>,
    pois: Vec<&'a str>,
}

impl<'a> Pools<'a> {
    fn from_graph(graph: &'a GraphDocument) -> Self {
        Self {
            nodes: &graph.nodes,
            edge_ids: graph.edges.iter().map(|e| e.id).collect(),
            pois: graph
                .nodes
                .iter()
                .flat_map(|n| n.pois.iter().map(String::as_str))
                .collect(),
        }
    }
}

/// Generates query/update event streams against a generated graph.
///
/// Events reference graph entities by id only and are never validated
/// against each other: a later query may name an edge an earlier event
/// removed. Exercising that is part of the fixture's job.
pub struct EventGenerator {
    config: EventGenConfig,
}

impl EventGenerator {
    /// Creates a new event generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: EventGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EventGenConfig) -> Self {
        Self { config }
    }

    /// Generates `num_events` events with ids `1..=num_events`.
    ///
    /// Fails up front if a kind with positive weight would draw from a pool
    /// the graph does not have; kinds weighted zero put no demands on the
    /// graph. Requesting zero events always succeeds.
    pub fn generate(
        &self,
        graph: &GraphDocument,
        num_events: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Event>, GenError> {
        if num_events == 0 {
            return Ok(Vec::new());
        }

        let [w_path, w_knn, w_modify, w_remove] = self.config.kind_weights;
        if graph.nodes.is_empty() && (w_path > 0 || w_knn > 0) {
            return Err(GenError::EmptyGraph("nodes"));
        }
        if graph.edges.is_empty() && (w_modify > 0 || w_remove > 0) {
            return Err(GenError::EmptyGraph("edges"));
        }

        let kind_index = WeightedIndex::new(self.config.kind_weights)
            .map_err(|e| GenError::InvalidParameter(format!("kind_weights: {e}")))?;

        let pools = Pools::from_graph(graph);

        let events = (0..num_events)
            .map(|i| {
                let kind = match kind_index.sample(rng) {
                    0 => self.shortest_path(&pools, rng),
                    1 => self.knn(&pools, rng),
                    2 => self.modify_edge(&pools, rng),
                    _ => self.remove_edge(&pools, rng),
                };
                Event {
                    id: (i + 1) as u64,
                    kind,
                }
            })
            .collect();

        Ok(events)
    }

    fn shortest_path(&self, pools: &Pools, rng: &mut impl Rng) -> EventKind {
        // Source and target are drawn independently and may coincide.
        let source = pools.nodes[rng.gen_range(0..pools.nodes.len())].id;
        let target = pools.nodes[rng.gen_range(0..pools.nodes.len())].id;
        let mode = if rng.r#gen::<bool>() {
            TravelMode::Distance
        } else {
            TravelMode::Time
        };

        let constraints = if rng.r#gen::<f64>() < self.config.constraint_probability {
            self.sample_constraints(pools, rng)
        } else {
            None
        };

        EventKind::ShortestPath {
            source,
            target,
            mode,
            constraints,
        }
    }

    /// Draws the optional forbidden sets. Both coins are flipped on every
    /// attempt; when neither lands the query carries no `constraints` key
    /// at all.
    fn sample_constraints(&self, pools: &Pools, rng: &mut impl Rng) -> Option<Constraints> {
        let num_nodes = pools.nodes.len();

        let forbidden_nodes = if rng.r#gen::<f64>() < self.config.forbidden_nodes_probability
            && num_nodes > 5
        {
            let count = rng.gen_range(1..=(num_nodes / 5).min(5));
            let ids = pools
                .nodes
                .choose_multiple(rng, count)
                .map(|n| n.id)
                .collect();
            Some(ids)
        } else {
            None
        };

        let forbidden_road_types =
            if rng.r#gen::<f64>() < self.config.forbidden_road_types_probability {
                let count = rng.gen_range(1..=2);
                let types = RoadType::ALL.choose_multiple(rng, count).copied().collect();
                Some(types)
            } else {
                None
            };

        if forbidden_nodes.is_none() && forbidden_road_types.is_none() {
            return None;
        }

        Some(Constraints {
            forbidden_nodes,
            forbidden_road_types,
        })
    }

    fn knn(&self, pools: &Pools, rng: &mut impl Rng) -> EventKind {
        let (k_lo, k_hi) = self.config.k_range;
        let k = rng.gen_range(k_lo..=k_hi);

        // Graphs can come out POI-free; fall back to the vocabulary so the
        // query still names a real category.
        let poi = match pools.pois.choose(rng) {
            Some(p) => p.to_string(),
            None => POI_VOCABULARY[rng.gen_range(0..POI_VOCABULARY.len())].to_string(),
        };

        let anchor = &pools.nodes[rng.gen_range(0..pools.nodes.len())];
        let jitter = self.config.coordinate_jitter;
        let query_point = QueryPoint {
            lat: round6(anchor.lat + rng.gen_range(-jitter..=jitter)),
            lon: round6(anchor.lon + rng.gen_range(-jitter..=jitter)),
        };

        EventKind::Knn {
            k,
            poi,
            query_point,
            metric: KnnMetric::ShortestPath,
        }
    }

    fn modify_edge(&self, pools: &Pools, rng: &mut impl Rng) -> EventKind {
        let edge_id = pools.edge_ids[rng.gen_range(0..pools.edge_ids.len())];
        let patch = if rng.r#gen::<f64>() < self.config.patch_probability {
            Some(self.sample_patch(rng))
        } else {
            None
        };

        EventKind::ModifyEdge { edge_id, patch }
    }

    fn sample_patch(&self, rng: &mut impl Rng) -> EdgePatch {
        let (len_lo, len_hi) = self.config.patch_length_range;
        let (speed_lo, speed_hi) = self.config.patch_speed_range;

        match rng.gen_range(0..3) {
            0 => EdgePatch::Length(round2(rng.gen_range(len_lo..len_hi))),
            1 => EdgePatch::SpeedProfile(
                (0..SPEED_PROFILE_BINS)
                    .map(|_| round2(rng.gen_range(speed_lo..speed_hi)))
                    .collect(),
            ),
            _ => EdgePatch::RoadType(RoadType::ALL[rng.gen_range(0..RoadType::ALL.len())]),
        }
    }

    fn remove_edge(&self, pools: &Pools, rng: &mut impl Rng) -> EventKind {
        EventKind::RemoveEdge {
            edge_id: pools.edge_ids[rng.gen_range(0..pools.edge_ids.len())],
        }
    }
}

impl Default for EventGenerator {
    fn default() -> Self {
        Self::new()
    }
}
