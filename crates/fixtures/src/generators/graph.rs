//! Random road-network graph generation.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::round2;
use crate::config::{BoundingBox, Region, POI_VOCABULARY};
use crate::error::GenError;
use crate::schema::{Edge, GraphDocument, GraphMeta, Node, RoadType, SPEED_PROFILE_BINS};

/// Configuration for graph generation.
#[derive(Debug, Clone)]
pub struct GraphGenConfig {
    /// Region nodes are scattered over, uniformly.
    pub bounds: BoundingBox,
    /// Upper bound (inclusive) on POI tags per node.
    pub max_pois_per_node: usize,
    /// Edge length range in meters.
    pub length_range: (f64, f64),
    /// Divisor range applied to edge length to derive `average_time`,
    /// effectively a free-flow speed in m/s.
    pub time_divisor_range: (f64, f64),
    /// Speed profile value range in km/h.
    pub speed_range: (f64, f64),
    /// Id assigned to the first edge; later edges number consecutively.
    pub first_edge_id: u64,
    /// `meta.id` of the emitted document.
    pub document_id: String,
    /// `meta.description` of the emitted document.
    pub description: String,
}

impl Default for GraphGenConfig {
    fn default() -> Self {
        Self {
            bounds: Region::MUMBAI,
            max_pois_per_node: 2,
            length_range: (50.0, 500.0),
            time_divisor_range: (5.0, 25.0),
            speed_range: (20.0, 60.0),
            first_edge_id: 1000,
            document_id: "autogen_graph".to_string(),
            description: "Auto-generated".to_string(),
        }
    }
}

/// Generates random road-network graphs.
///
/// Topology is unconstrained beyond simplicity: no self-loops and no second
/// edge between the same node pair, in either orientation. Connectivity is
/// not guaranteed and not checked.
pub struct GraphGenerator {
    config: GraphGenConfig,
}

impl GraphGenerator {
    /// Creates a new graph generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: GraphGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: GraphGenConfig) -> Self {
        Self { config }
    }

    /// Generates a graph with `num_nodes` nodes and `num_edges` edges.
    ///
    /// Node ids are dense `0..num_nodes`; edge ids run consecutively from
    /// the configured first id, in creation order. Fails before doing any
    /// work if `num_nodes < 2` or `num_edges` exceeds the number of
    /// distinct unordered node pairs.
    pub fn generate(
        &self,
        num_nodes: usize,
        num_edges: usize,
        rng: &mut impl Rng,
    ) -> Result<GraphDocument, GenError> {
        self.validate(num_nodes, num_edges)?;

        let nodes = self.generate_nodes(num_nodes, rng);
        let edges = self.generate_edges(num_nodes, num_edges, rng)?;

        Ok(GraphDocument {
            meta: GraphMeta {
                id: self.config.document_id.clone(),
                nodes: num_nodes,
                description: self.config.description.clone(),
            },
            nodes,
            edges,
        })
    }

    fn validate(&self, num_nodes: usize, num_edges: usize) -> Result<(), GenError> {
        if num_nodes < 2 {
            return Err(GenError::InvalidParameter(format!(
                "num_nodes must be at least 2, got {num_nodes}"
            )));
        }

        // Widen before multiplying: usize pair counts overflow near 2^32 nodes.
        let max_edges = (num_nodes as u128) * (num_nodes as u128 - 1) / 2;
        if num_edges as u128 > max_edges {
            return Err(GenError::InvalidParameter(format!(
                "num_edges {num_edges} exceeds the {max_edges} distinct pairs of a {num_nodes}-node simple graph"
            )));
        }

        Ok(())
    }

    fn generate_nodes(&self, num_nodes: usize, rng: &mut impl Rng) -> Vec<Node> {
        (0..num_nodes)
            .map(|id| {
                let (lat, lon) = self.config.bounds.random_point(rng);
                let poi_count = rng.gen_range(0..=self.config.max_pois_per_node);
                let pois = POI_VOCABULARY
                    .choose_multiple(rng, poi_count)
                    .map(|p| p.to_string())
                    .collect();

                Node {
                    id: id as u64,
                    lat,
                    lon,
                    pois,
                }
            })
            .collect()
    }

    /// Draws `num_edges` distinct unordered node pairs by rejection sampling.
    ///
    /// Validation makes the target reachable; the attempt budget turns any
    /// remaining pathological case into an error instead of a spin.
    fn generate_edges(
        &self,
        num_nodes: usize,
        num_edges: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Edge>, GenError> {
        let budget = num_edges.saturating_mul(100).max(10_000);
        let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(num_edges);
        let mut edges = Vec::with_capacity(num_edges);
        let mut attempts = 0;

        while edges.len() < num_edges {
            if attempts == budget {
                return Err(GenError::SamplingExhausted { attempts });
            }
            attempts += 1;

            let u = rng.gen_range(0..num_nodes) as u64;
            let v = rng.gen_range(0..num_nodes) as u64;
            if u == v {
                continue;
            }
            if !seen.insert((u.min(v), u.max(v))) {
                continue;
            }

            let id = self.config.first_edge_id + edges.len() as u64;
            edges.push(self.generate_edge(id, u, v, rng));
        }

        Ok(edges)
    }

    fn generate_edge(&self, id: u64, u: u64, v: u64, rng: &mut impl Rng) -> Edge {
        let (len_lo, len_hi) = self.config.length_range;
        let (div_lo, div_hi) = self.config.time_divisor_range;
        let (speed_lo, speed_hi) = self.config.speed_range;

        let length = round2(rng.gen_range(len_lo..len_hi));
        // The rounded length is what the document carries, so the traversal
        // time derives from it, not from the raw draw.
        let average_time = round2(length / rng.gen_range(div_lo..div_hi));
        let speed_profile = (0..SPEED_PROFILE_BINS)
            .map(|_| round2(rng.gen_range(speed_lo..speed_hi)))
            .collect();

        Edge {
            id,
            u,
            v,
            length,
            average_time,
            speed_profile,
            oneway: rng.r#gen::<bool>(),
            road_type: RoadType::ALL[rng.gen_range(0..RoadType::ALL.len())],
        }
    }
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_basic() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        let graph = graph_gen.generate(10, 15, &mut rng).unwrap();

        assert_eq!(graph.meta.id, "autogen_graph");
        assert_eq!(graph.meta.nodes, 10);
        assert_eq!(graph.meta.description, "Auto-generated");
        assert_eq!(graph.nodes.len(), 10);
        assert_eq!(graph.edges.len(), 15);

        // Dense ids in emission order.
        for (i, node) in graph.nodes.iter().enumerate() {
            assert_eq!(node.id, i as u64);
        }
        for (i, edge) in graph.edges.iter().enumerate() {
            assert_eq!(edge.id, 1000 + i as u64);
        }
    }

    #[test]
    fn test_small_graph_topology() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        let graph = graph_gen.generate(5, 4, &mut rng).unwrap();

        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.edges.len(), 4);

        let mut pairs = HashSet::new();
        for (i, edge) in graph.edges.iter().enumerate() {
            assert_eq!(edge.id, 1000 + i as u64);
            assert_ne!(edge.u, edge.v, "self-loop at edge {}", edge.id);
            assert!(edge.u < 5 && edge.v < 5);
            assert!(
                pairs.insert((edge.u.min(edge.v), edge.u.max(edge.v))),
                "duplicate pair ({}, {})",
                edge.u,
                edge.v
            );
        }
    }

    #[test]
    fn test_rejects_too_few_nodes() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            graph_gen.generate(0, 0, &mut rng),
            Err(GenError::InvalidParameter(_))
        ));
        assert!(matches!(
            graph_gen.generate(1, 0, &mut rng),
            Err(GenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_infeasible_edge_count() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        // 5 nodes allow at most 10 distinct pairs; 11 must fail fast.
        assert!(matches!(
            graph_gen.generate(5, 11, &mut rng),
            Err(GenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_complete_graph_terminates() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(99);

        // Exactly the pair ceiling: every unordered pair must be found.
        let graph = graph_gen.generate(5, 10, &mut rng).unwrap();
        assert_eq!(graph.edges.len(), 10);

        let pairs: HashSet<(u64, u64)> = graph
            .edges
            .iter()
            .map(|e| (e.u.min(e.v), e.u.max(e.v)))
            .collect();
        assert_eq!(pairs.len(), 10);
    }

    #[test]
    fn test_edge_attributes_within_ranges() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);

        let graph = graph_gen.generate(30, 100, &mut rng).unwrap();

        for edge in &graph.edges {
            // Draws stay below the range end, but round2 can land the stored
            // value exactly on it.
            assert!(edge.length >= 50.0 && edge.length <= 500.0);
            assert_eq!(edge.speed_profile.len(), SPEED_PROFILE_BINS);
            for speed in &edge.speed_profile {
                assert!(*speed >= 20.0 && *speed <= 60.0);
            }
            // length / divisor, divisor drawn from [5, 25), with rounding slack.
            assert!(edge.average_time > edge.length / 25.0 - 0.01);
            assert!(edge.average_time < edge.length / 5.0 + 0.01);
        }
    }

    #[test]
    fn test_rounded_speeds_can_land_on_the_bound() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);

        let graph = graph_gen.generate(30, 100, &mut rng).unwrap();

        let bins: Vec<f64> = graph
            .edges
            .iter()
            .flat_map(|e| e.speed_profile.iter().copied())
            .collect();
        // This seed rounds at least one bin up to exactly 60.0.
        assert!(bins.iter().any(|s| *s == 60.0));
        assert!(bins.iter().all(|s| *s >= 20.0 && *s <= 60.0));
    }

    #[test]
    fn test_attributes_rounded_to_two_decimals() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(8);

        let graph = graph_gen.generate(10, 20, &mut rng).unwrap();

        let is_round2 = |v: f64| ((v * 100.0).round() - v * 100.0).abs() < 1e-6;
        for edge in &graph.edges {
            assert!(is_round2(edge.length), "length {}", edge.length);
            assert!(is_round2(edge.average_time), "average_time {}", edge.average_time);
            assert!(edge.speed_profile.iter().copied().all(is_round2));
        }
    }

    #[test]
    fn test_nodes_within_bounds_with_valid_pois() {
        let graph_gen = GraphGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let graph = graph_gen.generate(50, 0, &mut rng).unwrap();

        let bounds = Region::MUMBAI;
        for node in &graph.nodes {
            assert!(node.lat >= bounds.min_lat && node.lat < bounds.max_lat);
            assert!(node.lon >= bounds.min_lon && node.lon < bounds.max_lon);
            assert!(node.pois.len() <= 2);

            let mut distinct = HashSet::new();
            for poi in &node.pois {
                assert!(POI_VOCABULARY.contains(&poi.as_str()), "unknown poi {poi}");
                assert!(distinct.insert(poi), "repeated poi {poi}");
            }
        }
    }

    #[test]
    fn test_custom_region_and_edge_base() {
        let config = GraphGenConfig {
            bounds: Region::PUNE,
            first_edge_id: 5000,
            ..GraphGenConfig::default()
        };
        let graph_gen = GraphGenerator::with_config(config);
        let mut rng = StdRng::seed_from_u64(11);

        let graph = graph_gen.generate(20, 30, &mut rng).unwrap();

        let bounds = Region::PUNE;
        for node in &graph.nodes {
            assert!(node.lat >= bounds.min_lat && node.lat < bounds.max_lat);
            assert!(node.lon >= bounds.min_lon && node.lon < bounds.max_lon);
        }
        assert_eq!(graph.edges[0].id, 5000);
        assert_eq!(graph.edges.last().unwrap().id, 5029);
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let graph_gen = GraphGenerator::new();

        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);

        let graph_a = graph_gen.generate(25, 40, &mut rng_a).unwrap();
        let graph_b = graph_gen.generate(25, 40, &mut rng_b).unwrap();

        assert_eq!(graph_a, graph_b);
    }
}
