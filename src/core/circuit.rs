//! Circuit-board background graph.
//!
//! A fixed number of nodes scattered over the viewport, each wired to its
//! nearest neighbours with right-angled traces. Connections are indices into
//! the owning graph, so a node never owns another and a resize simply throws
//! the whole graph away.

use crate::config::CircuitConfig;
use crate::prng::Prng;

/// Outgoing connections per node.
pub const CONNECTIONS_PER_NODE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircuitNode {
    pub pos: Point,
    pub active: bool,
    connections: [Option<usize>; CONNECTIONS_PER_NODE],
}

impl CircuitNode {
    /// Indices of the nodes this one is wired to, nearest first.
    pub fn connections(&self) -> impl Iterator<Item = usize> + '_ {
        self.connections.iter().flatten().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CircuitGraph {
    width: f64,
    height: f64,
    nodes: Vec<CircuitNode>,
}

impl CircuitGraph {
    /// Scatter `cfg.node_count` nodes uniformly over `[0,width) x [0,height)`
    /// and wire each to its nearest neighbours.
    pub fn generate(width: f64, height: f64, cfg: &CircuitConfig, rng: &mut Prng) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);

        let mut nodes: Vec<CircuitNode> = (0..cfg.node_count)
            .map(|_| {
                let x = rng.gen_range_f64(0.0, width);
                let y = rng.gen_range_f64(0.0, height);
                CircuitNode {
                    pos: Point::new(x, y),
                    active: rng.exceeds(cfg.initial_active_threshold),
                    connections: [None; CONNECTIONS_PER_NODE],
                }
            })
            .collect();

        let positions: Vec<Point> = nodes.iter().map(|n| n.pos).collect();
        for (i, node) in nodes.iter_mut().enumerate() {
            node.connections = nearest(&positions, i);
        }

        tracing::debug!(
            nodes = nodes.len(),
            width,
            height,
            "circuit graph regenerated"
        );

        Self {
            width,
            height,
            nodes,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn nodes(&self) -> &[CircuitNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flip each node's active flag independently when `random() > threshold`.
    /// Returns how many nodes flipped.
    pub fn flicker(&mut self, rng: &mut Prng, threshold: f64) -> usize {
        let mut flipped = 0;
        for node in &mut self.nodes {
            if rng.exceeds(threshold) {
                node.active = !node.active;
                flipped += 1;
            }
        }
        flipped
    }

    /// Every directed `(from, to)` connection.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.nodes.iter().flat_map(move |node| {
            node.connections()
                .map(move |j| (node.pos, self.nodes[j].pos))
        })
    }
}

/// Indices of the `CONNECTIONS_PER_NODE` points closest to `positions[of]`,
/// excluding itself. Equal distances keep generation order.
fn nearest(positions: &[Point], of: usize) -> [Option<usize>; CONNECTIONS_PER_NODE] {
    let origin = positions[of];
    let mut others: Vec<(usize, f64)> = positions
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != of)
        .map(|(j, p)| (j, origin.distance(*p)))
        .collect();
    // Stable: ties stay in index order.
    others.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut out = [None; CONNECTIONS_PER_NODE];
    for (slot, (j, _)) in out.iter_mut().zip(others) {
        *slot = Some(j);
    }
    out
}

/// Right-angled trace from `from` to `to`: horizontal to the midpoint column,
/// vertical, then horizontal again.
pub fn trace_path(from: Point, to: Point) -> [Point; 4] {
    let mid_x = (from.x + to.x) / 2.0;
    [
        from,
        Point::new(mid_x, from.y),
        Point::new(mid_x, to.y),
        to,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(seed: u64) -> CircuitGraph {
        CircuitGraph::generate(1280.0, 720.0, &CircuitConfig::default(), &mut Prng::new(seed))
    }

    #[test]
    fn every_node_has_two_nearest_connections() {
        for seed in [1, 7, 42, 2026] {
            let g = graph(seed);
            assert_eq!(g.len(), 60);

            for (i, node) in g.nodes().iter().enumerate() {
                let conns: Vec<usize> = node.connections().collect();
                assert_eq!(conns.len(), CONNECTIONS_PER_NODE);
                assert!(!conns.contains(&i), "node {i} connects to itself");
                assert_ne!(conns[0], conns[1]);

                // Brute force: nothing else is strictly closer than the chosen pair.
                let d = |j: usize| node.pos.distance(g.nodes()[j].pos);
                let worst = d(conns[0]).max(d(conns[1]));
                assert!(d(conns[0]) <= d(conns[1]));
                for j in (0..g.len()).filter(|&j| j != i && !conns.contains(&j)) {
                    assert!(d(j) >= worst, "node {i}: {j} is closer than a chosen link");
                }
            }
        }
    }

    #[test]
    fn positions_stay_inside_the_viewport() {
        let g = graph(3);
        assert_eq!(g.width(), 1280.0);
        assert_eq!(g.height(), 720.0);
        for n in g.nodes() {
            assert!((0.0..1280.0).contains(&n.pos.x));
            assert!((0.0..720.0).contains(&n.pos.y));
        }
    }

    #[test]
    fn ties_keep_generation_order() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        assert_eq!(nearest(&pts, 0), [Some(1), Some(2)]);
    }

    #[test]
    fn connections_are_not_necessarily_symmetric() {
        // Node 3 is far off: it wires to 2 and 1, but nothing wires back to it.
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(100.0, 0.0),
        ];
        assert_eq!(nearest(&pts, 3), [Some(2), Some(1)]);
        assert_eq!(nearest(&pts, 0), [Some(1), Some(2)]);
        assert!(!nearest(&pts, 0).contains(&Some(3)));
    }

    #[test]
    fn tiny_graphs_have_fewer_links() {
        let cfg = CircuitConfig {
            node_count: 2,
            ..CircuitConfig::default()
        };
        let g = CircuitGraph::generate(100.0, 100.0, &cfg, &mut Prng::new(5));
        for (i, n) in g.nodes().iter().enumerate() {
            let conns: Vec<usize> = n.connections().collect();
            assert_eq!(conns, vec![1 - i]);
        }

        let cfg = CircuitConfig {
            node_count: 0,
            ..CircuitConfig::default()
        };
        let g = CircuitGraph::generate(100.0, 100.0, &cfg, &mut Prng::new(5));
        assert!(g.is_empty());
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn edges_cover_every_connection() {
        let g = graph(11);
        assert_eq!(g.edges().count(), 60 * CONNECTIONS_PER_NODE);
        for (from, to) in g.edges() {
            assert_ne!(from, to);
        }
    }

    #[test]
    fn initial_activity_is_roughly_one_in_five() {
        let cfg = CircuitConfig {
            node_count: 1_500,
            ..CircuitConfig::default()
        };
        let g = CircuitGraph::generate(10.0, 10.0, &cfg, &mut Prng::new(9));
        let active = g.nodes().iter().filter(|n| n.active).count();
        assert!((220..380).contains(&active), "active={active}");
    }

    #[test]
    fn flicker_is_rare_and_toggles() {
        let mut g = graph(21);
        let before: Vec<bool> = g.nodes().iter().map(|n| n.active).collect();
        let mut rng = Prng::new(77);

        let flipped = g.flicker(&mut rng, 1.0);
        assert_eq!(flipped, 0);

        let flipped = g.flicker(&mut rng, 0.0);
        assert_eq!(flipped, 60);
        let after: Vec<bool> = g.nodes().iter().map(|n| n.active).collect();
        assert!(before.iter().zip(&after).all(|(a, b)| a != b));

        let total: usize = (0..1_000).map(|_| g.flicker(&mut rng, 0.99)).sum();
        // ~600 expected over 60k draws.
        assert!((400..800).contains(&total), "total={total}");
    }

    #[test]
    fn trace_turns_at_the_horizontal_midpoint() {
        let p = trace_path(Point::new(10.0, 20.0), Point::new(50.0, 80.0));
        assert_eq!(
            p,
            [
                Point::new(10.0, 20.0),
                Point::new(30.0, 20.0),
                Point::new(30.0, 80.0),
                Point::new(50.0, 80.0),
            ]
        );
    }
}
