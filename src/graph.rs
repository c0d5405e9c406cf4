// src/graph.rs
//
// Force-directed layout for the co-occurrence network.
//
// Velocity Verlet with many-body repulsion, spring links and centering,
// cooled by an alpha that decays towards zero. Initial placement is a
// phyllotaxis spiral, so the same network always lays out the same way.

use std::collections::HashMap;
use std::f32::consts::PI;

use crate::api::types::Network;

const CHARGE: f32 = 30.0;
const DISTANCE_MIN2: f32 = 1.0;
const LINK_DISTANCE: f32 = 30.0;
const VELOCITY_DECAY: f32 = 0.4;
const ALPHA_MIN: f32 = 0.001;
const INITIAL_RADIUS: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub pos: [f32; 2],
    vel: [f32; 2],
    pub degree: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForceGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    alpha: f32,
    alpha_decay: f32,
}

impl Default for ForceGraph {
    fn default() -> Self {
        Self::from_network(&Network::default())
    }
}

impl ForceGraph {
    /// Build from the service payload. Duplicate node ids collapse; edges to
    /// unknown nodes and self-loops are dropped.
    pub fn from_network(net: &Network) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut nodes: Vec<GraphNode> = Vec::with_capacity(net.nodes.len());

        for n in &net.nodes {
            if index.contains_key(n.id.as_str()) {
                continue;
            }
            let i = nodes.len();
            index.insert(n.id.as_str(), i);
            nodes.push(GraphNode { id: n.id.clone(), pos: spiral(i), vel: [0.0, 0.0], degree: 0 });
        }

        let mut links = Vec::with_capacity(net.edges.len());
        let mut dropped = 0usize;
        for e in &net.edges {
            match (index.get(e.source.as_str()), index.get(e.target.as_str())) {
                (Some(&s), Some(&t)) if s != t => {
                    nodes[s].degree += 1;
                    nodes[t].degree += 1;
                    links.push(GraphLink { source: s, target: t, weight: e.weight });
                }
                _ => dropped += 1,
            }
        }
        if dropped > 0 {
            logd!("Graph: dropped {} edge(s) with unknown or identical endpoints", dropped);
        }

        Self {
            nodes,
            links,
            alpha: 1.0,
            // ~300 ticks from 1.0 to ALPHA_MIN
            alpha_decay: 1.0 - ALPHA_MIN.powf(1.0 / 300.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_settled(&self) -> bool {
        self.alpha < ALPHA_MIN
    }

    /// Restart the simulation from the current positions.
    pub fn reheat(&mut self) {
        self.alpha = 1.0;
    }

    /// Advance up to `ticks` steps. Returns true while still moving.
    pub fn step_n(&mut self, ticks: usize) -> bool {
        for _ in 0..ticks {
            if !self.step() {
                return false;
            }
        }
        !self.is_settled()
    }

    /// One simulation tick. Returns false once cooled.
    pub fn step(&mut self) -> bool {
        if self.is_settled() || self.nodes.is_empty() {
            return false;
        }
        self.alpha += (0.0 - self.alpha) * self.alpha_decay;
        let alpha = self.alpha;

        self.apply_links(alpha);
        self.apply_charge(alpha);

        for n in &mut self.nodes {
            n.vel[0] *= 1.0 - VELOCITY_DECAY;
            n.vel[1] *= 1.0 - VELOCITY_DECAY;
            n.pos[0] += n.vel[0];
            n.pos[1] += n.vel[1];
        }
        self.center();
        true
    }

    fn apply_links(&mut self, alpha: f32) {
        for link in &self.links {
            let (s, t) = (link.source, link.target);
            let ds = self.nodes[s].degree.max(1) as f32;
            let dt = self.nodes[t].degree.max(1) as f32;
            let strength = 1.0 / ds.min(dt);
            let bias = ds / (ds + dt);

            let src = &self.nodes[s];
            let tgt = &self.nodes[t];
            let mut dx = tgt.pos[0] + tgt.vel[0] - src.pos[0] - src.vel[0];
            let mut dy = tgt.pos[1] + tgt.vel[1] - src.pos[1] - src.vel[1];
            if dx == 0.0 && dy == 0.0 {
                (dx, dy) = jiggle(s, t);
            }
            let l = (dx * dx + dy * dy).sqrt();
            let k = (l - LINK_DISTANCE) / l * alpha * strength;
            dx *= k;
            dy *= k;

            self.nodes[t].vel[0] -= dx * bias;
            self.nodes[t].vel[1] -= dy * bias;
            self.nodes[s].vel[0] += dx * (1.0 - bias);
            self.nodes[s].vel[1] += dy * (1.0 - bias);
        }
    }

    fn apply_charge(&mut self, alpha: f32) {
        let n = self.nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let mut dx = self.nodes[i].pos[0] - self.nodes[j].pos[0];
                let mut dy = self.nodes[i].pos[1] - self.nodes[j].pos[1];
                if dx == 0.0 && dy == 0.0 {
                    (dx, dy) = jiggle(i, j);
                }
                let l2 = (dx * dx + dy * dy).max(DISTANCE_MIN2);
                let f = CHARGE * alpha / l2;
                self.nodes[i].vel[0] += dx * f;
                self.nodes[i].vel[1] += dy * f;
                self.nodes[j].vel[0] -= dx * f;
                self.nodes[j].vel[1] -= dy * f;
            }
        }
    }

    fn center(&mut self) {
        let n = self.nodes.len() as f32;
        let (sx, sy) = self
            .nodes
            .iter()
            .fold((0.0, 0.0), |(x, y), node| (x + node.pos[0], y + node.pos[1]));
        let (cx, cy) = (sx / n, sy / n);
        for node in &mut self.nodes {
            node.pos[0] -= cx;
            node.pos[1] -= cy;
        }
    }

    /// Axis-aligned bounds of all node positions: (min, max).
    pub fn bounds(&self) -> Option<([f32; 2], [f32; 2])> {
        let first = self.nodes.first()?.pos;
        let mut min = first;
        let mut max = first;
        for n in &self.nodes[1..] {
            min[0] = min[0].min(n.pos[0]);
            min[1] = min[1].min(n.pos[1]);
            max[0] = max[0].max(n.pos[0]);
            max[1] = max[1].max(n.pos[1]);
        }
        Some((min, max))
    }
}

fn spiral(i: usize) -> [f32; 2] {
    let angle = i as f32 * PI * (3.0 - 5f32.sqrt());
    let r = INITIAL_RADIUS * (0.5 + i as f32).sqrt();
    [r * angle.cos(), r * angle.sin()]
}

/// Tiny deterministic offset for coincident points.
fn jiggle(a: usize, b: usize) -> (f32, f32) {
    let s = ((a * 31 + b * 17) % 97) as f32 + 1.0;
    (1e-3 * s, -1e-3 * (98.0 - s))
}
