// src/models/chain.rs
//
// The linked chain of animated nodes.
// Nodes live in an arena indexed 0..N-1; neighbors are plain indices.
// The chain keeps a cursor on the node currently animating and walks it
// back and forth across the arena, reversing at either end.

use crate::animation::{ScaleState, ScaleUpdate};
use crate::config::{AnimationConfig, ChainConfig, StyleConfig};
use crate::draw::{glyph_draw, Surface};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChainDirection {
    #[default]
    Forward,
    Backward,
}

impl ChainDirection {
    pub fn reversed(self) -> Self {
        match self {
            ChainDirection::Forward => ChainDirection::Backward,
            ChainDirection::Backward => ChainDirection::Forward,
        }
    }
}

/// A node finished its 0 <-> 1 sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settled {
    pub index: usize,
    pub scale: f32,
}

#[derive(Debug, Clone)]
pub struct ChainNode {
    index: usize,
    state: ScaleState,
    next: Option<usize>,
    previous: Option<usize>,
}

impl ChainNode {
    fn new(index: usize, count: usize) -> Self {
        Self {
            index,
            state: ScaleState::new(),
            next: (index + 1 < count).then_some(index + 1),
            previous: index.checked_sub(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &ScaleState {
        &self.state
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        node_count: usize,
        lines: usize,
        style: &StyleConfig,
    ) {
        let scale = self.state.scale();
        glyph_draw::draw_node(surface, self.index, scale, node_count, lines, style);
    }

    pub fn update(&mut self, config: &AnimationConfig) -> Option<Settled> {
        match self.state.update(config) {
            ScaleUpdate::Settled(scale) => Some(Settled {
                index: self.index,
                scale,
            }),
            ScaleUpdate::InProgress | ScaleUpdate::Idle => None,
        }
    }

    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    /// The neighbor in `direction`, or None at the chain boundary.
    pub fn neighbor(&self, direction: ChainDirection) -> Option<usize> {
        match direction {
            ChainDirection::Forward => self.next,
            ChainDirection::Backward => self.previous,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<ChainNode>,
    current: usize,
    direction: ChainDirection,
    lines: usize,
    animation: AnimationConfig,
    style: StyleConfig,
}

impl Chain {
    /// Builds all nodes eagerly. A node count of zero is raised to one so
    /// the cursor always points at a live node.
    pub fn new(chain: &ChainConfig, animation: &AnimationConfig, style: &StyleConfig) -> Self {
        let count = chain.nodes.max(1);
        let nodes = (0..count).map(|index| ChainNode::new(index, count)).collect();

        Self {
            nodes,
            current: 0,
            direction: ChainDirection::Forward,
            lines: chain.lines,
            animation: animation.clone(),
            style: style.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&ChainNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[ChainNode] {
        &self.nodes
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> ChainDirection {
        self.direction
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Draws the current node and every node behind it, down to node 0.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let count = self.nodes.len();
        for node in self.nodes[..=self.current].iter().rev() {
            node.draw(surface, count, self.lines, &self.style);
        }
    }

    /// Advances the current node by one step. When it settles, the cursor
    /// moves to the neighbor in the current direction, or the direction
    /// flips if the cursor sits at either end.
    pub fn update(&mut self) -> Option<Settled> {
        let settled = self.nodes[self.current].update(&self.animation)?;

        match self.nodes[self.current].neighbor(self.direction) {
            Some(index) => self.current = index,
            None => {
                self.direction = self.direction.reversed();
                log::debug!(
                    "chain reversed at node {}, now {:?}",
                    self.current,
                    self.direction
                );
            }
        }

        log::debug!("node {} settled at {}", settled.index, settled.scale);
        Some(settled)
    }

    pub fn start_updating(&mut self) -> bool {
        let armed = self.nodes[self.current].start_updating();
        if armed {
            log::debug!("node {} armed", self.current);
        }
        armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_chain(nodes: usize) -> Chain {
        let chain_config = ChainConfig {
            nodes,
            ..ChainConfig::default()
        };
        Chain::new(
            &chain_config,
            &AnimationConfig::default(),
            &StyleConfig::default(),
        )
    }

    fn run_cycle(chain: &mut Chain) -> Settled {
        assert!(chain.start_updating());
        for _ in 0..1000 {
            if let Some(settled) = chain.update() {
                return settled;
            }
        }
        panic!("node {} never settled", chain.current());
    }

    #[test]
    fn test_chain_links() {
        for count in 2..=8 {
            let chain = build_chain(count);
            assert_eq!(chain.len(), count);

            for (i, node) in chain.nodes().iter().enumerate() {
                assert_eq!(node.index(), i);
                let expected_previous = if i == 0 { None } else { Some(i - 1) };
                let expected_next = if i == count - 1 { None } else { Some(i + 1) };
                assert_eq!(node.previous(), expected_previous, "count {} node {}", count, i);
                assert_eq!(node.next(), expected_next, "count {} node {}", count, i);
            }
        }
    }

    #[test]
    fn test_neighbor_at_boundaries() {
        let chain = build_chain(3);
        let first = chain.node(0).unwrap();
        let last = chain.node(2).unwrap();

        assert_eq!(first.neighbor(ChainDirection::Backward), None);
        assert_eq!(first.neighbor(ChainDirection::Forward), Some(1));
        assert_eq!(last.neighbor(ChainDirection::Forward), None);
        assert_eq!(last.neighbor(ChainDirection::Backward), Some(1));
    }

    #[test]
    fn test_zero_nodes_builds_single_node() {
        let chain = build_chain(0);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.current(), 0);
    }

    #[test]
    fn test_update_without_arming_does_nothing() {
        let mut chain = build_chain(5);
        assert_eq!(chain.update(), None);
        assert_eq!(chain.current(), 0);
        assert_eq!(chain.node(0).unwrap().state().scale(), 0.0);
    }

    #[test]
    fn test_cursor_moves_after_settle() {
        let mut chain = build_chain(5);
        let settled = run_cycle(&mut chain);

        assert_eq!(settled, Settled { index: 0, scale: 1.0 });
        assert_eq!(chain.current(), 1);
        assert_eq!(chain.direction(), ChainDirection::Forward);
    }

    #[test]
    fn test_direction_reverses_at_last_node() {
        let mut chain = build_chain(5);
        for expected in 0..4 {
            let settled = run_cycle(&mut chain);
            assert_eq!(settled.index, expected);
            assert_eq!(chain.direction(), ChainDirection::Forward);
        }

        assert_eq!(chain.current(), 4);
        let settled = run_cycle(&mut chain);
        assert_eq!(settled, Settled { index: 4, scale: 1.0 });
        assert_eq!(chain.current(), 4);
        assert_eq!(chain.direction(), ChainDirection::Backward);
    }

    #[test]
    fn test_full_back_and_forth_traversal() {
        let mut chain = build_chain(3);
        let expected = vec![
            (0, 1.0),
            (1, 1.0),
            (2, 1.0),
            (2, 0.0),
            (1, 0.0),
            (0, 0.0),
            (0, 1.0),
            (1, 1.0),
        ];

        for (index, scale) in expected {
            let settled = run_cycle(&mut chain);
            assert_eq!(settled, Settled { index, scale });
        }
    }

    #[test]
    fn test_start_updating_twice_is_ignored() {
        let mut chain = build_chain(5);
        assert!(chain.start_updating());
        chain.update();
        assert!(!chain.start_updating());
        assert_eq!(chain.current(), 0);
    }
}
