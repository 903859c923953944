// src/render/renderer.rs
// The renderer ties the chain to its animation loop.
// Each tap animates exactly one node through one full sweep.

use std::time::Duration;

use crate::animation::AnimationLoop;
use crate::config::Config;
use crate::draw::Surface;
use crate::models::{Chain, Settled};

pub struct Renderer {
    chain: Chain,
    animation: AnimationLoop,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            chain: Chain::new(&config.chain, &config.animation, &config.style),
            animation: AnimationLoop::new(config.animation.frame_delay()),
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Clears the surface and draws the chain's current state.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.chain.style().back_color);
        self.chain.draw(surface);
    }

    /// Feeds frame time to the loop and advances the chain when a tick is
    /// due. The loop stops as soon as a node settles.
    pub fn advance(&mut self, dt: Duration) -> Option<Settled> {
        if !self.animation.tick(dt) {
            return None;
        }

        let settled = self.chain.update()?;
        self.animation.stop();
        Some(settled)
    }

    /// `render` followed by `advance`, for hosts with a single frame callback.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, dt: Duration) -> Option<Settled> {
        self.render(surface);
        self.advance(dt)
    }

    /// Arms the current node and starts the loop. Returns false if a node
    /// is already animating.
    pub fn handle_tap(&mut self) -> bool {
        if !self.chain.start_updating() {
            return false;
        }
        self.animation.start();
        true
    }
}
