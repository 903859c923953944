// src/animation/animation_loop.rs
//
// A restartable ticker driven by frame time.
// The host calls `tick` once per frame with the time since the last
// frame; the loop reports when a chain update is due. Nothing here
// sleeps, so input keeps flowing between ticks.

use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone)]
pub struct AnimationLoop {
    state: LoopState,
    frame_timer: Duration,
    frame_delay: Duration,
}

impl AnimationLoop {
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            state: LoopState::Idle,
            frame_timer: Duration::ZERO,
            frame_delay,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Returns true if the loop went from idle to running. The first tick
    /// after a start fires immediately.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        log::debug!("animation loop started");
        self.state = LoopState::Running;
        self.frame_timer = self.frame_delay;
        true
    }

    /// Returns true if the loop was running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        log::debug!("animation loop stopped");
        self.state = LoopState::Idle;
        self.frame_timer = Duration::ZERO;
        true
    }

    /// Accumulates frame time and returns true when an update is due.
    /// Never fires while idle; fires at most once per call.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        self.frame_timer += dt;
        if self.frame_timer >= self.frame_delay {
            // next tick is scheduled one full delay after this one fires
            self.frame_timer = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
