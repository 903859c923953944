// src/animation/scale_state.rs
//
// Per-node animation progress.
// A node sweeps its scale from 0 to 1 (or back) in small increments and
// commits the end value once a full unit of progress is covered.

use crate::config::AnimationConfig;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    #[default]
    Idle,
    Forward,
    Backward,
}

impl ScaleDirection {
    pub fn sign(self) -> f32 {
        match self {
            ScaleDirection::Idle => 0.0,
            ScaleDirection::Forward => 1.0,
            ScaleDirection::Backward => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleUpdate {
    Idle,
    InProgress,
    Settled(f32),
}

#[derive(Debug, Default, Clone)]
pub struct ScaleState {
    scale: f32,
    direction: ScaleDirection,
    settled_scale: f32,
}

impl ScaleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn direction(&self) -> ScaleDirection {
        self.direction
    }

    pub fn settled_scale(&self) -> f32 {
        self.settled_scale
    }

    pub fn is_animating(&self) -> bool {
        self.direction != ScaleDirection::Idle
    }

    /// Advances the scale by one step. Once the scale has moved more than a
    /// full unit away from the last settled value it snaps to the new end
    /// value, goes idle and reports `Settled`.
    pub fn update(&mut self, config: &AnimationConfig) -> ScaleUpdate {
        if !self.is_animating() {
            return ScaleUpdate::Idle;
        }

        self.scale += update_value(self.scale, self.direction, config);

        if (self.scale - self.settled_scale).abs() > 1.0 {
            // settled_scale stays exactly 0 or 1 regardless of float drift
            let settled = (self.settled_scale + self.direction.sign())
                .round()
                .clamp(0.0, 1.0);
            self.scale = settled;
            self.settled_scale = settled;
            self.direction = ScaleDirection::Idle;
            return ScaleUpdate::Settled(settled);
        }

        ScaleUpdate::InProgress
    }

    /// Arms the animation towards the opposite end. Returns false if an
    /// animation is already running.
    pub fn start_updating(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }

        self.direction = if self.settled_scale < 0.5 {
            ScaleDirection::Forward
        } else {
            ScaleDirection::Backward
        };
        true
    }
}

// Alternates between the two phase speeds every `scale_div` of progress
pub fn mirror_value(scale: f32, config: &AnimationConfig) -> f32 {
    let phase = (scale / config.scale_div).floor() as i64;
    let divisor = if phase.rem_euclid(2) == 0 {
        config.first_phase_divisor
    } else {
        config.second_phase_divisor
    };
    1.0 / divisor as f32
}

pub fn update_value(scale: f32, direction: ScaleDirection, config: &AnimationConfig) -> f32 {
    mirror_value(scale, config) * direction.sign() * config.scale_gap
}
