pub mod animation_loop;
pub mod scale_state;

pub use animation_loop::{AnimationLoop, LoopState};
pub use scale_state::{ScaleDirection, ScaleState, ScaleUpdate};
