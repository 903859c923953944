// src/lib.rs
//
// A chain of line-and-circle glyphs along the horizontal axis. Each tap
// sweeps one node's scale from 0 to 1 (or back), then hands off to the
// next node, reversing at the ends of the chain.

pub mod animation;
pub mod config;
pub mod draw;
pub mod models;
pub mod render;
