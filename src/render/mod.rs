// src/render/mod.rs
// Composes the chain and its animation loop into one drawable unit

pub mod renderer;

pub use renderer::Renderer;
