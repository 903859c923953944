pub mod chain;

pub use chain::{Chain, ChainDirection, ChainNode, Settled};
