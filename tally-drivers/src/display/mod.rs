//! Seven-segment display driver and renderer

pub mod multiplexed;
pub mod renderer;

pub use multiplexed::MultiplexedDisplay;
pub use renderer::Renderer;
