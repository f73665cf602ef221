//! Sprocket: sprite-based 2D software rasterizer engine
//!
//! The engine nucleus: generic fixed-dimension vector/matrix algebra, a
//! fixed-capacity game-object registry, and an inverse-transform sprite
//! rasterizer writing into a CPU framebuffer. Windowing and presentation
//! stay with the host (the bundled demo binary uses macroquad).

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod math;
pub mod raster;
pub mod scene;

// Re-export the types almost every consumer touches.
pub use raster::{Framebuffer, GameObject2d, Pixel, Registry, Sprite, Transform2d};
