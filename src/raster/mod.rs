//! Sprite rasterizer core
//!
//! - Fixed-capacity registry of game objects (slot index = handle)
//! - Inverse-transform sampling: every destination pixel is mapped back
//!   through the object's inverted affine transform, so rotated and scaled
//!   sprites render without gaps
//! - Painter's algorithm in slot order; no z-buffer

mod registry;
mod render;
mod types;

pub use registry::*;
pub use render::*;
pub use types::*;

/// Default render-target dimensions.
pub const WIDTH: usize = 256;
pub const HEIGHT: usize = 256;
