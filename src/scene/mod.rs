//! Scene description files
//!
//! RON documents describing a background color and a list of renderable
//! objects with procedurally generated sprites. Scenes are data only;
//! spawning instantiates them into a registry.

mod data;
mod file;

pub use data::*;
pub use file::*;
