//! Scene primitives for the sprite rasterizer

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{vec2, Vec2, Vec2Int, Vec3};

/// One color channel. 8-bit everywhere in practice; kept as an alias so the
/// precision can be widened in one place.
pub type Channel = u8;

/// RGBA pixel (one `Channel` per component).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub r: Channel,
    pub g: Channel,
    pub b: Channel,
    pub a: Channel,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Pixel = Pixel { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Pixel = Pixel { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Pixel = Pixel { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Pixel = Pixel { r: 0, g: 0, b: 255, a: 255 };
    pub const TRANSPARENT: Pixel = Pixel { r: 0, g: 0, b: 0, a: 0 };

    pub const fn new(r: Channel, g: Channel, b: Channel) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: Channel, g: Channel, b: Channel, a: Channel) -> Self {
        Self { r, g, b, a }
    }

    /// Byte layout used by the framebuffer.
    pub const fn to_bytes(self) -> [Channel; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Error from sprite construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteError {
    /// Pixel slice length does not match width * height.
    SizeMismatch { expected: usize, got: usize },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::SizeMismatch { expected, got } => {
                write!(f, "expected {} pixels, got {}", expected, got)
            }
        }
    }
}

/// A fixed-size image with a pivot point.
///
/// The sprite owns its pixel buffer; it is copied in at construction and
/// dropped with the sprite (or on `reset`). The pivot is the sprite-local
/// point, in pixels, that rotation and scale are applied about.
#[derive(Debug, Clone, Default)]
pub struct Sprite {
    pixels: Vec<Pixel>,
    size: Vec2Int,
    pivot: Vec2,
}

impl Sprite {
    /// Copy `width * height` pixels out of a caller-owned slice.
    pub fn from_pixels(pixels: &[Pixel], width: usize, height: usize) -> Result<Self, SpriteError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(SpriteError::SizeMismatch {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            pixels: pixels.to_vec(),
            size: vec2(width as i32, height as i32),
            pivot: Vec2::default(),
        })
    }

    /// Solid-color sprite.
    pub fn solid(width: usize, height: usize, color: Pixel) -> Self {
        Self {
            pixels: vec![color; width * height],
            size: vec2(width as i32, height as i32),
            pivot: Vec2::default(),
        }
    }

    /// Checkerboard test pattern with `cell`-sized squares.
    pub fn checkerboard(width: usize, height: usize, cell: usize, a: Pixel, b: Pixel) -> Self {
        let cell = cell.max(1);
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let checker = ((x / cell) + (y / cell)) % 2 == 0;
                pixels.push(if checker { a } else { b });
            }
        }
        Self {
            pixels,
            size: vec2(width as i32, height as i32),
            pivot: Vec2::default(),
        }
    }

    /// Move the pivot (builder form).
    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn size(&self) -> Vec2Int {
        self.size
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    pub fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Bounds-checked sample; `None` outside `[0, size)` on either axis.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        if x < 0 || y < 0 || x >= self.size.x() || y >= self.size.y() {
            return None;
        }
        Some(self.pixels[y as usize * self.size.x() as usize + x as usize])
    }

    /// Release the pixel buffer and return to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Position, rotation and scale of a 2D object.
///
/// `pos.z` is carried for future depth ordering but ignored by the
/// rasterizer. Rotation is radians about the z axis, stored unnormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d {
    pub pos: Vec3,
    pub rot: f32,
    pub scale: Vec2,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            pos: Vec3::default(),
            rot: 0.0,
            scale: vec2(1.0, 1.0),
        }
    }
}

impl Transform2d {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A renderable object: one transform, one sprite.
#[derive(Debug, Clone, Default)]
pub struct GameObject2d {
    pub transform: Transform2d,
    pub sprite: Sprite,
}

impl GameObject2d {
    /// Return the object to its freshly-created state, dropping the sprite
    /// buffer.
    pub fn reset(&mut self) {
        self.transform.reset();
        self.sprite.reset();
    }
}

/// Axis-aligned bounding box in screen space (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Collider2dSquare {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Collider2dSquare {
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }
}

/// Immovable collidable object.
#[derive(Debug, Clone, Default)]
pub struct RigidBodyStatic2d {
    pub object: GameObject2d,
    pub collider: Collider2dSquare,
    pub plasticity: f32,
}

/// Movable collidable object.
#[derive(Debug, Clone, Default)]
pub struct RigidBodyDynamic2d {
    pub body: RigidBodyStatic2d,
    pub velocity: Vec3,
    pub mass: f32,
}
