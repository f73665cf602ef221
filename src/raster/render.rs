//! Framebuffer and the inverse-transform sprite rasterizer

use crate::math::{vec2, vec3, wrap_angle, Mat2, Mat3, Vec2};

use super::registry::Registry;
use super::types::{GameObject2d, Pixel};

/// RGBA render target, 4 bytes per pixel.
pub struct Framebuffer {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    /// Zero every channel (transparent black).
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Write one solid color to every pixel.
    pub fn fill(&mut self, color: Pixel) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Overwrite one pixel; writes outside the buffer are dropped.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Pixel) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Some(Pixel::with_alpha(
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ))
        } else {
            None
        }
    }
}

/// Draw every active object in ascending slot order (painter's algorithm;
/// depth ordering via `pos.z` is not applied here).
pub fn render(fb: &mut Framebuffer, registry: &Registry) {
    for (_, go) in registry.iter() {
        draw_object(fb, go);
    }
}

/// Rasterize one object under its scale -> rotate -> translate transform.
///
/// Walks the transformed sprite's screen-space bounding box and maps every
/// destination pixel back into sprite space with the inverted transform.
/// Samples that land outside the sprite are skipped: the axis-aligned box
/// of a rotated sprite always covers pixels the sprite itself does not.
pub fn draw_object(fb: &mut Framebuffer, go: &GameObject2d) {
    let sprite = &go.sprite;
    let t = &go.transform;
    if sprite.is_empty() {
        return;
    }
    // Zero scale on either axis is a zero-area render.
    if t.scale.x() == 0.0 || t.scale.y() == 0.0 {
        return;
    }

    let theta = wrap_angle(t.rot);
    let size: Vec2 = sprite.size().into();
    let pivot = sprite.pivot();

    // Screen-space bounding box: all four sprite corners, pivot-relative,
    // scaled then rotated.
    let rotation = Mat2::rotation(theta);
    let corners = [
        vec2(0.0, 0.0),
        vec2(size.x(), 0.0),
        vec2(0.0, size.y()),
        size,
    ]
    .map(|corner| rotation * (corner - pivot).component_mul(t.scale));

    let mut min = corners[0];
    let mut max = corners[0];
    for corner in &corners[1..] {
        min = vec2(min.x().min(corner.x()), min.y().min(corner.y()));
        max = vec2(max.x().max(corner.x()), max.y().max(corner.y()));
    }

    let extent_x = (max.x() - min.x()).ceil() as i32;
    let extent_y = (max.y() - min.y()).ceil() as i32;

    // Destination pixel -> sprite pixel, inverted stage by stage and built
    // once per object; the per-pixel loop below allocates nothing.
    let inverse = Mat3::translation(pivot)
        * Mat3::rotation_z(-theta)
        * Mat3::scaling(vec3(1.0 / t.scale.x(), 1.0 / t.scale.y(), 1.0))
        * Mat3::translation(vec2(-t.pos.x(), -t.pos.y()));

    // The destination region starts at the screen cell containing the
    // bounding box origin, keeping rotated sprites anchored on their pivot.
    let origin_x = (t.pos.x() + min.x()).floor() as i32;
    let origin_y = (t.pos.y() + min.y()).floor() as i32;

    for dy in 0..extent_y {
        let py = origin_y + dy;
        if py < 0 || py >= fb.height as i32 {
            continue;
        }
        for dx in 0..extent_x {
            let px = origin_x + dx;
            if px < 0 || px >= fb.width as i32 {
                continue;
            }

            // Sample at the destination pixel center.
            let sample = inverse * vec3(px as f32 + 0.5, py as f32 + 0.5, 1.0);
            let sx = sample.x().floor() as i32;
            let sy = sample.y().floor() as i32;

            match sprite.pixel(sx, sy) {
                Some(color) => fb.set_pixel(px as usize, py as usize, color),
                // Outside the sprite silhouette: leave the background.
                None => continue,
            }
        }
    }
}
