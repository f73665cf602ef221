//! Demo host for the sprocket engine
//!
//! Spawns a small embedded scene, spins the objects, renders them into the
//! CPU framebuffer every frame and presents the result scaled up with
//! nearest filtering.

use macroquad::prelude::*;

use sprocket_engine::raster::{self, Framebuffer, Registry, HEIGHT, WIDTH};
use sprocket_engine::scene::load_scene_from_str;
use sprocket_engine::VERSION;

const DEMO_SCENE: &str = r#"(
    background: (r: 16, g: 18, b: 32, a: 255),
    objects: [
        (
            sprite: Checkerboard(
                width: 48, height: 48, cell: 6,
                color_a: (r: 235, g: 219, b: 178, a: 255),
                color_b: (r: 69, g: 133, b: 136, a: 255),
                pivot: (24.0, 24.0),
            ),
            position: (128.0, 128.0, 0.0),
        ),
        (
            sprite: Solid(
                width: 20, height: 20,
                color: (r: 204, g: 36, b: 29, a: 255),
                pivot: (10.0, 10.0),
            ),
            position: (64.0, 64.0, 0.0),
            scale: (1.5, 1.5),
        ),
        (
            sprite: Checkerboard(
                width: 16, height: 16, cell: 2,
                color_a: (r: 250, g: 189, b: 47, a: 255),
                color_b: (r: 40, g: 40, b: 40, a: 255),
                pivot: (8.0, 8.0),
            ),
            position: (192.0, 72.0, 0.0),
            rotation: 0.8,
            scale: (2.0, 1.0),
        ),
    ],
)"#;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Sprocket v{}", VERSION),
        window_width: WIDTH as i32 * 2,
        window_height: HEIGHT as i32 * 2,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut fb = Framebuffer::new(WIDTH, HEIGHT);
    let mut registry = Registry::new();

    let scene = match load_scene_from_str(DEMO_SCENE) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to parse demo scene: {}", e);
            return;
        }
    };

    let spawned = match scene.spawn_into(&mut registry) {
        Ok(spawned) => spawned,
        Err(e) => {
            eprintln!("Failed to spawn demo scene: {}", e);
            return;
        }
    };
    println!("Spawned {} objects", spawned.len());

    loop {
        let dt = get_frame_time();

        // Each object spins at its own rate; angles are left unnormalized
        // on purpose, the rasterizer wraps them.
        for (k, &index) in spawned.iter().enumerate() {
            if let Some(go) = registry.get_mut(index) {
                go.transform.rot += dt * (0.3 + 0.45 * k as f32);
            }
        }

        fb.fill(scene.background);
        raster::render(&mut fb, &registry);

        // Convert framebuffer to texture and draw scaled to the window.
        let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
        texture.set_filter(FilterMode::Nearest);

        let scale = (screen_width() / fb.width as f32).min(screen_height() / fb.height as f32);
        draw_texture_ex(
            &texture,
            (screen_width() - fb.width as f32 * scale) / 2.0,
            (screen_height() - fb.height as f32 * scale) / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(fb.width as f32 * scale, fb.height as f32 * scale)),
                ..Default::default()
            },
        );

        next_frame().await
    }
}
