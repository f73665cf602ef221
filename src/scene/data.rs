//! Scene data types and spawning

use serde::{Deserialize, Serialize};

use crate::math::{vec2, Vector};
use crate::raster::{Pixel, Registry, Sprite};

use super::SceneError;

/// A whole scene: background color plus objects in spawn (= paint) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDef {
    #[serde(default = "default_background")]
    pub background: Pixel,
    pub objects: Vec<ObjectDef>,
}

fn default_background() -> Pixel {
    Pixel::BLACK
}

/// One renderable object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDef {
    pub sprite: SpriteDef,
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_scale")]
    pub scale: [f32; 2],
}

fn default_scale() -> [f32; 2] {
    [1.0, 1.0]
}

/// Procedural sprite patterns.
///
/// Scenes carry generated pixels only; decoding image assets is out of
/// scope for this engine core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SpriteDef {
    Solid {
        width: u32,
        height: u32,
        color: Pixel,
        #[serde(default)]
        pivot: [f32; 2],
    },
    Checkerboard {
        width: u32,
        height: u32,
        cell: u32,
        color_a: Pixel,
        color_b: Pixel,
        #[serde(default)]
        pivot: [f32; 2],
    },
}

impl SpriteDef {
    pub fn build(&self) -> Sprite {
        match *self {
            SpriteDef::Solid {
                width,
                height,
                color,
                pivot,
            } => Sprite::solid(width as usize, height as usize, color)
                .with_pivot(vec2(pivot[0], pivot[1])),
            SpriteDef::Checkerboard {
                width,
                height,
                cell,
                color_a,
                color_b,
                pivot,
            } => Sprite::checkerboard(width as usize, height as usize, cell as usize, color_a, color_b)
                .with_pivot(vec2(pivot[0], pivot[1])),
        }
    }
}

impl ObjectDef {
    /// Claim a registry slot and configure it. `None` when the registry is
    /// full.
    pub fn spawn(&self, registry: &mut Registry) -> Option<usize> {
        let index = registry.create()?;
        let go = registry.get_mut(index)?;
        go.sprite = self.sprite.build();
        go.transform.pos = Vector::new(self.position);
        go.transform.rot = self.rotation;
        go.transform.scale = Vector::new(self.scale);
        Some(index)
    }
}

impl SceneDef {
    /// Spawn every object, in order, returning their slot indices.
    pub fn spawn_into(&self, registry: &mut Registry) -> Result<Vec<usize>, SceneError> {
        let mut spawned = Vec::with_capacity(self.objects.len());
        for object in &self.objects {
            match object.spawn(registry) {
                Some(index) => spawned.push(index),
                None => return Err(SceneError::RegistryFull),
            }
        }
        Ok(spawned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_object_scene() -> SceneDef {
        SceneDef {
            background: Pixel::BLACK,
            objects: vec![
                ObjectDef {
                    sprite: SpriteDef::Solid {
                        width: 2,
                        height: 2,
                        color: Pixel::RED,
                        pivot: [0.0, 0.0],
                    },
                    position: [1.0, 2.0, 0.0],
                    rotation: 0.5,
                    scale: [1.0, 1.0],
                },
                ObjectDef {
                    sprite: SpriteDef::Checkerboard {
                        width: 4,
                        height: 4,
                        cell: 2,
                        color_a: Pixel::WHITE,
                        color_b: Pixel::BLUE,
                        pivot: [2.0, 2.0],
                    },
                    position: [0.0, 0.0, 0.0],
                    rotation: 0.0,
                    scale: [2.0, 2.0],
                },
            ],
        }
    }

    #[test]
    fn test_spawn_into_registry() {
        let mut registry = Registry::new();
        let spawned = two_object_scene().spawn_into(&mut registry).unwrap();
        assert_eq!(spawned, vec![0, 1]);

        let first = registry.get(0).unwrap();
        assert_eq!(first.transform.pos, [1.0, 2.0, 0.0]);
        assert_eq!(first.transform.rot, 0.5);
        assert_eq!(first.sprite.size(), vec2(2, 2));

        let second = registry.get(1).unwrap();
        assert_eq!(second.sprite.pivot(), vec2(2.0, 2.0));
        assert_eq!(second.transform.scale, vec2(2.0, 2.0));
    }

    #[test]
    fn test_spawn_into_full_registry() {
        let mut registry = Registry::with_capacity(1);
        let err = two_object_scene().spawn_into(&mut registry).unwrap_err();
        assert!(matches!(err, SceneError::RegistryFull));
    }

    #[test]
    fn test_sprite_def_build() {
        let def = SpriteDef::Checkerboard {
            width: 4,
            height: 2,
            cell: 1,
            color_a: Pixel::RED,
            color_b: Pixel::GREEN,
            pivot: [1.0, 1.0],
        };
        let sprite = def.build();
        assert_eq!(sprite.size(), vec2(4, 2));
        assert_eq!(sprite.pixel(0, 0), Some(Pixel::RED));
        assert_eq!(sprite.pixel(1, 0), Some(Pixel::GREEN));
        assert_eq!(sprite.pixel(1, 1), Some(Pixel::RED));
    }
}
