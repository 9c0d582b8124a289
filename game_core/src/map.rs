use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Sprites are anchored at their center
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: boxes that only share an edge do not touch
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let d = (self.center() - other.center()).abs();
        let reach = (self.size() + other.size()) * 0.5;
        d.x < reach.x && d.y < reach.y
    }
}

/// Playable canvas area
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.canvas_width, config.canvas_height)
    }

    /// Largest x a sprite of the given width may occupy
    pub fn max_x(&self, sprite_width: f32) -> f32 {
        (self.width - sprite_width).max(0.0)
    }

    /// Largest y a sprite of the given height may occupy
    pub fn max_y(&self, sprite_height: f32) -> f32 {
        (self.height - sprite_height).max(0.0)
    }

    /// Clamp a sprite position to `[0, W - w] x [0, H - h]`
    pub fn clamp(&self, pos: Vec2, sprite_size: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(0.0, self.max_x(sprite_size.x)),
            pos.y.clamp(0.0, self.max_y(sprite_size.y)),
        )
    }
}
