use glam::Vec2;

use crate::components::Side;
use crate::config::Config;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Open-interval test on the vertical extent: touching either edge is outside
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.min.y && y < self.max.y
    }
}

/// The rectangular area bounding ball and paddle motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a playfield from host-supplied dimensions (e.g. a canvas size)
    pub fn with_size(width: f32, height: f32) -> Result<Self, String> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(format!("Invalid playfield size {}x{}", width, height));
        }
        Ok(Self { width, height })
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Ball spawn point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Starting top edge for both paddles (vertically centered)
    pub fn paddle_spawn_y(&self, config: &Config) -> f32 {
        self.height / 2.0 - config.paddle_half_height()
    }

    /// X of the paddle's left edge
    pub fn paddle_x(&self, side: Side, config: &Config) -> f32 {
        match side {
            Side::Left => config.paddle_inset,
            Side::Right => self.width - config.paddle_width - config.paddle_inset,
        }
    }

    /// X of the paddle face that points at the middle of the field
    pub fn paddle_front(&self, side: Side, config: &Config) -> f32 {
        match side {
            Side::Left => config.paddle_inset + config.paddle_width,
            Side::Right => self.width - config.paddle_width - config.paddle_inset,
        }
    }

    pub fn paddle_bounds(&self, side: Side, top: f32, config: &Config) -> Aabb {
        Aabb::from_top_left_size(
            Vec2::new(self.paddle_x(side, config), top),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}
