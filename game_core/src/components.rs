use glam::Vec2;

/// Which edge of the playfield a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge; not clamped to the playfield
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, half_height: f32) -> f32 {
        self.y + half_height
    }
}

/// Marks the paddle moved by keyboard input
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerControlled;

/// Marks the paddle moved by the chase rule
#[derive(Debug, Clone, Copy, Default)]
pub struct OpponentControlled;

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back on the spawn point.
    ///
    /// Velocity is left untouched, so the ball heads back toward the side
    /// that just conceded.
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
    }
}
