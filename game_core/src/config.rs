use glam::Vec2;

use crate::params::Params;

/// Game configuration
///
/// Every field is fixed for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub player_step: f32,
    pub opponent_step: f32,
    pub ball_radius: f32,
    pub ball_velocity: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            player_step: Params::PLAYER_STEP,
            opponent_step: Params::OPPONENT_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity: Vec2::new(Params::BALL_VEL_X, Params::BALL_VEL_Y),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Half the paddle height, i.e. the offset from a paddle's top to its center
    pub fn paddle_half_height(&self) -> f32 {
        self.paddle_height / 2.0
    }
}
