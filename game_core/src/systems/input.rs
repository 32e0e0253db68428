use hecs::World;

use crate::{Config, Paddle, PlayerControlled};

/// A discrete paddle nudge from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleCommand {
    Up,
    Down,
}

impl PaddleCommand {
    /// Map a DOM `KeyboardEvent.key` name to a command
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Self::Up),
            "ArrowDown" | "s" | "S" => Some(Self::Down),
            _ => None,
        }
    }

    /// Screen-space direction: up is toward y = 0
    pub fn dir(self) -> f32 {
        match self {
            Self::Up => -1.0,
            Self::Down => 1.0,
        }
    }
}

/// Move the keyboard-controlled paddle by one step.
///
/// No clamping: the paddle may leave the playfield.
pub fn apply_paddle_command(world: &mut World, command: PaddleCommand, config: &Config) {
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &PlayerControlled)>() {
        paddle.y += command.dir() * config.player_step;
    }
}
