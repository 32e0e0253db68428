pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check collisions (walls, then paddles)
    check_collisions(world, field, config, events);

    // 3. Check scoring (ball left the playfield)
    check_scoring(world, field, config, score, events);

    // 4. Opponent chases the ball
    chase_ball(world, config);
}

/// Helper to create the keyboard-controlled paddle on the left
pub fn create_player_paddle(world: &mut World, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(Side::Left, y), PlayerControlled))
}

/// Helper to create the scripted paddle on the right
pub fn create_opponent_paddle(world: &mut World, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(Side::Right, y), OpponentControlled))
}

/// Helper to create a paddle without a controller
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
