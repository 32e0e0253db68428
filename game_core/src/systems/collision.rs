use crate::{Ball, Config, Events, Paddle, Playfield, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, field: &Playfield, config: &Config, events: &mut Events) {
    check_wall_bounce(world, field, config, events);
    check_paddle_bounce(world, field, config, events);
}

/// Reflect vertical velocity when the ball pokes past the top or bottom edge.
///
/// The ball is not pushed back inside.
pub fn check_wall_bounce(world: &mut World, field: &Playfield, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y + radius > field.height || ball.pos.y - radius < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::debug!("Ball hit wall at {:?}", ball.pos);
        }
    }
}

/// Reflect horizontal velocity when the ball reaches a paddle's front edge
/// while strictly inside its vertical span.
///
/// There is no direction test, so a ball already behind a paddle can flip
/// again on the next tick.
pub fn check_paddle_bounce(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    let radius = config.ball_radius;

    // Left paddle is always resolved before the right one
    for side in [Side::Left, Side::Right] {
        for &(_, top) in paddles.iter().filter(|(s, _)| *s == side) {
            let bounds = field.paddle_bounds(side, top, config);
            let front = field.paddle_front(side, config);

            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                let crossed = match side {
                    Side::Left => ball.pos.x - radius < front,
                    Side::Right => ball.pos.x + radius > front,
                };

                if crossed && bounds.spans_y(ball.pos.y) {
                    ball.vel.x = -ball.vel.x;
                    events.ball_hit_paddle = true;
                    log::debug!("Ball hit {:?} paddle at {:?}", side, ball.pos);
                }
            }
        }
    }
}
