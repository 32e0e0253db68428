use crate::Ball;
use hecs::World;

/// Move ball by one tick's worth of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
