use crate::{Ball, Config, OpponentControlled, Paddle};
use hecs::World;

/// Move the scripted paddle one fixed step toward the ball.
///
/// Bang-bang control: the step size never depends on distance. When the
/// paddle center is not above the ball (including a dead heat) it steps up.
pub fn chase_ball(world: &mut World, config: &Config) {
    let ball_y = world
        .query_mut::<&Ball>()
        .into_iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    let half_height = config.paddle_half_height();
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &OpponentControlled)>() {
        if paddle.center_y(half_height) < ball_y {
            paddle.y += config.opponent_step;
        } else {
            paddle.y -= config.opponent_step;
        }
    }
}
