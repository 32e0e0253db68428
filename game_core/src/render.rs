//! Frame drawing against an abstract 2D surface

use glam::Vec2;
use hecs::World;

use crate::{Aabb, Ball, Config, Paddle, Playfield, Score, Side};

/// Colour used for every entity and the score text
pub const FILL_COLOR: &str = "white";
pub const SCORE_FONT: &str = "30px Arial";
/// Baseline of the score numbers
pub const SCORE_Y: f32 = 50.0;

/// The drawing primitives a host must provide
pub trait Surface {
    fn clear(&mut self, area: Aabb);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_rect(&mut self, rect: Aabb, color: &str);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Aabb),
    Circle { center: Vec2, radius: f32 },
    Rect(Aabb),
    Text { text: String, pos: Vec2 },
}

/// Headless surface that records what would have been drawn
impl Surface for Vec<DrawCommand> {
    fn clear(&mut self, area: Aabb) {
        self.push(DrawCommand::Clear(area));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: &str) {
        self.push(DrawCommand::Circle { center, radius });
    }

    fn fill_rect(&mut self, rect: Aabb, _color: &str) {
        self.push(DrawCommand::Rect(rect));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, _font: &str, _color: &str) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
        });
    }
}

/// Clear the surface and draw ball, paddles (left then right) and both scores
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    world: &World,
    field: &Playfield,
    config: &Config,
    score: &Score,
) {
    surface.clear(field.bounds());

    for (_e, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos, config.ball_radius, FILL_COLOR);
    }

    for side in [Side::Left, Side::Right] {
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            if paddle.side == side {
                surface.fill_rect(field.paddle_bounds(side, paddle.y, config), FILL_COLOR);
            }
        }
    }

    surface.fill_text(
        &score.player.to_string(),
        Vec2::new(field.width / 4.0, SCORE_Y),
        SCORE_FONT,
        FILL_COLOR,
    );
    surface.fill_text(
        &score.opponent.to_string(),
        Vec2::new(field.width * 3.0 / 4.0, SCORE_Y),
        SCORE_FONT,
        FILL_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_opponent_paddle, create_player_paddle};

    #[test]
    fn test_draw_frame_order() {
        let mut world = World::new();
        let field = Playfield::new();
        let config = Config::new();
        let score = Score {
            player: 3,
            opponent: 7,
        };
        // Spawn the opponent first to check the draw order does not follow spawn order
        create_opponent_paddle(&mut world, 100.0);
        create_player_paddle(&mut world, 250.0);
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(4.0, 4.0));

        let mut commands: Vec<DrawCommand> = Vec::new();
        draw_frame(&mut commands, &world, &field, &config, &score);

        assert_eq!(
            commands,
            vec![
                DrawCommand::Clear(field.bounds()),
                DrawCommand::Circle {
                    center: Vec2::new(400.0, 300.0),
                    radius: 10.0
                },
                DrawCommand::Rect(Aabb::new(Vec2::new(10.0, 250.0), Vec2::new(20.0, 350.0))),
                DrawCommand::Rect(Aabb::new(Vec2::new(780.0, 100.0), Vec2::new(790.0, 200.0))),
                DrawCommand::Text {
                    text: "3".to_string(),
                    pos: Vec2::new(200.0, 50.0)
                },
                DrawCommand::Text {
                    text: "7".to_string(),
                    pos: Vec2::new(600.0, 50.0)
                },
            ]
        );
    }

    #[test]
    fn test_draw_frame_empty_world_still_clears_and_scores() {
        let world = World::new();
        let mut commands: Vec<DrawCommand> = Vec::new();
        draw_frame(
            &mut commands,
            &world,
            &Playfield::new(),
            &Config::new(),
            &Score::new(),
        );

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Clear(_)));
    }
}
