use crate::{Ball, Config, Events, Playfield, Score};
use hecs::World;

/// Check if ball left the playfield (scoring)
///
/// Left and right exits are tested one after the other on the same tick.
pub fn check_scoring(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let radius = config.ball_radius;
    let center = field.center();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - radius < 0.0 {
            // Ball got past the player
            score.increment_opponent();
            events.opponent_scored = true;
            ball.reset(center);
            log::info!("Opponent scored ({} - {})", score.player, score.opponent);
        }
        if ball.pos.x + radius > field.width {
            // Ball got past the opponent
            score.increment_player();
            events.player_scored = true;
            ball.reset(center);
            log::info!("Player scored ({} - {})", score.player, score.opponent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, Playfield, Score};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Playfield, Score, Events) {
        (
            hecs::World::new(),
            Config::new(),
            Playfield::new(),
            Score::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let (mut world, config, field, mut score, mut events) = setup_world();
        let entity = create_ball(&mut world, Vec2::new(9.0, 120.0), Vec2::new(-4.0, 4.0));

        check_scoring(&mut world, &field, &config, &mut score, &mut events);

        assert_eq!(score.opponent, 1, "Opponent should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.opponent_scored);
        assert!(!events.player_scored);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, field.center(), "Ball should reset to center");
        assert_eq!(
            ball.vel,
            Vec2::new(-4.0, 4.0),
            "Reset keeps the velocity, including its horizontal sign"
        );
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, field, mut score, mut events) = setup_world();
        let entity = create_ball(
            &mut world,
            Vec2::new(field.width - 9.0, 450.0),
            Vec2::new(4.0, -4.0),
        );

        check_scoring(&mut world, &field, &config, &mut score, &mut events);

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.opponent, 0);
        assert!(events.player_scored);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, field.center());
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, field, mut score, mut events) = setup_world();
        // Leading edge exactly on the boundary is still in play
        create_ball(&mut world, Vec2::new(config.ball_radius, 300.0), Vec2::new(-4.0, 0.0));

        check_scoring(&mut world, &field, &config, &mut score, &mut events);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(!events.any_score(), "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, field, mut score, mut events) = setup_world();
        let entity = create_ball(&mut world, Vec2::new(-1.0, 300.0), Vec2::new(-4.0, 0.0));

        check_scoring(&mut world, &field, &config, &mut score, &mut events);
        events.clear();

        world.get::<&mut Ball>(entity).unwrap().pos.x = -1.0;
        check_scoring(&mut world, &field, &config, &mut score, &mut events);

        assert_eq!(score.opponent, 2, "Scores should accumulate");
        assert_eq!(score.player, 0);
    }
}
