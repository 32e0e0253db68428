use hecs::{Entity, World};

use crate::render::{draw_frame, Surface};
use crate::systems::{apply_paddle_command, PaddleCommand};
use crate::{
    create_ball, create_opponent_paddle, create_player_paddle, step, Ball, Config, Events,
    Paddle, Playfield, Score, Side,
};

/// Single owner of all game state.
///
/// The host calls [`Game::tick`] once per display refresh and forwards key
/// presses to [`Game::handle_key`] between ticks.
pub struct Game {
    pub world: World,
    pub field: Playfield,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    ball: Entity,
    player: Entity,
    opponent: Entity,
    ticks: u64,
}

impl Game {
    pub fn new(field: Playfield, config: Config) -> Self {
        let mut world = World::new();

        let paddle_y = field.paddle_spawn_y(&config);
        let player = create_player_paddle(&mut world, paddle_y);
        let opponent = create_opponent_paddle(&mut world, paddle_y);
        let ball = create_ball(&mut world, field.center(), config.ball_velocity);

        Self {
            world,
            field,
            config,
            score: Score::new(),
            events: Events::new(),
            ball,
            player,
            opponent,
            ticks: 0,
        }
    }

    /// Draw the current state, then advance it by one tick
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Events {
        draw_frame(surface, &self.world, &self.field, &self.config, &self.score);
        self.update()
    }

    /// Advance one tick without drawing
    pub fn update(&mut self) -> Events {
        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        self.ticks += 1;
        self.events
    }

    /// Apply a key press; returns whether the key is bound
    pub fn handle_key(&mut self, key: &str) -> bool {
        match PaddleCommand::from_key(key) {
            Some(command) => {
                apply_paddle_command(&mut self.world, command, &self.config);
                true
            }
            None => false,
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.field.center(), self.config.ball_velocity))
    }

    /// Top edge of the given side's paddle
    pub fn paddle_top(&self, side: Side) -> f32 {
        let entity = match side {
            Side::Left => self.player,
            Side::Right => self.opponent,
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| paddle.y)
            .unwrap_or_else(|_| self.field.paddle_spawn_y(&self.config))
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Playfield::new(), Config::new())
    }
}
