/// Game score tracking
///
/// Never reset during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,   // Left, keyboard-controlled
    pub opponent: u32, // Right, scripted
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_player() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        score.increment_player();
        assert_eq!(score.player, 1);
        score.increment_player();
        assert_eq!(score.player, 2);
        assert_eq!(score.opponent, 0);
    }

    #[test]
    fn test_score_increment_opponent() {
        let mut score = Score::new();
        score.increment_opponent();
        assert_eq!(score.opponent, 1);
        assert_eq!(score.player, 0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            player_scored: true,
            opponent_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
        };
        assert!(events.any_score());

        events.clear();

        assert_eq!(events, Events::new());
        assert!(!events.any_score());
    }
}
