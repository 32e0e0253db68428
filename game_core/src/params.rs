/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 10.0; // Gap between paddle and its side edge
    pub const PLAYER_STEP: f32 = 20.0; // Units per key press
    pub const OPPONENT_STEP: f32 = 3.0; // Units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_VEL_X: f32 = 4.0; // Units per tick
    pub const BALL_VEL_Y: f32 = 4.0;
}
