use crate::components::Color;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const AI_SPEED: f32 = 3.0; // pixels per frame
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 12.0;
    pub const BALL_SPEED: f32 = 4.0; // pixels per frame

    // Net
    pub const NET_DASH: f32 = 15.0;
    pub const NET_GAP: f32 = 10.0;
    pub const NET_LINE_WIDTH: f32 = 2.0;

    // Colors
    pub const PLAYER_COLOR: Color = Color::rgb(0x1a, 0xbc, 0x9c);
    pub const AI_COLOR: Color = Color::rgb(0xe7, 0x4c, 0x3c);
    pub const BALL_COLOR: Color = Color::rgb(0xf1, 0xc4, 0x0f);
    pub const NET_COLOR: Color = Color::rgb(0x16, 0xa0, 0x85);
}
