use glam::Vec2;

use crate::{CoinFlip, Config};

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Player, // left, pointer driven
    Ai,     // right, tracks the ball
}

/// Opaque display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#1abc9c`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Paddle component. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.arena_height / 2.0 - config.paddle_height / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
            color: match side {
                Side::Player => config.player_color,
                Side::Ai => config.ai_color,
            },
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Inclusive overlap of `[top, top + size]` with the paddle's vertical span
    pub fn spans(&self, top: f32, size: f32) -> bool {
        top + size >= self.y && top <= self.y + self.height
    }

    /// Offset of `y` from the paddle centre, normalised by half the height.
    /// Roughly -1 at the top edge and 1 at the bottom edge.
    pub fn collide_point(&self, y: f32) -> f32 {
        (y - self.center_y()) / (self.height / 2.0)
    }
}

/// Rate-limited tracking for the automated paddle
#[derive(Debug, Clone, Copy)]
pub struct Tracker {
    pub speed: f32,     // max pixels per frame
    pub dead_zone: f32, // no movement while centres are this close
}

impl Tracker {
    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self { speed, dead_zone }
    }
}

/// Ball component. `pos` is the top-left of its square bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub speed: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, config: &Config) -> Self {
        Self {
            pos,
            vel,
            size: config.ball_size,
            speed: config.ball_speed,
            color: config.ball_color,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Reset ball to center with a random diagonal direction
    pub fn reset(&mut self, config: &Config, coin: &mut dyn CoinFlip) {
        self.pos = config.ball_spawn();

        // Each axis is flipped independently: four equally likely directions
        let dx = if coin.flip() { self.speed } else { -self.speed };
        let dy = if coin.flip() { self.speed } else { -self.speed };
        self.vel = Vec2::new(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedCoin;

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::rgb(0x1a, 0xbc, 0x9c).to_css(), "#1abc9c");
        assert_eq!(Color::rgb(0, 0, 0).to_css(), "#000000");
    }

    #[test]
    fn test_paddles_start_centered() {
        let config = Config::new();
        let player = Paddle::new(Side::Player, &config);
        let ai = Paddle::new(Side::Ai, &config);

        assert_eq!(player.x, 0.0);
        assert_eq!(ai.x, config.arena_width - config.paddle_width);
        assert_eq!(player.center_y(), config.arena_height / 2.0);
        assert_eq!(ai.center_y(), config.arena_height / 2.0);
        assert_eq!(player.color, config.player_color);
        assert_eq!(ai.color, config.ai_color);
    }

    #[test]
    fn test_collide_point_edges() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Player, &config);

        assert_eq!(paddle.collide_point(paddle.center_y()), 0.0);
        assert_eq!(paddle.collide_point(paddle.y), -1.0);
        assert_eq!(paddle.collide_point(paddle.y + paddle.height), 1.0);
    }

    #[test]
    fn test_spans_is_inclusive() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Player, &config);
        let size = config.ball_size;

        // Touching the top edge from above
        assert!(paddle.spans(paddle.y - size, size));
        // Touching the bottom edge from below
        assert!(paddle.spans(paddle.y + paddle.height, size));
        assert!(!paddle.spans(paddle.y - size - 0.5, size));
        assert!(!paddle.spans(paddle.y + paddle.height + 0.5, size));
    }

    #[test]
    fn test_ball_reset_uses_one_flip_per_axis() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::new(-20.0, 3.0), Vec2::new(-9.0, 1.5), &config);
        let mut coin = ScriptedCoin::new([false, true]);

        ball.reset(&config, &mut coin);

        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.vel, Vec2::new(-config.ball_speed, config.ball_speed));
        assert_eq!(coin.remaining(), 0);
    }
}
