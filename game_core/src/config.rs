use glam::Vec2;

use crate::components::{Color, Side};
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,
    pub player_color: Color,
    pub ai_color: Color,
    pub ball_color: Color,
    pub net_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            player_color: Params::PLAYER_COLOR,
            ai_color: Params::AI_COLOR,
            ball_color: Params::BALL_COLOR,
            net_color: Params::NET_COLOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on an arena of the given size (e.g. the canvas size)
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Check the geometry preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        // A stationary automated paddle is allowed, a negative one is not
        for (name, value) in [("ai_speed", self.ai_speed), ("ai_dead_zone", self.ai_dead_zone)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let fits = [
            ("paddle_height", self.paddle_height, "height", self.arena_height),
            ("ball_size", self.ball_size, "height", self.arena_height),
            ("ball_size", self.ball_size, "width", self.arena_width),
            ("paddle_width", self.paddle_width * 2.0, "width", self.arena_width),
        ];
        for (name, value, axis, limit) in fits {
            if value > limit {
                return Err(ConfigError::TooLarge {
                    name,
                    value,
                    axis,
                    limit,
                });
            }
        }

        Ok(())
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Ai => self.arena_width - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Top-left corner that centres the ball in the arena
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }
}
