use hecs::{Entity, World};

use crate::systems::apply_pointer;
use crate::{
    create_ball, create_paddle, step, Ball, CoinFlip, Config, ConfigError, Events, GameRng,
    Paddle, Side,
};

/// Everything a renderer needs for one frame, copied out of the world
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
}

/// A single-player match: pointer-driven left paddle against the AI.
///
/// Owns the world and every resource the simulation touches, so the host
/// only needs to call [`Game::advance`] once per frame and feed pointer
/// positions through [`Game::set_pointer_y`].
pub struct Game<R: CoinFlip = GameRng> {
    world: World,
    config: Config,
    events: Events,
    rng: R,
    player: Entity,
    ai: Entity,
    ball: Entity,
    frame: u64,
}

impl<R: CoinFlip> Game<R> {
    pub fn new(config: Config, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();

        // Create paddles
        let player = create_paddle(&mut world, Side::Player, &config);
        let ai = create_paddle(&mut world, Side::Ai, &config);

        // Ball starts centred, heading down-right at base speed
        let ball = create_ball(
            &mut world,
            config.ball_spawn(),
            glam::Vec2::splat(config.ball_speed),
            &config,
        );

        log::info!(
            "game created on {}x{} arena",
            config.arena_width,
            config.arena_height
        );

        Ok(Self {
            world,
            config,
            events: Events::new(),
            rng,
            player,
            ai,
            ball,
            frame: 0,
        })
    }

    /// Advance the simulation by one frame
    pub fn advance(&mut self) {
        step(&mut self.world, &self.config, &mut self.events, &mut self.rng);
        self.frame += 1;
    }

    /// Pointer moved to playfield-local `y`
    pub fn set_pointer_y(&mut self, y: f32) {
        apply_pointer(&mut self.world, &self.config, self.player, y);
    }

    /// Copy of the current paddles and ball, if all three are alive
    pub fn snapshot(&self) -> Option<Snapshot> {
        let player = *self.world.get::<&Paddle>(self.player).ok()?;
        let ai = *self.world.get::<&Paddle>(self.ai).ok()?;
        let ball = *self.world.get::<&Ball>(self.ball).ok()?;
        Some(Snapshot { player, ai, ball })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events from the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }

    pub fn ai_entity(&self) -> Entity {
        self.ai
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }
}
