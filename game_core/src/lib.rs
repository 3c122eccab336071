pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Motion is per frame, not per second: there is no delta-time, so game speed
/// follows the host's frame rate.
pub fn step(world: &mut World, config: &Config, events: &mut Events, coin: &mut dyn CoinFlip) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check collisions (walls, then player and AI paddles)
    check_collisions(world, config, events);

    // 3. Re-serve if the ball left the field
    check_out_of_bounds(world, config, events, coin);

    // 4. AI paddle follows the ball
    track_ball(world, config);
}

/// Helper to create a paddle entity. The AI paddle also gets a `Tracker`.
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(side, config);
    match side {
        Side::Player => world.spawn((paddle,)),
        Side::Ai => world.spawn((paddle, Tracker::new(config.ai_speed, config.ai_dead_zone))),
    }
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config),))
}
