use crate::{Ball, CoinFlip, Config, Events};
use hecs::World;

/// Re-serve the ball from the centre once it has left through the left or right edge
pub fn check_out_of_bounds(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    coin: &mut dyn CoinFlip,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 || ball.pos.x + ball.size > config.arena_width {
            let exit_x = ball.pos.x;
            ball.reset(config, coin);
            events.ball_reset = true;
            log::debug!(
                "ball left the field at x={:.1}, re-served with velocity ({}, {})",
                exit_x,
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}
