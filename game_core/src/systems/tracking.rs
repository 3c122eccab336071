use crate::{Ball, Config, Paddle, Tracker};
use hecs::World;

/// Move tracking paddles toward the ball's vertical centre, then clamp them.
///
/// Movement is capped at `Tracker::speed` per frame and suppressed while the
/// centres are within `Tracker::dead_zone`, so the paddle lags the ball.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_center = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.center_y(),
        None => return, // No ball in world
    };

    for (_entity, (paddle, tracker)) in world.query_mut::<(&mut Paddle, &Tracker)>() {
        let paddle_center = paddle.center_y();
        if paddle_center < ball_center - tracker.dead_zone {
            paddle.y += tracker.speed;
        } else if paddle_center > ball_center + tracker.dead_zone {
            paddle.y -= tracker.speed;
        }

        // Clamp to arena bounds
        paddle.y = paddle.y.clamp(0.0, config.arena_height - paddle.height);
    }
}
