use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    bounce_off_walls(world, config, events);
    bounce_off_paddles(world, events);
}

/// Reflect the ball off the top/bottom walls.
///
/// Only the vertical velocity flips; the ball is not pushed back inside, so
/// it may sit slightly past the wall for a frame.
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y + ball.size >= config.arena_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::trace!("ball hit wall at y={:.1}", ball.pos.y);
        }
    }
}

/// Deflect the ball off any paddle it overlaps, adding spin from the hit offset
pub fn bounce_off_paddles(world: &mut World, events: &mut Events) {
    // Collect paddle data without holding borrows (deterministic: player first)
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !touches(ball, paddle) {
                continue;
            }

            ball.vel.x = -ball.vel.x;
            // Spin replaces dy outright: centre hits go flat, edge hits go steep
            ball.vel.y = ball.speed * paddle.collide_point(ball.center_y());

            events.paddle_hit = Some(paddle.side);
            log::trace!(
                "ball hit {:?} paddle, new velocity ({:.2}, {:.2})",
                paddle.side,
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}

/// Inclusive AABB test against the paddle's inner face
fn touches(ball: &Ball, paddle: &Paddle) -> bool {
    let reached = match paddle.side {
        Side::Player => ball.pos.x <= paddle.x + paddle.width,
        Side::Ai => ball.pos.x + ball.size >= paddle.x,
    };
    reached && paddle.spans(ball.pos.y, ball.size)
}
