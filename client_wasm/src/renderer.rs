//! Draws a game snapshot: clear, net, paddles, ball

use crate::surface::DrawSurface;
use game_core::{Ball, Config, Paddle, Params, Snapshot};
use glam::Vec2;

/// Draw one full frame. Reads the snapshot only.
pub fn draw_frame<S: DrawSurface>(
    surface: &mut S,
    snapshot: &Snapshot,
    config: &Config,
) -> Result<(), S::Error> {
    // Clear
    surface.clear_rect(0.0, 0.0, config.arena_width, config.arena_height)?;

    // Net
    draw_net(surface, config)?;

    // Paddles
    draw_paddle(surface, &snapshot.player)?;
    draw_paddle(surface, &snapshot.ai)?;

    // Ball
    draw_ball(surface, &snapshot.ball)
}

/// Start/end `y` of each dash of the centre net
pub fn net_dashes(config: &Config) -> impl Iterator<Item = (f32, f32)> {
    let period = Params::NET_DASH + Params::NET_GAP;
    let height = config.arena_height;
    (0..)
        .map(move |i| i as f32 * period)
        .take_while(move |&y| y < height)
        .map(|y| (y, y + Params::NET_DASH))
}

fn draw_net<S: DrawSurface>(surface: &mut S, config: &Config) -> Result<(), S::Error> {
    let x = config.arena_width / 2.0;
    for (top, bottom) in net_dashes(config) {
        surface.stroke_line(
            Vec2::new(x, top),
            Vec2::new(x, bottom),
            Params::NET_LINE_WIDTH,
            config.net_color,
        )?;
    }
    Ok(())
}

fn draw_paddle<S: DrawSurface>(surface: &mut S, paddle: &Paddle) -> Result<(), S::Error> {
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, paddle.color)
}

/// Circle inscribed in the ball's bounding box
fn draw_ball<S: DrawSurface>(surface: &mut S, ball: &Ball) -> Result<(), S::Error> {
    let radius = ball.size / 2.0;
    surface.fill_circle(ball.pos + Vec2::splat(radius), radius, ball.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawCall, RecordingSurface};
    use game_core::{Game, ScriptedCoin};

    fn snapshot() -> (Snapshot, Config) {
        let game = Game::new(Config::new(), ScriptedCoin::default()).unwrap();
        (game.snapshot().unwrap(), game.config().clone())
    }

    #[test]
    fn test_frame_starts_with_full_clear() {
        let (snap, config) = snapshot();
        let mut surface = RecordingSurface::default();

        draw_frame(&mut surface, &snap, &config).unwrap();

        assert_eq!(surface.calls[0], DrawCall::Clear(0.0, 0.0, 800.0, 500.0));
    }

    #[test]
    fn test_net_is_dashed_down_the_middle() {
        let (snap, config) = snapshot();
        let mut surface = RecordingSurface::default();

        draw_frame(&mut surface, &snap, &config).unwrap();

        let lines = surface.lines();
        // 0, 25, ..., 475
        assert_eq!(lines.len(), 20);
        assert_eq!(
            lines[0],
            &DrawCall::Line(Vec2::new(400.0, 0.0), Vec2::new(400.0, 15.0), 2.0, config.net_color)
        );
        assert_eq!(
            lines[19],
            &DrawCall::Line(
                Vec2::new(400.0, 475.0),
                Vec2::new(400.0, 490.0),
                2.0,
                config.net_color
            )
        );
    }

    #[test]
    fn test_net_dashes_cover_partial_heights() {
        let config = Config::with_arena(800.0, 60.0);
        let dashes: Vec<_> = net_dashes(&config).collect();
        assert_eq!(dashes, vec![(0.0, 15.0), (25.0, 40.0), (50.0, 65.0)]);
    }

    #[test]
    fn test_paddles_then_ball_drawn_last() {
        let (snap, config) = snapshot();
        let mut surface = RecordingSurface::default();

        draw_frame(&mut surface, &snap, &config).unwrap();

        let n = surface.calls.len();
        assert_eq!(
            surface.calls[n - 3],
            DrawCall::Rect(0.0, 210.0, 12.0, 80.0, config.player_color)
        );
        assert_eq!(
            surface.calls[n - 2],
            DrawCall::Rect(788.0, 210.0, 12.0, 80.0, config.ai_color)
        );
        assert_eq!(
            surface.calls[n - 1],
            DrawCall::Circle(Vec2::new(400.0, 250.0), 6.0, config.ball_color)
        );
    }

    #[test]
    fn test_ball_drawn_from_current_position() {
        let (mut snap, config) = snapshot();
        snap.ball.pos = Vec2::new(-3.0, 100.0);
        let mut surface = RecordingSurface::default();

        draw_frame(&mut surface, &snap, &config).unwrap();

        assert_eq!(
            surface.calls.last(),
            Some(&DrawCall::Circle(Vec2::new(3.0, 106.0), 6.0, config.ball_color))
        );
    }
}
