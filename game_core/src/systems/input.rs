use crate::{Config, Paddle};
use hecs::{Entity, World};

/// Centre the player's paddle on a pointer at playfield-local `pointer_y`.
///
/// Only the paddle's `y` is written; the result is clamped to the arena.
pub fn apply_pointer(world: &mut World, config: &Config, paddle: Entity, pointer_y: f32) {
    if let Ok(paddle) = world.query_one_mut::<&mut Paddle>(paddle) {
        let target = pointer_y - paddle.height / 2.0;
        paddle.y = target.clamp(0.0, config.arena_height - paddle.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Side};

    fn setup() -> (World, Config, Entity) {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, Side::Player, &config);
        (world, config, player)
    }

    fn paddle(world: &World, entity: Entity) -> Paddle {
        *world.get::<&Paddle>(entity).unwrap()
    }

    #[test]
    fn test_pointer_centres_paddle() {
        let (mut world, config, player) = setup();

        apply_pointer(&mut world, &config, player, 150.0);

        assert_eq!(paddle(&world, player).y, 110.0);
        assert_eq!(paddle(&world, player).center_y(), 150.0);
    }

    #[test]
    fn test_pointer_clamped_to_arena() {
        let (mut world, config, player) = setup();

        apply_pointer(&mut world, &config, player, 5.0);
        assert_eq!(paddle(&world, player).y, 0.0);

        apply_pointer(&mut world, &config, player, 10_000.0);
        assert_eq!(paddle(&world, player).y, config.arena_height - config.paddle_height);

        apply_pointer(&mut world, &config, player, -40.0);
        assert_eq!(paddle(&world, player).y, 0.0);
    }

    #[test]
    fn test_pointer_never_moves_x() {
        let (mut world, config, player) = setup();
        let before = paddle(&world, player).x;

        apply_pointer(&mut world, &config, player, 333.0);

        assert_eq!(paddle(&world, player).x, before);
    }

    #[test]
    fn test_pointer_on_despawned_paddle_is_ignored() {
        let (mut world, config, player) = setup();
        world.despawn(player).unwrap();

        apply_pointer(&mut world, &config, player, 100.0);

        assert_eq!(world.len(), 0);
    }
}
