use crate::{Animation, AnimationClip, Canvas, Config, Direction, Player, Speed};
use glam::Vec2;
use hecs::World;

/// Move the player one tick along the first direction that is not blocked by
/// the canvas edge. Priority is left, right, up, down.
pub fn move_player(world: &mut World, direction: Direction, speed: Speed, config: &Config) {
    let canvas = Canvas::from_config(config);
    let size = config.player_size();
    let step = speed.0 as f32;

    for (_entity, (player, anim)) in world.query_mut::<(&mut Player, &mut Animation)>() {
        if !player.visible {
            continue;
        }

        let pos = player.pos;
        let (delta, clip) = if direction.left && pos.x > 0.0 {
            (Vec2::new(-step, 0.0), AnimationClip::RunLeft)
        } else if direction.right && pos.x < canvas.max_x(size.x) {
            (Vec2::new(step, 0.0), AnimationClip::RunRight)
        } else if direction.up && pos.y > 0.0 {
            (Vec2::new(0.0, -step), AnimationClip::RunUp)
        } else if direction.down && pos.y < canvas.max_y(size.y) {
            (Vec2::new(0.0, step), AnimationClip::RunDown)
        } else {
            (Vec2::ZERO, AnimationClip::StandFront)
        };

        player.pos = canvas.clamp(pos + delta, size);
        anim.set_clip(clip);
        anim.play();
    }
}
