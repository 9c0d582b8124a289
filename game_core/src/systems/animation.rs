use crate::{Animation, Config, Explosion};
use hecs::World;

/// Advance looping sprite animations by one tick
pub fn advance_animations(world: &mut World, config: &Config) {
    for (_entity, anim) in world.query_mut::<&mut Animation>() {
        if !anim.playing {
            continue;
        }
        let len = anim.clip.frame_count() as f32;
        anim.cursor = (anim.cursor + config.animation_speed) % len;
    }
}

/// Advance the explosion and hide it once its last frame has played
pub fn advance_explosions(world: &mut World, config: &Config) {
    for (_entity, boom) in world.query_mut::<&mut Explosion>() {
        if !boom.playing {
            continue;
        }
        boom.cursor += config.explosion_speed;
        if boom.cursor >= config.explosion_frames as f32 {
            boom.hide();
        }
    }
}
