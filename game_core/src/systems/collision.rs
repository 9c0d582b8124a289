use crate::{Aabb, Config, Player, Target};
use hecs::{Entity, World};

/// Find the first visible target (by slot) overlapping the visible player
pub fn check_collisions(world: &World, config: &Config) -> Option<Entity> {
    let player_box = {
        let mut query = world.query::<&Player>();
        let (_e, player) = query.iter().next()?;
        if !player.visible {
            return None;
        }
        Aabb::from_center_size(player.pos, config.player_size())
    };

    let mut hits: Vec<(usize, Entity)> = world
        .query::<&Target>()
        .iter()
        .filter(|(_e, target)| target.visible)
        .filter(|(_e, target)| {
            player_box.overlaps(&Aabb::from_center_size(target.pos, config.target_size()))
        })
        .map(|(e, target)| (target.slot, e))
        .collect();

    hits.sort_by_key(|(slot, _)| *slot);
    hits.first().map(|(_, e)| *e)
}
