use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::reset_round;
use crate::*;

/// All state owned by the loop driver
pub struct GameState {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub round: RoundState,
    pub score: Score,
    pub speed: Speed,
    pub events: Events,
    pub gamepads: Gamepads,
    pub pad_queue: PadQueue,
    pub rng: GameRng,
    pub loop_state: LoopState,
    pub player: Entity,
    pub explosion: Entity,
}

impl GameState {
    /// Spawn the player, targets and explosion, then start round one
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let mut round = RoundState::new();
        let mut events = Events::new();

        let player = create_player(&mut world, config.player_spawn());
        for slot in 0..config.target_count {
            create_target(&mut world, slot, config.target_pos(slot));
        }
        let explosion = create_explosion(&mut world);

        reset_round(&mut world, &mut round, &mut rng, &config, &mut events);

        Self {
            world,
            time: Time::new(0.016, 0.0),
            speed: Speed(config.clamp_speed(config.speed_initial)),
            config,
            round,
            score: Score::new(),
            events,
            gamepads: Gamepads::new(),
            pad_queue: PadQueue::new(),
            rng,
            loop_state: LoopState::Idle,
            player,
            explosion,
        }
    }

    pub fn player(&self) -> Player {
        self.world
            .get::<&Player>(self.player)
            .map(|p| *p)
            .unwrap_or_else(|_| Player::new(Vec2::ZERO))
    }

    pub fn player_animation(&self) -> Animation {
        self.world
            .get::<&Animation>(self.player)
            .map(|a| *a)
            .unwrap_or_else(|_| Animation::new(AnimationClip::StandFront))
    }

    pub fn explosion(&self) -> Explosion {
        self.world
            .get::<&Explosion>(self.explosion)
            .map(|e| *e)
            .unwrap_or_default()
    }

    /// Targets ordered by slot
    pub fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = self
            .world
            .query::<&Target>()
            .iter()
            .map(|(_e, t)| *t)
            .collect();
        targets.sort_by_key(|t| t.slot);
        targets
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}
