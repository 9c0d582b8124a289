pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod quiz;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use quiz::*;
pub use resources::*;
pub use state::*;
pub use systems::*;

use hecs::World;

/// Whether the loop does anything this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No gamepad, or the round is paused: only timers run
    Idle,
    /// Gamepad connected and round in play
    Active,
}

impl LoopState {
    pub fn resolve(gamepads: &Gamepads, round: &RoundState) -> Self {
        if gamepads.is_empty() || round.is_paused() {
            LoopState::Idle
        } else {
            LoopState::Active
        }
    }
}

/// Run one frame of the game
pub fn step(state: &mut GameState, input: &FrameInput, dt: f32) -> LoopState {
    let dt = dt.clamp(0.0, Params::MAX_DT);
    state.time = Time::new(dt, state.time.now + dt);

    // Clear events at start of frame
    state.events.clear();

    // 1. Apply connect/disconnect notifications
    ingest_pad_events(&mut state.gamepads, &mut state.pad_queue, &mut state.events);

    // 2. Timers run even while idle
    update_round_timer(&mut state.round, dt, &mut state.events);
    advance_explosions(&mut state.world, &state.config);

    // 3. Gameplay
    if LoopState::resolve(&state.gamepads, &state.round) == LoopState::Active {
        let snapshot = state
            .gamepads
            .primary()
            .and_then(|index| input.snapshot(index));

        if let Some(snapshot) = snapshot {
            apply_speed_buttons(&mut state.speed, snapshot, &state.config, &mut state.events);
            let direction = resolve_direction(snapshot.axes);

            if let Some(target) = check_collisions(&state.world, &state.config) {
                resolve_collision(
                    &mut state.world,
                    target,
                    &mut state.round,
                    &mut state.score,
                    &mut state.events,
                    &state.config,
                );
            }

            if !state.round.is_paused() {
                move_player(&mut state.world, direction, state.speed, &state.config);
            }
        }
    }

    // 4. Sprite animation
    advance_animations(&mut state.world, &state.config);

    state.loop_state = LoopState::resolve(&state.gamepads, &state.round);
    state.loop_state
}

/// Answer the play-again prompt raised by `Events::prompt_ready`
pub fn acknowledge(state: &mut GameState, play_again: bool) -> bool {
    state.events.clear();
    let handled = acknowledge_round(
        &mut state.world,
        &mut state.round,
        &mut state.rng,
        &state.config,
        &mut state.events,
        play_again,
    );
    state.loop_state = LoopState::resolve(&state.gamepads, &state.round);
    handled
}

/// Helper to create the player entity
pub fn create_player(world: &mut World, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Player::new(pos), Animation::new(AnimationClip::StandFront)))
}

/// Helper to create a target entity
pub fn create_target(world: &mut World, slot: usize, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Target::new(slot, pos),))
}

/// Helper to create the (hidden) explosion entity
pub fn create_explosion(world: &mut World) -> hecs::Entity {
    world.spawn((Explosion::new(),))
}
