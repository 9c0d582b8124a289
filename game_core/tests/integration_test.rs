use game_core::*;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn connected_game() -> GameState {
    let mut state = GameState::new(Config::new(), 777);
    state.pad_queue.push(PadEvent::Connected {
        index: 0,
        id: "Standard Gamepad".into(),
    });
    state
}

fn stick(x: f32, y: f32) -> FrameInput {
    FrameInput::with_snapshot(GamepadSnapshot::new(0, vec![false; 16], [x, y]))
}

fn buttons(pressed: &[usize]) -> FrameInput {
    let mut held = vec![false; 16];
    for &b in pressed {
        held[b] = true;
    }
    FrameInput::with_snapshot(GamepadSnapshot::new(0, held, [0.0, 0.0]))
}

fn place_player(state: &mut GameState, pos: Vec2) {
    state.world.get::<&mut Player>(state.player).unwrap().pos = pos;
}

fn target_where(state: &GameState, correct: bool) -> Target {
    state
        .targets()
        .into_iter()
        .find(|t| t.is_correct == correct)
        .unwrap()
}

#[test]
fn test_idle_without_gamepad() {
    let mut state = GameState::new(Config::new(), 1);
    let start = state.player().pos;

    let loop_state = step(&mut state, &stick(1.0, 0.0), DT);

    assert_eq!(loop_state, LoopState::Idle);
    assert_eq!(state.player().pos, start, "Nothing moves while idle");
}

#[test]
fn test_connect_activates_loop() {
    let mut state = connected_game();
    let loop_state = step(&mut state, &FrameInput::new(), DT);
    assert_eq!(loop_state, LoopState::Active);
    assert!(state.events.gamepad_connected);
}

#[test]
fn test_disconnect_returns_to_idle() {
    let mut state = connected_game();
    step(&mut state, &FrameInput::new(), DT);

    state.pad_queue.push(PadEvent::Disconnected { index: 0 });
    let loop_state = step(&mut state, &stick(1.0, 0.0), DT);
    assert_eq!(loop_state, LoopState::Idle);
    assert!(state.events.gamepad_disconnected);
}

#[test]
fn test_stick_left_moves_by_speed() {
    let mut state = connected_game();
    state.speed = Speed(2);
    place_player(&mut state, Vec2::new(100.0, 400.0));

    step(&mut state, &stick(-1.0, 0.0), DT);

    assert_eq!(state.player().pos, Vec2::new(98.0, 400.0));
    assert_eq!(state.player_animation().clip, AnimationClip::RunLeft);
    assert!(state.player_animation().playing);
}

#[test]
fn test_snapshot_from_other_pad_is_ignored() {
    let mut state = connected_game();
    place_player(&mut state, Vec2::new(500.0, 400.0));
    let input = FrameInput::with_snapshot(GamepadSnapshot::new(3, vec![], [1.0, 0.0]));

    step(&mut state, &input, DT);

    assert_eq!(state.player().pos, Vec2::new(500.0, 400.0));
}

#[test]
fn test_speed_buttons_respect_limits() {
    let mut state = connected_game();
    for _ in 0..40 {
        step(&mut state, &buttons(&[0]), DT);
    }
    assert_eq!(state.speed.0, state.config.speed_max);

    for _ in 0..40 {
        step(&mut state, &buttons(&[3]), DT);
    }
    assert_eq!(state.speed.0, state.config.speed_min);
}

#[test]
fn test_player_stays_on_canvas() {
    let mut state = connected_game();
    state.speed = Speed(state.config.speed_max);
    // Park targets out of the way so the run is not interrupted
    for (_e, target) in state.world.query_mut::<&mut Target>() {
        target.visible = false;
    }

    let max_x = state.config.canvas_width - state.config.player_width;
    let max_y = state.config.canvas_height - state.config.player_height;
    for axes in [[-1.0, 0.0], [0.0, -1.0], [1.0, 0.0], [0.0, 1.0]] {
        for _ in 0..400 {
            step(&mut state, &stick(axes[0], axes[1]), DT);
            let pos = state.player().pos;
            assert!(pos.x >= 0.0 && pos.x <= max_x);
            assert!(pos.y >= 0.0 && pos.y <= max_y);
        }
    }
    assert_eq!(state.player().pos, Vec2::new(max_x, max_y));
}

#[test]
fn test_win_round_then_play_again() {
    let mut state = connected_game();
    let target = target_where(&state, true);
    place_player(&mut state, target.pos);

    let loop_state = step(&mut state, &stick(0.0, 0.0), DT);

    assert!(state.events.round_won);
    assert_eq!(loop_state, LoopState::Idle, "Round pauses on collision");
    assert_eq!(state.round.outcome(), Some(Outcome::Win));
    assert!(state.explosion().visible);
    assert!(!state.targets()[target.slot].visible);

    // Input is ignored while paused
    let frozen = state.player().pos;
    step(&mut state, &stick(1.0, 0.0), DT);
    assert_eq!(state.player().pos, frozen);

    let mut prompted = false;
    for _ in 0..200 {
        step(&mut state, &stick(0.0, 0.0), DT);
        if state.events.prompt_ready {
            prompted = true;
            break;
        }
    }
    assert!(prompted, "Prompt should follow the result delay");

    assert!(acknowledge(&mut state, true));
    assert_eq!(state.loop_state, LoopState::Active);
    assert!(!state.round.is_paused());
    assert_eq!(state.player().pos, state.config.player_spawn());
    assert!(state.targets().iter().all(|t| t.visible));
    assert_eq!(state.targets().iter().filter(|t| t.is_correct).count(), 1);
    assert!(!state.explosion().visible);
    assert_eq!(state.score.wins, 1);
    assert_eq!(state.round.answer, state.round.question.evaluate());
}

#[test]
fn test_lose_round_hides_player() {
    let mut state = connected_game();
    let target = target_where(&state, false);
    place_player(&mut state, target.pos + Vec2::new(5.0, 5.0));

    step(&mut state, &stick(0.0, 0.0), DT);

    assert!(state.events.round_lost);
    assert!(!state.player().visible);
    assert_eq!(state.score.losses, 1);
    assert_eq!(state.round.outcome(), Some(Outcome::Lose));
}

#[test]
fn test_declining_prompt_keeps_round_stopped() {
    let mut state = connected_game();
    let target = target_where(&state, false);
    place_player(&mut state, target.pos);
    step(&mut state, &stick(0.0, 0.0), DT);

    for _ in 0..200 {
        step(&mut state, &FrameInput::new(), DT);
    }
    assert!(acknowledge(&mut state, false));
    assert!(matches!(state.round.phase, RoundPhase::Stopped { .. }));

    let loop_state = step(&mut state, &stick(1.0, 0.0), DT);
    assert_eq!(loop_state, LoopState::Idle);
}

#[test]
fn test_large_dt_is_clamped() {
    let mut state = GameState::new(Config::new(), 3);
    step(&mut state, &FrameInput::new(), 5.0);
    assert!((state.time.dt - Params::MAX_DT).abs() < f32::EPSILON);
}

#[test]
fn test_explosion_plays_every_sheet_frame() {
    let config = Config::new().with_explosion_frames(24);
    let mut state = GameState::new(config, 777);
    state.pad_queue.push(PadEvent::Connected {
        index: 0,
        id: "pad".into(),
    });
    let target = target_where(&state, true);
    place_player(&mut state, target.pos);
    step(&mut state, &stick(0.0, 0.0), DT);
    assert!(state.explosion().visible);

    let mut last_frame = 0;
    while state.explosion().visible {
        last_frame = last_frame.max(state.explosion().frame());
        step(&mut state, &FrameInput::new(), DT);
    }
    assert_eq!(last_frame, 23, "Every frame of the sheet is shown once");
}

#[test]
fn test_huge_operand_override_starts_rounds() {
    for seed in 0..200 {
        let config = Config {
            operand_max: 5000,
            ..Config::new()
        };
        let state = GameState::new(config, seed);
        assert!(state
            .round
            .question
            .operands
            .iter()
            .all(|&o| (0..=Params::OPERAND_LIMIT).contains(&o)));
        assert_eq!(state.round.answer, state.round.question.evaluate());
    }
}
