//! Render-ready view of the game state

use crate::fsm::AppState;
use game_core::{AnimationClip, GameState, Outcome};
use glam::Vec2;

/// Player sprite as it should be drawn this frame
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub pos: Vec2,
    pub clip: AnimationClip,
    pub frame: u32,
    pub visible: bool,
}

/// A floating number, drawn no wider than its hitbox
#[derive(Clone, Debug, PartialEq)]
pub struct TargetView {
    pub pos: Vec2,
    pub size: Vec2,
    pub text: String,
    pub visible: bool,
}

/// Everything the renderer needs, detached from the ECS world
#[derive(Clone, Debug)]
pub struct Scene {
    pub player: PlayerView,
    pub targets: Vec<TargetView>,
    pub explosion: Option<(Vec2, u32)>,
    pub question: String,
    pub hud: String,
    /// Speed changed this frame
    pub hud_highlight: bool,
    pub banner: Option<&'static str>,
    pub status: Option<String>,
}

impl Scene {
    pub fn from_state(state: &GameState, app: AppState) -> Self {
        let player = state.player();
        let anim = state.player_animation();
        let boom = state.explosion();

        let targets = state
            .targets()
            .into_iter()
            .map(|t| TargetView {
                pos: t.pos,
                size: state.config.target_size(),
                text: t.value.to_string(),
                visible: t.visible,
            })
            .collect();

        let banner = match app {
            AppState::RoundOver | AppState::Prompting => state.round.outcome().map(outcome_banner),
            AppState::Stopped => Some("Thanks for playing!"),
            _ => None,
        };

        Self {
            player: PlayerView {
                pos: player.pos,
                clip: anim.clip,
                frame: anim.frame(),
                visible: player.visible,
            },
            targets,
            explosion: boom.visible.then(|| (boom.pos, boom.frame())),
            question: format!("{} = ?", state.round.question),
            hud: format!(
                "speed {}  |  won {}  lost {}",
                state.speed.0, state.score.wins, state.score.losses
            ),
            hud_highlight: state.events.speed_changed,
            banner,
            status: status_message(app).map(str::to_string),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Status line for app states that need the player's attention
pub fn status_message(app: AppState) -> Option<&'static str> {
    match app {
        AppState::Loading => Some("Loading..."),
        AppState::WaitingForGamepad => Some("Connect a gamepad and press any button"),
        AppState::LoadFailed => Some("Failed to load sprites"),
        _ => None,
    }
}

pub fn outcome_banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Correct!",
        Outcome::Lose => "Wrong answer!",
    }
}

/// Text of the acknowledgment prompt
pub fn prompt_message(outcome: Outcome) -> String {
    format!("{} Play again?", outcome_banner(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsm::{AppAction, AppFsm};
    use game_core::{Config, FrameInput, GamepadSnapshot, PadEvent, Player};

    fn pad(buttons: &[usize]) -> FrameInput {
        let mut held = vec![false; 16];
        for &b in buttons {
            held[b] = true;
        }
        FrameInput::with_snapshot(GamepadSnapshot::new(0, held, [0.0, 0.0]))
    }

    fn connected(seed: u64) -> (GameState, AppFsm) {
        let mut state = GameState::new(Config::new(), seed);
        let mut fsm = AppFsm::new();
        fsm.transition(AppAction::AssetsLoaded);
        state.pad_queue.push(PadEvent::Connected {
            index: 0,
            id: "pad".into(),
        });
        game_core::step(&mut state, &pad(&[]), 0.016);
        fsm.apply_events(&state.events, !state.gamepads.is_empty());
        (state, fsm)
    }

    #[test]
    fn test_scene_reflects_fresh_game() {
        let state = GameState::new(Config::new(), 5);
        let scene = Scene::from_state(&state, AppState::WaitingForGamepad);

        assert_eq!(scene.targets.len(), 4);
        assert!(scene.targets.iter().all(|t| t.visible));
        assert!(scene.targets.iter().all(|t| t.size == state.config.target_size()));
        assert!(scene.player.visible);
        assert_eq!(scene.player.clip, AnimationClip::StandFront);
        assert_eq!(scene.explosion, None);
        assert_eq!(scene.banner, None);
        assert!(scene.question.ends_with(" = ?"));
        assert_eq!(
            scene.status.as_deref(),
            Some("Connect a gamepad and press any button")
        );
    }

    #[test]
    fn test_scene_status_follows_app_state() {
        let state = GameState::new(Config::new(), 5);
        assert_eq!(Scene::from_state(&state, AppState::Playing).status, None);
        assert_eq!(
            Scene::from_state(&state, AppState::LoadFailed).status.as_deref(),
            Some("Failed to load sprites")
        );
        assert_eq!(
            Scene::from_state(&state, AppState::Stopped).banner,
            Some("Thanks for playing!")
        );
    }

    #[test]
    fn test_scene_shows_correct_answer_text() {
        let state = GameState::new(Config::new(), 6);
        let scene = Scene::from_state(&state, AppState::Playing);
        let answer = state.round.answer.to_string();
        assert_eq!(scene.targets.iter().filter(|t| t.text == answer).count(), 1);
    }

    #[test]
    fn test_scene_banner_after_loss() {
        let (mut state, mut fsm) = connected(8);
        assert_eq!(fsm.state(), AppState::Playing);

        let wrong = state.targets().into_iter().find(|t| !t.is_correct).unwrap();
        state.world.get::<&mut Player>(state.player).unwrap().pos = wrong.pos;
        game_core::step(&mut state, &pad(&[]), 0.016);
        fsm.apply_events(&state.events, true);

        let scene = Scene::from_state(&state, fsm.state());
        assert_eq!(fsm.state(), AppState::RoundOver);
        assert_eq!(scene.banner, Some("Wrong answer!"));
        assert!(!scene.player.visible);
        assert_eq!(scene.status, None);
    }

    #[test]
    fn test_hud_highlights_speed_change() {
        let (mut state, fsm) = connected(9);
        assert!(!Scene::from_state(&state, fsm.state()).hud_highlight);

        game_core::step(&mut state, &pad(&[0]), 0.016);
        let scene = Scene::from_state(&state, fsm.state());
        assert!(scene.hud_highlight);
        assert!(scene.hud.starts_with("speed 2"));
    }

    #[test]
    fn test_prompt_message() {
        assert_eq!(prompt_message(Outcome::Win), "Correct! Play again?");
    }
}
