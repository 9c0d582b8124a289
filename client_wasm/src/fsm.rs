//! App State Machine
//!
//! Tracks what the page shell is doing around the simulation: loading assets,
//! waiting for a controller, playing, and the win/lose prompt.

use game_core::Events;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// App states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Loading,
    WaitingForGamepad,
    Playing,
    RoundOver,
    Prompting,
    Stopped,
    LoadFailed,
}

/// Actions that trigger state transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    AssetsLoaded,
    LoadFailed,
    GamepadConnected,
    GamepadDisconnected,
    RoundResolved,
    PromptReady,
    PlayAgain,
    Quit,
}

/// Result of a state transition
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: AppState,
    to_state: AppState,
    action: AppAction,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TransitionResult {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn success(&self) -> bool {
        self.success
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> AppState {
        self.from_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn to_state(&self) -> AppState {
        self.to_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn action(&self) -> AppAction {
        self.action
    }
}

/// App Finite State Machine
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct AppFsm {
    state: AppState,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl AppFsm {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self {
            state: AppState::Loading,
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Current state as string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    pub fn can_transition(&self, action: AppAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: AppAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::debug!("app {:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: AppAction) -> Option<AppState> {
        match (self.state, action) {
            // From Loading
            (AppState::Loading, AppAction::AssetsLoaded) => Some(AppState::WaitingForGamepad),
            (AppState::Loading, AppAction::LoadFailed) => Some(AppState::LoadFailed),

            // From WaitingForGamepad
            (AppState::WaitingForGamepad, AppAction::GamepadConnected) => Some(AppState::Playing),

            // From Playing
            (AppState::Playing, AppAction::GamepadDisconnected) => {
                Some(AppState::WaitingForGamepad)
            }
            (AppState::Playing, AppAction::RoundResolved) => Some(AppState::RoundOver),

            // From RoundOver
            (AppState::RoundOver, AppAction::PromptReady) => Some(AppState::Prompting),

            // From Prompting
            (AppState::Prompting, AppAction::PlayAgain) => Some(AppState::Playing),
            (AppState::Prompting, AppAction::Quit) => Some(AppState::Stopped),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == AppState::Playing
    }

    /// The round is over and waiting on the player
    pub fn is_round_over(&self) -> bool {
        matches!(self.state, AppState::RoundOver | AppState::Prompting)
    }
}

impl AppFsm {
    /// Follow the simulation's events for one frame
    pub fn apply_events(&mut self, events: &Events, pads_connected: bool) {
        if events.gamepad_disconnected && !pads_connected {
            self.transition(AppAction::GamepadDisconnected);
        }
        if self.state == AppState::WaitingForGamepad && pads_connected {
            self.transition(AppAction::GamepadConnected);
        }
        if events.round_won || events.round_lost {
            self.transition(AppAction::RoundResolved);
        }
        if events.prompt_ready {
            self.transition(AppAction::PromptReady);
        }
    }

    /// Record the answer to the play-again prompt
    pub fn answer_prompt(&mut self, play_again: bool, pads_connected: bool) {
        if play_again {
            self.transition(AppAction::PlayAgain);
            if !pads_connected {
                self.transition(AppAction::GamepadDisconnected);
            }
        } else {
            self.transition(AppAction::Quit);
        }
    }
}

impl Default for AppFsm {
    fn default() -> Self {
        Self::new()
    }
}
