use std::collections::BTreeMap;

use crate::quiz::Question;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Player speed in pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed(pub u32);

/// Outcome of a resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Lifecycle of one round
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    /// Player is free to move
    Playing,
    /// Collision happened, waiting out the result delay
    Resolved { outcome: Outcome, timer: f32 },
    /// Host should ask the player whether to go again
    AwaitingAck { outcome: Outcome },
    /// Player declined another round
    Stopped { outcome: Outcome },
}

/// Question, answer and pause state of the current round
#[derive(Debug, Clone)]
pub struct RoundState {
    pub question: Question,
    pub answer: i32,
    pub phase: RoundPhase,
    pub number: u32,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.phase != RoundPhase::Playing
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            RoundPhase::Playing => None,
            RoundPhase::Resolved { outcome, .. }
            | RoundPhase::AwaitingAck { outcome }
            | RoundPhase::Stopped { outcome } => Some(outcome),
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            question: Question::default(),
            answer: 0,
            phase: RoundPhase::Playing,
            number: 0,
        }
    }
}

/// Running tally of rounds
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub round_won: bool,
    pub round_lost: bool,
    pub prompt_ready: bool,
    pub speed_changed: bool,
    pub gamepad_connected: bool,
    pub gamepad_disconnected: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-frame sample of one controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub index: u32,
    pub buttons: Vec<bool>,
    pub axes: [f32; 2],
}

impl GamepadSnapshot {
    pub fn new(index: u32, buttons: Vec<bool>, axes: [f32; 2]) -> Self {
        Self {
            index,
            buttons,
            axes,
        }
    }

    pub fn is_pressed(&self, button: usize) -> bool {
        self.buttons.get(button).copied().unwrap_or(false)
    }

    /// Indices of all held buttons
    pub fn pressed(&self) -> Vec<usize> {
        self.buttons
            .iter()
            .enumerate()
            .filter_map(|(i, pressed)| pressed.then_some(i))
            .collect()
    }
}

/// Connect/disconnect notification from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PadEvent {
    Connected { index: u32, id: String },
    Disconnected { index: u32 },
}

/// Queue of pad events waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct PadQueue {
    pub events: Vec<PadEvent>,
}

impl PadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PadEvent) {
        self.events.push(event);
    }
}

/// Connected controllers keyed by gamepad index
#[derive(Debug, Clone, Default)]
pub struct Gamepads {
    pads: BTreeMap<u32, String>,
}

impl Gamepads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, index: u32, id: String) {
        self.pads.insert(index, id);
    }

    pub fn disconnect(&mut self, index: u32) -> bool {
        self.pads.remove(&index).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    /// The controller that drives the player: lowest connected index
    pub fn primary(&self) -> Option<u32> {
        self.pads.keys().next().copied()
    }
}

/// Everything the host hands to one tick
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub snapshots: Vec<GamepadSnapshot>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: GamepadSnapshot) -> Self {
        Self {
            snapshots: vec![snapshot],
        }
    }

    pub fn snapshot(&self, index: u32) -> Option<&GamepadSnapshot> {
        self.snapshots.iter().find(|s| s.index == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_record() {
        let mut score = Score::new();
        score.record(Outcome::Win);
        score.record(Outcome::Win);
        score.record(Outcome::Lose);
        assert_eq!(score.wins, 2);
        assert_eq!(score.losses, 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.round_won = true;
        events.prompt_ready = true;
        events.gamepad_connected = true;

        events.clear();

        assert!(!events.round_won);
        assert!(!events.prompt_ready);
        assert!(!events.gamepad_connected);
    }

    #[test]
    fn test_round_paused_outside_playing() {
        let mut round = RoundState::new();
        assert!(!round.is_paused());
        assert_eq!(round.outcome(), None);

        round.phase = RoundPhase::Resolved {
            outcome: Outcome::Lose,
            timer: 1.0,
        };
        assert!(round.is_paused());
        assert_eq!(round.outcome(), Some(Outcome::Lose));
    }

    #[test]
    fn test_gamepads_primary_is_lowest_index() {
        let mut pads = Gamepads::new();
        assert_eq!(pads.primary(), None);
        pads.connect(2, "pad-b".into());
        pads.connect(1, "pad-a".into());
        assert_eq!(pads.primary(), Some(1));
        assert!(pads.disconnect(1));
        assert_eq!(pads.primary(), Some(2));
        assert!(!pads.disconnect(1), "Already gone");
    }

    #[test]
    fn test_snapshot_pressed() {
        let snap = GamepadSnapshot::new(0, vec![true, false, false, true], [0.0, 0.0]);
        assert_eq!(snap.pressed(), vec![0, 3]);
        assert!(snap.is_pressed(3));
        assert!(!snap.is_pressed(17), "Missing buttons read as released");
    }
}
