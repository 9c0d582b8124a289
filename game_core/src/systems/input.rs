use crate::{Config, Events, GamepadSnapshot, Gamepads, PadEvent, PadQueue, Params, Speed};

/// Discrete movement flags derived from one stick sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direction {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Only a fully deflected axis counts as a direction
pub fn resolve_direction(axes: [f32; 2]) -> Direction {
    let [x, y] = axes;
    Direction {
        left: x <= -1.0,
        right: x >= 1.0,
        up: y <= -1.0,
        down: y >= 1.0,
    }
}

/// Adjust speed from the increase/decrease buttons held this frame
pub fn apply_speed_buttons(
    speed: &mut Speed,
    snapshot: &GamepadSnapshot,
    config: &Config,
    events: &mut Events,
) {
    let before = speed.0;

    if snapshot.is_pressed(Params::BUTTON_SPEED_UP) && speed.0 < config.speed_max {
        speed.0 += 1;
    }
    if snapshot.is_pressed(Params::BUTTON_SPEED_DOWN) && speed.0 > config.speed_min {
        speed.0 -= 1;
    }

    if speed.0 != before {
        events.speed_changed = true;
        log::debug!("speed {} -> {}", before, speed.0);
    }
}

/// Apply queued connect/disconnect notifications to the registry
pub fn ingest_pad_events(gamepads: &mut Gamepads, queue: &mut PadQueue, events: &mut Events) {
    for event in queue.events.drain(..) {
        match event {
            PadEvent::Connected { index, id } => {
                log::info!("gamepad {} connected: {}", index, id);
                gamepads.connect(index, id);
                events.gamepad_connected = true;
            }
            PadEvent::Disconnected { index } => {
                if gamepads.disconnect(index) {
                    log::info!("gamepad {} disconnected", index);
                    events.gamepad_disconnected = true;
                }
            }
        }
    }
}
