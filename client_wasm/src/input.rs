//! Gamepad input handling

use game_core::GamepadSnapshot;

/// Build a snapshot from raw button states and stick axes
pub fn snapshot_from_raw(index: u32, pressed: Vec<bool>, axes: &[f64]) -> GamepadSnapshot {
    let axis = |i: usize| axes.get(i).copied().unwrap_or(0.0) as f32;
    GamepadSnapshot::new(index, pressed, [axis(0), axis(1)])
}

/// Debug line shown under the canvas, e.g. `0, 3 pressed! | axes -1, 0`
pub fn describe(snapshot: &GamepadSnapshot) -> String {
    let pressed: Vec<String> = snapshot
        .pressed()
        .iter()
        .map(|i| i.to_string())
        .collect();
    format!(
        "{} pressed! | axes {}, {}",
        pressed.join(", "),
        snapshot.axes[0],
        snapshot.axes[1]
    )
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::snapshot_from_raw;
    use game_core::{GamepadSnapshot, PadEvent};
    use wasm_bindgen::JsCast;
    use web_sys::{Gamepad, GamepadButton, GamepadEvent, Navigator};

    /// Sample every connected controller
    pub fn poll_gamepads(navigator: &Navigator) -> Vec<GamepadSnapshot> {
        let pads = match navigator.get_gamepads() {
            Ok(pads) => pads,
            Err(e) => {
                log::warn!("getGamepads failed: {:?}", e);
                return Vec::new();
            }
        };

        pads.iter()
            .filter_map(|value| value.dyn_into::<Gamepad>().ok())
            .filter(|pad| pad.connected())
            .map(|pad| {
                let pressed = pad
                    .buttons()
                    .iter()
                    .map(|b| {
                        b.dyn_into::<GamepadButton>()
                            .map(|b| b.pressed())
                            .unwrap_or(false)
                    })
                    .collect();
                let axes: Vec<f64> = pad.axes().iter().filter_map(|a| a.as_f64()).collect();
                snapshot_from_raw(pad.index(), pressed, &axes)
            })
            .collect()
    }

    /// Translate a `gamepadconnected`/`gamepaddisconnected` event
    pub fn pad_event(event: &GamepadEvent, connected: bool) -> Option<PadEvent> {
        let pad = event.gamepad()?;
        Some(if connected {
            PadEvent::Connected {
                index: pad.index(),
                id: pad.id(),
            }
        } else {
            PadEvent::Disconnected { index: pad.index() }
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::*;
