use glam::Vec2;
use serde::Deserialize;

use crate::Params;

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so a host can deserialize a
/// partial JSON object and only override what it cares about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub target_width: f32,
    pub target_height: f32,
    pub target_row_y: f32,
    pub target_count: usize,
    pub speed_initial: u32,
    pub speed_min: u32,
    pub speed_max: u32,
    pub animation_speed: f32,
    pub explosion_speed: f32,
    pub explosion_frames: u32,
    pub result_delay: f32,
    pub operand_max: i32,
    pub decoy_min: i32,
    pub decoy_max: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            target_width: Params::TARGET_WIDTH,
            target_height: Params::TARGET_HEIGHT,
            target_row_y: Params::TARGET_ROW_Y,
            target_count: Params::TARGET_COUNT,
            speed_initial: Params::SPEED_INITIAL,
            speed_min: Params::SPEED_MIN,
            speed_max: Params::SPEED_MAX,
            animation_speed: Params::ANIMATION_SPEED,
            explosion_speed: Params::EXPLOSION_SPEED,
            explosion_frames: Params::EXPLOSION_FRAMES,
            result_delay: Params::RESULT_DELAY,
            operand_max: Params::OPERAND_MAX,
            decoy_min: Params::DECOY_MIN,
            decoy_max: Params::DECOY_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the player box with the measured sprite frame size
    pub fn with_player_size(mut self, width: f32, height: f32) -> Self {
        self.player_width = width;
        self.player_height = height;
        self
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    pub fn target_size(&self) -> Vec2 {
        Vec2::new(self.target_width, self.target_height)
    }

    /// Start position of the player: its own width/height as coordinates
    pub fn player_spawn(&self) -> Vec2 {
        self.player_size()
    }

    /// Targets are spread evenly on one row, one fifth of the canvas apart
    pub fn target_pos(&self, slot: usize) -> Vec2 {
        let spacing = (self.canvas_width / (self.target_count as f32 + 1.0)).round();
        Vec2::new(spacing * (slot as f32 + 1.0), self.target_row_y)
    }

    /// Frame count of the loaded explosion sheet; an empty sheet keeps the default
    pub fn with_explosion_frames(mut self, frames: u32) -> Self {
        if frames > 0 {
            self.explosion_frames = frames;
        }
        self
    }

    /// Largest operand a question may use, whatever the override asked for
    pub fn operand_ceiling(&self) -> i32 {
        self.operand_max.clamp(0, Params::OPERAND_LIMIT)
    }

    /// Clamp a speed value into the configured range
    pub fn clamp_speed(&self, speed: u32) -> u32 {
        speed.clamp(self.speed_min, self.speed_max.max(self.speed_min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.canvas_width, 1600.0);
        assert_eq!(config.canvas_height, 800.0);
        assert_eq!(config.target_count, 4);
        assert_eq!(config.speed_initial, 1);
        assert_eq!(config.speed_max, 10);
    }

    #[test]
    fn test_config_target_positions() {
        let config = Config::new();
        assert_eq!(config.target_pos(0), Vec2::new(320.0, 50.0));
        assert_eq!(config.target_pos(3), Vec2::new(1280.0, 50.0));
    }

    #[test]
    fn test_config_player_spawn_is_own_size() {
        let config = Config::new().with_player_size(40.0, 70.0);
        assert_eq!(config.player_spawn(), Vec2::new(40.0, 70.0));
    }

    #[test]
    fn test_config_partial_json_override() {
        let config: Config =
            serde_json::from_str(r#"{ "speed_max": 4, "result_delay": 0.5 }"#).unwrap();
        assert_eq!(config.speed_max, 4);
        assert_eq!(config.result_delay, 0.5);
        assert_eq!(config.canvas_width, Params::CANVAS_WIDTH, "Unset fields keep defaults");
    }

    #[test]
    fn test_config_explosion_frames_follow_sheet() {
        assert_eq!(Config::new().with_explosion_frames(24).explosion_frames, 24);
        assert_eq!(Config::new().with_explosion_frames(5).explosion_frames, 5);
        assert_eq!(
            Config::new().with_explosion_frames(0).explosion_frames,
            Params::EXPLOSION_FRAMES,
            "An empty sheet keeps the default length"
        );
    }

    #[test]
    fn test_config_operand_ceiling() {
        let huge: Config = serde_json::from_str(r#"{ "operand_max": 5000 }"#).unwrap();
        assert_eq!(huge.operand_ceiling(), Params::OPERAND_LIMIT);

        let negative = Config {
            operand_max: -3,
            ..Config::new()
        };
        assert_eq!(negative.operand_ceiling(), 0);
        assert_eq!(Config::new().operand_ceiling(), 20);
    }

    #[test]
    fn test_config_clamp_speed() {
        let config = Config::new();
        assert_eq!(config.clamp_speed(50), config.speed_max);
        assert_eq!(config.clamp_speed(5), 5);
    }
}
