/// Game tuning parameters for the quiz arena
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 1600.0;
    pub const CANVAS_HEIGHT: f32 = 800.0;

    // Player (half-scale sprite sheet frame)
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 96.0;

    // Speed in pixels per tick
    pub const SPEED_INITIAL: u32 = 1;
    pub const SPEED_MIN: u32 = 0;
    pub const SPEED_MAX: u32 = 10;

    // Gamepad buttons
    pub const BUTTON_SPEED_UP: usize = 0;
    pub const BUTTON_SPEED_DOWN: usize = 3;

    // Targets
    pub const TARGET_COUNT: usize = 4;
    pub const TARGET_WIDTH: f32 = 120.0;
    pub const TARGET_HEIGHT: f32 = 90.0;
    pub const TARGET_ROW_Y: f32 = 50.0;

    // Quiz
    pub const OPERAND_MAX: i32 = 20;
    // Largest operand that keeps a * b * c inside i32
    pub const OPERAND_LIMIT: i32 = 1000;
    pub const DECOY_MIN: i32 = 10;
    pub const DECOY_MAX: i32 = 99;

    // Animation (frames advanced per tick)
    pub const ANIMATION_SPEED: f32 = 0.167;
    pub const EXPLOSION_SPEED: f32 = 0.5;
    pub const EXPLOSION_FRAMES: u32 = 16;

    // Seconds between a collision and the play-again prompt
    pub const RESULT_DELAY: f32 = 1.5;

    // Time
    pub const MAX_DT: f32 = 0.1;
}
