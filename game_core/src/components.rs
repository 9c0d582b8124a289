use glam::Vec2;

/// Player component - the gamepad-controlled sprite
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub visible: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, visible: true }
    }
}

/// Named animation clips of the player sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimationClip {
    StandFront,
    StandBack,
    RunRight,
    RunLeft,
    RunUp,
    RunDown,
}

impl AnimationClip {
    pub const ALL: [AnimationClip; 6] = [
        AnimationClip::StandFront,
        AnimationClip::StandBack,
        AnimationClip::RunRight,
        AnimationClip::RunLeft,
        AnimationClip::RunUp,
        AnimationClip::RunDown,
    ];

    pub fn frame_count(self) -> u32 {
        match self {
            AnimationClip::StandFront | AnimationClip::StandBack => 1,
            _ => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationClip::StandFront => "standFront",
            AnimationClip::StandBack => "standBack",
            AnimationClip::RunRight => "runRight",
            AnimationClip::RunLeft => "runLeft",
            AnimationClip::RunUp => "runUp",
            AnimationClip::RunDown => "runDown",
        }
    }
}

/// Looping sprite animation state
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    pub clip: AnimationClip,
    pub cursor: f32, // Fractional frame position within the clip
    pub playing: bool,
}

impl Animation {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            cursor: 0.0,
            playing: false,
        }
    }

    /// Switch clip, rewinding only when the clip actually changes
    pub fn set_clip(&mut self, clip: AnimationClip) -> bool {
        if self.clip == clip {
            return false;
        }
        self.clip = clip;
        self.cursor = 0.0;
        true
    }

    pub fn play(&mut self) {
        if !self.playing {
            self.playing = true;
        }
    }

    pub fn frame(&self) -> u32 {
        (self.cursor.floor() as u32) % self.clip.frame_count()
    }
}

/// Target component - a floating number the player can collide with
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub slot: usize,
    pub pos: Vec2,
    pub value: i32,
    pub visible: bool,
    pub is_correct: bool,
}

impl Target {
    pub fn new(slot: usize, pos: Vec2) -> Self {
        Self {
            slot,
            pos,
            value: 0,
            visible: true,
            is_correct: false,
        }
    }
}

/// One-shot explosion played where a correct target was hit
#[derive(Debug, Clone, Copy, Default)]
pub struct Explosion {
    pub pos: Vec2,
    pub cursor: f32,
    pub visible: bool,
    pub playing: bool,
}

impl Explosion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, pos: Vec2) {
        self.pos = pos;
        self.cursor = 0.0;
        self.visible = true;
        self.playing = true;
    }

    pub fn hide(&mut self) {
        self.cursor = 0.0;
        self.visible = false;
        self.playing = false;
    }

    pub fn frame(&self) -> u32 {
        self.cursor.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clip_rewinds_only_on_change() {
        let mut anim = Animation::new(AnimationClip::RunLeft);
        anim.cursor = 3.4;

        assert!(!anim.set_clip(AnimationClip::RunLeft));
        assert_eq!(anim.cursor, 3.4, "Same clip keeps its position");

        assert!(anim.set_clip(AnimationClip::RunUp));
        assert_eq!(anim.cursor, 0.0);
    }

    #[test]
    fn test_animation_frame_wraps() {
        let mut anim = Animation::new(AnimationClip::RunDown);
        anim.cursor = 7.2;
        assert_eq!(anim.frame(), 1);

        let mut stand = Animation::new(AnimationClip::StandFront);
        stand.cursor = 5.0;
        assert_eq!(stand.frame(), 0);
    }

    #[test]
    fn test_explosion_start_and_hide() {
        let mut boom = Explosion::new();
        assert!(!boom.visible);
        boom.start(Vec2::new(320.0, 50.0));
        assert!(boom.visible && boom.playing);
        assert_eq!(boom.pos, Vec2::new(320.0, 50.0));
        boom.hide();
        assert!(!boom.visible && !boom.playing);
    }
}
