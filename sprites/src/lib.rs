//! Sprite-sheet descriptors
//!
//! Parses TexturePacker JSON (both the "hash" and "array" layouts) and maps
//! the player sheet onto the game's animation clips.

use std::collections::{BTreeMap, HashMap};

use game_core::AnimationClip;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("invalid sprite sheet descriptor: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sprite sheet has no frame named `{0}`")]
    MissingFrame(String),
    #[error("sprite sheet contains no frames")]
    NoFrames,
    #[error("animation clip `{0}` resolved to no frames")]
    EmptyClip(&'static str),
}

// ============================================================================
// Descriptor format
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameEntry {
    #[serde(default)]
    filename: Option<String>,
    frame: Rect,
    #[serde(default)]
    rotated: bool,
    #[serde(default)]
    source_size: Option<Size>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FrameTable {
    Hash(HashMap<String, FrameEntry>),
    Array(Vec<FrameEntry>),
}

#[derive(Debug, Clone, Deserialize)]
struct Meta {
    image: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SheetFile {
    frames: FrameTable,
    meta: Meta,
}

// ============================================================================
// Resolved sheet
// ============================================================================

/// One sub-image of the atlas
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub name: String,
    pub rect: Rect,
    pub rotated: bool,
    pub source_size: Size,
}

/// A texture atlas and its named frames
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub image: String,
    frames: BTreeMap<String, Frame>,
}

impl SpriteSheet {
    /// Parse a TexturePacker descriptor
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        let file: SheetFile = serde_json::from_str(json)?;

        let entries: Vec<(String, FrameEntry)> = match file.frames {
            FrameTable::Hash(map) => map.into_iter().collect(),
            FrameTable::Array(list) => list
                .into_iter()
                .enumerate()
                .map(|(i, entry)| {
                    let name = entry.filename.clone().unwrap_or_else(|| i.to_string());
                    (name, entry)
                })
                .collect(),
        };
        if entries.is_empty() {
            return Err(SheetError::NoFrames);
        }

        let frames = entries
            .into_iter()
            .map(|(name, entry)| {
                let source_size = entry.source_size.unwrap_or(Size {
                    w: entry.frame.w,
                    h: entry.frame.h,
                });
                let frame = Frame {
                    name: name.clone(),
                    rect: entry.frame,
                    rotated: entry.rotated,
                    source_size,
                };
                (name, frame)
            })
            .collect();

        Ok(Self {
            image: file.meta.image,
            frames,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, name: &str) -> Result<&Frame, SheetError> {
        self.frames
            .get(name)
            .ok_or_else(|| SheetError::MissingFrame(name.to_string()))
    }

    /// All frames in natural order (`boom-2` before `boom-10`)
    pub fn sequence(&self) -> Vec<Frame> {
        let mut frames: Vec<&Frame> = self.frames.values().collect();
        frames.sort_by(|a, b| natural_key(&a.name).cmp(&natural_key(&b.name)));
        frames.into_iter().cloned().collect()
    }
}

/// Split a frame name into its stem and trailing number
fn natural_key(name: &str) -> (String, Option<u64>, String) {
    let stem = name.rsplit_once('.').map_or(name, |(stem, _ext)| stem);
    let digits_at = stem
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);

    match digits_at {
        Some(i) => (
            stem[..i].to_string(),
            stem[i..].parse().ok(),
            name.to_string(),
        ),
        None => (stem.to_string(), None, name.to_string()),
    }
}

// ============================================================================
// Player clips
// ============================================================================

/// Frame numbers of each player clip within the run sheet
pub fn clip_frame_numbers(clip: AnimationClip) -> Vec<u32> {
    match clip {
        AnimationClip::StandFront => vec![0],
        AnimationClip::StandBack => vec![12],
        AnimationClip::RunRight => (6..=11).collect(),
        AnimationClip::RunLeft => (18..=23).collect(),
        AnimationClip::RunUp => (12..=17).collect(),
        AnimationClip::RunDown => (0..=5).collect(),
    }
}

/// Frames for every player animation clip
#[derive(Debug, Clone)]
pub struct PlayerClips {
    clips: HashMap<AnimationClip, Vec<Frame>>,
}

impl PlayerClips {
    /// Resolve clips from frames named `<prefix><n>.png`
    pub fn from_sheet(sheet: &SpriteSheet, prefix: &str) -> Result<Self, SheetError> {
        let mut clips = HashMap::new();
        for clip in AnimationClip::ALL {
            let frames = clip_frame_numbers(clip)
                .into_iter()
                .map(|n| sheet.frame(&format!("{prefix}{n}.png")).cloned())
                .collect::<Result<Vec<_>, _>>()?;
            if frames.is_empty() {
                return Err(SheetError::EmptyClip(clip.name()));
            }
            clips.insert(clip, frames);
        }
        Ok(Self { clips })
    }

    /// Frame shown for `index` of `clip`, wrapping around
    pub fn frame(&self, clip: AnimationClip, index: u32) -> Option<&Frame> {
        let frames = self.clips.get(&clip)?;
        frames.get(index as usize % frames.len().max(1))
    }

    /// Drawn size of the standing frame, used as the player's collision box
    pub fn frame_size(&self) -> Option<Size> {
        self.frame(AnimationClip::StandFront, 0).map(|f| Size {
            w: f.rect.w,
            h: f.rect.h,
        })
    }
}
