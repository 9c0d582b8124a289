//! Sprite-sheet loading

pub const PLAYER_SHEET_URL: &str = "/assets/trump.json";
pub const EXPLOSION_SHEET_URL: &str = "/assets/explotion.json";
pub const PLAYER_FRAME_PREFIX: &str = "trump_run-";

/// Player sprites are drawn at half their sheet size
pub const PLAYER_SCALE: f32 = 0.5;

/// Resolve an atlas image path against the URL of its descriptor
pub fn resolve_relative(descriptor_url: &str, image: &str) -> String {
    if image.starts_with('/') || image.contains("://") {
        return image.to_string();
    }
    match descriptor_url.rsplit_once('/') {
        Some((dir, _file)) => format!("{}/{}", dir, image),
        None => image.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use sprites::{Frame, PlayerClips, SpriteSheet};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlImageElement, Response};

    /// Loaded sheets and their decoded images
    pub struct Assets {
        pub player_clips: PlayerClips,
        pub player_image: HtmlImageElement,
        pub explosion_frames: Vec<Frame>,
        pub explosion_image: HtmlImageElement,
    }

    impl Assets {
        /// On-screen player box: standing frame at `PLAYER_SCALE`
        pub fn player_size(&self) -> Option<(f32, f32)> {
            self.player_clips
                .frame_size()
                .map(|s| (s.w * PLAYER_SCALE, s.h * PLAYER_SCALE))
        }
    }

    /// Fetch both descriptors and their atlas images
    pub async fn load_assets() -> Result<Assets, JsValue> {
        let player_sheet = load_sheet(PLAYER_SHEET_URL).await?;
        let player_clips = PlayerClips::from_sheet(&player_sheet, PLAYER_FRAME_PREFIX)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let player_image =
            load_image(&resolve_relative(PLAYER_SHEET_URL, &player_sheet.image)).await?;

        let explosion_sheet = load_sheet(EXPLOSION_SHEET_URL).await?;
        let explosion_image =
            load_image(&resolve_relative(EXPLOSION_SHEET_URL, &explosion_sheet.image)).await?;

        log::info!(
            "assets loaded: {} player frames, {} explosion frames",
            player_sheet.len(),
            explosion_sheet.len()
        );

        Ok(Assets {
            player_clips,
            player_image,
            explosion_frames: explosion_sheet.sequence(),
            explosion_image,
        })
    }

    async fn load_sheet(url: &str) -> Result<SpriteSheet, JsValue> {
        let text = fetch_text(url).await?;
        SpriteSheet::from_json(&text).map_err(|e| JsValue::from_str(&format!("{}: {}", url, e)))
    }

    async fn fetch_text(url: &str) -> Result<String, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let response: Response = JsFuture::from(window.fetch_with_str(url))
            .await?
            .dyn_into()?;
        if !response.ok() {
            return Err(JsValue::from_str(&format!(
                "Failed to fetch {}: HTTP {}",
                url,
                response.status()
            )));
        }
        JsFuture::from(response.text()?)
            .await?
            .as_string()
            .ok_or_else(|| JsValue::from_str(&format!("{} is not text", url)))
    }

    async fn load_image(url: &str) -> Result<HtmlImageElement, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(url);
        JsFuture::from(image.decode()).await?;
        Ok(image)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::*;
