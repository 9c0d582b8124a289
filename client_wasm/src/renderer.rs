//! Canvas2D renderer

use crate::assets::{Assets, PLAYER_SCALE};
use crate::scene::Scene;
use sprites::Frame;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const TARGET_FONT: &str = "bold 72px Arial";
const HUD_FONT: &str = "24px Arial";
const BANNER_FONT: &str = "bold 64px Arial";

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    assets: Option<Assets>,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            assets: None,
        })
    }

    pub fn set_assets(&mut self, assets: Assets) {
        self.assets = Some(assets);
    }

    pub fn draw(&self, scene: &Scene) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        self.draw_targets(scene);

        if let Some(assets) = &self.assets {
            if let Some((pos, frame)) = scene.explosion {
                if let Some(f) = assets.explosion_frames.get(frame as usize) {
                    self.blit(&assets.explosion_image, f, pos.x, pos.y, 1.0)?;
                }
            }
            if scene.player.visible {
                if let Some(f) = assets
                    .player_clips
                    .frame(scene.player.clip, scene.player.frame)
                {
                    self.blit(
                        &assets.player_image,
                        f,
                        scene.player.pos.x,
                        scene.player.pos.y,
                        PLAYER_SCALE,
                    )?;
                }
            }
        }

        self.draw_hud(scene);
        Ok(())
    }

    /// Plain message screen, used when assets failed to load
    pub fn draw_message(&self, message: &str) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_font(HUD_FONT);
        self.ctx.set_fill_style_str("#b00020");
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(message, self.width / 2.0, self.height / 2.0)
            .ok();
    }

    fn draw_targets(&self, scene: &Scene) {
        self.ctx.set_font(TARGET_FONT);
        self.ctx.set_fill_style_str("red");
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        for target in scene.targets.iter().filter(|t| t.visible) {
            self.ctx
                .fill_text_with_max_width(
                    &target.text,
                    target.pos.x as f64,
                    target.pos.y as f64,
                    target.size.x as f64,
                )
                .ok();
        }
    }

    fn draw_hud(&self, scene: &Scene) {
        self.ctx.set_font(HUD_FONT);
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.set_text_baseline("middle");

        self.ctx.set_text_align("center");
        self.ctx
            .fill_text(&scene.question, self.width / 2.0, self.height - 40.0)
            .ok();

        self.ctx.set_text_align("right");
        if scene.hud_highlight {
            self.ctx.set_fill_style_str("#ffd54f");
        }
        self.ctx
            .fill_text(&scene.hud, self.width - 20.0, self.height - 40.0)
            .ok();

        self.ctx.set_fill_style_str("#ffffff");
        if let Some(status) = &scene.status {
            self.ctx.set_text_align("left");
            self.ctx.fill_text(status, 20.0, self.height - 40.0).ok();
        }

        if let Some(banner) = scene.banner {
            self.ctx.set_font(BANNER_FONT);
            self.ctx.set_text_align("center");
            self.ctx
                .fill_text(banner, self.width / 2.0, self.height / 2.0)
                .ok();
        }
    }

    /// Draw one atlas frame centered on `(x, y)`
    fn blit(
        &self,
        image: &HtmlImageElement,
        frame: &Frame,
        x: f32,
        y: f32,
        scale: f32,
    ) -> Result<(), JsValue> {
        let r = frame.rect;
        let (dw, dh) = (r.w * scale, r.h * scale);
        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                r.x as f64,
                r.y as f64,
                r.w as f64,
                r.h as f64,
                (x - dw / 2.0) as f64,
                (y - dh / 2.0) as f64,
                dw as f64,
                dh as f64,
            )
    }
}
