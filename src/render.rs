//! Rendering
//!
//! Screens never call macroquad's drawing functions directly. Each frame
//! they fill a `DrawList` from read-only state, and `SpriteAtlas::execute`
//! turns the list into macroquad draw calls. Screen-space coordinates,
//! top-left origin.

use macroquad::logging::{info, warn};
use macroquad::prelude::*;
use crate::game::SpriteKind;

/// Where a label is pinned on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

/// One render operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear(Color),
    /// Sprite stretched to `rect`
    Sprite { kind: SpriteKind, rect: Rect },
    /// Text pinned to an anchor, shifted by `offset`
    Label {
        text: String,
        anchor: Anchor,
        offset: Vec2,
        size: f32,
        color: Color,
    },
}

/// Ordered commands for one frame
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn sprite(&mut self, kind: SpriteKind, rect: Rect) {
        self.commands.push(DrawCommand::Sprite { kind, rect });
    }

    pub fn label(&mut self, text: impl Into<String>, anchor: Anchor, offset: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Label {
            text: text.into(),
            anchor,
            offset,
            size,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all commands, keeping the allocation for the next frame
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Sprites of one kind, in draw order
    pub fn sprites_of(&self, kind: SpriteKind) -> impl Iterator<Item = &Rect> {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::Sprite { kind: k, rect } if *k == kind => Some(rect),
            _ => None,
        })
    }

    /// Label texts, in draw order
    pub fn label_texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Distance between HUD labels and the screen edge
const LABEL_MARGIN: f32 = 12.0;

/// Sprite textures, loaded once per process. Missing files fall back to
/// flat colored boxes so the game stays playable without assets.
pub struct SpriteAtlas {
    player: Option<Texture2D>,
    coin: Option<Texture2D>,
    enemy: Option<Texture2D>,
}

impl SpriteAtlas {
    pub async fn load() -> Self {
        Self {
            player: load_sprite("assets/sprites/player.png").await,
            coin: load_sprite("assets/sprites/coin.png").await,
            enemy: load_sprite("assets/sprites/enemy.png").await,
        }
    }

    fn texture(&self, kind: SpriteKind) -> Option<&Texture2D> {
        match kind {
            SpriteKind::Player => self.player.as_ref(),
            SpriteKind::Coin => self.coin.as_ref(),
            SpriteKind::Enemy => self.enemy.as_ref(),
        }
    }

    /// Execute a draw list against the current macroquad frame
    pub fn execute(&self, list: &DrawList) {
        for cmd in list.commands() {
            match cmd {
                DrawCommand::Clear(color) => clear_background(*color),
                DrawCommand::Sprite { kind, rect } => match self.texture(*kind) {
                    Some(texture) => draw_texture_ex(
                        texture,
                        rect.x,
                        rect.y,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(vec2(rect.w, rect.h)),
                            ..Default::default()
                        },
                    ),
                    None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, fallback_color(*kind)),
                },
                DrawCommand::Label { text, anchor, offset, size, color } => {
                    draw_label(text, *anchor, *offset, *size, *color);
                }
            }
        }
    }
}

async fn load_sprite(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            info!("Loaded sprite {}", path);
            Some(texture)
        }
        Err(e) => {
            warn!("Failed to load sprite {}: {}, drawing a placeholder box", path, e);
            None
        }
    }
}

fn fallback_color(kind: SpriteKind) -> Color {
    match kind {
        SpriteKind::Player => Color::new(0.30, 0.85, 0.35, 1.0),
        SpriteKind::Coin => GOLD,
        SpriteKind::Enemy => Color::new(0.90, 0.20, 0.25, 1.0),
    }
}

fn draw_label(text: &str, anchor: Anchor, offset: Vec2, size: f32, color: Color) {
    let font_size = size.max(1.0) as u16;
    let dims = measure_text(text, None, font_size, 1.0);
    let (x, y) = match anchor {
        Anchor::TopLeft => (LABEL_MARGIN, LABEL_MARGIN + dims.offset_y),
        Anchor::TopRight => (
            screen_width() - dims.width - LABEL_MARGIN,
            LABEL_MARGIN + dims.offset_y,
        ),
        Anchor::Center => (
            (screen_width() - dims.width) / 2.0,
            (screen_height() - dims.height) / 2.0 + dims.offset_y,
        ),
    };
    draw_text(text, x + offset.x, y + offset.y, font_size as f32, color);
}
