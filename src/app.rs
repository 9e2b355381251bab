use crate::layout;
use crate::platform::PlatformServices;
use crate::presenter::{WindowConfig, WindowState};
use crate::resolver::FolderEntry;
use eframe::egui::{self, TextureHandle};
use std::path::PathBuf;

mod ops;
mod update;

/// A resolved entry whose icon has been uploaded to the GPU.
pub struct Tile {
    pub display_name: String,
    pub caption: String,
    pub source_path: PathBuf,
    pub texture: TextureHandle,
}

pub struct LauncherApp {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) config: WindowConfig,
    pub(crate) platform: Box<dyn PlatformServices>,
    pub(crate) state: WindowState,
    // Scroll position owned here so the wheel handler can drive it
    pub(crate) scroll_offset: f32,
    pub(crate) max_scroll: f32,
    // Runtime
    pub(crate) viewport_initialized: bool,
}

impl LauncherApp {
    pub fn new(
        ctx: &egui::Context,
        entries: Vec<FolderEntry>,
        config: WindowConfig,
        platform: Box<dyn PlatformServices>,
    ) -> Self {
        crate::style::apply_theme(ctx);
        let tiles = entries
            .into_iter()
            .map(|entry| {
                let texture = ctx.load_texture(
                    entry.icon_path.to_string_lossy(),
                    entry.icon,
                    egui::TextureOptions::LINEAR,
                );
                Tile {
                    caption: layout::wrap_caption(&entry.display_name, config.caption_width),
                    display_name: entry.display_name,
                    source_path: entry.source_path,
                    texture,
                }
            })
            .collect();
        Self {
            tiles,
            config,
            platform,
            state: WindowState::Open,
            scroll_offset: 0.0,
            max_scroll: 0.0,
            viewport_initialized: false,
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
