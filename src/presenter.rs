use crate::app::LauncherApp;
use crate::error::PresentError;
use crate::layout::ColumnPolicy;
use crate::platform::PlatformServices;
use crate::resolver::{FolderEntry, ICON_SIZE};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// `None` lets the toolkit size the window.
    pub inner_size: Option<[f32; 2]>,
    pub icon_size: f32,
    /// Gap between tiles, both axes.
    pub padding: f32,
    /// Caption wrap width in characters; 0 disables wrapping.
    pub caption_width: usize,
    /// Scroll distance per wheel notch.
    pub scroll_increment: f32,
    pub columns: ColumnPolicy,
    pub center_on_screen: bool,
}

impl WindowConfig {
    /// Four fixed columns at the toolkit's default size and placement.
    pub fn classic() -> Self {
        Self {
            inner_size: None,
            caption_width: 0,
            columns: ColumnPolicy::Fixed(4),
            center_on_screen: false,
            ..Self::default()
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Folder Contents".to_owned(),
            inner_size: Some([820.0, 620.0]),
            icon_size: ICON_SIZE as f32,
            padding: 10.0,
            caption_width: 15,
            scroll_increment: 60.0,
            columns: ColumnPolicy::Responsive,
            center_on_screen: true,
        }
    }
}

/// Shows resolved entries and blocks until the window is gone.
pub trait Presenter {
    fn present(self, entries: Vec<FolderEntry>) -> Result<WindowState, PresentError>;
}

pub struct EguiPresenter {
    config: WindowConfig,
    platform: Box<dyn PlatformServices>,
}

impl EguiPresenter {
    pub fn new(config: WindowConfig, platform: Box<dyn PlatformServices>) -> Self {
        Self { config, platform }
    }
}

impl Presenter for EguiPresenter {
    fn present(self, entries: Vec<FolderEntry>) -> Result<WindowState, PresentError> {
        if entries.is_empty() {
            log::info!("No icons found in the folder");
            return Ok(WindowState::Closed);
        }

        let Self { config, platform } = self;
        let mut viewport = egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_resizable(true);
        if let Some(size) = config.inner_size {
            viewport = viewport.with_inner_size(size);
        }
        let options = eframe::NativeOptions { viewport, ..Default::default() };

        let app_name = config.title.clone();
        eframe::run_native(
            &app_name,
            options,
            Box::new(move |cc| Ok(Box::new(LauncherApp::new(&cc.egui_ctx, entries, config, platform)))),
        )?;
        Ok(WindowState::Closed)
    }
}
