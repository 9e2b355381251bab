use super::*;

impl LauncherApp {
    /// Opens the file behind tile `index` with the OS default handler.
    ///
    /// Fire and forget: a failed launch is logged and nothing else happens.
    pub(crate) fn activate(&self, index: usize) {
        let Some(tile) = self.tiles.get(index) else { return };
        log::debug!("Opening {}", tile.source_path.display());
        if let Err(e) = self.platform.open(&tile.source_path) {
            log::warn!("Failed to open {}: {e}", tile.source_path.display());
        }
    }

    pub(crate) fn wheel_scrolled(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        self.scroll_offset = layout::scroll_offset_after_wheel(
            self.scroll_offset,
            delta,
            self.config.scroll_increment,
            self.max_scroll,
        );
    }

    /// Columns for the current panel width, leaving room for the scrollbar.
    pub(crate) fn columns_for(&self, panel_width: f32, scrollbar_width: f32) -> usize {
        self.config
            .columns
            .columns(panel_width - scrollbar_width, layout::tile_width(self.config.icon_size), self.config.padding)
    }
}
