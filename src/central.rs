use eframe::egui;

/// What one pass over the grid produced.
pub(crate) struct GridResponse {
    /// Tile clicked this frame, if any.
    pub clicked: Option<usize>,
    pub columns: usize,
    /// Screen rect of every tile cell, in tile order.
    pub cells: Vec<egui::Rect>,
}

/// Draws every tile into a scrollable grid.
pub(crate) fn render_grid(ui: &mut egui::Ui, app: &mut crate::app::LauncherApp) -> GridResponse {
    let bar_width = ui.spacing().scroll.bar_width;
    let columns = app.columns_for(ui.available_width(), bar_width);
    let icon_size = app.config.icon_size;
    let padding = app.config.padding;
    let mut clicked = None;
    let mut cells = Vec::with_capacity(app.tiles.len());

    let output = egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .vertical_scroll_offset(app.scroll_offset)
        .show(ui, |ui| {
            egui::Grid::new("tiles")
                .num_columns(columns)
                .spacing(egui::vec2(padding, padding))
                .show(ui, |ui| {
                    for (i, tile) in app.tiles.iter().enumerate() {
                        let (_, col) = crate::layout::grid_position(i, columns);
                        let cell = crate::ui::tile(ui, tile, icon_size);
                        if cell.inner.clicked() {
                            clicked = Some(i);
                        }
                        cells.push(cell.response.rect);
                        if col + 1 == columns {
                            ui.end_row();
                        }
                    }
                });
        });

    // The scrollbar can still be dragged, so read the offset back
    app.scroll_offset = output.state.offset.y;
    app.max_scroll = (output.content_size.y - output.inner_rect.height()).max(0.0);
    GridResponse { clicked, columns, cells }
}

#[cfg(test)]
mod tests {
    use crate::app::testing::{launcher, run_frame};
    use crate::layout::{self, ColumnPolicy};
    use crate::presenter::WindowConfig;
    use eframe::egui;

    #[test]
    fn tiles_fit_inside_the_default_window() {
        let ctx = egui::Context::default();
        let mut app = launcher(&ctx, 14, WindowConfig::default());
        run_frame(&ctx, &mut app, Vec::new());
        let (panel, grid) = run_frame(&ctx, &mut app, Vec::new());

        assert!(grid.columns >= 2, "only {} columns", grid.columns);
        assert_eq!(grid.cells.len(), 14);
        let rightmost = grid.cells.iter().map(|r| r.right()).fold(f32::MIN, f32::max);
        assert!(rightmost <= panel.right() + 0.5, "tile ends at {rightmost}, panel at {}", panel.right());
        for cell in &grid.cells {
            assert!((cell.width() - layout::tile_width(app.config.icon_size)).abs() < 0.5);
        }
    }

    #[test]
    fn cells_follow_row_major_placement() {
        let ctx = egui::Context::default();
        let config = WindowConfig { columns: ColumnPolicy::Fixed(4), ..WindowConfig::default() };
        let mut app = launcher(&ctx, 10, config);
        run_frame(&ctx, &mut app, Vec::new());
        let (_, grid) = run_frame(&ctx, &mut app, Vec::new());

        assert_eq!(grid.columns, 4);
        for (i, cell) in grid.cells.iter().enumerate() {
            let (row, col) = layout::grid_position(i, grid.columns);
            let first_in_row = grid.cells[row * grid.columns];
            assert_eq!(cell.top(), first_in_row.top(), "tile {i} not on row {row}");
            if col > 0 {
                assert!(cell.left() > grid.cells[i - 1].right(), "tile {i} overlaps its left neighbour");
            }
            if row > 0 {
                let above = grid.cells[i - grid.columns];
                assert_eq!(cell.left(), above.left(), "tile {i} not in column {col}");
                assert!(cell.top() > above.bottom(), "tile {i} overlaps the row above");
            }
        }
    }
}
