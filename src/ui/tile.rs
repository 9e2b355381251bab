use eframe::egui;
use egui::RichText;

/// One grid cell: the clickable icon with its caption underneath.
///
/// The cell is exactly [`crate::layout::tile_width`] wide; `inner` is the icon button.
pub(crate) fn tile(ui: &mut egui::Ui, tile: &crate::app::Tile, icon_size: f32) -> egui::InnerResponse<egui::Response> {
    let width = crate::layout::tile_width(icon_size);
    ui.allocate_ui_with_layout(egui::vec2(width, icon_size), egui::Layout::top_down(egui::Align::Center), |ui| {
        ui.set_width(width);
        let image = egui::Image::new(&tile.texture).fit_to_exact_size(egui::vec2(icon_size, icon_size));
        let resp = ui
            .add(egui::Button::image(image))
            .on_hover_text(&tile.display_name);
        ui.add(egui::Label::new(RichText::new(&tile.caption).small()).wrap());
        resp
    })
}
