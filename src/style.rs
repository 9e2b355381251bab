use eframe::egui;

const DESKTOP: egui::Color32 = egui::Color32::from_rgb(27, 30, 33);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(38, 166, 154);

/// Hover fill behind an icon.
const TILE_HOVER: egui::Color32 = egui::Color32::from_rgb(41, 41, 41);

pub(crate) fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    // Charcoal desktop with a teal accent, like a file manager's icon view
    visuals.panel_fill = DESKTOP;
    visuals.window_fill = DESKTOP;
    visuals.extreme_bg_color = egui::Color32::from_rgb(12, 14, 16);
    visuals.selection.bg_fill = ACCENT;
    visuals.hyperlink_color = ACCENT;

    // Icons sit on the panel color and only light up on hover
    visuals.widgets.inactive.weak_bg_fill = egui::Color32::TRANSPARENT;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    visuals.widgets.hovered.weak_bg_fill = TILE_HOVER;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
    visuals.widgets.active.weak_bg_fill = TILE_HOVER;

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(4.0, 4.0);
    style.text_styles.insert(egui::TextStyle::Body, egui::FontId::new(14.0, egui::FontFamily::Proportional));
    style.text_styles.insert(egui::TextStyle::Small, egui::FontId::new(12.0, egui::FontFamily::Proportional));
    style.visuals = visuals;
    ctx.set_style(style);
}
