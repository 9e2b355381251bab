use eframe::egui;

/// Takes the wheel input away from egui's scroll areas and applies it to the
/// grid's scroll offset in fixed per-notch steps.
pub(crate) fn handle_input(app: &mut crate::app::LauncherApp, ctx: &egui::Context) {
    let delta = ctx.input_mut(|i| {
        if i.modifiers.command {
            return 0.0;
        }
        i.smooth_scroll_delta = egui::Vec2::ZERO;
        i.raw_scroll_delta.y
    });
    app.wheel_scrolled(delta);
}
