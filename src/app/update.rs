use super::*;

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Place the window once the monitor size is known
        if !self.viewport_initialized {
            self.place_window(ctx);
        }

        // Mouse wheel drives our own scroll offset (delegated)
        crate::input::handle_input(self, ctx);

        let mut clicked: Option<usize> = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            clicked = crate::central::render_grid(ui, self).clicked;
        });

        // Deferred so the grid is not borrowed while launching
        if let Some(index) = clicked {
            self.activate(index);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state = WindowState::Closed;
        log::debug!("Window closed");
    }
}

impl LauncherApp {
    fn place_window(&mut self, ctx: &egui::Context) {
        if !self.config.center_on_screen {
            self.viewport_initialized = true;
            return;
        }
        let (monitor, outer) = ctx.input(|i| (i.viewport().monitor_size, i.viewport().outer_rect));
        let Some(monitor) = monitor else { return };
        let window = outer
            .map(|r| r.size())
            .or_else(|| self.config.inner_size.map(|[w, h]| egui::vec2(w, h)))
            .unwrap_or_else(|| ctx.screen_rect().size());
        let taskbar = self.platform.taskbar_height();
        let origin = layout::centered_origin(monitor, window, taskbar);
        log::debug!("Placing {window:?} window at {origin:?} (monitor {monitor:?}, taskbar {taskbar})");
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(origin));
        self.viewport_initialized = true;
    }
}
