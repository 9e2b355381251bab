//! Grid, window and scroll arithmetic. Nothing here touches egui state.

use eframe::egui::{Pos2, Vec2, pos2};

/// Wheel delta (in points) egui reports for one notch of a line-based mouse
/// wheel on native targets.
pub const WHEEL_NOTCH: f32 = 40.0;

/// Width a tile takes beyond its icon: button padding plus breathing room.
pub const TILE_MARGIN: f32 = 12.0;

pub fn tile_width(icon_size: f32) -> f32 {
    icon_size + TILE_MARGIN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Always this many columns.
    Fixed(usize),
    /// As many tiles as fit into the available width.
    Responsive,
}

impl ColumnPolicy {
    pub fn columns(self, available_width: f32, tile_width: f32, padding: f32) -> usize {
        match self {
            ColumnPolicy::Fixed(n) => n.max(1),
            ColumnPolicy::Responsive => columns_for_width(available_width, tile_width, padding),
        }
    }
}

/// `max(1, floor(available / (tile + padding)))`.
///
/// `n` tiles need `n * tile + (n - 1) * padding`, so the result always fits.
pub fn columns_for_width(available_width: f32, tile_width: f32, padding: f32) -> usize {
    let cell = tile_width + padding;
    if !available_width.is_finite() || available_width <= 0.0 || !cell.is_finite() || cell <= 0.0 {
        return 1;
    }
    ((available_width / cell).floor() as usize).max(1)
}

/// Row and column of the tile at `index`.
pub fn grid_position(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index / columns, index % columns)
}

pub fn row_count(entries: usize, columns: usize) -> usize {
    entries.div_ceil(columns.max(1))
}

/// Greedy word wrap at `width` characters. Words longer than a line are split.
pub fn wrap_caption(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_owned();
    }
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        let fits = if line_len == 0 { chars.len() <= width } else { line_len + 1 + chars.len() <= width };
        if fits {
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chars.iter());
            line_len += chars.len();
            continue;
        }
        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        while chars.len() > width {
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        line_len = chars.len();
        line = chars.into_iter().collect();
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines.join("\n")
}

/// Top-left corner that centers `window` on `monitor`, with the vertical
/// center moved up by the space the taskbar reserves.
pub fn centered_origin(monitor: Vec2, window: Vec2, taskbar_height: f32) -> Pos2 {
    let taskbar = if taskbar_height.is_finite() { taskbar_height.max(0.0) } else { 0.0 };
    let x = (monitor.x - window.x) / 2.0;
    let y = (monitor.y - window.y - taskbar) / 2.0;
    pos2(x.max(0.0), y.max(0.0))
}

/// Vertical scroll offset after a wheel event of `delta` points.
///
/// Positive deltas scroll toward the top. Each notch moves by `increment`.
pub fn scroll_offset_after_wheel(offset: f32, delta: f32, increment: f32, max_offset: f32) -> f32 {
    let next = offset - increment * (delta / WHEEL_NOTCH);
    next.clamp(0.0, max_offset.max(0.0))
}
