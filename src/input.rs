//! Input normalization and click targets.
//!
//! Keyboard events become [`InputEvent`]s; pointer presses are converted from
//! DOM pixels to terminal cells and hit-tested against the targets the last
//! frame registered.

use ratzilla::ratatui::layout::Rect;

/// Non-printable keys the site reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialKey {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Tab,
    BackTab,
    Enter,
    Backspace,
    Esc,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A printable character.
    Key(char),
    Special(SpecialKey),
    /// A click/tap on a registered target, identified by its action ID.
    Click(u16),
}

#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cells.
    pub rect: Rect,
    pub action_id: u16,
}

/// Targets registered by the render pass, read by the pointer handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Start a new frame: record its size and forget the old targets.
    pub fn begin_frame(&mut self, cols: u16, rows: u16) {
        self.terminal_cols = cols;
        self.terminal_rows = rows;
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        if rect.width > 0 && rect.height > 0 {
            self.targets.push(ClickTarget { rect, action_id });
        }
    }

    /// Full-width single row inside `area`; rows outside it are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Targets for a row of tabs laid out left to right.
    ///
    /// `tabs` holds `(display_width, action_id)` of each padded label, with
    /// `separator_width` columns between neighbours. Each target extends to
    /// the middle of the separators around it, and the outer tabs stretch to
    /// the edges of `total_width`, so the whole strip is clickable.
    pub fn register_tab_targets(
        &mut self,
        tabs: &[(u16, u16)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = tabs.len();
        if n == 0 || total_width == 0 {
            return;
        }
        let mut left = 0u16;
        let mut start = 0u16;
        for (i, &(w, action_id)) in tabs.iter().enumerate() {
            let end = start + w;
            let right = if i == n - 1 {
                total_width
            } else {
                (end + separator_width.div_ceil(2)).min(total_width)
            };
            if right > left {
                self.add_click_target(Rect::new(x + left, y, right - left, height), action_id);
            }
            left = right;
            start = end + separator_width;
        }
    }

    /// Topmost target under the cell. Later registrations are drawn later, so
    /// they win on overlap (the modal over the page, for example).
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action_id)
        })
    }
}

/// Screens narrower than this get the collapsible mobile menu.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Pixel offset inside the grid container → cell index along one axis.
pub fn pixel_to_cell(pixel: f64, extent_px: f64, cells: u16) -> Option<u16> {
    if extent_px <= 0.0 || cells == 0 || pixel < 0.0 {
        return None;
    }
    let cell = (pixel / (extent_px / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}
