//! Reusable clickable UI components.
//!
//! Each component renders and registers its own click targets, so the rows a
//! user can tap always match what was drawn.
//!
//! - [`TabBar`]: one row of horizontal tabs (the navbar links).
//! - [`ClickableList`]: vertical list of lines, some of them clickable
//!   (whole rows or wrapped tab strips), rendered through a vertical scroll
//!   offset.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A single row of tabs separated by `separator`.
///
/// ```ignore
/// TabBar::new(" │ ")
///     .tab("Home", active_style, NAV_LINK_BASE)
///     .tab("About", idle_style, NAV_LINK_BASE + 1)
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Columns needed to draw every tab.
    pub fn width(&self) -> u16 {
        let sep = Line::from(self.separator).width();
        let labels: usize = self
            .tabs
            .iter()
            .map(|(label, _, _)| Line::from(format!(" {} ", label)).width())
            .sum();
        (labels + sep * self.tabs.len().saturating_sub(1)) as u16
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::new();
        let mut widths: Vec<(u16, u16)> = Vec::new();

        for (i, (label, style, action_id)) in self.tabs.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, Style::default().fg(Color::DarkGray)));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, action_id));
            spans.push(Span::styled(padded, style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
        cs.register_tab_targets(&widths, sep_width, area.x, area.y, area.width, area.height.max(1));
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Lines paired with the action each clickable one triggers.
///
/// Lines are expected to be pre-wrapped (see [`wrap_words`]) so one line is
/// one screen row; that keeps scroll offsets and target rows exact.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(u16, u16)>,
    tab_rows: Vec<TabRow>,
}

/// One line of tabs inside a [`ClickableList`].
struct TabRow {
    line_idx: u16,
    indent: u16,
    /// `(display_width, action_id)` per tab
    tabs: Vec<(u16, u16)>,
    separator_width: u16,
    width: u16,
}

impl Default for ClickableList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
            tab_rows: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Add a line bound to `action_id`. The binding follows the line if
    /// lines are inserted before it.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    /// Word-wrap `text` to `width` columns with `indent` leading spaces.
    pub fn push_wrapped(&mut self, text: &str, width: u16, indent: u16, style: Style) {
        let pad = " ".repeat(indent as usize);
        for row in wrap_words(text, width.saturating_sub(indent)) {
            self.lines.push(Line::from(Span::styled(format!("{}{}", pad, row), style)));
        }
    }

    /// Tabs laid out left to right after `indent` columns, continuing on a
    /// new line whenever the next one would overflow `width`.
    pub fn push_tabs(
        &mut self,
        tabs: Vec<(String, Style, u16)>,
        separator: &'a str,
        width: u16,
        indent: u16,
    ) {
        let separator_width = Line::from(separator).width() as u16;
        let mut spans: Vec<Span<'a>> = Vec::new();
        let mut row: Vec<(u16, u16)> = Vec::new();
        let mut used = 0u16;

        for (label, style, action_id) in tabs {
            let padded = format!(" {} ", label);
            let w = Line::from(padded.as_str()).width() as u16;
            if !row.is_empty() && indent + used + separator_width + w > width {
                self.push_tab_row(std::mem::take(&mut spans), std::mem::take(&mut row), separator_width, used, indent);
                used = 0;
            }
            if !row.is_empty() {
                spans.push(Span::styled(separator, Style::default().fg(Color::DarkGray)));
                used += separator_width;
            }
            spans.push(Span::styled(padded, style));
            row.push((w, action_id));
            used += w;
        }
        if !row.is_empty() {
            self.push_tab_row(spans, row, separator_width, used, indent);
        }
    }

    fn push_tab_row(
        &mut self,
        mut spans: Vec<Span<'a>>,
        tabs: Vec<(u16, u16)>,
        separator_width: u16,
        width: u16,
        indent: u16,
    ) {
        spans.insert(0, Span::raw(" ".repeat(indent as usize)));
        self.tab_rows.push(TabRow {
            line_idx: self.lines.len() as u16,
            indent,
            tabs,
            separator_width,
            width,
        });
        self.lines.push(Line::from(spans));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register targets for the clickable lines visible in `area` when the
    /// content is scrolled down by `scroll` rows.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, scroll: u16) {
        for &(line_idx, action_id) in &self.actions {
            if line_idx < scroll {
                continue;
            }
            let row = area.y + (line_idx - scroll);
            cs.add_row_target(area, row, action_id);
        }
        for tab_row in &self.tab_rows {
            if tab_row.line_idx < scroll {
                continue;
            }
            let row = area.y + (tab_row.line_idx - scroll);
            if row >= area.y + area.height {
                continue;
            }
            let width = tab_row.width.min(area.width.saturating_sub(tab_row.indent));
            cs.register_tab_targets(
                &tab_row.tabs,
                tab_row.separator_width,
                area.x + tab_row.indent,
                row,
                width,
                1,
            );
        }
    }

    /// Render scrolled by `scroll` rows and register the visible targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState, scroll: u16) {
        self.register_targets(area, cs, scroll);
        let widget = Paragraph::new(self.lines).scroll((scroll, 0));
        f.render_widget(widget, area);
    }
}

/// Greedy word wrap by display width. Words longer than `width` are split.
pub fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_w = 0usize;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let w = Line::from(word.as_str()).width();
            let needed = if current.is_empty() { w } else { current_w + 1 + w };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                current_w = needed;
                break;
            }
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_w = 0;
                continue;
            }
            // A single word wider than the line: hard-split it.
            let split_at = split_index(&word, width);
            let rest = word.split_off(split_at);
            rows.push(word);
            word = rest;
            if word.is_empty() {
                break;
            }
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Byte index of the longest prefix of `s` that fits in `width` columns
/// (at least one char).
fn split_index(s: &str, width: usize) -> usize {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = Line::from(c.to_string()).width();
        if used + w > width && i > 0 {
            return i;
        }
        used += w;
    }
    s.len()
}
