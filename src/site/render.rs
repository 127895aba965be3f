//! Frame composition: fixed navbar, scrolled page document, mobile menu and
//! the enrollment dialog on top.

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{
    Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    Wrap,
};
use ratzilla::ratatui::Frame;
use tachyonfx::{fx, Duration, Effect, EffectRenderer, Interpolation};

use super::actions::{self, indexed};
use super::sections::{self, push_form};
use super::Site;
use crate::content::{LOGO, SITE_NAME, TAGLINE};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

pub const NAV_HEIGHT: u16 = 3;
const FADE_MS: u32 = 350;
const MODAL_WIDTH: u16 = 64;

/// Render state that outlives a frame but isn't part of the site model.
pub struct Chrome {
    transition: Option<Effect>,
}

impl Default for Chrome {
    fn default() -> Self {
        Self::new()
    }
}

impl Chrome {
    pub fn new() -> Self {
        Self { transition: None }
    }
}

pub fn render(site: &mut Site, chrome: &mut Chrome, f: &mut Frame, cs: &mut ClickState, delta_ms: f64) {
    let area = f.area();
    cs.begin_frame(area.width, area.height);
    let narrow = is_narrow_layout(area.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(NAV_HEIGHT), Constraint::Min(0)])
        .split(area);
    let body = chunks[1];
    let content = Rect {
        width: body.width.saturating_sub(1),
        ..body
    };

    // Lay out first so the scroll clamp and the spy see this frame's rows.
    let mut doc = sections::build(site, content.width, content.height);
    let anchors = std::mem::take(&mut doc.anchors);
    let doc_rows = doc.rows();
    site.apply_layout(anchors, doc_rows, content.height);
    let scroll = site.scroll_row();
    doc.list.render(f, content, cs, scroll);

    let mut scrollbar = ScrollbarState::new(doc_rows.saturating_sub(content.height) as usize)
        .position(scroll as usize);
    f.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .style(Style::default().fg(Color::DarkGray)),
        body,
        &mut scrollbar,
    );

    if site.take_page_entered() {
        chrome.transition = Some(fx::fade_from_fg(Color::Black, (FADE_MS, Interpolation::QuadOut)));
    }
    if let Some(effect) = chrome.transition.as_mut() {
        f.render_effect(effect, content, Duration::from_millis(delta_ms as u32));
        if effect.done() {
            chrome.transition = None;
        }
    }

    render_navbar(site, f, chunks[0], cs, narrow);
    if narrow && site.nav.state.borrow().menu_open() {
        render_mobile_menu(site, f, body, cs);
    }
    if site.modal.is_some() {
        render_modal(site, f, area, cs);
    }
}

fn render_navbar(site: &Site, f: &mut Frame, area: Rect, cs: &mut ClickState, narrow: bool) {
    let nav = site.nav.state.borrow();
    let block = if nav.scrolled() {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Cyan))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    let logo = Span::styled(
        format!(" {LOGO} "),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let full_brand = Line::from(vec![
        logo.clone(),
        Span::styled(
            format!(" {SITE_NAME}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {TAGLINE}"), Style::default().fg(Color::DarkGray)),
    ]);
    let full_width = full_brand.width() as u16;

    let mut tabs = TabBar::new(" ");
    for (i, link) in nav.links().iter().enumerate() {
        let style = if nav.is_active(link) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs = tabs.tab(link.name, style, indexed(actions::NAV_LINK_BASE, i));
    }
    let tabs_width = tabs.width();
    let call = Line::from(Span::styled(" ✆ Call Now ", Style::default().fg(Color::Yellow)));
    let call_width = call.width() as u16;

    let (brand, right, right_action) = if narrow {
        let toggle = if nav.menu_open() { " ✕ Close " } else { " ≡ Menu " };
        let toggle = Line::from(Span::styled(toggle, Style::default().fg(Color::Cyan)));
        let brand = if inner.width >= full_width + toggle.width() as u16 {
            full_brand
        } else {
            Line::from(logo)
        };
        (brand, Some(toggle), actions::MENU_TOGGLE)
    } else {
        let brand = if inner.width > full_width + tabs_width + 1 {
            full_brand
        } else {
            Line::from(logo)
        };
        let call = (inner.width > brand.width() as u16 + tabs_width + call_width + 1).then_some(call);
        (brand, call, actions::CALL_PRIMARY)
    };

    let brand_width = brand.width() as u16;
    let right_width = right.as_ref().map_or(0, |l| l.width() as u16);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(brand_width),
            Constraint::Min(0),
            Constraint::Length(right_width),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(brand), cols[0]);
    cs.add_click_target(cols[0], actions::HOME_LOGO);

    if !narrow {
        let tabs_area = Rect {
            x: cols[1].x + 1,
            width: cols[1].width.saturating_sub(1).min(tabs_width),
            ..cols[1]
        };
        tabs.render(f, tabs_area, cs);
    }
    if let Some(right) = right {
        f.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[2]);
        cs.add_click_target(cols[2], right_action);
    }
}

fn render_mobile_menu(site: &Site, f: &mut Frame, body: Rect, cs: &mut ClickState) {
    let nav = site.nav.state.borrow();
    let mut list = ClickableList::new();
    for (i, link) in nav.links().iter().enumerate() {
        let line = if nav.is_active(link) {
            Line::from(Span::styled(
                format!(" ▸ {}", link.name),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(format!("   {}", link.name), Style::default().fg(Color::Gray)))
        };
        list.push_clickable(line, indexed(actions::NAV_LINK_BASE, i));
    }
    list.push_clickable(
        Line::from(Span::styled("   ✆ Call Now", Style::default().fg(Color::Yellow))),
        actions::CALL_PRIMARY,
    );

    let height = (list.len() as u16 + 2).min(body.height);
    let area = Rect { height, ..body };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    list.render(f, inner, cs, 0);
}

fn render_modal(site: &Site, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let Some(modal) = site.modal.as_ref() else {
        return;
    };
    let submitting = modal.is_submitting();

    f.buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));
    cs.add_click_target(area, actions::MODAL_BACKDROP);

    let width = MODAL_WIDTH.min(area.width.saturating_sub(2));
    let inner_width = width.saturating_sub(2);

    let mut list = ClickableList::new();
    push_form(&mut list, &modal.form, !submitting, actions::MODAL_FIELD_BASE, inner_width);
    list.push_blank();
    let submit_label = if submitting {
        "  ⏳ Submitting... "
    } else {
        "  ✓ Submit Enrollment "
    };
    list.push_clickable(
        Line::from(Span::styled(
            submit_label,
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        actions::SUBMIT_ENROLL,
    );
    list.push_clickable(
        Line::from(Span::styled("  ✕ Cancel ", Style::default().fg(Color::Gray))),
        actions::CLOSE_MODAL,
    );

    let notice = site.modal_notice.as_deref().map(|msg| {
        Paragraph::new(format!("  {msg}"))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
    });
    let notice_height = notice
        .as_ref()
        .map_or(0, |p| p.line_count(inner_width) as u16);

    let wanted = list.len() as u16 + notice_height + 2;
    let height = wanted.min(area.height);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(Span::styled(
            format!(" Enroll in {} ", modal.course),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
    let inner = block.inner(rect);
    f.render_widget(Clear, rect);
    f.render_widget(block, rect);
    cs.add_click_target(rect, actions::MODAL_SURFACE);

    let form_height = inner.height.saturating_sub(notice_height);
    let form_area = Rect {
        height: form_height,
        ..inner
    };
    // Keep the focused field's value row on screen when the dialog is clipped.
    let overflow = (list.len() as u16).saturating_sub(form_height);
    let focus_row = modal.form.focus as u16 * 2 + 1;
    let scroll = (focus_row + 1).saturating_sub(form_height).min(overflow);
    list.render(f, form_area, cs, scroll);

    if let Some(notice) = notice {
        let notice_area = Rect {
            y: inner.y + form_height,
            height: notice_height.min(inner.height),
            ..inner
        };
        f.render_widget(notice, notice_area);
    }
}
