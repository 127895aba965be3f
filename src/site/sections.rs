//! Page documents: every section rendered to pre-wrapped lines, with the row
//! span of each linked section recorded for the scroll-spy.

use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};

use super::actions::{self, indexed};
use super::{Focus, Mode, Notice, Page, Site, SECTION_PAD_ROWS};
use crate::catalog::{categories, CATALOG};
use crate::content::*;
use crate::forms::{FieldKind, Form};
use crate::widgets::ClickableList;

const INDENT: u16 = 2;

/// Row span of a linked section. `content` is the first row after the
/// section's header padding, where a jump lands.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor {
    pub id: &'static str,
    pub top: u16,
    pub content: u16,
    pub bottom: u16,
}

impl Anchor {
    pub fn new(id: &'static str, top: u16, content: u16, bottom: u16) -> Self {
        Self {
            id,
            top,
            content,
            bottom,
        }
    }
}

fn heading() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn body() -> Style {
    Style::default().fg(Color::Gray)
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn accent() -> Style {
    Style::default().fg(Color::Yellow)
}

fn button() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn link() -> Style {
    Style::default().fg(Color::Cyan)
}

pub struct PageDoc {
    pub list: ClickableList<'static>,
    pub anchors: Vec<Anchor>,
    width: u16,
    open: Option<(&'static str, u16, u16)>,
}

impl PageDoc {
    fn new(width: u16) -> Self {
        Self {
            list: ClickableList::new(),
            anchors: Vec::new(),
            width,
            open: None,
        }
    }

    pub fn rows(&self) -> u16 {
        self.list.len() as u16
    }

    /// Start a section. Every section after the first opens with
    /// header-height padding; `id` makes it a scroll-spy target.
    fn begin(&mut self, id: Option<&'static str>) {
        self.close();
        let top = self.rows();
        if top > 0 {
            let rule = "─".repeat(self.width.saturating_sub(2 * INDENT) as usize);
            self.list.push_blank();
            self.list.push_blank();
            self.list.push(Line::from(Span::styled(format!("  {rule}"), muted())));
            for _ in 3..SECTION_PAD_ROWS {
                self.list.push_blank();
            }
        }
        if let Some(id) = id {
            self.open = Some((id, top, self.rows()));
        }
    }

    fn close(&mut self) {
        if let Some((id, top, content)) = self.open.take() {
            self.anchors.push(Anchor::new(id, top, content, self.rows()));
        }
    }

    /// Close the last section and pad the end so the last anchor can still
    /// be scrolled to the top of a `view_rows` viewport.
    fn finish(mut self, view_rows: u16) -> Self {
        self.close();
        if let Some(last) = self.anchors.last() {
            let needed = last.content.saturating_add(view_rows);
            while self.rows() < needed {
                self.list.push_blank();
            }
        }
        self
    }

    fn line(&mut self, text: impl Into<String>, style: Style) {
        self.list.push(Line::from(Span::styled(text.into(), style)));
    }

    fn blank(&mut self) {
        self.list.push_blank();
    }

    fn wrapped(&mut self, text: &str, indent: u16, style: Style) {
        self.list.push_wrapped(text, self.width, indent, style);
    }

    fn action(&mut self, icon: &str, label: &str, action_id: u16) {
        self.list.push_clickable(
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!(" {icon} {label} "), button()),
            ]),
            action_id,
        );
    }

    fn section_title(&mut self, text: &str, intro: &str) {
        self.line(format!("  {text}"), heading());
        self.line(format!("  {}", "━".repeat(Line::from(text).width())), heading());
        self.blank();
        self.wrapped(intro, INDENT, body());
        self.blank();
    }
}

/// Lay out the current page at `width` columns.
pub fn build(site: &Site, width: u16, view_rows: u16) -> PageDoc {
    let mut doc = PageDoc::new(width);
    let page = match site.mode {
        Mode::SinglePage => Page::Home,
        Mode::MultiPage => site.page,
    };
    match page {
        Page::Home => {
            hero(&mut doc);
            about(&mut doc);
            services(&mut doc);
            courses(&mut doc, site);
            testimonials(&mut doc);
            contact(&mut doc, site);
        }
        Page::About => about_page(&mut doc),
        Page::Services => services(&mut doc),
        Page::Courses => {
            courses(&mut doc, site);
            testimonials(&mut doc);
        }
        Page::Contact => contact(&mut doc, site),
        Page::NotFound => not_found(&mut doc),
    }
    footer(&mut doc, site);
    doc.finish(view_rows)
}

fn hero(doc: &mut PageDoc) {
    doc.begin(Some("home"));
    doc.blank();
    doc.line(format!("  ◆ {}", HERO.badge), accent());
    doc.blank();
    doc.wrapped(HERO.headline, INDENT, title());
    doc.blank();
    doc.wrapped(HERO.intro, INDENT, body());
    doc.blank();
    doc.action("▶", "Explore Courses", actions::EXPLORE_COURSES);
    doc.action("✆", "WhatsApp Us", actions::WHATSAPP);
    doc.blank();
    for (value, label) in HERO.stats {
        doc.list.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{value:<5}"), accent().add_modifier(Modifier::BOLD)),
            Span::styled(label.to_string(), body()),
        ]));
    }
    doc.blank();
    for card in HERO.highlights {
        doc.line(format!("  {} {}", card.icon, card.title), title());
        doc.wrapped(card.text, 5, body());
    }
}

fn about(doc: &mut PageDoc) {
    doc.begin(Some("about"));
    doc.section_title("About The Oxford Academy", ABOUT_INTRO);
    about_body(doc);
}

fn about_body(doc: &mut PageDoc) {
    for feature in ABOUT_FEATURES {
        doc.line(format!("  {} {}", feature.icon, feature.title), title());
        doc.wrapped(feature.text, 4, body());
    }
    doc.blank();
    doc.line("  Our Vision", heading());
    doc.wrapped(VISION, INDENT, body().add_modifier(Modifier::ITALIC));
    doc.blank();
    for point in VISION_POINTS {
        doc.wrapped(&format!("✓ {point}"), INDENT, Style::default().fg(Color::Green));
    }
}

fn about_page(doc: &mut PageDoc) {
    doc.begin(Some("about"));
    doc.section_title(
        "About Us",
        "Empowering students since 2015 with quality education and personalized attention",
    );
    doc.line("  Our Story", heading());
    for paragraph in ABOUT_STORY {
        doc.wrapped(paragraph, INDENT, body());
        doc.blank();
    }
    doc.wrapped(&format!("\"{MOTTO}\""), INDENT, accent().add_modifier(Modifier::ITALIC));
    doc.blank();
    about_body(doc);
}

fn services(doc: &mut PageDoc) {
    doc.begin(Some("services"));
    doc.section_title("Our Services", SERVICES_INTRO);
    for (name, text) in SERVICES {
        doc.line(format!("  ● {name}"), title());
        doc.wrapped(text, 4, body());
    }
    doc.blank();
    doc.action("✉", "Enquire Now", actions::ENQUIRE_NOW);
}

fn courses(doc: &mut PageDoc, site: &Site) {
    doc.begin(Some("courses"));
    doc.section_title("Our Courses", COURSES_INTRO);

    let selected = site.courses.selected();
    let tabs = categories(CATALOG)
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if label == selected { button() } else { link() };
            (label.to_string(), style, indexed(actions::CATEGORY_BASE, i))
        })
        .collect();
    doc.list.push_tabs(tabs, " ", doc.width, INDENT);
    doc.blank();

    let visible = site.courses.visible(CATALOG);
    if visible.is_empty() {
        doc.line("  No courses in this category.", muted());
    }
    for course in visible {
        let Some(index) = CATALOG.iter().position(|c| c.title == course.title) else {
            continue;
        };
        doc.line(format!("  {} {}", course.icon, course.title), title());
        doc.line(
            format!("     {} · ★ {:.1}", course.category.label(), course.rating),
            accent(),
        );
        doc.wrapped(course.description, 5, body());
        doc.line(
            format!("     ⏱ {}   👥 {} students", course.duration, course.students),
            muted(),
        );
        doc.wrapped(&course.features.join(" · "), 5, Style::default().fg(Color::Green));
        doc.list.push_clickable(
            Line::from(vec![
                Span::raw("     "),
                Span::styled(" ✎ Enroll Now ", button()),
            ]),
            indexed(actions::ENROLL_BASE, index),
        );
        doc.blank();
    }
}

fn testimonials(doc: &mut PageDoc) {
    doc.begin(None);
    doc.section_title("What Our Students Say", TESTIMONIALS_INTRO);
    for t in TESTIMONIALS {
        doc.line(format!("  {}", "★".repeat(t.rating)), accent());
        doc.wrapped(&format!("“{}”", t.comment), INDENT, body().add_modifier(Modifier::ITALIC));
        doc.line(format!("  — {}, {}", t.name, t.course), muted());
        doc.blank();
    }
}

fn contact(doc: &mut PageDoc, site: &Site) {
    doc.begin(Some("contact"));
    doc.section_title("Get In Touch", CONTACT_INTRO);

    doc.line("  Contact Information", heading());
    doc.line("  📍 Address", title());
    doc.wrapped(ADDRESS, 5, body());
    doc.line("  📞 Phone", title());
    doc.list.push_clickable(Line::from(Span::styled(format!("     {PHONE_PRIMARY}"), link())), actions::CALL_PRIMARY);
    doc.list.push_clickable(Line::from(Span::styled(format!("     {PHONE_SECONDARY}"), link())), actions::CALL_SECONDARY);
    doc.line("  💬 WhatsApp", title());
    doc.list.push_clickable(Line::from(Span::styled("     Chat with us", link())), actions::WHATSAPP);
    doc.blank();

    doc.line("  Send us a Message", heading());
    push_form(
        &mut doc.list,
        &site.contact,
        site.focus == Focus::Contact && !site.is_sending(),
        actions::CONTACT_FIELD_BASE,
        doc.width,
    );
    match &site.notice {
        Some(Notice::Info(msg)) => doc.wrapped(msg, INDENT, Style::default().fg(Color::Green)),
        Some(Notice::Error(msg)) => doc.wrapped(msg, INDENT, Style::default().fg(Color::Red)),
        None => {}
    }
    if site.is_sending() {
        doc.line("   ⏳ Sending... ", muted());
    } else {
        doc.action("➤", "Send Message", actions::SUBMIT_CONTACT);
    }
}

fn footer(doc: &mut PageDoc, site: &Site) {
    doc.begin(None);
    doc.list.push(Line::from(vec![
        Span::styled(format!("  {LOGO} "), button()),
        Span::styled(format!(" {SITE_NAME}"), title()),
        Span::styled(format!("  {TAGLINE}"), muted()),
    ]));
    doc.wrapped(FOOTER_BLURB, INDENT, body());
    doc.blank();

    doc.line("  Quick Links", heading());
    for (i, nav_link) in site.links().iter().enumerate() {
        doc.list.push_clickable(
            Line::from(Span::styled(format!("   › {}", nav_link.name), link())),
            indexed(actions::NAV_LINK_BASE, i),
        );
    }
    doc.blank();

    doc.line("  Popular Courses", heading());
    for course in POPULAR_COURSES {
        doc.list.push_clickable(
            Line::from(Span::styled(format!("   › {course}"), link())),
            actions::EXPLORE_COURSES,
        );
    }
    doc.blank();

    doc.line("  Contact Us", heading());
    doc.wrapped(ADDRESS, 3, body());
    doc.line(format!("   📞 {PHONE_PRIMARY}, {PHONE_SECONDARY}"), body());
    doc.blank();
    doc.wrapped(&copyright(site.year), INDENT, muted());
}

fn not_found(doc: &mut PageDoc) {
    doc.begin(None);
    doc.blank();
    doc.line("  404", heading());
    doc.line("  Page Not Found", title());
    doc.blank();
    doc.wrapped(
        "The page you are looking for doesn't exist or has been moved.",
        INDENT,
        body(),
    );
    doc.blank();
    doc.action("⌂", "Back to Home", actions::BACK_HOME);
}

/// Label and value rows for each field; both rows focus the field on click.
pub fn push_form(list: &mut ClickableList<'static>, form: &Form, active: bool, base: u16, width: u16) {
    for (i, field) in form.fields.iter().enumerate() {
        let focused = active && form.focus == i;
        let id = indexed(base, i);
        let marker = if field.required { " *" } else { "" };
        let label_style = if focused { heading() } else { title() };
        list.push_clickable(
            Line::from(Span::styled(format!("  {}{}", field.label, marker), label_style)),
            id,
        );

        let shown = field.display();
        let (text, style) = if shown.is_empty() {
            (placeholder(field.kind).to_string(), muted())
        } else {
            (tail(shown, width.saturating_sub(8) as usize), body())
        };
        let mut spans = vec![Span::raw(if focused { "  ▸ " } else { "    " })];
        spans.push(Span::styled(text, if focused { style.bg(Color::DarkGray) } else { style }));
        if focused && !matches!(field.kind, FieldKind::Select(_)) {
            spans.push(Span::styled("▏", accent()));
        }
        list.push_clickable(Line::from(spans), id);
    }
}

fn placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Select(_) => "‹ choose with ← → ›",
        FieldKind::Date => "YYYY-MM-DD",
        _ => "",
    }
}

/// The last `max_cols` columns of `s`, so the caret end stays visible.
fn tail(s: &str, max_cols: usize) -> String {
    let mut used = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = Span::raw(c.to_string()).width();
        if used + w > max_cols {
            break;
        }
        used += w;
        start = i;
    }
    s[start..].to_string()
}
