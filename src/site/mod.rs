//! The site session: which layout is active, where the reader is, and what
//! the forms hold.
//!
//! `Site` owns the navigation mount, the scroll source feeding it, the
//! course filter and the forms. Input arrives as [`InputEvent`]s; the
//! renderer reads the state back and reports the document layout it drew
//! through [`Site::apply_layout`].

pub mod actions;
pub mod render;
pub mod sections;

use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::{categories, CourseFilter, CATALOG};
use crate::clock::Countdown;
use crate::content::{PHONE_PRIMARY, PHONE_SECONDARY, WHATSAPP_URL};
use crate::forms::{self, Acknowledgement, EnrollmentModal, Form};
use crate::input::{InputEvent, SpecialKey};
use crate::nav::scroll::ScrollSource;
use crate::nav::strategy::{NavStrategy, RouteMatch, ScrollSpy, SectionBounds};
use crate::nav::{NavLink, NavMount, NavigationState, PAGE_LINKS, SECTION_LINKS};
use crate::web;
use actions::Action;
use sections::Anchor;

/// Nominal height of one document row in pixels. Scroll offsets and section
/// bounds are expressed in this unit so they line up with the header offset.
pub const ROW_PX: f64 = 16.0;

/// Blank rows at the top of every section below the hero, the height of the
/// fixed header (`-HEADER_OFFSET_PX / ROW_PX`).
pub const SECTION_PAD_ROWS: u16 = 5;

const HOME_LINK: usize = 0;
const COURSES_LINK: usize = 3;
const CONTACT_LINK: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Every section on one scrolling page, highlight by scroll position.
    SinglePage,
    /// One page per route, highlight by path.
    MultiPage,
}

impl Mode {
    /// `#/...` selects the routed layout; anything else the single page.
    pub fn from_hash(hash: &str) -> Mode {
        if hash.starts_with("#/") {
            Mode::MultiPage
        } else {
            Mode::SinglePage
        }
    }

    pub fn links(self) -> &'static [NavLink] {
        match self {
            Mode::SinglePage => SECTION_LINKS,
            Mode::MultiPage => PAGE_LINKS,
        }
    }

    fn strategy(self) -> Box<dyn NavStrategy> {
        match self {
            Mode::SinglePage => Box::new(ScrollSpy::new()),
            Mode::MultiPage => Box::new(RouteMatch),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Mode::SinglePage => "single-page",
            Mode::MultiPage => "multi-page",
        }
    }
}

/// Route path carried by a location hash (`#/about` → `/about`).
pub fn route_from_hash(hash: &str) -> String {
    match hash.strip_prefix('#') {
        Some(path) if path.starts_with('/') => path.to_string(),
        _ => "/".to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Courses,
    Contact,
    NotFound,
}

impl Page {
    /// Exact path match, the same rule the navbar highlight uses.
    pub fn from_path(path: &str) -> Page {
        match path {
            "/" => Page::Home,
            "/about" => Page::About,
            "/services" => Page::Services,
            "/courses" => Page::Courses,
            "/contact" => Page::Contact,
            _ => Page::NotFound,
        }
    }

    pub fn shows_contact_form(self) -> bool {
        matches!(self, Page::Home | Page::Contact)
    }

    /// The standalone contact page simulates a request before confirming.
    pub fn delays_contact(self) -> bool {
        self == Page::Contact
    }
}

/// Where typed characters go when no dialog is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Browse,
    Contact,
}

/// Feedback line under a form.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub struct Site {
    pub mode: Mode,
    pub page: Page,
    pub route: String,
    pub scroll: Rc<RefCell<ScrollSource>>,
    pub nav: NavMount,
    pub courses: CourseFilter,
    pub contact: Form,
    pub focus: Focus,
    pub notice: Option<Notice>,
    pub modal: Option<EnrollmentModal>,
    pub modal_notice: Option<String>,
    pub last_ack: Option<Acknowledgement>,
    pub year: u32,
    sending: Option<Countdown>,
    anchors: Vec<Anchor>,
    doc_rows: u16,
    view_rows: u16,
    page_entered: bool,
}

impl Site {
    pub fn new(mode: Mode, route: &str, year: u32) -> Self {
        let scroll = ScrollSource::shared();
        let nav = NavMount::mount(NavigationState::new(mode.links(), mode.strategy()), &scroll);
        let mut site = Self {
            mode,
            page: Page::Home,
            route: "/".to_string(),
            scroll,
            nav,
            courses: CourseFilter::new(),
            contact: Form::contact(),
            focus: Focus::Browse,
            notice: None,
            modal: None,
            modal_notice: None,
            last_ack: None,
            year,
            sending: None,
            anchors: Vec::new(),
            doc_rows: 0,
            view_rows: 0,
            page_entered: false,
        };
        web::log(&format!(
            "{} layout, {} navigation",
            mode.label(),
            site.nav.state.borrow().strategy_name()
        ));
        if mode == Mode::MultiPage {
            site.enter_route(route);
        }
        site
    }

    /// Session for the page URL's hash.
    pub fn from_location_hash(hash: &str, year: u32) -> Self {
        Self::new(Mode::from_hash(hash), &route_from_hash(hash), year)
    }

    pub fn links(&self) -> &'static [NavLink] {
        self.mode.links()
    }

    // ── scrolling ──────────────────────────────────────────────

    pub fn scroll_offset(&self) -> f64 {
        self.scroll.borrow().offset()
    }

    /// First document row shown in the viewport.
    pub fn scroll_row(&self) -> u16 {
        let row = (self.scroll_offset() / ROW_PX).round() as u16;
        row.min(self.max_scroll_row())
    }

    fn max_scroll_row(&self) -> u16 {
        self.doc_rows.saturating_sub(self.view_rows)
    }

    pub fn scroll_to(&mut self, offset: f64) {
        let max = self.max_scroll_row() as f64 * ROW_PX;
        self.scroll.borrow_mut().scroll_to(offset.clamp(0.0, max));
    }

    pub fn scroll_rows(&mut self, rows: i32) {
        self.scroll_to(self.scroll_offset() + rows as f64 * ROW_PX);
    }

    fn scroll_pages(&mut self, pages: i32) {
        let step = self.view_rows.saturating_sub(2).max(1) as i32;
        self.scroll_rows(pages * step);
    }

    /// Dispatch the pending scroll offset to the navigation listener. Called
    /// once per frame.
    pub fn flush_scroll(&self) -> bool {
        self.scroll.borrow_mut().flush()
    }

    /// Record what the renderer laid out: section anchors in document rows,
    /// the document height and the viewport height.
    pub fn apply_layout(&mut self, anchors: Vec<Anchor>, doc_rows: u16, view_rows: u16) {
        let bounds = anchors
            .iter()
            .map(|a| SectionBounds::new(a.id, a.top as f64 * ROW_PX, a.bottom as f64 * ROW_PX))
            .collect();
        self.nav.state.borrow_mut().set_sections(bounds);
        self.anchors = anchors;
        self.doc_rows = doc_rows;
        self.view_rows = view_rows;

        let max = self.max_scroll_row() as f64 * ROW_PX;
        if self.scroll_offset() > max {
            self.scroll.borrow_mut().scroll_to(max);
        }
    }

    /// Scroll so the section's content sits just below the header.
    pub fn jump_to_section(&mut self, id: &str) {
        if let Some(anchor) = self.anchors.iter().find(|a| a.id == id) {
            self.scroll_to(anchor.content as f64 * ROW_PX);
        }
    }

    // ── navigation ─────────────────────────────────────────────

    pub fn follow_link(&mut self, index: usize) {
        let Some(link) = self.links().get(index).copied() else {
            return;
        };
        match self.mode {
            Mode::SinglePage => {
                self.jump_to_section(link.target);
                self.nav.state.borrow_mut().close_menu();
            }
            Mode::MultiPage => self.navigate(link.target),
        }
    }

    /// Route change initiated inside the site; mirrors it into the URL.
    pub fn navigate(&mut self, path: &str) {
        if self.mode != Mode::MultiPage {
            return;
        }
        self.enter_route(path);
        web::set_location_hash(&format!("#{path}"));
    }

    /// Route change coming from the URL (back/forward, edited hash).
    pub fn sync_location(&mut self, hash: &str) {
        if self.mode != Mode::MultiPage {
            return;
        }
        let path = route_from_hash(hash);
        if path != self.route {
            self.enter_route(&path);
        }
    }

    fn enter_route(&mut self, path: &str) {
        self.page = Page::from_path(path);
        self.route = path.to_string();
        self.nav.state.borrow_mut().on_route_change(path);
        self.scroll.borrow_mut().scroll_to(0.0);
        self.focus = Focus::Browse;
        self.notice = None;
        self.sending = None;
        self.page_entered = true;
        match self.page {
            Page::NotFound => web::warn(&format!("no page at {path}")),
            _ => web::log(&format!("navigated to {path}")),
        }
    }

    /// True once after each route change; the renderer starts a transition.
    pub fn take_page_entered(&mut self) -> bool {
        std::mem::take(&mut self.page_entered)
    }

    // ── courses and forms ──────────────────────────────────────

    pub fn select_category(&mut self, index: usize) {
        if let Some(label) = categories(CATALOG).get(index) {
            self.courses.select(label);
        }
    }

    pub fn open_enrollment(&mut self, course_index: usize) {
        if let Some(course) = CATALOG.get(course_index) {
            self.modal = Some(EnrollmentModal::open(course.title));
            self.modal_notice = None;
            self.nav.state.borrow_mut().close_menu();
        }
    }

    /// Close the dialog unless a submission is in flight.
    pub fn close_modal(&mut self) {
        if self.modal.as_ref().is_some_and(|m| !m.is_submitting()) {
            self.modal = None;
            self.modal_notice = None;
        }
    }

    fn submit_enrollment(&mut self) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        match modal.submit() {
            Ok(()) => self.modal_notice = None,
            Err(e) => {
                web::warn(&format!("enrollment rejected: {e}"));
                self.modal_notice = Some(e.to_string());
            }
        }
    }

    /// True while the contact page's simulated request is in flight.
    pub fn is_sending(&self) -> bool {
        self.sending.is_some()
    }

    fn submit_contact(&mut self) {
        if self.is_sending() {
            return;
        }
        if let Err(e) = forms::check_contact(&mut self.contact) {
            web::warn(&format!("contact form rejected: {e}"));
            self.focus = Focus::Contact;
            self.notice = Some(Notice::Error(e.to_string()));
            return;
        }
        if self.page.delays_contact() {
            self.notice = None;
            self.sending = Some(Countdown::new(forms::CONTACT_DELAY_MS));
        } else {
            self.finish_contact();
        }
    }

    fn finish_contact(&mut self) {
        let ack = forms::acknowledge_contact(&mut self.contact);
        self.focus = Focus::Browse;
        self.notice = Some(Notice::Info(ack.message.clone()));
        self.acknowledge("contact form submitted", ack);
    }

    fn acknowledge(&mut self, what: &str, ack: Acknowledgement) {
        web::log(&format!("{what}: {}", ack.record_json));
        web::alert(&ack.message);
        self.last_ack = Some(ack);
    }

    /// Advance time-based state (the contact and enrollment requests).
    pub fn tick(&mut self, delta_ms: f64) {
        if self.sending.as_mut().is_some_and(|c| c.advance(delta_ms)) {
            self.sending = None;
            self.finish_contact();
        }
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if let Some(ack) = modal.tick(delta_ms) {
            self.modal = None;
            self.modal_notice = None;
            self.acknowledge("enrollment submitted", ack);
        }
    }

    // ── input ──────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &InputEvent) {
        if self.modal.is_some() {
            self.handle_modal_input(event);
            return;
        }
        match event {
            InputEvent::Click(id) => self.handle_click(*id),
            InputEvent::Special(SpecialKey::Enter) if self.focus == Focus::Contact => {
                self.submit_contact()
            }
            InputEvent::Special(SpecialKey::Esc) if self.focus == Focus::Contact => {
                self.focus = Focus::Browse
            }
            _ if self.focus == Focus::Contact && self.is_sending() && is_form_key(event) => {}
            _ if self.focus == Focus::Contact && edit_form(&mut self.contact, event) => {}
            InputEvent::Key(c) => self.handle_browse_char(*c),
            InputEvent::Special(key) => self.handle_browse_key(*key),
        }
    }

    fn handle_browse_char(&mut self, c: char) {
        match c {
            'j' => self.scroll_rows(1),
            'k' => self.scroll_rows(-1),
            ' ' => self.scroll_pages(1),
            'g' => self.scroll_to(0.0),
            'G' => self.scroll_to(f64::MAX),
            'm' => self.nav.state.borrow_mut().toggle_menu(),
            '1'..='9' => {
                let index = c as usize - '1' as usize;
                self.follow_link(index);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: SpecialKey) {
        match key {
            SpecialKey::Down => self.scroll_rows(1),
            SpecialKey::Up => self.scroll_rows(-1),
            SpecialKey::PageDown => self.scroll_pages(1),
            SpecialKey::PageUp => self.scroll_pages(-1),
            SpecialKey::Home => self.scroll_to(0.0),
            SpecialKey::End => self.scroll_to(f64::MAX),
            SpecialKey::Esc => self.nav.state.borrow_mut().close_menu(),
            SpecialKey::Tab if self.page.shows_contact_form() => {
                self.focus = Focus::Contact;
                self.follow_link(CONTACT_LINK);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, id: u16) {
        let action = actions::decode(id);
        if !matches!(action, Action::ContactField(_) | Action::Single(actions::SUBMIT_CONTACT)) {
            self.focus = Focus::Browse;
        }
        match action {
            Action::NavLink(i) => self.follow_link(i),
            Action::Category(i) => self.select_category(i),
            Action::Enroll(i) => self.open_enrollment(i),
            Action::ContactField(i) => {
                self.focus = Focus::Contact;
                if !self.is_sending() {
                    self.contact.focus_field(i);
                }
            }
            Action::ModalField(_) => {}
            Action::Single(actions::MENU_TOGGLE) => self.nav.state.borrow_mut().toggle_menu(),
            Action::Single(actions::HOME_LOGO) | Action::Single(actions::BACK_HOME) => {
                self.follow_link(HOME_LINK)
            }
            Action::Single(actions::EXPLORE_COURSES) => self.follow_link(COURSES_LINK),
            Action::Single(actions::ENQUIRE_NOW) => self.follow_link(CONTACT_LINK),
            Action::Single(actions::SUBMIT_CONTACT) => self.submit_contact(),
            Action::Single(actions::CALL_PRIMARY) => web::open_url(&tel_url(PHONE_PRIMARY)),
            Action::Single(actions::CALL_SECONDARY) => web::open_url(&tel_url(PHONE_SECONDARY)),
            Action::Single(actions::WHATSAPP) => web::open_url(WHATSAPP_URL),
            Action::Single(_) => {}
        }
    }

    fn handle_modal_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Special(SpecialKey::Enter) | InputEvent::Click(actions::SUBMIT_ENROLL) => {
                self.submit_enrollment()
            }
            InputEvent::Special(SpecialKey::Esc)
            | InputEvent::Click(actions::CLOSE_MODAL)
            | InputEvent::Click(actions::MODAL_BACKDROP) => self.close_modal(),
            _ => {
                let Some(modal) = self.modal.as_mut() else {
                    return;
                };
                if modal.is_submitting() {
                    return;
                }
                if let InputEvent::Click(id) = event {
                    if let Action::ModalField(i) = actions::decode(*id) {
                        modal.form.focus_field(i);
                    }
                    return;
                }
                edit_form(&mut modal.form, event);
            }
        }
    }
}

/// Keys shared by both forms. Returns false for keys forms don't use.
fn edit_form(form: &mut Form, event: &InputEvent) -> bool {
    match event {
        InputEvent::Key(c) => form.type_char(*c),
        InputEvent::Special(SpecialKey::Tab | SpecialKey::Down) => form.focus_next(),
        InputEvent::Special(SpecialKey::BackTab | SpecialKey::Up) => form.focus_prev(),
        InputEvent::Special(SpecialKey::Left) => form.cycle_option(false),
        InputEvent::Special(SpecialKey::Right) => form.cycle_option(true),
        InputEvent::Special(SpecialKey::Backspace) => form.backspace(),
        _ => return false,
    }
    true
}

/// Whether `edit_form` would consume this event.
fn is_form_key(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::Key(_)
            | InputEvent::Special(
                SpecialKey::Tab
                    | SpecialKey::BackTab
                    | SpecialKey::Up
                    | SpecialKey::Down
                    | SpecialKey::Left
                    | SpecialKey::Right
                    | SpecialKey::Backspace
            )
    )
}

fn tel_url(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:+91{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::strategy::HEADER_OFFSET_PX;

    fn anchors() -> Vec<Anchor> {
        vec![
            Anchor::new("home", 0, 0, 40),
            Anchor::new("about", 40, 45, 90),
            Anchor::new("services", 90, 95, 150),
            Anchor::new("courses", 150, 155, 230),
            Anchor::new("contact", 260, 265, 320),
        ]
    }

    fn single_page() -> Site {
        let mut site = Site::new(Mode::SinglePage, "/", 2026);
        site.apply_layout(anchors(), 400, 30);
        site
    }

    fn click(site: &mut Site, id: u16) {
        site.handle_input(&InputEvent::Click(id));
    }

    fn key(site: &mut Site, k: SpecialKey) {
        site.handle_input(&InputEvent::Special(k));
    }

    fn type_str(site: &mut Site, s: &str) {
        for c in s.chars() {
            site.handle_input(&InputEvent::Key(c));
        }
    }

    fn active(site: &Site) -> Option<&'static str> {
        site.nav.state.borrow().active()
    }

    #[test]
    fn pad_matches_header_offset() {
        assert_eq!(SECTION_PAD_ROWS as f64 * ROW_PX, -HEADER_OFFSET_PX);
    }

    // ── composition ────────────────────────────────────────────

    #[test]
    fn hash_selects_mode_and_route() {
        assert_eq!(Mode::from_hash(""), Mode::SinglePage);
        assert_eq!(Mode::from_hash("#about"), Mode::SinglePage);
        assert_eq!(Mode::from_hash("#/"), Mode::MultiPage);
        assert_eq!(route_from_hash("#/courses"), "/courses");
        assert_eq!(route_from_hash("#about"), "/");
        assert_eq!(route_from_hash(""), "/");

        let site = Site::from_location_hash("#/services", 2026);
        assert_eq!(site.mode, Mode::MultiPage);
        assert_eq!(site.page, Page::Services);
        assert_eq!(active(&site), Some("/services"));
        assert_eq!(site.nav.state.borrow().strategy_name(), "route-match");

        let site = Site::from_location_hash("", 2026);
        assert_eq!(site.nav.state.borrow().strategy_name(), "scroll-spy");
        assert_eq!(active(&site), Some("home"));
    }

    #[test]
    fn page_paths() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/about/"), Page::NotFound);
        assert_eq!(Page::from_path("/contact"), Page::Contact);
        assert_eq!(Page::from_path("/about/team"), Page::NotFound);
        assert_eq!(Page::from_path("/About"), Page::NotFound);
    }

    #[test]
    fn page_and_highlight_agree_on_every_route() {
        for hash in ["#/", "#/about", "#/about/", "#/courses", "#/contact/", "#/nope", "#/About"] {
            let site = Site::from_location_hash(hash, 2026);
            assert_eq!(
                site.page == Page::NotFound,
                active(&site).is_none(),
                "{hash}: page {:?}, active {:?}",
                site.page,
                active(&site)
            );
        }
        let site = Site::from_location_hash("#/about/", 2026);
        assert_eq!(site.page, Page::NotFound);
    }

    // ── single page ────────────────────────────────────────────

    #[test]
    fn nav_link_jumps_and_highlights_section() {
        let mut site = single_page();
        click(&mut site, actions::indexed(actions::NAV_LINK_BASE, 2));
        assert_eq!(site.scroll_row(), 95);
        site.flush_scroll();
        assert_eq!(active(&site), Some("services"));
        assert!(site.nav.state.borrow().scrolled());

        click(&mut site, actions::indexed(actions::NAV_LINK_BASE, 0));
        site.flush_scroll();
        assert_eq!(site.scroll_offset(), 0.0);
        assert_eq!(active(&site), Some("home"));
        assert!(!site.nav.state.borrow().scrolled());
    }

    #[test]
    fn scrolling_through_gap_keeps_previous_section() {
        let mut site = single_page();
        // rows 230..260 hold the testimonials, which have no nav link
        site.scroll_to(250.0 * ROW_PX);
        site.flush_scroll();
        assert_eq!(active(&site), Some("courses"));
    }

    #[test]
    fn scroll_keys_clamp_to_document() {
        let mut site = single_page();
        key(&mut site, SpecialKey::Up);
        assert_eq!(site.scroll_offset(), 0.0);

        key(&mut site, SpecialKey::Down);
        site.handle_input(&InputEvent::Key('j'));
        assert_eq!(site.scroll_row(), 2);

        key(&mut site, SpecialKey::PageDown);
        assert_eq!(site.scroll_row(), 30);

        key(&mut site, SpecialKey::End);
        assert_eq!(site.scroll_row(), 370);
        site.flush_scroll();
        assert_eq!(active(&site), Some("contact"));

        site.handle_input(&InputEvent::Key('g'));
        assert_eq!(site.scroll_row(), 0);
    }

    #[test]
    fn shrinking_document_pulls_scroll_back() {
        let mut site = single_page();
        site.scroll_to(300.0 * ROW_PX);
        site.apply_layout(anchors(), 200, 30);
        assert_eq!(site.scroll_row(), 170);
    }

    #[test]
    fn menu_closes_after_choosing_a_link() {
        let mut site = single_page();
        click(&mut site, actions::MENU_TOGGLE);
        assert!(site.nav.state.borrow().menu_open());
        click(&mut site, actions::indexed(actions::NAV_LINK_BASE, 1));
        assert!(!site.nav.state.borrow().menu_open());
    }

    #[test]
    fn number_keys_follow_links() {
        let mut site = single_page();
        site.handle_input(&InputEvent::Key('4'));
        assert_eq!(site.scroll_row(), 155);
        site.handle_input(&InputEvent::Key('9'));
        assert_eq!(site.scroll_row(), 155);
    }

    // ── multi page ─────────────────────────────────────────────

    #[test]
    fn routes_change_page_and_reset_scroll() {
        let mut site = Site::new(Mode::MultiPage, "/", 2026);
        site.apply_layout(Vec::new(), 200, 30);
        site.scroll_to(40.0 * ROW_PX);
        click(&mut site, actions::MENU_TOGGLE);

        click(&mut site, actions::EXPLORE_COURSES);
        assert_eq!(site.page, Page::Courses);
        assert_eq!(site.route, "/courses");
        assert_eq!(site.scroll_offset(), 0.0);
        assert_eq!(active(&site), Some("/courses"));
        assert!(!site.nav.state.borrow().menu_open());
        assert!(site.take_page_entered());
        assert!(!site.take_page_entered());
    }

    #[test]
    fn unknown_route_clears_highlight_and_back_home_recovers() {
        let mut site = Site::new(Mode::MultiPage, "/", 2026);
        site.sync_location("#/pricing");
        assert_eq!(site.page, Page::NotFound);
        assert_eq!(active(&site), None);

        click(&mut site, actions::BACK_HOME);
        assert_eq!(site.page, Page::Home);
        assert_eq!(active(&site), Some("/"));
    }

    #[test]
    fn sync_ignores_unchanged_hash() {
        let mut site = Site::new(Mode::MultiPage, "/about", 2026);
        site.take_page_entered();
        site.sync_location("#/about");
        assert!(!site.take_page_entered());
    }

    #[test]
    fn single_page_ignores_routes() {
        let mut site = single_page();
        site.navigate("/about");
        site.sync_location("#/about");
        assert_eq!(site.page, Page::Home);
        assert_eq!(site.route, "/");
    }

    // ── courses ────────────────────────────────────────────────

    #[test]
    fn category_clicks_filter_courses() {
        let mut site = single_page();
        let cats = categories(CATALOG);
        let professional = cats.iter().position(|c| *c == "Professional").unwrap();

        click(&mut site, actions::indexed(actions::CATEGORY_BASE, professional));
        let titles: Vec<_> = site.courses.visible(CATALOG).iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Personality Development", "Corporate Communication"]);

        click(&mut site, actions::indexed(actions::CATEGORY_BASE, 0));
        assert_eq!(site.courses.visible(CATALOG).len(), CATALOG.len());

        // out of range leaves the selection alone
        click(&mut site, actions::indexed(actions::CATEGORY_BASE, 42));
        assert_eq!(site.courses.selected(), "All");
    }

    // ── contact form ───────────────────────────────────────────

    #[test]
    fn contact_form_typing_and_submit() {
        let mut site = single_page();
        click(&mut site, actions::indexed(actions::CONTACT_FIELD_BASE, 0));
        assert_eq!(site.focus, Focus::Contact);

        type_str(&mut site, "Anitha");
        key(&mut site, SpecialKey::Tab);
        type_str(&mut site, "anitha@example.com");
        key(&mut site, SpecialKey::Tab);
        type_str(&mut site, "9342624259");
        key(&mut site, SpecialKey::Tab);
        key(&mut site, SpecialKey::Right);
        key(&mut site, SpecialKey::Right);
        assert_eq!(site.contact.value("course"), "spoken-english");
        // typing does not scroll while the form has focus
        type_str(&mut site, "jjj");
        assert_eq!(site.scroll_offset(), 0.0);

        key(&mut site, SpecialKey::Enter);
        let ack = site.last_ack.clone().expect("submitted");
        assert_eq!(ack.message, forms::CONTACT_THANKS);
        assert!(ack.record_json.contains("\"name\":\"Anitha\""));
        assert_eq!(site.contact.value("name"), "");
        assert_eq!(site.focus, Focus::Browse);
        assert_eq!(site.notice, Some(Notice::Info(forms::CONTACT_THANKS.to_string())));
    }

    #[test]
    fn contact_form_rejection_keeps_focus() {
        let mut site = single_page();
        click(&mut site, actions::SUBMIT_CONTACT);
        assert_eq!(site.focus, Focus::Contact);
        assert_eq!(
            site.notice,
            Some(Notice::Error("Full Name is required".to_string()))
        );
        assert!(site.last_ack.is_none());

        key(&mut site, SpecialKey::Esc);
        assert_eq!(site.focus, Focus::Browse);
    }

    fn fill_contact(site: &mut Site) {
        click(site, actions::indexed(actions::CONTACT_FIELD_BASE, 0));
        type_str(site, "Karthik");
        key(site, SpecialKey::Tab);
        type_str(site, "karthik@example.com");
        key(site, SpecialKey::Tab);
        type_str(site, "9876543210");
        key(site, SpecialKey::Tab);
        key(site, SpecialKey::Right);
    }

    #[test]
    fn contact_page_sends_after_delay() {
        let mut site = Site::new(Mode::MultiPage, "/contact", 2026);
        site.apply_layout(Vec::new(), 120, 30);
        fill_contact(&mut site);

        click(&mut site, actions::SUBMIT_CONTACT);
        assert!(site.is_sending());
        assert!(site.last_ack.is_none());

        // fields are locked and resubmitting is a no-op while in flight
        type_str(&mut site, "zz");
        key(&mut site, SpecialKey::Backspace);
        click(&mut site, actions::indexed(actions::CONTACT_FIELD_BASE, 0));
        click(&mut site, actions::SUBMIT_CONTACT);
        assert_eq!(site.contact.value("name"), "Karthik");
        assert_eq!(site.contact.value("course"), "ielts");

        site.tick(1000.0);
        site.tick(499.0);
        assert!(site.is_sending());
        assert!(site.last_ack.is_none());

        site.tick(1.0);
        assert!(!site.is_sending());
        let ack = site.last_ack.clone().expect("sent");
        assert_eq!(ack.message, forms::CONTACT_THANKS);
        assert!(ack.record_json.contains("\"name\":\"Karthik\""));
        assert_eq!(site.contact.value("name"), "");
        assert_eq!(site.notice, Some(Notice::Info(forms::CONTACT_THANKS.to_string())));
    }

    #[test]
    fn contact_page_rejects_without_sending() {
        let mut site = Site::new(Mode::MultiPage, "/contact", 2026);
        click(&mut site, actions::SUBMIT_CONTACT);
        assert!(!site.is_sending());
        assert_eq!(
            site.notice,
            Some(Notice::Error("Full Name is required".to_string()))
        );
    }

    #[test]
    fn leaving_contact_page_cancels_send() {
        let mut site = Site::new(Mode::MultiPage, "/contact", 2026);
        fill_contact(&mut site);
        click(&mut site, actions::SUBMIT_CONTACT);
        assert!(site.is_sending());

        site.navigate("/");
        assert!(!site.is_sending());
        site.tick(2000.0);
        assert!(site.last_ack.is_none());
    }

    // ── enrollment ─────────────────────────────────────────────

    fn fill_enrollment(site: &mut Site) {
        type_str(site, "Mohammed Asif");
        key(site, SpecialKey::Tab);
        type_str(site, "1999-08-21");
        key(site, SpecialKey::Tab);
        type_str(site, "asif@example.com");
        key(site, SpecialKey::Tab);
        type_str(site, "7010507288");
        key(site, SpecialKey::Tab);
        key(site, SpecialKey::Right);
        key(site, SpecialKey::Tab);
        type_str(site, "2026-12-01");
    }

    #[test]
    fn enroll_now_opens_modal_for_that_course() {
        let mut site = single_page();
        click(&mut site, actions::indexed(actions::ENROLL_BASE, 2));
        assert_eq!(site.modal.as_ref().map(|m| m.course), Some("Programming Languages"));

        // page shortcuts are inert while the dialog is open
        site.handle_input(&InputEvent::Key('j'));
        assert_eq!(site.scroll_offset(), 0.0);
        assert_eq!(site.modal.as_ref().map(|m| m.form.value("fullName")), Some("j"));

        click(&mut site, actions::MODAL_BACKDROP);
        assert!(site.modal.is_none());
    }

    #[test]
    fn enrollment_submits_after_delay_and_closes() {
        let mut site = single_page();
        click(&mut site, actions::indexed(actions::ENROLL_BASE, 1));
        fill_enrollment(&mut site);
        click(&mut site, actions::SUBMIT_ENROLL);
        assert!(site.modal.as_ref().is_some_and(|m| m.is_submitting()));

        // cannot be dismissed or edited mid-request
        key(&mut site, SpecialKey::Esc);
        type_str(&mut site, "x");
        assert!(site.modal.is_some());

        site.tick(1000.0);
        assert!(site.modal.is_some());
        site.tick(600.0);
        assert!(site.modal.is_none());
        let ack = site.last_ack.clone().expect("enrolled");
        assert_eq!(
            ack.message,
            "Thank you for enrolling in Spoken English! We will contact you soon."
        );
        assert!(ack.record_json.contains("\"education\":\"high-school\""));
    }

    #[test]
    fn enrollment_rejection_shows_error() {
        let mut site = single_page();
        click(&mut site, actions::indexed(actions::ENROLL_BASE, 0));
        click(&mut site, actions::indexed(actions::MODAL_FIELD_BASE, 1));
        type_str(&mut site, "tomorrow");
        key(&mut site, SpecialKey::Enter);
        assert_eq!(site.modal_notice.as_deref(), Some("Full Name is required"));
        assert_eq!(site.modal.as_ref().map(|m| m.form.focus), Some(0));

        click(&mut site, actions::CLOSE_MODAL);
        assert!(site.modal.is_none());
        assert!(site.modal_notice.is_none());
    }

    #[test]
    fn tel_links_strip_spaces() {
        assert_eq!(tel_url("70105 07288"), "tel:+917010507288");
    }
}
