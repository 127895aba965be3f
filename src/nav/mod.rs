//! Navigation state: which link is highlighted, whether the page has been
//! scrolled past the header threshold, and whether the mobile menu is open.
//!
//! The highlight is derived by a [`NavStrategy`] picked at composition time
//! (scroll-spy for the single-page layout, route matching for the multi-page
//! one). Everything here is plain data and runs to completion on the UI
//! thread; no DOM access.

pub mod scroll;
pub mod strategy;

use std::cell::RefCell;
use std::rc::Rc;

use scroll::{ScrollSource, ScrollSubscription};
use strategy::{NavSignal, NavStrategy, SectionBounds};

/// Scroll distance (px) after which the navbar switches to its scrolled style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// The highlighted link target, or `None` (e.g. on the not-found page).
pub type ActiveSection = Option<&'static str>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub const fn new(name: &'static str, target: &'static str) -> Self {
        Self { name, target }
    }
}

/// Section anchors of the single-page layout.
pub const SECTION_LINKS: &[NavLink] = &[
    NavLink::new("Home", "home"),
    NavLink::new("About", "about"),
    NavLink::new("Services", "services"),
    NavLink::new("Courses", "courses"),
    NavLink::new("Contact", "contact"),
];

/// Route table of the multi-page layout.
pub const PAGE_LINKS: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::new("About", "/about"),
    NavLink::new("Services", "/services"),
    NavLink::new("Courses", "/courses"),
    NavLink::new("Contact", "/contact"),
];

pub struct NavigationState {
    links: &'static [NavLink],
    strategy: Box<dyn NavStrategy>,
    active: ActiveSection,
    scrolled: bool,
    menu_open: bool,
    /// Latest section layout reported by the renderer (scroll-spy only).
    sections: Vec<SectionBounds>,
}

impl NavigationState {
    pub fn new(links: &'static [NavLink], strategy: Box<dyn NavStrategy>) -> Self {
        let active = strategy.initial(links);
        Self {
            links,
            strategy,
            active,
            scrolled: false,
            menu_open: false,
            sections: Vec::new(),
        }
    }

    pub fn links(&self) -> &'static [NavLink] {
        self.links
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn active(&self) -> ActiveSection {
        self.active
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        self.active == Some(link.target)
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    /// Scroll listener body: updates the scrolled flag and, for strategies
    /// that track scrolling, the highlight.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLLED_THRESHOLD_PX;
        let signal = NavSignal::Scroll {
            offset,
            sections: &self.sections,
        };
        if let Some(active) = self.strategy.resolve(self.links, &signal) {
            self.active = active;
        }
    }

    /// Route change: re-resolve the highlight and close the mobile menu.
    pub fn on_route_change(&mut self, path: &str) {
        if let Some(active) = self.strategy.resolve(self.links, &NavSignal::Route(path)) {
            self.active = active;
        }
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// A mounted navigation component: its state plus the scroll subscription
/// that feeds it. Dropping the mount releases the listener.
pub struct NavMount {
    pub state: Rc<RefCell<NavigationState>>,
    _scroll: ScrollSubscription,
}

impl NavMount {
    pub fn mount(state: NavigationState, source: &Rc<RefCell<ScrollSource>>) -> Self {
        let state = Rc::new(RefCell::new(state));
        let listener_state = Rc::downgrade(&state);
        let sub = ScrollSource::subscribe(source, move |offset| {
            if let Some(s) = listener_state.upgrade() {
                s.borrow_mut().on_scroll(offset);
            }
        });
        Self { state, _scroll: sub }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategy::{RouteMatch, ScrollSpy};

    fn spy_state() -> NavigationState {
        let mut s = NavigationState::new(SECTION_LINKS, Box::new(ScrollSpy::new()));
        s.set_sections(vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 1600.0),
            SectionBounds::new("services", 1600.0, 2400.0),
        ]);
        s
    }

    #[test]
    fn initial_active_is_first_link() {
        let s = spy_state();
        assert_eq!(s.active(), Some("home"));
        assert!(!s.scrolled());
        assert!(!s.menu_open());
    }

    #[test]
    fn scroll_updates_active_and_scrolled() {
        let mut s = spy_state();
        s.on_scroll(30.0);
        assert!(!s.scrolled());
        s.on_scroll(50.0);
        assert!(!s.scrolled());
        s.on_scroll(51.0);
        assert!(s.scrolled());

        s.on_scroll(1000.0);
        assert_eq!(s.active(), Some("about"));
        assert!(s.is_active(&SECTION_LINKS[1]));

        s.on_scroll(0.0);
        assert_eq!(s.active(), Some("home"));
        assert!(!s.scrolled());
    }

    #[test]
    fn empty_layout_gives_none() {
        let mut s = NavigationState::new(SECTION_LINKS, Box::new(ScrollSpy::new()));
        s.on_scroll(300.0);
        assert_eq!(s.active(), None);
    }

    #[test]
    fn spy_keeps_active_on_route_change_but_closes_menu() {
        let mut s = spy_state();
        s.on_scroll(1000.0);
        s.toggle_menu();
        s.on_route_change("/");
        assert_eq!(s.active(), Some("about"));
        assert!(!s.menu_open());
    }

    #[test]
    fn route_mode_tracks_path() {
        let mut s = NavigationState::new(PAGE_LINKS, Box::new(RouteMatch));
        assert_eq!(s.active(), Some("/"));
        s.on_route_change("/courses");
        assert_eq!(s.active(), Some("/courses"));
        s.on_route_change("/nowhere");
        assert_eq!(s.active(), None);
    }

    #[test]
    fn route_mode_scroll_only_sets_flag() {
        let mut s = NavigationState::new(PAGE_LINKS, Box::new(RouteMatch));
        s.on_route_change("/about");
        s.on_scroll(500.0);
        assert!(s.scrolled());
        assert_eq!(s.active(), Some("/about"));
    }

    #[test]
    fn route_change_closes_menu() {
        let mut s = NavigationState::new(PAGE_LINKS, Box::new(RouteMatch));
        s.toggle_menu();
        assert!(s.menu_open());
        s.on_route_change("/services");
        assert!(!s.menu_open());
        // already closed stays closed
        s.on_route_change("/");
        assert!(!s.menu_open());
    }

    #[test]
    fn mount_receives_scroll_and_unmount_releases() {
        let source = ScrollSource::shared();
        let mount = NavMount::mount(spy_state(), &source);
        assert_eq!(source.borrow().listener_count(), 1);

        source.borrow_mut().scroll_to(1700.0);
        source.borrow_mut().flush();
        assert_eq!(mount.state.borrow().active(), Some("services"));
        assert!(mount.state.borrow().scrolled());

        let state = mount.state.clone();
        drop(mount);
        assert_eq!(source.borrow().listener_count(), 0);

        source.borrow_mut().scroll_to(0.0);
        source.borrow_mut().flush();
        assert_eq!(state.borrow().active(), Some("services"));
    }
}
