//! Active-target resolution strategies.
//!
//! A strategy turns a navigation signal (a scroll position or a route path)
//! into the link that should be highlighted. `NavigationState` owns exactly
//! one strategy, picked when the site is composed.

use super::{ActiveSection, NavLink};

/// Default fixed-header compensation, in pixels.
pub const HEADER_OFFSET_PX: f64 = -80.0;

/// Vertical extent of a page section in document pixels, half-open `[top, bottom)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: &'static str, top: f64, bottom: f64) -> Self {
        Self { id, top, bottom }
    }

    #[cfg(test)]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }
}

/// Something that happened which may move the highlight.
#[derive(Clone, Copy, Debug)]
pub enum NavSignal<'a> {
    Scroll {
        offset: f64,
        sections: &'a [SectionBounds],
    },
    Route(&'a str),
}

pub trait NavStrategy {
    /// Resolve the active target for `signal`.
    ///
    /// `None` means the signal is not one this strategy reacts to and the
    /// current value should be kept. `Some(None)` is an explicit "nothing".
    fn resolve(&self, links: &[NavLink], signal: &NavSignal) -> Option<ActiveSection>;

    /// Value used before the first signal arrives.
    fn initial(&self, links: &[NavLink]) -> ActiveSection {
        links.first().map(|l| l.target)
    }

    fn name(&self) -> &'static str;
}

/// Single-page mode: the section under the (header-adjusted) scroll position.
pub struct ScrollSpy {
    offset: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::with_offset(HEADER_OFFSET_PX)
    }

    pub fn with_offset(offset: f64) -> Self {
        Self { offset }
    }

    /// Section containing `scroll + offset`.
    ///
    /// Above every section resolves to the first one; past the last bottom
    /// keeps the last one. Gaps between sections belong to the section above.
    pub fn section_at(&self, scroll: f64, sections: &[SectionBounds]) -> ActiveSection {
        let probe = scroll + self.offset;
        let mut ordered: Vec<&SectionBounds> = sections.iter().collect();
        ordered.sort_by(|a, b| a.top.total_cmp(&b.top));

        let first = ordered.first()?;
        Some(
            ordered
                .iter()
                .rev()
                .find(|s| s.top <= probe)
                .unwrap_or(first)
                .id,
        )
    }
}

impl NavStrategy for ScrollSpy {
    fn resolve(&self, _links: &[NavLink], signal: &NavSignal) -> Option<ActiveSection> {
        match signal {
            NavSignal::Scroll { offset, sections } => Some(self.section_at(*offset, sections)),
            NavSignal::Route(_) => None,
        }
    }

    fn name(&self) -> &'static str {
        "scroll-spy"
    }
}

/// Multi-page mode: the link whose target path equals the current route.
pub struct RouteMatch;

impl RouteMatch {
    pub fn link_for<'a>(links: &'a [NavLink], path: &str) -> Option<&'a NavLink> {
        links.iter().find(|l| l.target == path)
    }
}

impl NavStrategy for RouteMatch {
    fn resolve(&self, links: &[NavLink], signal: &NavSignal) -> Option<ActiveSection> {
        match signal {
            NavSignal::Route(path) => Some(Self::link_for(links, path).map(|l| l.target)),
            NavSignal::Scroll { .. } => None,
        }
    }

    fn name(&self) -> &'static str {
        "route-match"
    }
}
