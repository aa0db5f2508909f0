//! Navigation state for the single-page layout.
//!
//! Everything in here is free of DOM access. Element offsets come in through
//! [`LayoutOracle`], so scroll tracking and menu handling can be exercised
//! without a browser. The header component owns one [`NavigationState`] and
//! forwards scroll, resize and click events into it.

use thiserror::Error;

/// Extra scroll distance accounted for the fixed header bar when deciding
/// which section the reader is looking at.
pub const SCROLL_BIAS: f64 = 100.0;

/// Viewports narrower than this render the overlay drawer.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    label: &'static str,
}

impl Section {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Anchor id of the section element, e.g. "About" -> "about".
    pub fn id(&self) -> String {
        self.label.to_lowercase()
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Page sections in navigation (and document) order.
pub const SECTIONS: [Section; 8] = [
    Section::new("Home"),
    Section::new("About"),
    Section::new("Services"),
    Section::new("Portfolio"),
    Section::new("Experience"),
    Section::new("Skills"),
    Section::new("Blog"),
    Section::new("Contact"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Anything that is not strictly narrower than the breakpoint (including a
    /// NaN measurement) counts as desktop.
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    /// Next visibility of a hover overlay (service cards) after a pointer
    /// interaction. Desktop follows hover, mobile toggles on tap.
    pub fn overlay_after(self, shown: bool, pointer: Pointer) -> bool {
        match (self, pointer) {
            (Self::Desktop, Pointer::Enter) => true,
            (Self::Desktop, Pointer::Leave) => false,
            (Self::Mobile, Pointer::Tap) => !shown,
            _ => shown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Enter,
    Leave,
    Tap,
}

/// Resolves a section anchor to its top offset within the document.
pub trait LayoutOracle {
    fn offset_of(&self, id: &str) -> Option<f64>;
}

impl<F> LayoutOracle for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn offset_of(&self, id: &str) -> Option<f64> {
        self(id)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("no anchor rendered for section: {0}")]
    AnchorMissing(String),
}

/// A smooth scroll the DOM layer should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub section: usize,
    pub top: f64,
}

/// Index of the deepest section scrolled past, if any.
///
/// Sections are scanned last to first and the first one whose top lies at or
/// above `scroll_y + SCROLL_BIAS` wins, so the later section takes a tie.
/// Sections the oracle can't place are skipped.
pub fn active_index(sections: &[Section], scroll_y: f64, layout: &impl LayoutOracle) -> Option<usize> {
    let position = scroll_y.max(0.0) + SCROLL_BIAS;
    sections
        .iter()
        .enumerate()
        .rev()
        .find(|(_, section)| {
            layout
                .offset_of(&section.id())
                .is_some_and(|top| top <= position)
        })
        .map(|(i, _)| i)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    sections: &'static [Section],
    active: usize,
    menu_open: bool,
    viewport: ViewportClass,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::with_sections(&SECTIONS, ViewportClass::default())
    }
}

impl NavigationState {
    pub fn new(width: f64) -> Self {
        Self::with_sections(&SECTIONS, ViewportClass::from_width(width))
    }

    pub fn with_sections(sections: &'static [Section], viewport: ViewportClass) -> Self {
        Self {
            sections,
            active: 0,
            menu_open: false,
            viewport,
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn active(&self) -> Option<Section> {
        self.sections.get(self.active).copied()
    }

    pub fn is_active(&self, section: &Section) -> bool {
        self.active() == Some(*section)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Re-evaluates the active section for a scroll offset. Returns whether it
    /// changed; when nothing qualifies the previous section stays active.
    pub fn track_scroll(&mut self, scroll_y: f64, layout: &impl LayoutOracle) -> bool {
        match active_index(self.sections, scroll_y, layout) {
            Some(i) if i != self.active => {
                self.active = i;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Applies a viewport measurement. Growing out of the mobile layout closes
    /// the drawer so it doesn't reappear open on the next shrink. Returns
    /// whether any state changed.
    pub fn set_viewport_class(&mut self, width: f64) -> bool {
        let next = ViewportClass::from_width(width);
        if next == self.viewport {
            return false;
        }
        if self.viewport.is_mobile() {
            self.menu_open = false;
        }
        self.viewport = next;
        true
    }

    /// Navigates to the section with anchor `id`.
    ///
    /// Unknown ids and sections without a rendered anchor are ignored: no
    /// scroll is requested and the state is untouched. On mobile a successful
    /// navigation also closes the drawer.
    pub fn activate_section(&mut self, id: &str, layout: &impl LayoutOracle) -> Option<ScrollRequest> {
        let request = match self.resolve_target(id, layout) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("ignoring navigation: {e}");
                return None;
            }
        };
        if self.viewport.is_mobile() {
            self.menu_open = false;
        }
        Some(request)
    }

    fn resolve_target(&self, id: &str, layout: &impl LayoutOracle) -> Result<ScrollRequest, NavError> {
        let section = self
            .sections
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| NavError::UnknownSection(id.to_string()))?;
        let top = layout
            .offset_of(id)
            .ok_or_else(|| NavError::AnchorMissing(id.to_string()))?;
        Ok(ScrollRequest { section, top })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const THREE: [Section; 3] = [
        Section::new("Home"),
        Section::new("About"),
        Section::new("Services"),
    ];

    fn layout(tops: &[(&str, f64)]) -> impl Fn(&str) -> Option<f64> {
        let tops = tops
            .iter()
            .map(|(id, top)| (id.to_string(), *top))
            .collect::<HashMap<_, _>>();
        move |id: &str| tops.get(id).copied()
    }

    fn three_state(viewport: ViewportClass) -> NavigationState {
        NavigationState::with_sections(&THREE, viewport)
    }

    fn active_label(state: &NavigationState) -> &'static str {
        state.active().map(|s| s.label()).unwrap_or_default()
    }

    #[test]
    fn test_section_ids() {
        let ids = SECTIONS.iter().map(Section::id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            [
                "home",
                "about",
                "services",
                "portfolio",
                "experience",
                "skills",
                "blog",
                "contact"
            ]
        );
        assert_eq!(SECTIONS[1].href(), "#about");
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new(1024.0);
        assert_eq!(active_label(&state), "Home");
        assert!(!state.menu_open());
        assert_eq!(state.viewport(), ViewportClass::Desktop);

        let state = NavigationState::new(375.0);
        assert_eq!(state.viewport(), ViewportClass::Mobile);
    }

    #[test]
    fn test_track_scroll_applies_header_bias() {
        let tops = layout(&[("home", 0.0), ("about", 800.0), ("services", 1600.0)]);
        let mut state = three_state(ViewportClass::Desktop);

        assert!(state.track_scroll(750.0, &tops));
        assert_eq!(active_label(&state), "About");

        assert!(state.track_scroll(0.0, &tops));
        assert_eq!(active_label(&state), "Home");

        assert!(state.track_scroll(1700.0, &tops));
        assert_eq!(active_label(&state), "Services");

        // just short of the bias
        assert!(state.track_scroll(699.0, &tops));
        assert_eq!(active_label(&state), "Home");
    }

    #[test]
    fn test_track_scroll_reports_unchanged() {
        let tops = layout(&[("home", 0.0), ("about", 800.0), ("services", 1600.0)]);
        let mut state = three_state(ViewportClass::Desktop);
        assert!(!state.track_scroll(10.0, &tops));
        assert!(state.track_scroll(900.0, &tops));
        assert!(!state.track_scroll(1000.0, &tops));
    }

    #[test]
    fn test_later_section_wins_tie() {
        // zero-height section: About and Services share a top
        let tops = layout(&[("home", 0.0), ("about", 800.0), ("services", 800.0)]);
        let mut state = three_state(ViewportClass::Desktop);
        state.track_scroll(750.0, &tops);
        assert_eq!(active_label(&state), "Services");
    }

    #[test]
    fn test_track_scroll_retains_previous_when_nothing_qualifies() {
        let tops = layout(&[("home", 500.0), ("about", 800.0), ("services", 1600.0)]);
        let mut state = three_state(ViewportClass::Desktop);
        state.track_scroll(1000.0, &tops);
        assert_eq!(active_label(&state), "About");

        assert!(!state.track_scroll(0.0, &tops));
        assert_eq!(active_label(&state), "About");

        let empty = layout(&[]);
        assert!(!state.track_scroll(5000.0, &empty));
        assert_eq!(active_label(&state), "About");
    }

    #[test]
    fn test_track_scroll_skips_missing_anchors() {
        let tops = layout(&[("home", 0.0), ("services", 1600.0)]);
        let mut state = three_state(ViewportClass::Desktop);
        state.track_scroll(1000.0, &tops);
        assert_eq!(active_label(&state), "Home");
    }

    #[test]
    fn test_active_index_matches_last_qualifying_section() {
        let tops = [0.0, 640.0, 1500.0, 1500.0, 2900.0, 4100.0, 5000.0, 6400.0];
        let oracle = |id: &str| {
            SECTIONS
                .iter()
                .position(|s| s.id() == id)
                .map(|i| tops[i])
        };
        for scroll in (0..7000).step_by(37) {
            let scroll = scroll as f64;
            let expected = tops
                .iter()
                .rposition(|top| *top <= scroll + SCROLL_BIAS);
            assert_eq!(active_index(&SECTIONS, scroll, &oracle), expected, "scroll {scroll}");
        }
    }

    #[test]
    fn test_viewport_class_boundary() {
        assert_eq!(ViewportClass::from_width(500.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(1024.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(0.0), ViewportClass::Mobile);
    }

    #[test]
    fn test_toggle_menu_twice_restores() {
        let mut state = NavigationState::new(400.0);
        let before = state.menu_open();
        state.toggle_menu();
        assert_ne!(state.menu_open(), before);
        state.toggle_menu();
        assert_eq!(state.menu_open(), before);
    }

    #[test]
    fn test_growing_to_desktop_closes_menu() {
        let mut state = NavigationState::new(400.0);
        state.toggle_menu();
        assert!(state.set_viewport_class(1200.0));
        assert_eq!(state.viewport(), ViewportClass::Desktop);
        assert!(!state.menu_open());

        assert!(!state.set_viewport_class(1300.0));
        assert!(state.set_viewport_class(500.0));
        assert!(!state.menu_open());
    }

    #[test]
    fn test_activate_section_on_mobile_closes_menu() {
        let tops = layout(&[("home", 0.0), ("contact", 5200.0)]);
        let mut state = NavigationState::new(400.0);
        state.toggle_menu();

        let request = state.activate_section("contact", &tops);
        assert_eq!(
            request,
            Some(ScrollRequest {
                section: 7,
                top: 5200.0
            })
        );
        assert!(!state.menu_open());

        // already closed stays closed
        assert!(state.activate_section("contact", &tops).is_some());
        assert!(!state.menu_open());
    }

    #[test]
    fn test_activate_section_on_desktop_leaves_menu() {
        let tops = layout(&[("contact", 5200.0)]);
        let mut state = NavigationState::new(1280.0);
        state.toggle_menu();
        assert!(state.activate_section("contact", &tops).is_some());
        assert!(state.menu_open());
    }

    #[test]
    fn test_activate_missing_section_is_noop() {
        let tops = layout(&[("home", 0.0)]);
        let mut state = NavigationState::new(400.0);
        state.toggle_menu();
        let before = state.clone();

        assert_eq!(state.activate_section("nonexistent", &tops), None);
        assert_eq!(state, before);

        // known section, anchor not rendered
        assert_eq!(state.activate_section("contact", &tops), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_resolve_target_errors() {
        let state = NavigationState::new(1024.0);
        let tops = layout(&[]);
        assert_eq!(
            state.resolve_target("nope", &tops),
            Err(NavError::UnknownSection("nope".to_string()))
        );
        assert_eq!(
            state.resolve_target("blog", &tops),
            Err(NavError::AnchorMissing("blog".to_string()))
        );
    }

    #[test]
    fn test_overlay_pointer_rules() {
        let desktop = ViewportClass::Desktop;
        assert!(desktop.overlay_after(false, Pointer::Enter));
        assert!(!desktop.overlay_after(true, Pointer::Leave));
        assert!(!desktop.overlay_after(false, Pointer::Tap));

        let mobile = ViewportClass::Mobile;
        assert!(!mobile.overlay_after(false, Pointer::Enter));
        assert!(mobile.overlay_after(true, Pointer::Leave));
        assert!(mobile.overlay_after(false, Pointer::Tap));
        assert!(!mobile.overlay_after(true, Pointer::Tap));
    }
}
