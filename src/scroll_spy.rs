use std::fmt;

/// How far below the top of the viewport a section is considered "reached".
pub const LOOKAHEAD_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Work,
    About,
    Contact,
}

impl Section {
    /// Nav order, which is also the scroll-spy test order.
    pub const ALL: [Section; 4] = [Section::Home, Section::Work, Section::About, Section::Contact];

    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Work => "Work",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Vertical extent of a section element, `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section (in [`Section::ALL`] order) whose bounds contain `scroll_y + LOOKAHEAD_PX`.
///
/// Sections for which `bounds` yields `None` (element not in the document) are skipped.
pub fn locate<F>(scroll_y: f64, mut bounds: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    let line = scroll_y + LOOKAHEAD_PX;
    Section::ALL
        .into_iter()
        .find(|s| bounds(*s).is_some_and(|b| b.contains(line)))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    active: Section,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Returns true if the active section changed.
    ///
    /// When no section qualifies the previous one stays active.
    pub fn observe<F>(&mut self, scroll_y: f64, bounds: F) -> bool
    where
        F: FnMut(Section) -> Option<SectionBounds>,
    {
        match locate(scroll_y, bounds) {
            Some(s) if s != self.active => {
                self.active = s;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // stacked layout: home 0..900, work 900..2100, about 2100..2900, contact 2900..3800
    fn layout(section: Section) -> Option<SectionBounds> {
        Some(match section {
            Section::Home => SectionBounds::new(0.0, 900.0),
            Section::Work => SectionBounds::new(900.0, 1200.0),
            Section::About => SectionBounds::new(2100.0, 800.0),
            Section::Contact => SectionBounds::new(2900.0, 900.0),
        })
    }

    #[test]
    fn test_locate_uses_lookahead() {
        assert_eq!(locate(0.0, layout), Some(Section::Home));
        // 799 + 100 = 899, still home
        assert_eq!(locate(799.0, layout), Some(Section::Home));
        // 800 + 100 = 900, first pixel of work
        assert_eq!(locate(800.0, layout), Some(Section::Work));
        assert_eq!(locate(2000.0, layout), Some(Section::About));
        assert_eq!(locate(3699.0, layout), Some(Section::Contact));
        assert_eq!(locate(3700.0, layout), None);
    }

    #[test]
    fn test_locate_matches_brute_force() {
        for s in (0..4000).step_by(7) {
            let s = s as f64;
            let expected = Section::ALL
                .into_iter()
                .find(|sec| layout(*sec).map(|b| b.contains(s + 100.0)).unwrap_or(false));
            assert_eq!(locate(s, layout), expected, "scroll {s}");
        }
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let overlapping = |section: Section| match section {
            Section::Home => Some(SectionBounds::new(0.0, 500.0)),
            Section::Work => Some(SectionBounds::new(0.0, 500.0)),
            _ => None,
        };
        assert_eq!(locate(0.0, overlapping), Some(Section::Home));

        // contact listed after about, so about wins where both contain the lookahead line
        let tail_overlap = |section: Section| match section {
            Section::About => Some(SectionBounds::new(1000.0, 500.0)),
            Section::Contact => Some(SectionBounds::new(1200.0, 500.0)),
            _ => None,
        };
        assert_eq!(locate(1150.0, tail_overlap), Some(Section::About));
        assert_eq!(locate(1450.0, tail_overlap), Some(Section::Contact));
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let only_contact = |section: Section| match section {
            Section::Contact => Some(SectionBounds::new(2000.0, 400.0)),
            _ => None,
        };
        assert_eq!(locate(0.0, only_contact), None);
        assert_eq!(locate(2000.0, only_contact), Some(Section::Contact));
        assert_eq!(locate(500.0, |_| None), None);
    }

    #[test]
    fn test_spy_starts_at_home() {
        assert_eq!(ScrollSpy::new().active(), Section::Home);
    }

    #[test]
    fn test_spy_retains_previous_without_match() {
        let mut spy = ScrollSpy::new();
        assert!(spy.observe(2500.0, layout));
        assert_eq!(spy.active(), Section::About);

        // past the end of the page, nothing qualifies
        assert!(!spy.observe(10_000.0, layout));
        assert_eq!(spy.active(), Section::About);
        assert!(!spy.observe(10_000.0, layout));
        assert_eq!(spy.active(), Section::About);

        assert!(!spy.observe(0.0, |_| None));
        assert_eq!(spy.active(), Section::About);
    }

    #[test]
    fn test_spy_reports_changes_only() {
        let mut spy = ScrollSpy::new();
        assert!(!spy.observe(0.0, layout));
        assert!(!spy.observe(200.0, layout));
        assert!(spy.observe(1000.0, layout));
        assert!(!spy.observe(1100.0, layout));
        assert_eq!(spy.active(), Section::Work);
        assert!(spy.observe(0.0, layout));
        assert_eq!(spy.active(), Section::Home);
    }

    #[test]
    fn test_section_ids() {
        let ids = Section::ALL.map(|s| s.id());
        assert_eq!(ids, ["home", "work", "about", "contact"]);
        assert_eq!(Section::About.to_string(), "about");
        assert_eq!(Section::Contact.label(), "Contact");
    }
}
