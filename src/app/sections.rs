//! Section registry and the scroll-driven active-section tracker.

/// The fixed, ordered set of page sections. Order matters: the tracker
/// resolves overlapping boundary cases by taking the last match in this
/// order, and navigation renders links in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Contact,
}

pub const SECTIONS: [SectionId; 4] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Projects,
    SectionId::Contact,
];

impl SectionId {
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Project",
            SectionId::Contact => "Contact",
        }
    }
}

/// A section is "in view" once its top edge has crossed this many pixels
/// from the top of the viewport and its bottom edge has not.
pub const ACTIVE_THRESHOLD: i32 = 80;

/// Scroll offset past which the scroll-to-top affordance appears.
pub const SCROLL_TOP_THRESHOLD: i32 = 300;

/// A section's rendered region, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRect {
    pub top: i32,
    pub bottom: i32,
}

impl SectionRect {
    fn in_view(self) -> bool {
        self.top <= ACTIVE_THRESHOLD && self.bottom > ACTIVE_THRESHOLD
    }
}

/// Pick the active section: the last one in list order whose rectangle
/// straddles the threshold. When nothing qualifies the previous choice is
/// retained. Last-match-wins is intentional policy, not a bug.
pub fn active_section(
    rects: &[(SectionId, SectionRect)],
    previous: SectionId,
) -> SectionId {
    let mut current = previous;
    for (id, rect) in rects {
        if rect.in_view() {
            current = *id;
        }
    }
    current
}

pub fn show_scroll_top(offset: i32) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Keeps the single "active id" across scroll notifications.
#[derive(Debug, Clone, Copy)]
pub struct SectionTracker {
    active: SectionId,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            active: SECTIONS[0],
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Explicit navigation (a clicked link) overrides the scroll position.
    pub fn set_active(&mut self, id: SectionId) {
        self.active = id;
    }

    /// Re-evaluate against fresh rectangles. Returns true when the active
    /// section changed and navigation needs a repaint.
    pub fn update(&mut self, rects: &[(SectionId, SectionRect)]) -> bool {
        let next = active_section(rects, self.active);
        let changed = next != self.active;
        self.active = next;
        changed
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: i32, bottom: i32) -> SectionRect {
        SectionRect { top, bottom }
    }

    fn full_page(offset: i32) -> Vec<(SectionId, SectionRect)> {
        // Four stacked 900px sections, shifted up by the scroll offset
        SECTIONS
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as i32 * 900 - offset;
                (*id, rect(top, top + 900))
            })
            .collect()
    }

    #[test]
    fn test_defaults_to_first_section() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_about_at_50_900_becomes_active() {
        let rects = vec![
            (SectionId::Home, rect(-850, 50)),
            (SectionId::About, rect(50, 900)),
        ];
        assert_eq!(active_section(&rects, SectionId::Home), SectionId::About);
    }

    #[test]
    fn test_last_match_wins_on_overlap() {
        // Both straddle the threshold; the later section in list order wins
        let rects = vec![
            (SectionId::Home, rect(0, 200)),
            (SectionId::About, rect(60, 1000)),
        ];
        assert_eq!(active_section(&rects, SectionId::Home), SectionId::About);
    }

    #[test]
    fn test_no_match_retains_previous() {
        // Everything scrolled past the threshold
        let rects = vec![
            (SectionId::Home, rect(-2000, -1100)),
            (SectionId::About, rect(-1100, -200)),
        ];
        assert_eq!(
            active_section(&rects, SectionId::Projects),
            SectionId::Projects
        );
    }

    #[test]
    fn test_exact_boundary() {
        // top == threshold qualifies, bottom == threshold does not
        let rects = vec![(SectionId::About, rect(80, 81))];
        assert_eq!(active_section(&rects, SectionId::Home), SectionId::About);

        let rects = vec![(SectionId::About, rect(0, 80))];
        assert_eq!(active_section(&rects, SectionId::Home), SectionId::Home);
    }

    #[test]
    fn test_tracker_walks_the_page() {
        let mut tracker = SectionTracker::new();

        assert!(!tracker.update(&full_page(0)));
        assert_eq!(tracker.active(), SectionId::Home);

        assert!(tracker.update(&full_page(950)));
        assert_eq!(tracker.active(), SectionId::About);

        assert!(tracker.update(&full_page(2750)));
        assert_eq!(tracker.active(), SectionId::Contact);

        // Scrolling back up re-activates earlier sections
        assert!(tracker.update(&full_page(10)));
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_tracker_reports_unchanged() {
        let mut tracker = SectionTracker::new();
        assert!(!tracker.update(&full_page(0)));
        assert!(!tracker.update(&full_page(100)));
    }

    #[test]
    fn test_scroll_top_visibility() {
        assert!(!show_scroll_top(0));
        assert!(!show_scroll_top(300));
        assert!(show_scroll_top(301));
    }
}
