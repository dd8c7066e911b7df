//! Intersection-driven reveal and nav highlighting.

/// One-way "has been seen" flags for reveal-on-scroll elements.
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    revealed: Vec<bool>,
}

impl RevealLatch {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Feed one intersection entry. Returns `true` only on the transition to
    /// revealed; later entries (intersecting or not) never undo it.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if intersecting && !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|v| **v).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkChange {
    pub index: usize,
    pub active: bool,
}

/// Tracks which nav link points at the section currently in view.
#[derive(Debug, Clone, Default)]
pub struct NavHighlight {
    /// `data-section` of each link, in document order.
    link_sections: Vec<Option<String>>,
    active: Option<usize>,
}

impl NavHighlight {
    pub fn new(link_sections: Vec<Option<String>>) -> Self {
        Self {
            link_sections,
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// A section crossed the visibility threshold. The first link targeting it
    /// becomes active and every other link is cleared. Returns the class state
    /// for every link so the DOM can be brought fully in line.
    pub fn activate(&mut self, section_id: &str) -> Vec<LinkChange> {
        self.active = self
            .link_sections
            .iter()
            .position(|s| s.as_deref() == Some(section_id));

        (0..self.link_sections.len())
            .map(|index| LinkChange {
                index,
                active: Some(index) == self.active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_way() {
        let mut latch = RevealLatch::new(3);
        assert!(!latch.observe(1, false));
        assert!(latch.observe(1, true));
        assert!(!latch.observe(1, true));
        assert!(!latch.observe(1, false));
        assert!(latch.is_revealed(1));
        assert!(!latch.is_revealed(0));
        assert_eq!(latch.revealed_count(), 1);
    }

    #[test]
    fn reveal_ignores_unknown_indices() {
        let mut latch = RevealLatch::new(1);
        assert!(!latch.observe(5, true));
        assert!(!latch.is_revealed(5));
    }

    fn nav() -> NavHighlight {
        NavHighlight::new(vec![
            Some("home".into()),
            Some("events".into()),
            None,
            Some("roster".into()),
        ])
    }

    fn active_links(changes: &[LinkChange]) -> Vec<usize> {
        changes.iter().filter(|c| c.active).map(|c| c.index).collect()
    }

    #[test]
    fn at_most_one_link_is_active() {
        let mut nav = nav();
        let changes = nav.activate("events");
        assert_eq!(changes.len(), 4);
        assert_eq!(active_links(&changes), vec![1]);
        assert_eq!(nav.active(), Some(1));

        let changes = nav.activate("roster");
        assert_eq!(active_links(&changes), vec![3]);
        assert_eq!(nav.active(), Some(3));
    }

    #[test]
    fn most_recent_section_wins() {
        let mut nav = nav();
        nav.activate("home");
        nav.activate("roster");
        nav.activate("events");
        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn unknown_section_clears_every_link() {
        let mut nav = nav();
        nav.activate("home");
        let changes = nav.activate("contact");
        assert!(active_links(&changes).is_empty());
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn duplicate_targets_activate_only_the_first_link() {
        let mut nav = NavHighlight::new(vec![Some("a".into()), Some("a".into())]);
        assert_eq!(active_links(&nav.activate("a")), vec![0]);
    }
}
