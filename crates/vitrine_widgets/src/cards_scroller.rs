//! Visibility-driven cursor (cards scroller)
//!
//! The active card is derived from intersection events over the card list
//! rather than explicit input. While scrolling down the last card to become
//! visible wins, and once the final card is active a re-entering card no
//! longer overrides it. Leaving cards move the cursor back by one, but only
//! while the scroller itself is pinned at or above the viewport top.

use vitrine_core::config::CardsScrollerConfig;
use vitrine_core::events::IntersectionEntry;
use vitrine_core::{Axis, ScrollBehavior};

use crate::surface::{BoundsProbe, IndexChip, ScrollSurface};

pub const ACTIVE_CLASS: &str = "index-active";

pub struct CardsScroller {
    active: usize,
    card_count: usize,
    threshold: f32,
    chips: Vec<Box<dyn IndexChip>>,
    strip: Option<Box<dyn ScrollSurface>>,
    root: Box<dyn BoundsProbe>,
}

impl CardsScroller {
    /// Bind a scroller with `card_count` observed cards. Applies index 0
    /// immediately; `None` when there are no cards.
    pub fn new(
        root: impl BoundsProbe + 'static,
        card_count: usize,
        chips: Vec<Box<dyn IndexChip>>,
        strip: Option<Box<dyn ScrollSurface>>,
        config: &CardsScrollerConfig,
    ) -> Option<Self> {
        if card_count == 0 {
            tracing::debug!("cards scroller skipped: no cards");
            return None;
        }

        let mut scroller = Self {
            active: 0,
            card_count,
            threshold: config.threshold,
            chips,
            strip,
            root: Box::new(root),
        };
        scroller.apply();
        Some(scroller)
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Intersection ratio the host observer should use for the cards
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    fn is_terminal(&self) -> bool {
        self.active == self.card_count - 1
    }

    /// Feed one observer entry; returns whether the active index was reapplied
    pub fn observe(&mut self, entry: IntersectionEntry) -> bool {
        if entry.index >= self.card_count {
            tracing::trace!(index = entry.index, "intersection for unknown card");
            return false;
        }

        if entry.is_intersecting {
            if self.is_terminal() {
                return false;
            }
            self.active = entry.index;
        } else {
            if self.root.rect().top() > 0.0 {
                return false;
            }
            self.active = entry.index.saturating_sub(1);
        }

        tracing::trace!(active = self.active, "cards scroller active index");
        self.apply();
        true
    }

    /// Horizontal offset aligning the index strip with the active chip
    pub fn strip_offset(&self) -> f32 {
        self.chips
            .iter()
            .take(self.active)
            .map(|chip| chip.rect().width)
            .sum()
    }

    fn apply(&mut self) {
        let offset = self.strip_offset();
        let active = self.active;
        for (index, chip) in self.chips.iter_mut().enumerate() {
            chip.set_class(ACTIVE_CLASS, index == active);
        }
        if active < self.chips.len() {
            if let Some(strip) = self.strip.as_mut() {
                strip.scroll_to(Axis::Horizontal, offset, ScrollBehavior::Smooth);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessElement;
    use vitrine_core::Rect;

    struct Fixture {
        root: HeadlessElement,
        chips: Vec<HeadlessElement>,
        strip: HeadlessElement,
        scroller: CardsScroller,
    }

    fn fixture(cards: usize) -> Fixture {
        let root = HeadlessElement::with_rect(Rect::new(0.0, 0.0, 800.0, 3000.0));
        let chips: Vec<HeadlessElement> = (0..cards)
            .map(|i| HeadlessElement::with_size(40.0 + i as f32 * 10.0, 20.0))
            .collect();
        let strip = HeadlessElement::with_size(200.0, 20.0);
        let scroller = CardsScroller::new(
            root.clone(),
            cards,
            chips
                .iter()
                .map(|chip| Box::new(chip.clone()) as Box<dyn IndexChip>)
                .collect(),
            Some(Box::new(strip.clone())),
            &CardsScrollerConfig::default(),
        )
        .unwrap();
        Fixture {
            root,
            chips,
            strip,
            scroller,
        }
    }

    fn enter(index: usize) -> IntersectionEntry {
        IntersectionEntry::new(index, true)
    }

    fn leave(index: usize) -> IntersectionEntry {
        IntersectionEntry::new(index, false)
    }

    #[test]
    fn test_initial_index_applied() {
        let f = fixture(4);
        assert_eq!(f.scroller.active(), 0);
        assert!(f.chips[0].has_class(ACTIVE_CLASS));
        assert!(!f.chips[1].has_class(ACTIVE_CLASS));
        assert_eq!(f.strip.scroll_offset(Axis::Horizontal), 0.0);
    }

    #[test]
    fn test_no_cards_is_inert() {
        assert!(CardsScroller::new(
            HeadlessElement::new(),
            0,
            Vec::new(),
            None,
            &CardsScrollerConfig::default()
        )
        .is_none());
    }

    #[test]
    fn test_threshold_from_config() {
        assert_eq!(fixture(2).scroller.threshold(), 0.1);

        let config = CardsScrollerConfig { threshold: 0.6 };
        let scroller =
            CardsScroller::new(HeadlessElement::new(), 1, Vec::new(), None, &config).unwrap();
        assert_eq!(scroller.threshold(), 0.6);
    }

    #[test]
    fn test_entering_card_becomes_active() {
        let mut f = fixture(4);
        assert!(f.scroller.observe(enter(2)));
        assert_eq!(f.scroller.active(), 2);
        assert!(f.chips[2].has_class(ACTIVE_CLASS));
        assert!(!f.chips[0].has_class(ACTIVE_CLASS));
        // 40 + 50
        assert_eq!(f.strip.scroll_offset(Axis::Horizontal), 90.0);
    }

    #[test]
    fn test_last_card_is_terminal() {
        let mut f = fixture(3);
        f.scroller.observe(enter(2));
        assert!(!f.scroller.observe(enter(1)));
        assert_eq!(f.scroller.active(), 2);
    }

    #[test]
    fn test_leaving_card_steps_back_when_pinned() {
        let mut f = fixture(4);
        f.scroller.observe(enter(3));

        f.root.set_top(-400.0);
        assert!(f.scroller.observe(leave(3)));
        assert_eq!(f.scroller.active(), 2);

        assert!(f.scroller.observe(leave(0)));
        assert_eq!(f.scroller.active(), 0);
    }

    #[test]
    fn test_leaving_card_ignored_below_viewport_top() {
        let mut f = fixture(4);
        f.scroller.observe(enter(2));
        f.root.set_top(120.0);
        assert!(!f.scroller.observe(leave(2)));
        assert_eq!(f.scroller.active(), 2);
    }

    #[test]
    fn test_unknown_card_ignored() {
        let mut f = fixture(2);
        assert!(!f.scroller.observe(enter(5)));
        assert_eq!(f.scroller.active(), 0);
    }

    #[test]
    fn test_missing_strip_still_toggles_chips() {
        let chip = HeadlessElement::with_size(30.0, 10.0);
        let mut scroller = CardsScroller::new(
            HeadlessElement::new(),
            2,
            vec![Box::new(chip.clone()) as Box<dyn IndexChip>],
            None,
            &CardsScrollerConfig::default(),
        )
        .unwrap();
        scroller.observe(enter(1));
        assert!(!chip.has_class(ACTIVE_CLASS));
        assert_eq!(scroller.strip_offset(), 30.0);
    }
}
