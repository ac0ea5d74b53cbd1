//! Periodic list scroller
//!
//! A vertical list loops by cloning its first item onto the end: every
//! period the list scrolls down by one list height, and on reaching the
//! clone it snaps back to the top before continuing.

use std::time::Duration;

use vitrine_animation::IntervalTimer;
use vitrine_core::config::ListScrollerConfig;
use vitrine_core::{Axis, ScrollBehavior};

use crate::surface::ItemList;

pub struct ListTicker {
    list: Box<dyn ItemList>,
    index: usize,
    count: usize,
    timer: IntervalTimer,
}

impl ListTicker {
    /// Clone the first item onto the end; `None` for an empty list
    pub fn new(mut list: impl ItemList + 'static, config: &ListScrollerConfig) -> Option<Self> {
        if list.item_count() == 0 {
            tracing::debug!("list ticker skipped: no items");
            return None;
        }

        list.append_first_clone();
        let count = list.item_count();
        Some(Self {
            list: Box::new(list),
            index: 0,
            count,
            timer: IntervalTimer::from_millis(config.period_ms),
        })
    }

    /// Index of the next scroll target
    pub fn index(&self) -> usize {
        self.index
    }

    /// Item count including the clone
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step(&mut self) {
        if self.index % self.count == 0 {
            self.list
                .scroll_to(Axis::Vertical, 0.0, ScrollBehavior::Instant);
            self.index = 1;
        }

        let height = self.list.rect().height;
        self.list.scroll_to(
            Axis::Vertical,
            self.index as f32 * height,
            ScrollBehavior::Smooth,
        );
        self.index += 1;
    }

    pub fn tick(&mut self, dt: Duration) -> u32 {
        let fired = self.timer.advance(dt);
        for _ in 0..fired {
            self.step();
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessElement;

    fn list(items: usize) -> HeadlessElement {
        let list = HeadlessElement::with_size(200.0, 30.0);
        list.set_track(0.0, items);
        list
    }

    #[test]
    fn test_clones_first_item() {
        let element = list(3);
        let ticker = ListTicker::new(element.clone(), &ListScrollerConfig::default()).unwrap();
        assert_eq!(ticker.count(), 4);
        assert_eq!(element.children(), 4);
    }

    #[test]
    fn test_empty_list_is_inert() {
        assert!(ListTicker::new(list(0), &ListScrollerConfig::default()).is_none());
    }

    #[test]
    fn test_cycle_snaps_back_at_clone() {
        let element = list(2);
        let mut ticker = ListTicker::new(element.clone(), &ListScrollerConfig::default()).unwrap();

        let offsets: Vec<f32> = (0..5)
            .map(|_| {
                ticker.step();
                element.scroll_offset(Axis::Vertical)
            })
            .collect();
        // count = 3: scroll to 1, 2, then at index 3 snap to top and restart
        assert_eq!(offsets, vec![30.0, 60.0, 30.0, 60.0, 30.0]);

        let calls = element.scroll_calls();
        assert_eq!(calls[0].behavior, ScrollBehavior::Instant);
        assert_eq!(calls[0].offset, 0.0);
        assert_eq!(calls[3].behavior, ScrollBehavior::Instant);
    }

    #[test]
    fn test_ticks_on_period() {
        let element = list(3);
        let mut ticker = ListTicker::new(element.clone(), &ListScrollerConfig::default()).unwrap();

        assert_eq!(ticker.tick(Duration::from_millis(2499)), 0);
        assert_eq!(ticker.tick(Duration::from_millis(1)), 1);
        assert_eq!(element.scroll_offset(Axis::Vertical), 30.0);
        assert_eq!(ticker.tick(Duration::from_millis(5000)), 2);
        assert_eq!(ticker.index(), 4);
    }
}
