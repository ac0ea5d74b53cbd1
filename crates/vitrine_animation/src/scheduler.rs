//! Animation scheduler
//!
//! Owns every running count-up and its step schedule. The host calls
//! [`AnimationScheduler::tick`] with elapsed time (from a timer or an
//! animation frame) and writes the texts it reports.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

use crate::count_up::{CountUp, CountUpStatus};

new_key_type! {
    pub struct CountUpId;
}

struct Entry {
    count_up: CountUp,
    /// Time left until the next step; `None` when nothing is scheduled
    remaining: Option<Duration>,
}

/// The scheduler that steps all active count-ups
#[derive(Default)]
pub struct AnimationScheduler {
    entries: SlotMap<CountUpId, Entry>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Start a count-up; returns its id and the text to render now
    pub fn start(&mut self, count_up: CountUp) -> (CountUpId, String) {
        let text = count_up.render();
        let remaining = count_up.next_delay();
        let id = self.entries.insert(Entry {
            count_up,
            remaining,
        });
        (id, text)
    }

    pub fn get(&self, id: CountUpId) -> Option<&CountUp> {
        self.entries.get(id).map(|entry| &entry.count_up)
    }

    pub fn remove(&mut self, id: CountUpId) -> Option<CountUp> {
        self.entries.remove(id).map(|entry| entry.count_up)
    }

    /// Freeze a count-up; returns the frozen text
    pub fn pause(&mut self, id: CountUpId) -> Option<String> {
        let entry = self.entries.get_mut(id)?;
        entry.count_up.pause();
        entry.remaining = None;
        Some(entry.count_up.render())
    }

    /// Continue a paused count-up; returns the text for its real progress
    pub fn resume(&mut self, id: CountUpId) -> Option<String> {
        let entry = self.entries.get_mut(id)?;
        if entry.count_up.status() != CountUpStatus::Paused {
            return None;
        }
        entry.count_up.resume();
        entry.remaining = entry.count_up.next_delay();
        Some(entry.count_up.render())
    }

    /// Advance all schedules by `dt`.
    ///
    /// `on_render` receives each count-up that stepped during this tick,
    /// once, with its latest text.
    pub fn tick<F>(&mut self, dt: Duration, mut on_render: F)
    where
        F: FnMut(CountUpId, &str),
    {
        for (id, entry) in self.entries.iter_mut() {
            let mut budget = dt;
            let mut stepped = false;

            while let Some(remaining) = entry.remaining {
                if remaining > budget {
                    entry.remaining = Some(remaining - budget);
                    break;
                }
                budget -= remaining;
                let step = entry.count_up.step();
                entry.count_up.tick(step);
                entry.remaining = entry.count_up.next_delay();
                stepped = true;
            }

            if stepped {
                on_render(id, &entry.count_up.render());
            }
        }
    }

    /// Check if any count-up still has a step scheduled
    pub fn has_active_animations(&self) -> bool {
        self.entries.values().any(|entry| entry.remaining.is_some())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count_up::NumberParts;
    use vitrine_core::config::CountUpConfig;

    fn count_up(text: &str) -> CountUp {
        CountUp::new(NumberParts::parse(text).unwrap(), &CountUpConfig::default())
    }

    fn run_to_end(scheduler: &mut AnimationScheduler) -> Vec<String> {
        let mut frames = Vec::new();
        for _ in 0..2000 {
            scheduler.tick(Duration::from_millis(16), |_, text| {
                frames.push(text.to_string())
            });
            if !scheduler.has_active_animations() {
                break;
            }
        }
        frames
    }

    #[test]
    fn test_start_renders_initial_progress() {
        let mut scheduler = AnimationScheduler::new();
        let (id, text) = scheduler.start(count_up("$1,234.50"));
        assert_eq!(text, "$0.00");
        assert_eq!(scheduler.get(id).unwrap().status(), CountUpStatus::Running);
        assert!(scheduler.has_active_animations());
    }

    #[test]
    fn test_runs_to_initial_text() {
        let mut scheduler = AnimationScheduler::new();
        let (id, _) = scheduler.start(count_up("$1,234.50"));

        let frames = run_to_end(&mut scheduler);
        assert_eq!(frames.last().map(String::as_str), Some("$1,234.50"));
        assert_eq!(scheduler.get(id).unwrap().status(), CountUpStatus::Finished);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_early_steps_collapse_into_one_frame() {
        let mut scheduler = AnimationScheduler::new();
        let (id, _) = scheduler.start(count_up("100"));

        let mut renders = 0;
        scheduler.tick(Duration::from_millis(16), |_, _| renders += 1);

        assert_eq!(renders, 1);
        // Early steps wait fractions of a millisecond
        assert!(scheduler.get(id).unwrap().progress() > 0.5);
    }

    #[test]
    fn test_pause_stops_scheduling() {
        let mut scheduler = AnimationScheduler::new();
        let (id, _) = scheduler.start(count_up("$1,234.50"));
        scheduler.tick(Duration::from_millis(1), |_, _| {});

        assert_eq!(scheduler.pause(id).as_deref(), Some("$617.25"));
        assert!(!scheduler.has_active_animations());

        let progress = scheduler.get(id).unwrap().progress();
        let mut renders = 0;
        scheduler.tick(Duration::from_secs(5), |_, _| renders += 1);
        assert_eq!(renders, 0);
        assert_eq!(scheduler.get(id).unwrap().progress(), progress);
    }

    #[test]
    fn test_resume_reschedules() {
        let mut scheduler = AnimationScheduler::new();
        let (id, _) = scheduler.start(count_up("10"));
        scheduler.pause(id);

        assert_eq!(scheduler.resume(id).as_deref(), Some("0"));
        assert!(scheduler.has_active_animations());
        assert_eq!(scheduler.resume(id), None);

        let frames = run_to_end(&mut scheduler);
        assert_eq!(frames.last().map(String::as_str), Some("10"));
    }

    #[test]
    fn test_remove() {
        let mut scheduler = AnimationScheduler::new();
        let (id, _) = scheduler.start(count_up("5"));
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.remove(id).is_some());
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.pause(id), None);
    }
}
