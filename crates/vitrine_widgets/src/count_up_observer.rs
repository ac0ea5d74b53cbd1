//! Count-up elements under an intersection observer
//!
//! Each registered element is split into [`NumberParts`] on its first
//! observation and started on its first intersecting observation, after
//! which it is no longer observed. Elements whose text is not a single
//! decorated number are dropped on first observation.

use std::time::Duration;

use slotmap::{new_key_type, SecondaryMap, SlotMap};
use vitrine_animation::{AnimationScheduler, CountUp, CountUpId, NumberParts};
use vitrine_core::config::CountUpConfig;

use crate::surface::TextSlot;

new_key_type! {
    pub struct CounterId;
}

enum Phase {
    /// Registered, not yet observed
    Pending(String),
    /// Observed outside the viewport
    Armed(NumberParts),
    Running(CountUpId),
}

struct Counter {
    slot: Box<dyn TextSlot>,
    phase: Phase,
}

pub struct CountUpObserver {
    config: CountUpConfig,
    counters: SlotMap<CounterId, Counter>,
    owners: SecondaryMap<CountUpId, CounterId>,
    scheduler: AnimationScheduler,
}

impl CountUpObserver {
    pub fn new(config: CountUpConfig) -> Self {
        Self {
            config,
            counters: SlotMap::with_key(),
            owners: SecondaryMap::new(),
            scheduler: AnimationScheduler::new(),
        }
    }

    /// Intersection ratio the host observer should use
    pub fn threshold(&self) -> f32 {
        self.config.threshold
    }

    /// Register an element with its initial text
    pub fn observe(&mut self, slot: impl TextSlot + 'static, text: impl Into<String>) -> CounterId {
        self.counters.insert(Counter {
            slot: Box::new(slot),
            phase: Phase::Pending(text.into()),
        })
    }

    /// Whether the host should keep observing `id`
    pub fn is_observing(&self, id: CounterId) -> bool {
        self.counters
            .get(id)
            .is_some_and(|counter| !matches!(counter.phase, Phase::Running(_)))
    }

    pub fn is_running(&self, id: CounterId) -> bool {
        self.count_up_of(id).is_some()
    }

    /// Progress of a started count-up
    pub fn progress(&self, id: CounterId) -> Option<f32> {
        let count_up = self.count_up_of(id)?;
        self.scheduler.get(count_up).map(CountUp::progress)
    }

    /// Feed an observer callback for `id`; returns whether it started
    pub fn on_intersection(&mut self, id: CounterId, is_intersecting: bool) -> bool {
        let Some(counter) = self.counters.get_mut(id) else {
            return false;
        };

        if let Phase::Pending(text) = &counter.phase {
            match NumberParts::parse(text) {
                Some(parts) => counter.phase = Phase::Armed(parts),
                None => {
                    tracing::debug!(text = %text, "count-up skipped: not a number");
                    self.counters.remove(id);
                    return false;
                }
            }
        }

        if !is_intersecting {
            return false;
        }
        let Phase::Armed(parts) = &counter.phase else {
            return false;
        };

        let (count_up, text) = self
            .scheduler
            .start(CountUp::new(parts.clone(), &self.config));
        counter.slot.set_text(&text);
        counter.phase = Phase::Running(count_up);
        self.owners.insert(count_up, id);
        tracing::trace!(text = %text, "count-up started");
        true
    }

    pub fn pause(&mut self, id: CounterId) -> bool {
        let Some(count_up) = self.count_up_of(id) else {
            return false;
        };
        let Some(text) = self.scheduler.pause(count_up) else {
            return false;
        };
        self.write(id, &text);
        true
    }

    pub fn resume(&mut self, id: CounterId) -> bool {
        let Some(count_up) = self.count_up_of(id) else {
            return false;
        };
        let Some(text) = self.scheduler.resume(count_up) else {
            return false;
        };
        self.write(id, &text);
        true
    }

    /// Advance every running count-up and write the texts that changed
    pub fn tick(&mut self, dt: Duration) {
        let counters = &mut self.counters;
        let owners = &self.owners;
        self.scheduler.tick(dt, |count_up, text| {
            if let Some(counter) = owners.get(count_up).and_then(|&id| counters.get_mut(id)) {
                counter.slot.set_text(text);
            }
        });
    }

    pub fn has_active_animations(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    /// Stop tracking an element, cancelling its animation
    pub fn remove(&mut self, id: CounterId) {
        if let Some(count_up) = self.count_up_of(id) {
            self.scheduler.remove(count_up);
            self.owners.remove(count_up);
        }
        self.counters.remove(id);
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    fn count_up_of(&self, id: CounterId) -> Option<CountUpId> {
        match self.counters.get(id)?.phase {
            Phase::Running(count_up) => Some(count_up),
            _ => None,
        }
    }

    fn write(&mut self, id: CounterId, text: &str) {
        if let Some(counter) = self.counters.get_mut(id) {
            counter.slot.set_text(text);
        }
    }
}

impl Default for CountUpObserver {
    fn default() -> Self {
        Self::new(CountUpConfig::default())
    }
}
