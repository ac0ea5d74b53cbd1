//! Section title reveal
//!
//! Titles slide in when their container intersects the viewport and slide
//! back out when it drops below the viewport. A container that leaves
//! through the top keeps its title shown.

use vitrine_core::config::TitleRevealConfig;
use vitrine_core::events::IntersectionEntry;

use crate::surface::RevealTarget;

pub const REVEAL_PROPERTY: &str = "translate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Shown,
    Hidden,
}

impl RevealState {
    pub fn offset(&self) -> &'static str {
        match self {
            RevealState::Shown => "0",
            RevealState::Hidden => "-100%",
        }
    }
}

pub struct TitleReveal {
    threshold: f32,
    titles: Vec<(Box<dyn RevealTarget>, Option<RevealState>)>,
}

impl TitleReveal {
    pub fn new(config: &TitleRevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            titles: Vec::new(),
        }
    }

    /// Intersection ratio the host observer should use for the containers
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Add a container; its index is the observer entry index
    pub fn push(&mut self, container: impl RevealTarget + 'static) -> usize {
        self.titles.push((Box::new(container), None));
        self.titles.len() - 1
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.titles.get(index).and_then(|(_, state)| *state)
    }

    /// Feed an observer entry; returns the state applied, if any
    pub fn observe(&mut self, entry: IntersectionEntry) -> Option<RevealState> {
        let (container, state) = self.titles.get_mut(entry.index)?;

        let next = if entry.is_intersecting {
            RevealState::Shown
        } else if container.rect().top() > 0.0 {
            RevealState::Hidden
        } else {
            return None;
        };

        container.set_property(REVEAL_PROPERTY, next.offset());
        *state = Some(next);
        Some(next)
    }
}

impl Default for TitleReveal {
    fn default() -> Self {
        Self::new(&TitleRevealConfig::default())
    }
}
