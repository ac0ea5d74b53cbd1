//! Index-synchronized carousels
//!
//! Swipe cards, feedback cards, and service plans share one shape: parallel
//! strips kept on a single cursor, an optional `current / total` label, and
//! buttons, arrow keys, resizes, and (for swipe cards) a timer driving that
//! cursor. [`CarouselBuilder`] collects a widget's parts and builds the
//! controller only when every counted item group agrees on its length.
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::{InputEvent, SiteConfig, WidgetAttributes};
//! use vitrine_widgets::carousel::CarouselBuilder;
//! use vitrine_widgets::headless::HeadlessElement;
//!
//! let config = SiteConfig::default();
//! let root = HeadlessElement::with_size(600.0, 400.0);
//! let images = HeadlessElement::with_size(600.0, 300.0);
//! let titles = HeadlessElement::with_size(600.0, 40.0);
//! let descriptions = HeadlessElement::with_size(600.0, 60.0);
//!
//! let mut carousel = CarouselBuilder::swipe_card(root, &WidgetAttributes::new(), &config)
//!     .images(images.clone(), 3)
//!     .titles(titles, 3)
//!     .descriptions(descriptions, 3)
//!     .next_button(2)
//!     .build()
//!     .expect("consistent item counts");
//!
//! carousel.handle(&InputEvent::Click { target: 2 });
//! assert_eq!(carousel.cursor(), 1);
//! assert_eq!(images.scroll_offset(vitrine_core::Axis::Horizontal), 600.0);
//! ```

use std::time::Duration;

use smallvec::SmallVec;
use vitrine_core::{InputEvent, Result, SiteConfig, WidgetAttributes};

use crate::cursor::CursorController;
use crate::geometry_sync::{GeometrySync, IndexLabel, Strip};
use crate::input::{CursorAction, InputBinder, KeyboardGate};
use crate::surface::{BoundsProbe, ScrollSurface, TextSlot};

/// Which widget a carousel was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselKind {
    /// `.swipe-card`: image, title, and description strips
    SwipeCard,
    /// `.feedback-card`: head and feedback strips
    FeedbackCard,
    /// `.service-plans`: a single strip of plans
    ServicePlans,
}

impl CarouselKind {
    pub fn name(&self) -> &'static str {
        match self {
            CarouselKind::SwipeCard => "swipe-card",
            CarouselKind::FeedbackCard => "feedback-card",
            CarouselKind::ServicePlans => "service-plans",
        }
    }
}

/// Collects one carousel's parts
pub struct CarouselBuilder {
    kind: CarouselKind,
    root: Box<dyn BoundsProbe>,
    band_factor: f32,
    sync: GeometrySync,
    counts: SmallVec<[usize; 3]>,
    label: IndexLabel,
    clicks: Vec<(u64, CursorAction)>,
    interval: Option<Duration>,
}

impl CarouselBuilder {
    pub fn new(kind: CarouselKind, root: impl BoundsProbe + 'static, config: &SiteConfig) -> Self {
        Self {
            kind,
            root: Box::new(root),
            band_factor: config.keyboard.band_factor,
            sync: GeometrySync::new(),
            counts: SmallVec::new(),
            label: IndexLabel::new(),
            clicks: Vec::new(),
            interval: None,
        }
    }

    /// A swipe card; auto-advances when `data-swipe-interval` is set
    pub fn swipe_card(
        root: impl BoundsProbe + 'static,
        attrs: &WidgetAttributes,
        config: &SiteConfig,
    ) -> Self {
        let mut builder = Self::new(CarouselKind::SwipeCard, root, config);
        builder.interval = attrs.swipe_interval();
        builder
    }

    pub fn feedback_card(root: impl BoundsProbe + 'static, config: &SiteConfig) -> Self {
        Self::new(CarouselKind::FeedbackCard, root, config)
    }

    /// Service plans are gated on the plans container itself, so `root`
    /// should measure the same element passed to [`plans`](Self::plans).
    pub fn service_plans(root: impl BoundsProbe + 'static, config: &SiteConfig) -> Self {
        Self::new(CarouselKind::ServicePlans, root, config)
    }

    /// A counted item group with a scroll container
    pub fn strip(mut self, strip: Strip, count: usize) -> Self {
        self.sync.push(strip);
        self.counts.push(count);
        self
    }

    /// A counted item group whose container is missing from the page
    pub fn item_group(mut self, count: usize) -> Self {
        self.counts.push(count);
        self
    }

    pub fn images(self, surface: impl ScrollSurface + 'static, count: usize) -> Self {
        self.strip(Strip::horizontal(surface), count)
    }

    pub fn titles(self, surface: impl ScrollSurface + 'static, count: usize) -> Self {
        self.strip(Strip::vertical(surface), count)
    }

    pub fn descriptions(self, surface: impl ScrollSurface + 'static, count: usize) -> Self {
        self.strip(Strip::vertical(surface), count)
    }

    pub fn heads(self, surface: impl ScrollSurface + 'static, count: usize) -> Self {
        self.strip(Strip::horizontal(surface), count)
    }

    pub fn feedbacks(self, surface: impl ScrollSurface + 'static, count: usize) -> Self {
        self.strip(Strip::horizontal(surface), count)
    }

    pub fn plans(self, surface: impl ScrollSurface + 'static, count: usize) -> Self {
        self.strip(Strip::horizontal(surface), count)
    }

    pub fn current_index(mut self, slot: impl TextSlot + 'static) -> Self {
        self.label = self.label.with_current(slot);
        self
    }

    pub fn index_count(mut self, slot: impl TextSlot + 'static) -> Self {
        self.label = self.label.with_total(slot);
        self
    }

    pub fn prev_button(mut self, target: u64) -> Self {
        self.clicks.push((target, CursorAction::Prev));
        self
    }

    pub fn next_button(mut self, target: u64) -> Self {
        self.clicks.push((target, CursorAction::Next));
        self
    }

    /// A numbered button selecting item `index`
    pub fn index_button(mut self, target: u64, index: usize) -> Self {
        self.clicks.push((target, CursorAction::Set(index)));
        self
    }

    pub fn auto_advance(mut self, period: Option<Duration>) -> Self {
        self.interval = period;
        self
    }

    /// Build the controller, or `None` when the widget must stay inert:
    /// no item groups, mismatched group lengths, or zero items.
    pub fn build(self) -> Option<Carousel> {
        let kind = self.kind.name();
        let Some((&len, rest)) = self.counts.split_first() else {
            tracing::debug!(kind, "carousel skipped: no item groups");
            return None;
        };
        if rest.iter().any(|&count| count != len) {
            tracing::debug!(kind, counts = ?self.counts, "carousel skipped: item counts differ");
            return None;
        }

        let cursor = CursorController::new(len, self.sync, self.label)?;

        let mut input = InputBinder::new();
        for (target, action) in self.clicks {
            input.bind_click(target, action);
        }
        input.bind_keyboard(KeyboardGate::new(self.band_factor), self.root);
        if let Some(period) = self.interval {
            input.bind_timer(period);
        }

        tracing::debug!(kind, len, auto_advance = input.has_timer(), "carousel bound");
        Some(Carousel {
            kind: self.kind,
            cursor,
            input,
        })
    }
}

/// A bound carousel controller
pub struct Carousel {
    kind: CarouselKind,
    cursor: CursorController,
    input: InputBinder,
}

impl Carousel {
    pub fn kind(&self) -> CarouselKind {
        self.kind
    }

    pub fn cursor(&self) -> usize {
        self.cursor.cursor()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Route an input event; returns whether it was consumed
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        self.input.dispatch(&mut self.cursor, event)
    }

    /// Feed elapsed time to the auto-advance timer
    pub fn tick(&mut self, dt: Duration) -> u32 {
        self.input.tick(&mut self.cursor, dt)
    }

    pub fn next(&mut self) -> usize {
        self.cursor.next()
    }

    pub fn prev(&mut self) -> usize {
        self.cursor.prev()
    }

    pub fn set(&mut self, index: usize) -> Result<usize> {
        self.cursor.set(index)
    }
}
