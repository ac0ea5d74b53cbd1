//! Cursor-to-geometry synchronization
//!
//! Keeps every strip of a widget showing the item at the cursor. The target
//! offset of a strip is `cursor * extent`, where the extent is the strip's
//! own width (horizontal) or height (vertical), re-measured on every sync so
//! a resized container lands on the right item.

use smallvec::SmallVec;
use vitrine_core::{Axis, ScrollBehavior};

use crate::surface::{ScrollSurface, TextSlot};

/// Scroll offset that shows item `cursor` in a strip of per-item `extent`
pub fn target_offset(cursor: usize, extent: f32) -> f32 {
    cursor as f32 * extent.max(0.0)
}

/// A scrollable container holding one sub-view per item
pub struct Strip {
    surface: Box<dyn ScrollSurface>,
    axis: Axis,
}

impl Strip {
    pub fn new(surface: impl ScrollSurface + 'static, axis: Axis) -> Self {
        Self {
            surface: Box::new(surface),
            axis,
        }
    }

    pub fn horizontal(surface: impl ScrollSurface + 'static) -> Self {
        Self::new(surface, Axis::Horizontal)
    }

    pub fn vertical(surface: impl ScrollSurface + 'static) -> Self {
        Self::new(surface, Axis::Vertical)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    fn sync(&mut self, cursor: usize, behavior: ScrollBehavior) {
        let extent = self.axis.extent_of(&self.surface.rect());
        self.surface
            .scroll_to(self.axis, target_offset(cursor, extent), behavior);
    }
}

/// The parallel strips of one widget
#[derive(Default)]
pub struct GeometrySync {
    strips: SmallVec<[Strip; 3]>,
}

impl GeometrySync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, strip: Strip) {
        self.strips.push(strip);
    }

    pub fn len(&self) -> usize {
        self.strips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    /// Reposition every strip to show `cursor`
    pub fn sync(&mut self, cursor: usize, behavior: ScrollBehavior) {
        for strip in self.strips.iter_mut() {
            strip.sync(cursor, behavior);
        }
    }
}

/// The `current / total` index indicator
#[derive(Default)]
pub struct IndexLabel {
    current: Option<Box<dyn TextSlot>>,
    total: Option<Box<dyn TextSlot>>,
}

impl IndexLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current(mut self, slot: impl TextSlot + 'static) -> Self {
        self.current = Some(Box::new(slot));
        self
    }

    pub fn with_total(mut self, slot: impl TextSlot + 'static) -> Self {
        self.total = Some(Box::new(slot));
        self
    }

    pub(crate) fn show_total(&mut self, len: usize) {
        if let Some(slot) = self.total.as_mut() {
            slot.set_text(&len.to_string());
        }
    }

    pub(crate) fn show(&mut self, cursor: usize) {
        if let Some(slot) = self.current.as_mut() {
            slot.set_text(&(cursor + 1).to_string());
        }
    }
}
