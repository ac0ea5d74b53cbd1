//! Wrapping item cursor
//!
//! The single authoritative position of a synchronized widget. Every
//! mutation updates the index label first, then repositions the strips.

use vitrine_core::{Result, ScrollBehavior, VitrineError};

use crate::geometry_sync::{GeometrySync, IndexLabel};

pub struct CursorController {
    cursor: usize,
    len: usize,
    sync: GeometrySync,
    label: IndexLabel,
}

impl CursorController {
    /// `None` for an empty widget, which stays inert.
    pub fn new(len: usize, sync: GeometrySync, mut label: IndexLabel) -> Option<Self> {
        if len == 0 {
            tracing::debug!("cursor controller skipped: no items");
            return None;
        }

        label.show_total(len);
        Some(Self {
            cursor: 0,
            len,
            sync,
            label,
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_last(&self) -> bool {
        self.cursor == self.len - 1
    }

    pub fn next(&mut self) -> usize {
        self.cursor = (self.cursor + 1) % self.len;
        self.apply(ScrollBehavior::Smooth);
        self.cursor
    }

    pub fn prev(&mut self) -> usize {
        self.cursor = if self.cursor == 0 {
            self.len - 1
        } else {
            self.cursor - 1
        };
        self.apply(ScrollBehavior::Smooth);
        self.cursor
    }

    pub fn set(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            tracing::warn!(index, len = self.len, "cursor selection out of range");
            return Err(VitrineError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        self.cursor = index;
        self.apply(ScrollBehavior::Smooth);
        Ok(self.cursor)
    }

    /// Re-apply the current position without animation (resize correction)
    pub fn resync(&mut self) {
        self.apply(ScrollBehavior::Instant);
    }

    fn apply(&mut self, behavior: ScrollBehavior) {
        tracing::trace!(cursor = self.cursor, behavior = behavior.as_str(), "cursor sync");
        self.label.show(self.cursor);
        self.sync.sync(self.cursor, behavior);
    }
}
