//! Headless surfaces
//!
//! A [`HeadlessElement`] is a shared, recording stand-in for a DOM element.
//! Clones share state, so a test (or a deterministic headless run) keeps one
//! handle while a controller owns another, and inspects every scroll, text,
//! class, and content mutation afterwards.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use vitrine_core::{Axis, Rect, ScrollBehavior};

use crate::surface::{
    BoundsProbe, ClassList, ContentSlot, ItemList, MarqueeTrack, PageButton, PageControls,
    ScrollSurface, StyleTarget, TextSlot,
};

/// One recorded `scroll_to` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCall {
    pub axis: Axis,
    pub offset: f32,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Default)]
struct ElementRecord {
    rect: Rect,
    scroll_left: f32,
    scroll_top: f32,
    scrolls: Vec<ScrollCall>,
    text: String,
    html: String,
    html_writes: usize,
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
    scroll_width: f32,
    children: usize,
    first_target: u64,
    inserted: Vec<HeadlessElement>,
}

/// A shared recording element
#[derive(Debug, Clone, Default)]
pub struct HeadlessElement {
    inner: Rc<RefCell<ElementRecord>>,
}

impl HeadlessElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rect(rect: Rect) -> Self {
        let element = Self::default();
        element.set_rect(rect);
        element
    }

    /// An element at the viewport origin with the given size
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::with_rect(Rect::new(0.0, 0.0, width, height))
    }

    pub fn set_rect(&self, rect: Rect) {
        self.inner.borrow_mut().rect = rect;
    }

    /// Move the element vertically, keeping its size
    pub fn set_top(&self, top: f32) {
        self.inner.borrow_mut().rect.y = top;
    }

    pub fn scroll_offset(&self, axis: Axis) -> f32 {
        let record = self.inner.borrow();
        match axis {
            Axis::Horizontal => record.scroll_left,
            Axis::Vertical => record.scroll_top,
        }
    }

    pub fn scroll_calls(&self) -> Vec<ScrollCall> {
        self.inner.borrow().scrolls.clone()
    }

    pub fn last_scroll(&self) -> Option<ScrollCall> {
        self.inner.borrow().scrolls.last().copied()
    }

    pub fn clear_scrolls(&self) {
        self.inner.borrow_mut().scrolls.clear();
    }

    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    pub fn html(&self) -> String {
        self.inner.borrow().html.clone()
    }

    /// Number of times the inner HTML was replaced
    pub fn html_writes(&self) -> usize {
        self.inner.borrow().html_writes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.contains(class)
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.inner.borrow().properties.get(name).cloned()
    }

    /// Configure a marquee track's measurements (also the item count of a list)
    pub fn set_track(&self, scroll_width: f32, children: usize) {
        let mut record = self.inner.borrow_mut();
        record.scroll_width = scroll_width;
        record.children = children;
    }

    pub fn children(&self) -> usize {
        self.inner.borrow().children
    }

    /// First host id handed out to inserted page buttons
    pub fn set_first_target(&self, target: u64) {
        self.inner.borrow_mut().first_target = target;
    }

    /// Page buttons inserted through [`PageControls`], in insertion order
    pub fn inserted(&self) -> Vec<HeadlessElement> {
        self.inner.borrow().inserted.clone()
    }
}

impl BoundsProbe for HeadlessElement {
    fn rect(&self) -> Rect {
        self.inner.borrow().rect
    }
}

impl ScrollSurface for HeadlessElement {
    fn scroll_to(&mut self, axis: Axis, offset: f32, behavior: ScrollBehavior) {
        let mut record = self.inner.borrow_mut();
        match axis {
            Axis::Horizontal => record.scroll_left = offset,
            Axis::Vertical => record.scroll_top = offset,
        }
        record.scrolls.push(ScrollCall {
            axis,
            offset,
            behavior,
        });
    }
}

impl TextSlot for HeadlessElement {
    fn set_text(&mut self, text: &str) {
        self.inner.borrow_mut().text = text.to_string();
    }
}

impl ClassList for HeadlessElement {
    fn set_class(&mut self, class: &str, enabled: bool) {
        let mut record = self.inner.borrow_mut();
        if enabled {
            record.classes.insert(class.to_string());
        } else {
            record.classes.remove(class);
        }
    }
}

impl ContentSlot for HeadlessElement {
    fn replace_html(&mut self, html: &str) {
        let mut record = self.inner.borrow_mut();
        record.html = html.to_string();
        record.html_writes += 1;
    }
}

impl PageControls for HeadlessElement {
    fn insert_page_button(&mut self, label: &str) -> PageButton {
        let mut button = HeadlessElement::new();
        button.set_text(label);

        let mut record = self.inner.borrow_mut();
        let target = record.first_target + record.inserted.len() as u64;
        record.inserted.push(button.clone());
        record.children += 1;

        PageButton {
            target,
            classes: Box::new(button),
        }
    }
}

impl StyleTarget for HeadlessElement {
    fn set_property(&mut self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .properties
            .insert(name.to_string(), value.to_string());
    }
}

impl MarqueeTrack for HeadlessElement {
    fn scroll_width(&self) -> f32 {
        self.inner.borrow().scroll_width
    }

    fn child_count(&self) -> usize {
        self.inner.borrow().children
    }

    fn duplicate_children(&mut self) {
        let mut record = self.inner.borrow_mut();
        record.children *= 2;
        record.html = record.html.repeat(2);
    }
}

impl ItemList for HeadlessElement {
    fn item_count(&self) -> usize {
        self.inner.borrow().children
    }

    fn append_first_clone(&mut self) {
        let mut record = self.inner.borrow_mut();
        if record.children > 0 {
            record.children += 1;
        }
    }
}
