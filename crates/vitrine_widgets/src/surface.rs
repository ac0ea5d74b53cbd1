//! Host surfaces
//!
//! Controllers never touch the DOM directly. A host implements these traits
//! over its elements (a browser binding, or the recording elements in
//! [`headless`](crate::headless)) and hands boxed instances to factories.

use vitrine_core::{Axis, Rect, ScrollBehavior};

/// Anything whose viewport-relative bounds can be measured
pub trait BoundsProbe {
    fn rect(&self) -> Rect;
}

/// A scrollable container (strip)
pub trait ScrollSurface: BoundsProbe {
    fn scroll_to(&mut self, axis: Axis, offset: f32, behavior: ScrollBehavior);
}

/// An element whose text content is replaced wholesale
pub trait TextSlot {
    fn set_text(&mut self, text: &str);
}

/// An element whose class list is toggled
pub trait ClassList {
    fn set_class(&mut self, class: &str, enabled: bool);
}

/// An index chip in a cards scroller: toggled active, measured for offset
pub trait IndexChip: ClassList + BoundsProbe {}

impl<T: ClassList + BoundsProbe> IndexChip for T {}

/// A container whose inner HTML is replaced by fetched content
pub trait ContentSlot {
    fn replace_html(&mut self, html: &str);
}

/// A page-number button created by [`PageControls`]
pub struct PageButton {
    /// Host id reported in click events
    pub target: u64,
    pub classes: Box<dyn ClassList>,
}

/// The pagination list of a paginated collection
pub trait PageControls {
    /// Insert a button labelled `label` before the fixed "next" control
    fn insert_page_button(&mut self, label: &str) -> PageButton;
}

/// An element whose inline style properties are set
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
}

/// A testimonial track that loops by duplicating its children
pub trait MarqueeTrack: StyleTarget {
    fn scroll_width(&self) -> f32;
    fn child_count(&self) -> usize;
    fn duplicate_children(&mut self);
}

/// A section title container slid in and out of view
pub trait RevealTarget: StyleTarget + BoundsProbe {}

impl<T: StyleTarget + BoundsProbe> RevealTarget for T {}

/// A vertically scrolling list whose first item can be cloned onto the end
pub trait ItemList: ScrollSurface {
    fn item_count(&self) -> usize;
    fn append_first_clone(&mut self);
}
