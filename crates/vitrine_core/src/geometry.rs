//! Geometry primitives
//!
//! Element rectangles as reported by the host (viewport-relative, CSS pixels),
//! plus the axis and transition vocabulary used when repositioning strips.

/// A viewport-relative rectangle, equivalent to a bounding client rect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Scroll axis of a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Scrolls along `scrollLeft`; one item per container width
    #[default]
    Horizontal,
    /// Scrolls along `scrollTop`; one item per container height
    Vertical,
}

impl Axis {
    /// Pick the extent of `rect` along this axis
    pub fn extent_of(&self, rect: &Rect) -> f32 {
        match self {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        }
    }
}

/// How a scroll reposition is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollBehavior {
    /// Animated by the host; used for user-driven cursor changes
    #[default]
    Smooth,
    /// Applied immediately; used for resize corrections
    Instant,
}

impl ScrollBehavior {
    /// The CSSOM `behavior` keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}
