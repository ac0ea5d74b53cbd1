//! Input events
//!
//! Platform-agnostic events a host forwards to widget controllers. Targets
//! are opaque host ids (one per bound control element).

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const RIGHT: KeyCode = KeyCode(0x27);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Map a DOM `KeyboardEvent.key` name to a key code.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => KeyCode::LEFT,
            "ArrowRight" => KeyCode::RIGHT,
            _ => KeyCode::UNKNOWN,
        }
    }
}

/// An event routed to a single widget controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A bound control element was clicked
    Click { target: u64 },
    /// A global keydown; `viewport_height` is `window.innerHeight` at dispatch
    KeyDown { key: KeyCode, viewport_height: f32 },
    /// The widget's primary container changed size
    Resize,
}

/// One intersection observer record, reduced to what controllers consume
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// Position of the observed element within its widget
    pub index: usize,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub const fn new(index: usize, is_intersecting: bool) -> Self {
        Self {
            index,
            is_intersecting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_names_map_to_codes() {
        assert_eq!(KeyCode::from_key_name("ArrowLeft"), KeyCode::LEFT);
        assert_eq!(KeyCode::from_key_name("ArrowRight"), KeyCode::RIGHT);
        assert_eq!(KeyCode::from_key_name("a"), KeyCode::UNKNOWN);
        assert_eq!(KeyCode::from_key_name("ArrowUp"), KeyCode::UNKNOWN);
    }
}
