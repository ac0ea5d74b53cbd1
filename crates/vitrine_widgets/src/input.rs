//! Input binding
//!
//! Translates clicks, arrow keys, resizes, and an optional auto-advance
//! timer into cursor actions. Arrow keys arrive from a page-wide keydown
//! listener, so each widget gates them on its own position: a key is
//! accepted only while the widget's bottom edge is below the viewport top
//! and no further than `band_factor` viewport heights down.

use std::time::Duration;

use rustc_hash::FxHashMap;
use vitrine_animation::IntervalTimer;
use vitrine_core::{InputEvent, KeyCode};

use crate::cursor::CursorController;
use crate::surface::BoundsProbe;

/// What a bound input does to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    Prev,
    Next,
    Set(usize),
}

impl CursorAction {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::LEFT => Some(CursorAction::Prev),
            KeyCode::RIGHT => Some(CursorAction::Next),
            _ => None,
        }
    }

    pub fn apply(self, cursor: &mut CursorController) {
        match self {
            CursorAction::Prev => {
                cursor.prev();
            }
            CursorAction::Next => {
                cursor.next();
            }
            CursorAction::Set(index) => {
                // Out-of-range selections are logged by the cursor and ignored
                let _ = cursor.set(index);
            }
        }
    }
}

/// Viewport band in which a widget accepts arrow keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardGate {
    band_factor: f32,
}

impl KeyboardGate {
    pub fn new(band_factor: f32) -> Self {
        Self { band_factor }
    }

    pub fn admits(&self, bottom: f32, viewport_height: f32) -> bool {
        bottom > 0.0 && bottom - viewport_height * self.band_factor <= 0.0
    }
}

pub struct InputBinder {
    clicks: FxHashMap<u64, CursorAction>,
    keyboard: Option<(KeyboardGate, Box<dyn BoundsProbe>)>,
    timer: Option<IntervalTimer>,
}

impl InputBinder {
    pub fn new() -> Self {
        Self {
            clicks: FxHashMap::default(),
            keyboard: None,
            timer: None,
        }
    }

    pub fn bind_click(&mut self, target: u64, action: CursorAction) {
        self.clicks.insert(target, action);
    }

    /// Accept arrow keys while `probe` sits inside the keyboard band
    pub fn bind_keyboard(&mut self, gate: KeyboardGate, probe: Box<dyn BoundsProbe>) {
        self.keyboard = Some((gate, probe));
    }

    /// Advance the cursor every `period`
    pub fn bind_timer(&mut self, period: Duration) {
        self.timer = Some(IntervalTimer::new(period));
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Resolve an event to the action it triggers, if any
    pub fn action_for(&self, event: &InputEvent) -> Option<CursorAction> {
        match *event {
            InputEvent::Click { target } => self.clicks.get(&target).copied(),
            InputEvent::KeyDown {
                key,
                viewport_height,
            } => {
                let action = CursorAction::from_key(key)?;
                let (gate, probe) = self.keyboard.as_ref()?;
                let bottom = probe.rect().bottom();
                if gate.admits(bottom, viewport_height) {
                    Some(action)
                } else {
                    tracing::trace!(bottom, viewport_height, "arrow key outside keyboard band");
                    None
                }
            }
            InputEvent::Resize => None,
        }
    }

    /// Apply an event to `cursor`; returns whether the event was consumed
    pub fn dispatch(&self, cursor: &mut CursorController, event: &InputEvent) -> bool {
        if matches!(event, InputEvent::Resize) {
            cursor.resync();
            return true;
        }

        match self.action_for(event) {
            Some(action) => {
                action.apply(cursor);
                true
            }
            None => false,
        }
    }

    /// Feed elapsed time to the auto-advance timer
    pub fn tick(&mut self, cursor: &mut CursorController, dt: Duration) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };

        let fired = timer.advance(dt);
        for _ in 0..fired {
            cursor.next();
        }
        if fired > 0 {
            tracing::trace!(fired, cursor = cursor.cursor(), "auto-advance");
        }
        fired
    }
}

impl Default for InputBinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry_sync::{GeometrySync, IndexLabel};
    use crate::headless::HeadlessElement;
    use vitrine_core::Rect;

    const LEFT: u64 = 1;
    const RIGHT: u64 = 2;

    fn cursor(len: usize) -> CursorController {
        CursorController::new(len, GeometrySync::new(), IndexLabel::new()).unwrap()
    }

    fn key(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown {
            key,
            viewport_height: 800.0,
        }
    }

    fn binder(root: &HeadlessElement) -> InputBinder {
        let mut binder = InputBinder::new();
        binder.bind_click(LEFT, CursorAction::Prev);
        binder.bind_click(RIGHT, CursorAction::Next);
        binder.bind_keyboard(KeyboardGate::new(1.5), Box::new(root.clone()));
        binder
    }

    #[test]
    fn test_gate_band() {
        let gate = KeyboardGate::new(1.5);
        assert!(gate.admits(1.0, 800.0));
        assert!(gate.admits(1200.0, 800.0));
        assert!(!gate.admits(1200.5, 800.0));
        assert!(!gate.admits(0.0, 800.0));
        assert!(!gate.admits(-50.0, 800.0));
    }

    #[test]
    fn test_clicks_move_cursor() {
        let root = HeadlessElement::with_size(400.0, 600.0);
        let binder = binder(&root);
        let mut cursor = cursor(3);

        assert!(binder.dispatch(&mut cursor, &InputEvent::Click { target: RIGHT }));
        assert_eq!(cursor.cursor(), 1);
        assert!(binder.dispatch(&mut cursor, &InputEvent::Click { target: LEFT }));
        assert!(binder.dispatch(&mut cursor, &InputEvent::Click { target: LEFT }));
        assert_eq!(cursor.cursor(), 2);
        assert!(!binder.dispatch(&mut cursor, &InputEvent::Click { target: 99 }));
    }

    #[test]
    fn test_keys_respect_band() {
        let root = HeadlessElement::with_rect(Rect::new(0.0, 200.0, 400.0, 600.0));
        let binder = binder(&root);
        let mut cursor = cursor(3);

        assert!(binder.dispatch(&mut cursor, &key(KeyCode::RIGHT)));
        assert_eq!(cursor.cursor(), 1);

        // Scrolled past: bottom edge above the viewport
        root.set_top(-700.0);
        assert!(!binder.dispatch(&mut cursor, &key(KeyCode::RIGHT)));

        // Far below the fold
        root.set_top(1000.0);
        assert!(!binder.dispatch(&mut cursor, &key(KeyCode::LEFT)));
        assert_eq!(cursor.cursor(), 1);
    }

    #[test]
    fn test_other_keys_ignored() {
        let root = HeadlessElement::with_size(400.0, 600.0);
        let binder = binder(&root);
        let mut cursor = cursor(3);
        assert!(!binder.dispatch(&mut cursor, &key(KeyCode::from_key_name("ArrowUp"))));
        assert_eq!(cursor.cursor(), 0);
    }

    #[test]
    fn test_without_keyboard_binding_keys_are_ignored() {
        let binder = InputBinder::new();
        assert_eq!(binder.action_for(&key(KeyCode::RIGHT)), None);
    }

    #[test]
    fn test_numbered_buttons_select() {
        let mut binder = InputBinder::new();
        binder.bind_click(10, CursorAction::Set(2));
        binder.bind_click(11, CursorAction::Set(7));
        let mut cursor = cursor(4);

        binder.dispatch(&mut cursor, &InputEvent::Click { target: 10 });
        assert_eq!(cursor.cursor(), 2);
        binder.dispatch(&mut cursor, &InputEvent::Click { target: 11 });
        assert_eq!(cursor.cursor(), 2);
    }

    #[test]
    fn test_timer_auto_advances() {
        let mut binder = InputBinder::new();
        binder.bind_timer(Duration::from_secs(3));
        let mut cursor = cursor(3);

        assert_eq!(binder.tick(&mut cursor, Duration::from_secs(2)), 0);
        assert_eq!(binder.tick(&mut cursor, Duration::from_secs(7)), 3);
        assert_eq!(cursor.cursor(), 0);
    }

    #[test]
    fn test_no_timer_no_advance() {
        let mut binder = InputBinder::new();
        let mut cursor = cursor(3);
        assert_eq!(binder.tick(&mut cursor, Duration::from_secs(60)), 0);
        assert_eq!(cursor.cursor(), 0);
    }
}
