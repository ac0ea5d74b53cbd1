//! Testimonial marquee
//!
//! Tracks scroll by a CSS animation reading `--scroll-width` and
//! `--scroll-time`. Both are derived from the track before its children are
//! duplicated, so the animation ends exactly where the copy begins.

use vitrine_core::config::MarqueeConfig;

use crate::surface::MarqueeTrack;

pub const SCROLL_WIDTH_PROPERTY: &str = "--scroll-width";
pub const SCROLL_TIME_PROPERTY: &str = "--scroll-time";

/// The animation parameters written to a track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeLoop {
    /// Horizontal travel in pixels, negative
    pub travel_px: f32,
    pub duration_secs: f32,
}

impl MarqueeLoop {
    pub fn measure(track: &dyn MarqueeTrack, config: &MarqueeConfig) -> Self {
        Self {
            travel_px: -(track.scroll_width() + config.gap_px),
            duration_secs: track.child_count() as f32 * config.seconds_per_item,
        }
    }
}

/// Configure a track and duplicate its children for a seamless loop
pub fn loop_track(track: &mut dyn MarqueeTrack, config: &MarqueeConfig) -> MarqueeLoop {
    let marquee = MarqueeLoop::measure(track, config);
    track.set_property(SCROLL_WIDTH_PROPERTY, &format!("{}px", marquee.travel_px));
    track.set_property(SCROLL_TIME_PROPERTY, &format!("{}s", marquee.duration_secs));
    track.duplicate_children();
    tracing::debug!(
        travel_px = marquee.travel_px,
        duration_secs = marquee.duration_secs,
        "marquee track looped"
    );
    marquee
}
