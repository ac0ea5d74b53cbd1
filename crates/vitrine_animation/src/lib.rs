//! Vitrine Animation System
//!
//! Progress-driven text interpolation and the timers that drive it.
//!
//! # Features
//!
//! - **Count-Up**: numeric text counted up from zero by a progress ratio
//! - **Pause/Resume**: clean state transitions instead of schedule suppression
//! - **Externally Driven**: the scheduler owns every step schedule; callers
//!   only feed it elapsed time
//! - **Interval Timers**: fixed-period firing for carousels and list tickers

pub mod count_up;
pub mod scheduler;
pub mod timer;

pub use count_up::{CountUp, CountUpStatus, NumberParts};
pub use scheduler::{AnimationScheduler, CountUpId};
pub use timer::IntervalTimer;
