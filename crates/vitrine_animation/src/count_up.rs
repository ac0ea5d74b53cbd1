//! Count-up animation
//!
//! A numeric text such as `"$1,234.50"` is split once into [`NumberParts`];
//! a [`CountUp`] then renders that number scaled by a progress ratio in
//! `[0, 1]`. Progress advances through [`CountUp::tick`]; the caller (usually
//! the [`AnimationScheduler`](crate::AnimationScheduler)) owns the timing and
//! asks [`CountUp::next_delay`] how long to wait before the next step.
//!
//! The step delay is `max_delay_ms * progress^exponent`, so early steps fire
//! almost immediately and the last few slow down sharply.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use vitrine_core::config::CountUpConfig;

/// Optional non-digit prefix, a numeric literal, optional non-digit suffix.
/// The literal may carry en-US grouping commas and a single decimal point.
const NUMBER_PATTERN: &str = r"^(\D*?)(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d*\.?\d+)(\D*)$";

/// Smallest progress increment accepted from configuration
const MIN_STEP: f32 = 0.0001;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("Invalid regex pattern"))
}

/// The parts of a numeric text, extracted once per element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberParts {
    pub prefix: String,
    /// All digits of the literal with the decimal point removed
    pub whole_number: u64,
    /// Fraction digits of the literal; `None` for an integer literal
    pub decimal_places: Option<u32>,
    pub suffix: String,
}

impl NumberParts {
    /// Split `text`, or `None` when it is not a single decorated number.
    pub fn parse(text: &str) -> Option<Self> {
        let captures = number_pattern().captures(text)?;
        let literal = captures[2].replace(',', "");

        let decimal_places = literal
            .find('.')
            .map(|pos| (literal.len() - pos - 1) as u32);
        let whole_number = literal.replace('.', "").parse().ok()?;

        Some(Self {
            prefix: captures[1].trim().to_string(),
            whole_number,
            decimal_places,
            suffix: captures[3].trim().to_string(),
        })
    }

    /// Fraction digits to render (integers render none)
    pub fn fraction_digits(&self) -> u32 {
        self.decimal_places.unwrap_or(0)
    }

    /// Render the number scaled by `progress`
    pub fn render(&self, progress: f32) -> String {
        let scaled = if progress >= 1.0 {
            self.whole_number
        } else {
            (f64::from(progress.max(0.0)) * self.whole_number as f64).round() as u64
        };
        format!(
            "{}{}{}",
            self.prefix,
            format_fixed(scaled, self.fraction_digits()),
            self.suffix
        )
    }
}

/// Format `scaled / 10^digits` with en-US grouping and exactly `digits`
/// fraction digits.
fn format_fixed(scaled: u64, digits: u32) -> String {
    let digits = digits as usize;
    let padded = format!("{scaled:0width$}", width = digits + 1);
    let (integer, fraction) = padded.split_at(padded.len() - digits);
    let integer = group_thousands(integer);
    if digits == 0 {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Lifecycle of a count-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountUpStatus {
    #[default]
    Running,
    /// Frozen at the paused progress; no steps are scheduled
    Paused,
    /// Reached progress 1.0
    Finished,
}

/// A single count-up over one element's number
#[derive(Debug, Clone)]
pub struct CountUp {
    parts: NumberParts,
    progress: f32,
    status: CountUpStatus,
    step: f32,
    max_delay_ms: f32,
    exponent: i32,
    paused_progress: f32,
}

impl CountUp {
    pub fn new(parts: NumberParts, config: &CountUpConfig) -> Self {
        let progress = config.start_progress.clamp(0.0, 1.0);
        Self {
            parts,
            progress,
            status: if progress >= 1.0 {
                CountUpStatus::Finished
            } else {
                CountUpStatus::Running
            },
            step: config.step.clamp(MIN_STEP, 1.0),
            max_delay_ms: config.max_delay_ms,
            exponent: config.exponent,
            paused_progress: config.paused_progress,
        }
    }

    pub fn parts(&self) -> &NumberParts {
        &self.parts
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn status(&self) -> CountUpStatus {
        self.status
    }

    /// Progress added by one scheduled step
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Text for the current state
    pub fn render(&self) -> String {
        match self.status {
            CountUpStatus::Paused => self.parts.render(self.paused_progress),
            _ => self.parts.render(self.progress),
        }
    }

    /// Advance progress by `delta`; a no-op unless running.
    pub fn tick(&mut self, delta: f32) -> CountUpStatus {
        if self.status != CountUpStatus::Running {
            return self.status;
        }

        self.progress = (self.progress + delta.max(0.0)).min(1.0);
        if self.progress >= 1.0 {
            self.status = CountUpStatus::Finished;
        }
        tracing::trace!(progress = self.progress, "count-up step");
        self.status
    }

    /// Delay before the next step, or `None` when nothing is scheduled.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.status != CountUpStatus::Running {
            return None;
        }

        let upcoming = (self.progress + self.step).min(1.0);
        let ms = self.max_delay_ms * upcoming.powi(self.exponent);
        Some(Duration::from_secs_f32(ms.max(0.0) / 1000.0))
    }

    /// Freeze rendering at the paused progress
    pub fn pause(&mut self) {
        if self.status == CountUpStatus::Running {
            self.status = CountUpStatus::Paused;
        }
    }

    /// Continue from the last real progress
    pub fn resume(&mut self) {
        if self.status == CountUpStatus::Paused {
            self.status = CountUpStatus::Running;
        }
    }
}
