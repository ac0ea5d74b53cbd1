//! Widget configuration attributes
//!
//! Hosts copy an element's `data-*` attributes into a [`WidgetAttributes`]
//! map; typed accessors apply the browser's lenient number parsing and the
//! site defaults.

use std::time::Duration;

use rustc_hash::FxHashMap;

pub const RANDOM_POSTS_COUNT: &str = "data-random-posts-count";
pub const SWIPE_INTERVAL: &str = "data-swipe-interval";
pub const ARCHIVE: &str = "data-archive";
pub const PAGINATION: &str = "data-pagination";

/// Shortest auto-advance period a widget will run with
pub const MIN_SWIPE_INTERVAL: Duration = Duration::from_millis(10);

/// Attribute map of a widget root element
#[derive(Debug, Clone, Default)]
pub struct WidgetAttributes {
    values: FxHashMap<String, String>,
}

impl WidgetAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Auto-advance period; `None` when absent, unparseable, not positive,
    /// or too large for a `Duration`. Positive periods are raised to
    /// [`MIN_SWIPE_INTERVAL`].
    pub fn swipe_interval(&self) -> Option<Duration> {
        let seconds = parse_leading_float(self.get(SWIPE_INTERVAL)?)?;
        if seconds.is_nan() || seconds <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(seconds)
            .ok()
            .map(|period| period.max(MIN_SWIPE_INTERVAL))
    }

    /// Archive key selecting the page namespace
    pub fn archive(&self, default: &str) -> String {
        self.get(ARCHIVE).unwrap_or(default).to_string()
    }

    /// Total page count supplied by the host page
    pub fn total_pages(&self) -> usize {
        self.get(PAGINATION)
            .and_then(parse_leading_int)
            .map_or(0, |n| n.max(0) as usize)
    }

    /// Number of random posts to show
    pub fn random_posts_count(&self, default: usize) -> usize {
        self.get(RANDOM_POSTS_COUNT)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(default)
    }
}

/// Parse the longest numeric prefix of `text`, like `parseFloat`.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Parse the leading integer of `text`, like `parseInt(text, 10)`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_float_matches_parse_float() {
        assert_eq!(parse_leading_float("2.5"), Some(2.5));
        assert_eq!(parse_leading_float("  3s"), Some(3.0));
        assert_eq!(parse_leading_float(".75"), Some(0.75));
        assert_eq!(parse_leading_float("4."), Some(4.0));
        assert_eq!(parse_leading_float("1e3ms"), Some(1000.0));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("-1"), Some(-1.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn leading_int_matches_parse_int() {
        assert_eq!(parse_leading_int("5"), Some(5));
        assert_eq!(parse_leading_int("12 pages"), Some(12));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("-2"), Some(-2));
        assert_eq!(parse_leading_int("x"), None);
    }

    #[test]
    fn swipe_interval_out_of_range_values() {
        let huge = WidgetAttributes::from_pairs([(SWIPE_INTERVAL, "1e20")]);
        assert_eq!(huge.swipe_interval(), None);

        let tiny = WidgetAttributes::from_pairs([(SWIPE_INTERVAL, "1e-9")]);
        assert_eq!(tiny.swipe_interval(), Some(MIN_SWIPE_INTERVAL));

        let infinite = WidgetAttributes::from_pairs([(SWIPE_INTERVAL, "1e400")]);
        assert_eq!(infinite.swipe_interval(), None);
    }

    #[test]
    fn swipe_interval_requires_positive_seconds() {
        let attrs = WidgetAttributes::from_pairs([(SWIPE_INTERVAL, "1.5")]);
        assert_eq!(attrs.swipe_interval(), Some(Duration::from_millis(1500)));

        let attrs = WidgetAttributes::from_pairs([(SWIPE_INTERVAL, "0")]);
        assert_eq!(attrs.swipe_interval(), None);

        let attrs = WidgetAttributes::from_pairs([(SWIPE_INTERVAL, "soon")]);
        assert_eq!(attrs.swipe_interval(), None);

        assert_eq!(WidgetAttributes::new().swipe_interval(), None);
    }

    #[test]
    fn pagination_attributes_fall_back_to_defaults() {
        let attrs = WidgetAttributes::new();
        assert_eq!(attrs.archive("blog"), "blog");
        assert_eq!(attrs.total_pages(), 0);

        let attrs = WidgetAttributes::from_pairs([(ARCHIVE, "work"), (PAGINATION, "7")]);
        assert_eq!(attrs.archive("blog"), "work");
        assert_eq!(attrs.total_pages(), 7);

        let attrs = WidgetAttributes::from_pairs([(PAGINATION, "-3")]);
        assert_eq!(attrs.total_pages(), 0);
    }

    #[test]
    fn random_posts_count_defaults_on_garbage() {
        let attrs = WidgetAttributes::from_pairs([(RANDOM_POSTS_COUNT, "4")]);
        assert_eq!(attrs.random_posts_count(6), 4);

        let attrs = WidgetAttributes::from_pairs([(RANDOM_POSTS_COUNT, "many")]);
        assert_eq!(attrs.random_posts_count(6), 6);
    }
}
