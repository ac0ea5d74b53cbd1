//! Site configuration file handling (vitrine.toml)
//!
//! Every field has a default, so an empty document yields the stock
//! behavior of the site script.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, VitrineError};

/// Top-level site configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Path prefix for every fragment and page URL (e.g. `/xquiste-portfolio`)
    #[serde(default)]
    pub base_path: String,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    #[serde(default)]
    pub count_up: CountUpConfig,
    #[serde(default)]
    pub cards_scroller: CardsScrollerConfig,
    #[serde(default)]
    pub title_reveal: TitleRevealConfig,
    #[serde(default)]
    pub list_scroller: ListScrollerConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub random_posts: RandomPostsConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Keyboard navigation gate
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyboardConfig {
    /// Arrow keys only reach a widget whose bottom edge lies within this
    /// many viewport heights of the top of the viewport
    #[serde(default = "default_band_factor")]
    pub band_factor: f32,
}

fn default_band_factor() -> f32 {
    1.5
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            band_factor: default_band_factor(),
        }
    }
}

/// Count-up animation schedule
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountUpConfig {
    /// Intersection ratio that starts the animation
    #[serde(default = "default_count_up_threshold")]
    pub threshold: f32,
    /// Progress added per step
    #[serde(default = "default_count_up_step")]
    pub step: f32,
    /// Delay once progress reaches 1.0
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: f32,
    /// Delay curve exponent: `max_delay_ms * progress^exponent`
    #[serde(default = "default_exponent")]
    pub exponent: i32,
    /// Progress rendered on start
    #[serde(default)]
    pub start_progress: f32,
    /// Progress rendered while paused
    #[serde(default = "default_paused_progress")]
    pub paused_progress: f32,
}

fn default_count_up_threshold() -> f32 {
    0.01
}

fn default_count_up_step() -> f32 {
    0.01
}

fn default_max_delay_ms() -> f32 {
    200.0
}

fn default_exponent() -> i32 {
    10
}

fn default_paused_progress() -> f32 {
    0.5
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            threshold: default_count_up_threshold(),
            step: default_count_up_step(),
            max_delay_ms: default_max_delay_ms(),
            exponent: default_exponent(),
            start_progress: 0.0,
            paused_progress: default_paused_progress(),
        }
    }
}

/// Cards scroller visibility tracking
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardsScrollerConfig {
    #[serde(default = "default_cards_threshold")]
    pub threshold: f32,
}

fn default_cards_threshold() -> f32 {
    0.1
}

impl Default for CardsScrollerConfig {
    fn default() -> Self {
        Self {
            threshold: default_cards_threshold(),
        }
    }
}

/// Section title reveal
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TitleRevealConfig {
    #[serde(default = "default_title_threshold")]
    pub threshold: f32,
}

fn default_title_threshold() -> f32 {
    0.1
}

impl Default for TitleRevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_title_threshold(),
        }
    }
}

/// Periodic list scroller
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListScrollerConfig {
    #[serde(default = "default_list_period_ms")]
    pub period_ms: u64,
}

fn default_list_period_ms() -> u64 {
    2500
}

impl Default for ListScrollerConfig {
    fn default() -> Self {
        Self {
            period_ms: default_list_period_ms(),
        }
    }
}

/// Testimonial marquee tracks
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarqueeConfig {
    #[serde(default = "default_seconds_per_item")]
    pub seconds_per_item: f32,
    #[serde(default = "default_gap_px")]
    pub gap_px: f32,
}

fn default_seconds_per_item() -> f32 {
    5.0
}

fn default_gap_px() -> f32 {
    10.0
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            seconds_per_item: default_seconds_per_item(),
            gap_px: default_gap_px(),
        }
    }
}

/// Random post picker
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomPostsConfig {
    #[serde(default = "default_random_posts_count")]
    pub default_count: usize,
}

fn default_random_posts_count() -> usize {
    6
}

impl Default for RandomPostsConfig {
    fn default() -> Self {
        Self {
            default_count: default_random_posts_count(),
        }
    }
}

/// Paginated collections
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_archive")]
    pub default_archive: String,
}

fn default_archive() -> String {
    "blog".to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_archive: default_archive(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file, or from `vitrine.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("vitrine.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| VitrineError::ConfigRead {
            path: config_path.clone(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded site config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.base_path, "");
        assert_eq!(config.keyboard.band_factor, 1.5);
        assert_eq!(config.count_up.step, 0.01);
        assert_eq!(config.count_up.exponent, 10);
        assert_eq!(config.count_up.paused_progress, 0.5);
        assert_eq!(config.cards_scroller.threshold, 0.1);
        assert_eq!(config.title_reveal.threshold, 0.1);
        assert_eq!(config.list_scroller.period_ms, 2500);
        assert_eq!(config.random_posts.default_count, 6);
        assert_eq!(config.pagination.default_archive, "blog");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            base_path = "/xquiste-portfolio"

            [count_up]
            start_progress = 0.5

            [marquee]
            gap_px = 24.0
            "#,
        )
        .unwrap();

        assert_eq!(config.base_path, "/xquiste-portfolio");
        assert_eq!(config.count_up.start_progress, 0.5);
        assert_eq!(config.count_up.max_delay_ms, 200.0);
        assert_eq!(config.marquee.gap_px, 24.0);
        assert_eq!(config.marquee.seconds_per_item, 5.0);
    }

    #[test]
    fn observer_thresholds_are_configurable() {
        let config = SiteConfig::from_toml_str(
            r#"
            [cards_scroller]
            threshold = 0.5

            [title_reveal]
            threshold = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.cards_scroller.threshold, 0.5);
        assert_eq!(config.title_reveal.threshold, 0.25);
        assert_eq!(config.count_up.threshold, CountUpConfig::default().threshold);
    }

    #[test]
    fn invalid_document_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("keyboard = 3").unwrap_err();
        assert!(matches!(err, VitrineError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SiteConfig::load(Path::new("/nonexistent/vitrine.toml")).unwrap_err();
        assert!(matches!(err, VitrineError::ConfigRead { .. }));
    }
}
