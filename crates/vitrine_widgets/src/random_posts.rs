//! Random post selection

use rand::Rng;
use vitrine_core::{SiteConfig, WidgetAttributes};

/// `count` distinct integers drawn uniformly from `start..=end`.
///
/// When the range holds fewer than `count` integers, all of them are
/// returned in ascending order. An empty range (`end < start`) yields none.
pub fn distinct_random_indices<R: Rng + ?Sized>(
    start: usize,
    end: usize,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    if end < start {
        return Vec::new();
    }

    let range = end - start + 1;
    if range < count {
        return (start..=end).collect();
    }

    rand::seq::index::sample(rng, range, count)
        .into_iter()
        .map(|offset| start + offset)
        .collect()
}

/// Indices of the posts to show out of `post_count` fetched posts, honoring
/// `data-random-posts-count`
pub fn pick_posts<R: Rng + ?Sized>(
    post_count: usize,
    attrs: &WidgetAttributes,
    config: &SiteConfig,
    rng: &mut R,
) -> Vec<usize> {
    let count = attrs.random_posts_count(config.random_posts.default_count);
    if post_count == 0 {
        return Vec::new();
    }
    let picked = distinct_random_indices(0, post_count - 1, count, rng);
    tracing::debug!(post_count, count, picked = picked.len(), "random posts picked");
    picked
}
