//! Randomized politeness delay between search page fetches

use std::time::Duration;

/// Clamps negative (or NaN) bounds to zero and orders them as `(min, max)`
pub fn normalize_bounds(min_seconds: f64, max_seconds: f64) -> (f64, f64) {
    let mut min = min_seconds;
    let mut max = max_seconds;

    // `!(x >= 0.0)` also catches NaN.
    if !(min >= 0.0) || !(max >= 0.0) {
        tracing::warn!(
            "Negative delay bounds (min={}, max={}); clamping to non-negative",
            min_seconds,
            max_seconds
        );
        if !(min >= 0.0) {
            min = 0.0;
        }
        if !(max >= 0.0) {
            max = 0.0;
        }
    }

    if max < min {
        tracing::debug!("Swapping delay bounds because {} > {}", min, max);
        std::mem::swap(&mut min, &mut max);
    }

    (min, max)
}

/// Draws a delay uniformly from the normalized bounds, in seconds
pub fn sample_delay(min_seconds: f64, max_seconds: f64) -> f64 {
    let (min, max) = normalize_bounds(min_seconds, max_seconds);
    (min + (max - min) * fastrand::f64()).clamp(min, max)
}

/// Sleeps for a random duration between the bounds
///
/// Returns the slept duration in seconds so callers can log or test it.
pub async fn sleep_with_jitter(min_seconds: f64, max_seconds: f64) -> f64 {
    let delay = sample_delay(min_seconds, max_seconds);
    tracing::debug!("Sleeping for {:.2} seconds to be polite", delay);
    let duration = Duration::try_from_secs_f64(delay).unwrap_or(Duration::MAX);
    tokio::time::sleep(duration).await;
    delay
}
