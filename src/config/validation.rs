use serde_json::Value;
use url::Url;

/// Range substituted for an all-zero delay configuration
pub const MIN_DELAY_RANGE: (f64, f64) = (0.5, 1.0);

/// Normalizes a configured delay range
///
/// Negative bounds are clamped to zero and inverted bounds swapped. A range of
/// `(0, 0)` would hammer the target site, so it is replaced by
/// [`MIN_DELAY_RANGE`].
pub fn validate_delay_range(delay_range: (f64, f64)) -> (f64, f64) {
    let (mut min, mut max) = delay_range;
    min = if min >= 0.0 { min } else { 0.0 };
    max = if max >= 0.0 { max } else { 0.0 };

    if max < min {
        std::mem::swap(&mut min, &mut max);
    }

    if min == 0.0 && max == 0.0 {
        tracing::warn!(
            "Zero delay range configured; forcing minimal delay of {}-{} seconds",
            MIN_DELAY_RANGE.0,
            MIN_DELAY_RANGE.1
        );
        return MIN_DELAY_RANGE;
    }

    (min, max)
}

/// Two-element array of finite numbers, normalized
pub(crate) fn parse_delay_range(value: &Value) -> Option<(f64, f64)> {
    match value.as_array()?.as_slice() {
        [min, max] => {
            let (min, max) = (min.as_f64()?, max.as_f64()?);
            (min.is_finite() && max.is_finite()).then(|| validate_delay_range((min, max)))
        }
        _ => None,
    }
}

/// Absolute HTTP(S) URL
pub(crate) fn parse_base_url(value: &Value) -> Option<Url> {
    let url = Url::parse(value.as_str()?.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Non-empty string, trimmed
pub(crate) fn parse_non_empty_string(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Integer of at least one
pub(crate) fn parse_positive_u64(value: &Value) -> Option<u64> {
    value.as_u64().filter(|n| *n >= 1)
}

pub(crate) fn parse_positive_u32(value: &Value) -> Option<u32> {
    parse_positive_u64(value).and_then(|n| u32::try_from(n).ok())
}

pub(crate) fn parse_positive_usize(value: &Value) -> Option<usize> {
    parse_positive_u64(value).and_then(|n| usize::try_from(n).ok())
}
