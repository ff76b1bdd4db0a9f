use sha2::{Digest, Sha256};

/// Number of leading hex digits of the SHA-256 digest kept as the identifier
pub const ID_HEX_DIGITS: u32 = 9;

/// Derives a deterministic numeric identifier from a canonical URL
///
/// The identifier is the first nine hexadecimal digits of the SHA-256 digest of
/// the UTF-8 URL, read as a base-16 integer. Profiles and projects share this
/// scheme, so ids are only unique within one kind of record.
///
/// # Example
///
/// ```
/// use folio_scout::model::stable_id;
///
/// let id = stable_id("https://www.behance.net/alice");
/// assert_eq!(id, stable_id("https://www.behance.net/alice"));
/// assert!(id < 1 << 36);
/// ```
pub fn stable_id(url: &str) -> u64 {
    let digest = Sha256::digest(url.as_bytes());

    // Nine hex digits are the top 36 bits of the first five bytes.
    let leading = digest[..5]
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    leading >> (40 - 4 * ID_HEX_DIGITS)
}
