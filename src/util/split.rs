//! Two-delimiter string parsing

use ahash::AHashMap;

/// Split a string into a key/value map over two delimiters
///
/// The outer delimiter separates pairs, the inner one separates a key from
/// its value. Pairs without the inner delimiter, and empty keys, are
/// skipped. Later duplicates overwrite earlier ones.
///
/// # Example
/// ```
/// use fairq::two_dim_split;
///
/// let opts = two_dim_split("FirstName=Justin:LastName=Ruggles", ":", "=");
/// assert_eq!(opts["FirstName"], "Justin");
/// assert_eq!(opts["LastName"], "Ruggles");
/// ```
pub fn two_dim_split(s: &str, outer: &str, inner: &str) -> AHashMap<String, String> {
    let mut map: AHashMap<String, String> = AHashMap::new();
    for pair in s.split(outer) {
        if let Some((key, value)) = pair.split_once(inner)
            && !key.is_empty()
        {
            map.insert(key.to_string(), value.to_string());
        }
    }
    map
}
