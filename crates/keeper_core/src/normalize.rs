/// Canonical comparison form of an item.
///
/// Surrounding whitespace is trimmed, every inner whitespace run collapses
/// to a single space, and the result is lowercased. Two items are duplicates
/// iff their normalized forms are equal; display forms are stored verbatim
/// and never pass through here.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
