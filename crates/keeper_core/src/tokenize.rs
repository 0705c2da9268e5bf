/// Splits raw multi-item text into candidate items.
///
/// Commas and newlines separate entries, then each entry splits on
/// whitespace runs; empty pieces are dropped. First-appearance order is
/// preserved. The same splitter backs submit, paste preview, and plain-text
/// import, so the three paths can never disagree on what a token is.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .flat_map(str::split_whitespace)
        .map(str::to_owned)
        .collect()
}
