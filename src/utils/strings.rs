/// Decodes UTF-8, dropping invalid byte sequences instead of replacing them
pub fn decode_utf8_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Case-insensitive `str::ends_with`
pub fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    value.to_lowercase().ends_with(&suffix.to_lowercase())
}

/// Case-insensitive `str::contains`
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
