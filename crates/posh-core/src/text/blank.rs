/// Trims surrounding whitespace and newlines; blank text becomes `None`.
pub fn none_if_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
