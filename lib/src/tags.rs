/// Parse comma-separated tags as typed at the prompt, filtering empty ones
pub fn parse_tags(tags_str: &str) -> Vec<String> {
    tags_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Display form used by the terminal view and the Markdown export
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// True if `needle` (already lowercased) occurs inside any single tag
pub fn any_tag_contains(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
