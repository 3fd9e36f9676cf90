/// Trims the incoming query field. Missing, empty, and whitespace-only
/// values all reject the request before any outbound call is made.
pub fn normalized_query(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
