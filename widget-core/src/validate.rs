use crate::error::WidgetError;

/// Trim the raw input and reject it if nothing is left.
pub fn validate_location(raw: &str) -> Result<&str, WidgetError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WidgetError::EmptyLocation);
    }
    Ok(trimmed)
}
