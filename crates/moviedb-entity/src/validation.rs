//! Custom validator rules shared by the write-side drafts.

use validator::{ValidateUrl, ValidationError};

/// Reject strings that are empty after trimming.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Accept an empty string or a well-formed `http(s)` URL.
pub(crate) fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    if !has_scheme || !value.validate_url() {
        return Err(ValidationError::new("http_url"));
    }
    Ok(())
}
