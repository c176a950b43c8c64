use crate::error::StoreError;

/// Maximum length of a gig title, in Unicode characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Validate a gig title against the `varchar(100)` bound. Empty titles are allowed.
pub fn validate_title(title: &str) -> Result<(), StoreError> {
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(StoreError::Validation(format!(
            "Title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}
