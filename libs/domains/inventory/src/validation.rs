use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t").is_err());
        assert!(validate_not_blank("Tools").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
    }
}
