//! Field rules shared by the catalog entities.

use crate::errors::ModelError;

/// Oldest build year accepted for a property.
pub const YEAR_MIN: i32 = 1800;
/// Newest build year accepted for a property.
pub const YEAR_MAX: i32 = 2024;

/// Column widths declared by the schema, in characters.
pub const NAME_MAX: usize = 256;
pub const ADDRESS_MAX: usize = 512;
pub const CODE_MAX: usize = 64;

pub fn required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn positive(field: &str, value: i32) -> Result<(), ModelError> {
    if value <= 0 {
        return Err(ModelError::Validation(format!("{field} must be greater than zero")));
    }
    Ok(())
}

pub fn build_year(year: i32) -> Result<(), ModelError> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(ModelError::Validation(format!("year must be between {YEAR_MIN} and {YEAR_MAX}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(required("name", "").is_err());
        assert!(required("name", "   ").is_err());
        assert!(required("name", "Villa").is_ok());
    }

    #[test]
    fn max_len_counts_characters() {
        assert!(max_len("name", &"a".repeat(NAME_MAX), NAME_MAX).is_ok());
        assert!(max_len("name", &"a".repeat(NAME_MAX + 1), NAME_MAX).is_err());
        // multi-byte characters count once
        assert!(max_len("code_internal", &"é".repeat(CODE_MAX), CODE_MAX).is_ok());
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(positive("price", 0).is_err());
        assert!(positive("price", -5).is_err());
        assert!(positive("price", 1).is_ok());
    }

    #[test]
    fn build_year_bounds_are_inclusive() {
        assert!(build_year(YEAR_MIN).is_ok());
        assert!(build_year(YEAR_MAX).is_ok());
        assert!(build_year(YEAR_MIN - 1).is_err());
        assert!(build_year(YEAR_MAX + 1).is_err());
    }

    #[test]
    fn message_names_the_field() {
        let err = positive("tax", 0).unwrap_err();
        assert_eq!(err.to_string(), "validation error: tax must be greater than zero");
    }
}
