use crate::domain::model::Distance;
use crate::utils::error::{Result, WearError};

/// Largest odometer value the input fields accept.
pub const MAX_DISTANCE: Distance = 9_999_999;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WearError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WearError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WearError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WearError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Parses an odometer field: a whole number of kilometres in `0..=max`.
/// Thousands separators (`,` `_` and spaces) are accepted.
pub fn parse_distance(field_name: &str, input: &str, max: Distance) -> Result<Distance> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();

    if cleaned.is_empty() {
        return Err(WearError::InputError {
            field: field_name.to_string(),
            reason: "a reading is required".to_string(),
        });
    }

    let value: u64 = cleaned.parse().map_err(|_| WearError::InputError {
        field: field_name.to_string(),
        reason: format!("'{}' is not a whole number of kilometres", input.trim()),
    })?;

    if value > u64::from(max) {
        return Err(WearError::InputError {
            field: field_name.to_string(),
            reason: format!("{} exceeds the maximum of {} km", value, max),
        });
    }

    // value <= max, which is itself a Distance
    Ok(value as Distance)
}
