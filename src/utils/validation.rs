use crate::utils::error::{DrillError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// CLI 可接受的練習名稱（"all" 會展開成完整順序）
pub const EXERCISE_NAMES: [&str; 2] = ["classify", "perfect"];

pub fn validate_exercise_name(field_name: &str, name: &str) -> Result<()> {
    if name == "all" || EXERCISE_NAMES.contains(&name) {
        return Ok(());
    }
    Err(DrillError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: name.to_string(),
        reason: format!(
            "Unknown exercise. Valid names: {}, all",
            EXERCISE_NAMES.join(", ")
        ),
    })
}

pub fn validate_exercise_names(field_name: &str, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(DrillError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let allowed: HashSet<&str> = EXERCISE_NAMES.iter().copied().collect();
    for name in names {
        if !allowed.contains(name.as_str()) {
            return Err(DrillError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: format!(
                    "Unknown exercise. Valid names: {}",
                    EXERCISE_NAMES.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
