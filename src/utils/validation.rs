use crate::utils::error::{CoffeeError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_real(field_name: &str, value: f64) -> Result<()> {
    // NaN fails the comparison and is rejected along with zero and negatives.
    if !(value > 0.0) {
        return Err(CoffeeError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be positive".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoffeeError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value < min || value > max {
        return Err(CoffeeError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_file_exists(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CoffeeError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }
    if !Path::new(path).is_file() {
        return Err(CoffeeError::ConfigError {
            message: format!("{}: no such file: {}", field_name, path),
        });
    }
    Ok(())
}
