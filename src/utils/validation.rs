use crate::utils::error::{ElevatorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ElevatorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("value must be at least {}", min_value),
        });
    }
    Ok(())
}
