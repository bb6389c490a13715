use crate::domain::model::OperandLabel;
use crate::utils::error::{GcdError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(label: OperandLabel, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GcdError::EmptyInput { label });
    }
    Ok(())
}

/// Parses one operand from a raw input line. Surrounding whitespace is ignored.
pub fn parse_operand(label: OperandLabel, raw: &str) -> Result<i64> {
    validate_non_empty_string(label, raw)?;

    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| GcdError::ParseError {
            label,
            input: trimmed.to_string(),
            source,
        })
}

pub fn validate_exclusive_flags(field_name: &str, left: bool, right: bool, reason: &str) -> Result<()> {
    if left && right {
        return Err(GcdError::ValidationError {
            field: field_name.to_string(),
            value: "true".to_string(),
            reason: reason.to_string(),
        });
    }
    Ok(())
}
