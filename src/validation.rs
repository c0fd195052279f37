use regex::Regex;

use crate::errors::AppError;

pub fn validate_name(name: &str) -> bool {
    // Must be non-empty
    // Names are single tokens at the prompt, whitespace-only is rejected
    !name.trim().is_empty()
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // Exactly 10 digits, nothing else
    let re = Regex::new(r"^[0-9]{10}$")?;
    Ok(re.is_match(phone))
}
