//! Input validation for employment applications.
//!
//! Checks run in a fixed order and stop at the first violation, so the
//! submitter always sees a single, specific rule message. Pure functions,
//! no I/O; the orchestrator must not allocate an employee ID or touch the
//! filesystem when validation fails.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::application::model::ApplicationForm;

lazy_static! {
    // Anchored at both ends: trailing garbage after a well-formed prefix is
    // rejected rather than silently tolerated.
    static ref AADHAAR_RE: Regex = Regex::new(r"^\d{4}-\d{4}-\d{4}$").unwrap();
    static ref PAN_RE: Regex = Regex::new(r"^[A-Z]{5}\d{4}[A-Z]$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap();
}

/// A single violated format rule, with the field it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{field}] {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Validate a submitted form against the format rules, first failure wins.
pub fn validate(form: &ApplicationForm) -> Result<(), ValidationError> {
    check_name(form)?;
    check_mobile(form)?;
    check_aadhaar(form)?;
    check_pan(form)?;
    check_email(form)?;
    Ok(())
}

fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_alphabetic())
}

fn check_name(form: &ApplicationForm) -> Result<(), ValidationError> {
    if !is_alphabetic(form.first_name.trim()) || !is_alphabetic(form.last_name.trim()) {
        return Err(ValidationError::new(
            "first_name/last_name",
            "First and Last names should only include characters.",
        ));
    }
    Ok(())
}

fn check_mobile(form: &ApplicationForm) -> Result<(), ValidationError> {
    let mobile = form.mobile_number.trim();
    if mobile.is_empty() || !mobile.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            "mobile_number",
            "Mobile number should only contain numerical characters.",
        ));
    }
    Ok(())
}

fn check_aadhaar(form: &ApplicationForm) -> Result<(), ValidationError> {
    if !AADHAAR_RE.is_match(form.aadhaar_number.trim()) {
        return Err(ValidationError::new(
            "aadhaar_number",
            "Aadhaar card should be in the format [XXXX-XXXX-XXXX].",
        ));
    }
    Ok(())
}

fn check_pan(form: &ApplicationForm) -> Result<(), ValidationError> {
    if !PAN_RE.is_match(form.pan_number.trim()) {
        return Err(ValidationError::new(
            "pan_number",
            "PAN Number should be in the format [ABCDE1234E].",
        ));
    }
    Ok(())
}

fn check_email(form: &ApplicationForm) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(form.email_address.trim()) {
        return Err(ValidationError::new(
            "email_address",
            "Email address is not valid.",
        ));
    }
    Ok(())
}
