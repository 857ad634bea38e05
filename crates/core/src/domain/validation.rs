// Customer Field Validation

use crate::domain::document::{CNPJ_LEN, CPF_LEN};
use crate::domain::error::{DomainError, Result};

pub const MAX_MCC_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 50;

/// Check a normalized CPF: exactly 11 digits
pub fn validate_cpf(field: &str, cpf: &str) -> Result<()> {
    if cpf.len() != CPF_LEN || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::ValidationError(format!(
            "{} must contain exactly {} digits",
            field, CPF_LEN
        )));
    }
    Ok(())
}

/// Check a normalized CNPJ: 1 to 14 digits
pub fn validate_cnpj(cnpj: &str) -> Result<()> {
    if cnpj.is_empty() || cnpj.len() > CNPJ_LEN || !cnpj.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::ValidationError(format!(
            "cnpj must contain between 1 and {} digits",
            CNPJ_LEN
        )));
    }
    Ok(())
}

/// Merchant category code: 1 to 4 characters
pub fn validate_mcc(mcc: &str) -> Result<()> {
    validate_length("mcc", mcc, MAX_MCC_LEN)
}

/// Any name field: 1 to 50 characters
pub fn validate_name(field: &str, name: &str) -> Result<()> {
    validate_length(field, name, MAX_NAME_LEN)
}

fn validate_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(DomainError::ValidationError(format!(
            "{} cannot be empty",
            field
        )));
    }
    if value.chars().count() > max {
        return Err(DomainError::ValidationError(format!(
            "{} too long (max {} characters)",
            field, max
        )));
    }
    Ok(())
}

/// Email address shaped like `local@domain.tld`.
///
/// `local` and `domain` use `[A-Za-z0-9_.-]`, `tld` is 2 to 5 letters.
pub fn validate_email(email: &str) -> Result<()> {
    let invalid = || DomainError::ValidationError(format!("invalid email address: {}", email));

    let (local, host) = email.split_once('@').ok_or_else(invalid)?;
    let (domain, tld) = host.rsplit_once('.').ok_or_else(invalid)?;

    let word = |s: &str| {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    };

    if !word(local) || !word(domain) {
        return Err(invalid());
    }
    if !(2..=5).contains(&tld.len()) || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    Ok(())
}
