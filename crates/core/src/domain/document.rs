// Customer Document Numbers (CPF / CNPJ)

use serde::{Deserialize, Serialize};

pub const CPF_LEN: usize = 11;
pub const CNPJ_LEN: usize = 14;

/// Which customer type a queued identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    /// Individual taxpayer number, 11 digits
    Cpf,
    /// Business taxpayer number, 14 digits
    Cnpj,
}

impl DocumentKind {
    /// Classify a normalized identifier by its length.
    ///
    /// Only all-digit strings of exactly 11 or 14 characters are recognized.
    pub fn classify(identifier: &str) -> Option<Self> {
        if !identifier.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match identifier.len() {
            CPF_LEN => Some(DocumentKind::Cpf),
            CNPJ_LEN => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Cpf => write!(f, "CPF"),
            DocumentKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn left_pad(digits: String, width: usize) -> String {
    format!("{:0>width$}", digits, width = width)
}

/// Strip formatting from a CPF and left-pad it with zeros to 11 digits
pub fn normalize_cpf(raw: &str) -> String {
    left_pad(digits_only(raw), CPF_LEN)
}

/// Strip formatting from a CNPJ.
///
/// Zero padding to 14 digits only applies to bare input; a CNPJ typed with
/// `.`, `/` or `-` separators keeps exactly the digits it was given.
pub fn normalize_cnpj(raw: &str) -> String {
    let digits = digits_only(raw);
    if raw.contains(['.', '/', '-']) {
        digits
    } else {
        left_pad(digits, CNPJ_LEN)
    }
}
