use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::checksum::{ChecksumValidator, CnpjChecksum, CpfChecksum};
use crate::masking;
use crate::normalization::{normalize, DigitString};

pub(crate) const CPF_DIGIT_COUNT: usize = 11;
pub(crate) const CNPJ_DIGIT_COUNT: usize = 14;

/// The kind of Brazilian document a digit string is taken for.
///
/// Kind is decided by length alone: 11 digits is a CPF candidate, 14 a CNPJ
/// candidate, and anything else is `Unknown` (still typing, or malformed).
/// Leading digits are never used as a heuristic.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentKind {
    Cpf,
    Cnpj,
    #[default]
    Unknown,
}

pub fn classify(digits: &DigitString) -> DocumentKind {
    match digits.len() {
        CPF_DIGIT_COUNT => DocumentKind::Cpf,
        CNPJ_DIGIT_COUNT => DocumentKind::Cnpj,
        _ => DocumentKind::Unknown,
    }
}

/// Validation verdict for a normalized digit string.
///
/// `valid` is meaningful only for a known kind; `Unknown` input is never
/// valid.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub kind: DocumentKind,
    pub valid: bool,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseDocumentError {
    /// The cleaned input has neither 11 nor 14 digits. Forms typically
    /// render this as "keep typing" rather than as an error.
    #[error("expected 11 or 14 digits, found {digit_count}")]
    IncompleteInput { digit_count: usize },

    /// A single repeated digit. Some of these satisfy the check-digit
    /// arithmetic but they are placeholder input, not documents.
    #[error("digits are a single repeated digit")]
    RepeatedDigits,

    /// Correct length and shape, wrong check digits. The only case that
    /// should surface to the user as "CPF/CNPJ inválido".
    #[error("{kind} check digits do not match")]
    ChecksumMismatch { kind: DocumentKind },
}

/// A parse-validated CPF or CNPJ.
///
/// Holds the canonical unmasked digits; the masked display form is a
/// projection recomputed on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Document {
    kind: DocumentKind,
    digits: DigitString,
}

impl Document {
    /// Normalizes and fully validates `raw`, distinguishing incomplete
    /// input from checksum failures. The boolean surface
    /// (`validate_document` and friends) collapses all three error cases
    /// to `false`.
    pub fn parse(raw: &str) -> Result<Self, ParseDocumentError> {
        let digits = normalize(raw);
        let kind = classify(&digits);
        if kind == DocumentKind::Unknown {
            return Err(ParseDocumentError::IncompleteInput {
                digit_count: digits.len(),
            });
        }
        if digits.is_uniform() {
            return Err(ParseDocumentError::RepeatedDigits);
        }
        let checksum_ok = match kind {
            DocumentKind::Cpf => CpfChecksum.is_valid_digits(&digits),
            _ => CnpjChecksum.is_valid_digits(&digits),
        };
        if !checksum_ok {
            return Err(ParseDocumentError::ChecksumMismatch { kind });
        }
        Ok(Document { kind, digits })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn digits(&self) -> &DigitString {
        &self.digits
    }

    /// Canonical unmasked form, for storage and transmission.
    pub fn as_str(&self) -> &str {
        self.digits.as_str()
    }

    /// Masked display form (`529.982.247-25`, `11.222.333/0001-81`).
    pub fn masked(&self) -> String {
        match self.kind {
            DocumentKind::Cpf => masking::format_cpf(self.digits.as_str()),
            _ => masking::format_cnpj(self.digits.as_str()),
        }
    }
}

impl std::str::FromStr for Document {
    type Err = ParseDocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}
