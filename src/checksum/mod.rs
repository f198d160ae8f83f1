mod cnpj;
mod cpf;

pub use crate::checksum::cnpj::CnpjChecksum;
pub use crate::checksum::cpf::CpfChecksum;

use crate::document::{classify, CheckResult, DocumentKind};
use crate::normalization::{normalize, DigitString};
use crate::stats::GLOBAL_STATS;

/// Check-digit validation over an already-normalized digit string.
///
/// Implementations expect the Normalizer's output: digits only, no
/// punctuation. They enforce their own length requirement and reject
/// repeated-digit sequences, so each validator is correct on its own.
pub trait ChecksumValidator: Send + Sync {
    fn is_valid_digits(&self, digits: &DigitString) -> bool;
}

/// Validates a normalized digit string, reporting which kind it was taken
/// for and whether the check digits hold.
///
/// Lengths other than 11 and 14 short-circuit to `Unknown`/`false` without
/// touching the arithmetic. Never panics; invalidity is a normal return
/// value.
pub fn validate(digits: &DigitString) -> CheckResult {
    let kind = classify(digits);
    let valid = match kind {
        DocumentKind::Cpf => {
            GLOBAL_STATS.cpf_validations.increment(1);
            CpfChecksum.is_valid_digits(digits)
        }
        DocumentKind::Cnpj => {
            GLOBAL_STATS.cnpj_validations.increment(1);
            CnpjChecksum.is_valid_digits(digits)
        }
        DocumentKind::Unknown => {
            GLOBAL_STATS.incomplete_inputs.increment(1);
            return CheckResult { kind, valid: false };
        }
    };
    if !valid {
        GLOBAL_STATS.checksum_failures.increment(1);
    }
    CheckResult { kind, valid }
}

/// True iff `raw` cleans to exactly 11 digits with valid CPF check digits.
pub fn is_valid_cpf(raw: &str) -> bool {
    CpfChecksum.is_valid_digits(&normalize(raw))
}

/// True iff `raw` cleans to exactly 14 digits with valid CNPJ check digits.
pub fn is_valid_cnpj(raw: &str) -> bool {
    CnpjChecksum.is_valid_digits(&normalize(raw))
}

/// Form-field entry point: validates `raw` against the hinted kind, or
/// against whichever kind the cleaned length selects when no usable hint is
/// given.
pub fn validate_document(raw: &str, kind_hint: Option<DocumentKind>) -> bool {
    match kind_hint {
        Some(DocumentKind::Cpf) => is_valid_cpf(raw),
        Some(DocumentKind::Cnpj) => is_valid_cnpj(raw),
        // An Unknown hint carries no length requirement
        Some(DocumentKind::Unknown) | None => validate(&normalize(raw)).valid,
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::{is_valid_cnpj, is_valid_cpf, validate, validate_document};
    use crate::document::DocumentKind;
    use crate::normalization::normalize;

    #[test]
    fn reports_kind_alongside_validity() {
        let cases = vec![
            ("529.982.247-25", DocumentKind::Cpf, true),
            ("529.982.247-24", DocumentKind::Cpf, false),
            ("11.222.333/0001-81", DocumentKind::Cnpj, true),
            ("11.222.333/0001-80", DocumentKind::Cnpj, false),
            ("", DocumentKind::Unknown, false),
            ("529.982.247-2", DocumentKind::Unknown, false),
            ("529.982.247-250", DocumentKind::Unknown, false),
        ];
        for (raw, kind, valid) in cases {
            let result = validate(&normalize(raw));
            assert_eq!(result.kind, kind, "kind for {raw}");
            assert_eq!(result.valid, valid, "validity for {raw}");
        }
    }

    #[test]
    fn hinted_validation_enforces_the_hinted_kind() {
        let cpf = "529.982.247-25";
        let cnpj = "11.222.333/0001-81";

        assert!(validate_document(cpf, Some(DocumentKind::Cpf)));
        assert!(!validate_document(cpf, Some(DocumentKind::Cnpj)));
        assert!(validate_document(cpf, None));

        assert!(validate_document(cnpj, Some(DocumentKind::Cnpj)));
        assert!(!validate_document(cnpj, Some(DocumentKind::Cpf)));
        assert!(validate_document(cnpj, None));

        // An Unknown hint behaves like no hint at all
        assert!(validate_document(cpf, Some(DocumentKind::Unknown)));
        assert!(!validate_document("1234", Some(DocumentKind::Unknown)));
    }

    #[test]
    fn boolean_helpers_do_not_cross_kinds() {
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(!is_valid_cpf("11.222.333/0001-81"));
        assert!(is_valid_cnpj("11.222.333/0001-81"));
        assert!(!is_valid_cnpj("529.982.247-25"));
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cnpj("no digits"));
    }
}
