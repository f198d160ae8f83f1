use crate::document::{CNPJ_DIGIT_COUNT, CPF_DIGIT_COUNT};
use crate::normalization::normalize;

// XXX.XXX.XXX-XX
const CPF_SEPARATORS: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];
// XX.XXX.XXX/XXXX-XX
const CNPJ_SEPARATORS: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Re-inserts kind punctuation at fixed digit offsets. A separator is only
/// emitted once a digit exists past its offset, so partial input yields a
/// partial mask instead of an error. Digits beyond `digit_cap` are dropped.
fn mask(digits: &str, separators: &[(usize, char)], digit_cap: usize) -> String {
    let mut out = String::with_capacity(digit_cap + separators.len());
    for (idx, digit) in digits.chars().take(digit_cap).enumerate() {
        if let Some((_, sep)) = separators.iter().find(|(offset, _)| *offset == idx) {
            out.push(*sep);
        }
        out.push(digit);
    }
    out
}

/// Masks `raw` as a CPF (`XXX.XXX.XXX-XX`), tolerating partial input.
///
/// Formatting never validates: a well-shaped document with wrong check
/// digits still formats, so a form can show the mask and an error state at
/// the same time.
pub fn format_cpf(raw: &str) -> String {
    mask(normalize(raw).as_str(), CPF_SEPARATORS, CPF_DIGIT_COUNT)
}

/// Masks `raw` as a CNPJ (`XX.XXX.XXX/XXXX-XX`), tolerating partial input.
pub fn format_cnpj(raw: &str) -> String {
    mask(normalize(raw).as_str(), CNPJ_SEPARATORS, CNPJ_DIGIT_COUNT)
}

/// Live-typing mask for fields that accept either kind: CPF shape while the
/// cleaned input fits in 11 digits, CNPJ shape as soon as it grows past
/// that.
pub fn format_document(raw: &str) -> String {
    let digits = normalize(raw);
    if digits.len() <= CPF_DIGIT_COUNT {
        mask(digits.as_str(), CPF_SEPARATORS, CPF_DIGIT_COUNT)
    } else {
        mask(digits.as_str(), CNPJ_SEPARATORS, CNPJ_DIGIT_COUNT)
    }
}
