use crate::checksum::ChecksumValidator;
use crate::document::CNPJ_DIGIT_COUNT;
use crate::normalization::DigitString;

pub struct CnpjChecksum;

// The conventional repeating cycle 9,8,7,6,5,4,3,2 prefixed so there is one
// weight per position.
const CNPJ_FIRST_WEIGHTS: &[u32] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ residue rule: `sum % 11`, mapped to 0 when the remainder is below 2
/// and `11 - r` otherwise.
///
/// Not the same as the CPF rule (`(sum * 10) % 11` with 10 -> 0); the two
/// routines are kept separate on purpose.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let r = sum % 11;
    if r < 2 {
        0
    } else {
        11 - r
    }
}

impl ChecksumValidator for CnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid_digits(&self, digits: &DigitString) -> bool {
        if digits.len() != CNPJ_DIGIT_COUNT {
            return false;
        }
        // "00000000000000" satisfies the arithmetic below; repeated-digit
        // sequences are placeholder input and never valid.
        if digits.is_uniform() {
            return false;
        }

        let d: Vec<u32> = digits.digits().collect();
        let v1 = check_digit(&d[..12], CNPJ_FIRST_WEIGHTS);
        let v2 = check_digit(&d[..13], CNPJ_SECOND_WEIGHTS);
        v1 == d[12] && v2 == d[13]
    }
}
