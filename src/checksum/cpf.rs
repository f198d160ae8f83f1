use crate::checksum::ChecksumValidator;
use crate::document::CPF_DIGIT_COUNT;
use crate::normalization::DigitString;

pub struct CpfChecksum;

const CPF_FIRST_WEIGHTS: &[u32] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_SECOND_WEIGHTS: &[u32] = &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CPF residue rule: `(sum * 10) % 11`, with a residue of 10 mapped to 0.
///
/// Not the same as the CNPJ rule (`0 if r < 2 else 11 - r`); the two
/// routines are kept separate on purpose.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    (sum * 10) % 11 % 10
}

impl ChecksumValidator for CpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn is_valid_digits(&self, digits: &DigitString) -> bool {
        if digits.len() != CPF_DIGIT_COUNT {
            return false;
        }
        // Every repeated-digit sequence satisfies the arithmetic below
        // (the weighted sum collapses to the digit itself), so the
        // degenerate case has to be rejected up front.
        if digits.is_uniform() {
            return false;
        }

        let d: Vec<u32> = digits.digits().collect();
        let v1 = check_digit(&d[..9], CPF_FIRST_WEIGHTS);
        let v2 = check_digit(&d[..10], CPF_SECOND_WEIGHTS);
        v1 == d[9] && v2 == d[10]
    }
}
