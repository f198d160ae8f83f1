use std::fmt;

/// The digits of a document, in the order the user typed them.
///
/// `normalize` is the only constructor, so the content is guaranteed to be
/// ASCII digits with no punctuation. Only lengths 11 (CPF) and 14 (CNPJ) are
/// semantically complete; everything else is input that is still being typed
/// or is malformed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit values left to right.
    pub fn digits(&self) -> impl Iterator<Item = u32> + '_ {
        // The constructor guarantees every char is an ASCII digit
        self.0.chars().filter_map(|c| c.to_digit(10))
    }

    /// True when the whole string is a single repeated digit (e.g.
    /// `00000000000`). These are common placeholder/typo inputs and are
    /// never accepted as valid documents.
    pub fn is_uniform(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => chars.all(|c| c == first),
            None => false,
        }
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps only the ASCII digits of `raw`, preserving their order.
///
/// Total and deterministic: any input is accepted, including the empty
/// string and strings with no digits at all. No length limit is imposed
/// here; the masking layer caps for display.
pub fn normalize(raw: &str) -> DigitString {
    DigitString(raw.chars().filter(char::is_ascii_digit).collect())
}

#[cfg(test)]
mod test {
    use crate::normalization::normalize;

    #[test]
    fn strips_punctuation_and_keeps_order() {
        let cases = vec![
            ("529.982.247-25", "52998224725"),
            ("11.222.333/0001-81", "11222333000181"),
            (" 52 998 224 725 ", "52998224725"),
            ("cpf: 123", "123"),
            ("", ""),
            ("no digits here", ""),
            // Multi-byte characters are discarded like any other non-digit
            ("Àñô1🎅2β3", "123"),
        ];
        for (raw, expected) in cases {
            assert_eq!(normalize(raw).as_str(), expected);
        }
    }

    #[test]
    fn digit_values_match_characters() {
        let digits: Vec<u32> = normalize("9-0-2").digits().collect();
        assert_eq!(digits, vec![9, 0, 2]);
    }

    #[test]
    fn uniform_detection() {
        assert!(normalize("11111111111").is_uniform());
        assert!(normalize("000.000.000-00").is_uniform());
        assert!(normalize("7").is_uniform());
        assert!(!normalize("11111111112").is_uniform());
        // Empty input is not a repeated digit
        assert!(!normalize("").is_uniform());
    }
}
