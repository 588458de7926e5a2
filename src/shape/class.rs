use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassSymbol {
    Digit,
    LowerLetter,
    UpperLetter,
    Literal(char),
}

impl ClassSymbol {
    /// Compact single-char form: `0` for digits, `a`/`A` for letters, the character itself otherwise.
    pub fn placeholder(&self) -> char {
        match self {
            ClassSymbol::Digit => '0',
            ClassSymbol::LowerLetter => 'a',
            ClassSymbol::UpperLetter => 'A',
            ClassSymbol::Literal(c) => *c,
        }
    }
}

#[inline]
pub fn classify(c: char) -> ClassSymbol {
    if c.is_ascii_digit() {
        ClassSymbol::Digit
    } else if c.is_ascii_uppercase() {
        ClassSymbol::UpperLetter
    } else if c.is_ascii_lowercase() {
        ClassSymbol::LowerLetter
    } else {
        ClassSymbol::Literal(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_ascii_ranges() {
        assert_eq!(classify('0'), ClassSymbol::Digit);
        assert_eq!(classify('9'), ClassSymbol::Digit);
        assert_eq!(classify('a'), ClassSymbol::LowerLetter);
        assert_eq!(classify('z'), ClassSymbol::LowerLetter);
        assert_eq!(classify('A'), ClassSymbol::UpperLetter);
        assert_eq!(classify('Z'), ClassSymbol::UpperLetter);
    }

    #[test]
    fn non_ascii_letters_and_digits_stay_literal() {
        assert_eq!(classify('é'), ClassSymbol::Literal('é'));
        assert_eq!(classify('٣'), ClassSymbol::Literal('٣'));
        assert_eq!(classify('-'), ClassSymbol::Literal('-'));
        assert_eq!(classify(' '), ClassSymbol::Literal(' '));
    }

    #[test]
    fn placeholder_round_trips_class_symbols() {
        assert_eq!(ClassSymbol::Digit.placeholder(), '0');
        assert_eq!(ClassSymbol::LowerLetter.placeholder(), 'a');
        assert_eq!(ClassSymbol::UpperLetter.placeholder(), 'A');
        assert_eq!(ClassSymbol::Literal('.').placeholder(), '.');
    }
}
