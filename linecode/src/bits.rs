use std::{
    fmt::{
        Debug,
        Display,
    },
    ops::Deref,
};

use crate::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Lenient conversion: `'1'` is a one, anything else is a zero.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        if c == '1' { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for char {
    #[inline]
    fn from(value: Bit) -> Self {
        match value {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            _ => Err(value),
        }
    }
}

impl Debug for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <char as Debug>::fmt(&char::from(*self), f)
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Ordered bits, one per input character.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<Bit>,
}

impl BitSequence {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text`, rejecting anything that isn't `'0'` or `'1'`.
    ///
    /// The [`From<&str>`] impl is the lenient counterpart.
    pub fn parse_strict(text: &str) -> Result<Self, Error> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                Bit::try_from(c).map_err(|character| {
                    Error::InvalidBit {
                        position,
                        character,
                    }
                })
            })
            .collect()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }
}

impl Deref for BitSequence {
    type Target = [Bit];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.bits
    }
}

impl From<&str> for BitSequence {
    fn from(value: &str) -> Self {
        let bits: Self = value.chars().map(Bit::from_char).collect();

        let ignored = value.chars().filter(|c| !matches!(c, '0' | '1')).count();
        if ignored > 0 {
            tracing::debug!(ignored, "treating non-binary characters as zero bits");
        }

        bits
    }
}

impl From<Vec<Bit>> for BitSequence {
    #[inline]
    fn from(bits: Vec<Bit>) -> Self {
        Self { bits }
    }
}

impl FromIterator<Bit> for BitSequence {
    fn from_iter<T: IntoIterator<Item = Bit>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = Bit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Bit>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}

impl IntoIterator for BitSequence {
    type Item = Bit;
    type IntoIter = std::vec::IntoIter<Bit>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl Debug for BitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitSequence({self})")
    }
}

impl Display for BitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        bits::{
            Bit,
            BitSequence,
        },
    };

    #[test]
    fn it_treats_anything_but_one_as_zero() {
        let bits = BitSequence::from("1a0 1");
        assert_eq!(
            bits.as_slice(),
            &[Bit::One, Bit::Zero, Bit::Zero, Bit::Zero, Bit::One]
        );
        assert_eq!(bits.to_string(), "10001");
    }

    #[test]
    fn it_counts_characters_not_bytes() {
        let bits = BitSequence::from("1ü1");
        assert_eq!(bits.len(), 3);

        // one bit per scalar value, even outside the basic multilingual plane
        let bits = BitSequence::from("1\u{1f600}");
        assert_eq!(bits.as_slice(), &[Bit::One, Bit::Zero]);
        assert_eq!(
            BitSequence::parse_strict("\u{1f600}1"),
            Err(Error::InvalidBit {
                position: 0,
                character: '\u{1f600}'
            })
        );
    }

    #[test]
    fn strict_parsing_reports_the_first_bad_character() {
        assert_eq!(
            BitSequence::parse_strict("10x1y"),
            Err(Error::InvalidBit {
                position: 2,
                character: 'x'
            })
        );
        assert_eq!(
            BitSequence::parse_strict("0110").unwrap(),
            BitSequence::from("0110")
        );
    }

    #[test]
    fn empty_text_is_an_empty_sequence() {
        assert!(BitSequence::from("").is_empty());
        assert!(BitSequence::parse_strict("").unwrap().is_empty());
    }
}
