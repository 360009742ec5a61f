/// Errors from the strict parsing boundaries.
///
/// Encoding itself never fails. These are only returned by
/// [`BitSequence::parse_strict`](crate::bits::BitSequence::parse_strict) and
/// the [`FromStr`](std::str::FromStr) impl of [`Scheme`](crate::scheme::Scheme).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown line coding scheme: {name:?}")]
    UnknownScheme { name: String },

    #[error("invalid bit {character:?} at position {position}")]
    InvalidBit { position: usize, character: char },
}
