//! Digital line coding
//!
//! Turns bit strings into the voltage waveforms of six classic line codes
//! (NRZ-L, NRZ-I, bipolar AMI, pseudoternary, Manchester and differential
//! Manchester) and places the samples on a time axis for plotting.
//!
//! ```
//! use linecode::Scheme;
//!
//! let encoded = linecode::encode(Scheme::Manchester, "10");
//! let volts = encoded.points().iter().map(|p| p.voltage.volts()).collect::<Vec<_>>();
//! assert_eq!(volts, [0, 5, 5, 0, 0]);
//! assert_eq!(encoded.time_range(), Some((0.0, 2.0)));
//! ```

pub mod bits;
pub mod code;
mod error;
pub mod level;
pub mod samples;
pub mod scheme;
pub mod timeline;

pub use crate::{
    bits::{
        Bit,
        BitSequence,
    },
    error::Error,
    level::VoltageLevel,
    samples::SampleSequence,
    scheme::{
        Scheme,
        SchemeDescriptor,
        TimeBase,
    },
    timeline::{
        Timeline,
        TimelinePoint,
    },
};

/// Encodes `text` with `scheme` and projects the samples onto the time axis.
///
/// Any character other than `'1'` is a zero bit.
pub fn encode(scheme: Scheme, text: &str) -> Timeline {
    let bits = BitSequence::from(text);
    let samples = scheme.encode(&bits);
    timeline::project(&samples, scheme.time_base())
}

/// Encodes `text` with the scheme called `name`.
///
/// This never fails: an unknown scheme name encodes to nothing.
pub fn encode_str(name: &str, text: &str) -> SampleSequence {
    match Scheme::from_name(name) {
        Some(scheme) => scheme.encode(&BitSequence::from(text)),
        None => {
            tracing::debug!(name, "unknown scheme, nothing to encode");
            SampleSequence::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        BitSequence,
        Scheme,
        encode_str,
    };

    #[test]
    fn unknown_scheme_encodes_to_nothing() {
        assert!(encode_str("nrz-l", "101").is_empty());
        assert!(encode_str("", "101").is_empty());
    }

    #[test]
    fn known_scheme_names_dispatch_to_their_code() {
        for scheme in Scheme::ALL {
            assert_eq!(
                encode_str(scheme.name(), "1100"),
                scheme.encode(&BitSequence::from("1100"))
            );
        }
    }

    #[test]
    fn lenient_bits_encode_like_zeros() {
        assert_eq!(
            encode_str("NRZ-I", "1a0 1"),
            encode_str("NRZ-I", "10001")
        );
    }
}
