use crate::{
    bits::Bit,
    code::{
        LineCode,
        Symbol,
        symbol,
    },
    level::VoltageLevel,
    scheme::TimeBase,
};

/// Manchester: every bit is a mid-bit transition, low-to-high for a one and
/// high-to-low for a zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manchester;

impl LineCode for Manchester {
    type State = ();

    const TIME_BASE: TimeBase = TimeBase::TwoSamplesPerBit;

    fn initial_state(&self) -> Self::State {}

    fn encode_bit(&self, _state: Self::State, bit: Bit) -> (Self::State, Symbol) {
        let pair = match bit {
            Bit::One => [VoltageLevel::Zero, VoltageLevel::Positive],
            Bit::Zero => [VoltageLevel::Positive, VoltageLevel::Zero],
        };
        ((), symbol(pair))
    }
}

/// Differential Manchester.
///
/// There is always a transition at mid-bit. A zero additionally has a
/// transition at the start of the bit, a one doesn't. The line starts out
/// high.
#[derive(Clone, Copy, Debug, Default)]
pub struct DifferentialManchester;

impl LineCode for DifferentialManchester {
    type State = VoltageLevel;

    const TIME_BASE: TimeBase = TimeBase::TwoSamplesPerBit;

    fn initial_state(&self) -> Self::State {
        VoltageLevel::Positive
    }

    fn encode_bit(&self, level: Self::State, bit: Bit) -> (Self::State, Symbol) {
        let first = match bit {
            Bit::Zero => level.toggled_unipolar(),
            Bit::One => level,
        };
        let second = first.toggled_unipolar();
        (second, symbol([first, second]))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bits::BitSequence,
        code::{
            DifferentialManchester,
            Manchester,
            encode,
        },
        level::VoltageLevel::{
            Positive as P,
            Zero as Z,
        },
    };

    #[test]
    fn manchester_maps_bits_to_transitions() {
        let samples = encode(Manchester, &BitSequence::from("10"));
        assert_eq!(samples.as_slice(), &[Z, P, P, Z, Z]);
    }

    #[test]
    fn differential_manchester_ones_have_no_initial_transition() {
        let samples = encode(DifferentialManchester, &BitSequence::from("11"));
        assert_eq!(samples.as_slice(), &[P, Z, Z, P, P]);
    }

    #[test]
    fn differential_manchester_zeros_have_an_initial_transition() {
        let samples = encode(DifferentialManchester, &BitSequence::from("00"));
        assert_eq!(samples.as_slice(), &[Z, P, Z, P, P]);
    }

    #[test]
    fn differential_manchester_always_transitions_mid_bit() {
        let samples = encode(DifferentialManchester, &BitSequence::from("1001101"));
        for pair in samples.encoded().chunks_exact(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
