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

/// Non-return-to-zero level: a one is high, a zero is low.
#[derive(Clone, Copy, Debug, Default)]
pub struct NrzL;

impl LineCode for NrzL {
    type State = ();

    const TIME_BASE: TimeBase = TimeBase::OneSamplePerBit;

    fn initial_state(&self) -> Self::State {}

    fn encode_bit(&self, _state: Self::State, bit: Bit) -> (Self::State, Symbol) {
        let level = match bit {
            Bit::One => VoltageLevel::Positive,
            Bit::Zero => VoltageLevel::Zero,
        };
        ((), symbol([level]))
    }
}

/// Non-return-to-zero inverted: a one toggles the level, a zero keeps it.
///
/// The line starts out low.
#[derive(Clone, Copy, Debug, Default)]
pub struct NrzI;

impl LineCode for NrzI {
    type State = VoltageLevel;

    const TIME_BASE: TimeBase = TimeBase::OneSamplePerBit;

    fn initial_state(&self) -> Self::State {
        VoltageLevel::Zero
    }

    fn encode_bit(&self, level: Self::State, bit: Bit) -> (Self::State, Symbol) {
        let level = match bit {
            Bit::One => level.toggled_unipolar(),
            Bit::Zero => level,
        };
        (level, symbol([level]))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bits::BitSequence,
        code::{
            NrzI,
            NrzL,
            encode,
        },
        level::VoltageLevel::{
            Positive as P,
            Zero as Z,
        },
    };

    #[test]
    fn nrz_l_maps_each_bit_independently() {
        let samples = encode(NrzL, &BitSequence::from("10110"));
        assert_eq!(samples.as_slice(), &[P, Z, P, P, Z, Z]);
    }

    #[test]
    fn nrz_l_sample_only_depends_on_its_bit() {
        let a = encode(NrzL, &BitSequence::from("0001"));
        let b = encode(NrzL, &BitSequence::from("1101"));
        assert_eq!(a[2], b[2]);
        assert_eq!(a[3], b[3]);
    }

    #[test]
    fn nrz_i_toggles_on_ones() {
        let samples = encode(NrzI, &BitSequence::from("1101"));
        assert_eq!(samples.as_slice(), &[P, Z, Z, P, P]);
    }

    #[test]
    fn nrz_i_stays_low_without_ones() {
        let samples = encode(NrzI, &BitSequence::from("00000"));
        assert_eq!(samples.len(), 6);
        assert!(samples.iter().all(|level| level.is_zero()));
    }
}
