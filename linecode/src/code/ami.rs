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

/// Bipolar alternate mark inversion.
///
/// Zeros are 0 V. Ones alternate between -5 V and +5 V, starting with -5 V.
/// Zeros don't touch the polarity state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BipolarAmi;

impl LineCode for BipolarAmi {
    /// Level of the previous mark.
    type State = VoltageLevel;

    const TIME_BASE: TimeBase = TimeBase::OneSamplePerBit;

    fn initial_state(&self) -> Self::State {
        VoltageLevel::Positive
    }

    fn encode_bit(&self, last_mark: Self::State, bit: Bit) -> (Self::State, Symbol) {
        match bit {
            Bit::One => {
                let level = last_mark.negated();
                (level, symbol([level]))
            }
            Bit::Zero => (last_mark, symbol([VoltageLevel::Zero])),
        }
    }
}

/// Pseudoternary: AMI with the roles of ones and zeros swapped.
///
/// Ones are 0 V. Zeros alternate between +5 V and -5 V, starting with +5 V.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pseudoternary;

impl LineCode for Pseudoternary {
    /// Whether the last pulse was positive.
    type State = bool;

    const TIME_BASE: TimeBase = TimeBase::OneSamplePerBit;

    fn initial_state(&self) -> Self::State {
        false
    }

    fn encode_bit(&self, is_positive: Self::State, bit: Bit) -> (Self::State, Symbol) {
        match bit {
            Bit::Zero => {
                let is_positive = !is_positive;
                let level = if is_positive {
                    VoltageLevel::Positive
                }
                else {
                    VoltageLevel::Negative
                };
                (is_positive, symbol([level]))
            }
            Bit::One => (is_positive, symbol([VoltageLevel::Zero])),
        }
    }
}
