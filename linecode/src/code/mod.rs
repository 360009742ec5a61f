//! Line codes
//!
//! Every code is a fold over the input bits: it starts from an initial state
//! and, for each bit, returns the next state together with the samples for
//! that bit. [`Encoder`] drives the fold and appends the hold sample.

mod ami;
mod manchester;
mod nrz;

use arrayvec::ArrayVec;

pub use self::{
    ami::{
        BipolarAmi,
        Pseudoternary,
    },
    manchester::{
        DifferentialManchester,
        Manchester,
    },
    nrz::{
        NrzI,
        NrzL,
    },
};
use crate::{
    bits::Bit,
    level::VoltageLevel,
    samples::SampleSequence,
    scheme::TimeBase,
};

/// Samples produced for a single bit.
pub type Symbol = ArrayVec<VoltageLevel, 2>;

pub trait LineCode {
    /// Running state carried from one bit to the next.
    type State: Copy;

    const TIME_BASE: TimeBase;

    fn initial_state(&self) -> Self::State;

    /// Encodes one bit. The returned symbol holds exactly
    /// `Self::TIME_BASE.samples_per_bit()` samples.
    fn encode_bit(&self, state: Self::State, bit: Bit) -> (Self::State, Symbol);
}

impl<C: LineCode> LineCode for &C {
    type State = C::State;

    const TIME_BASE: TimeBase = C::TIME_BASE;

    #[inline]
    fn initial_state(&self) -> Self::State {
        (**self).initial_state()
    }

    #[inline]
    fn encode_bit(&self, state: Self::State, bit: Bit) -> (Self::State, Symbol) {
        (**self).encode_bit(state, bit)
    }
}

/// Iterator over the samples of a line code applied to some bits.
///
/// After the last bit it yields one more copy of the last sample (the hold
/// sample). If there were no bits at all, it yields nothing.
#[derive(Clone, derive_more::Debug)]
pub struct Encoder<I, C: LineCode> {
    #[debug(skip)]
    bits: I,
    #[debug(skip)]
    code: C,
    #[debug(skip)]
    state: C::State,
    pending: ArrayVec<VoltageLevel, 2>,
    last: Option<VoltageLevel>,
}

impl<I, C> Encoder<I, C>
where
    I: Iterator<Item = Bit>,
    C: LineCode,
{
    pub fn new(bits: impl IntoIterator<IntoIter = I>, code: C) -> Self {
        let state = code.initial_state();
        Self {
            bits: bits.into_iter(),
            code,
            state,
            pending: ArrayVec::new(),
            last: None,
        }
    }
}

impl<I, C> Iterator for Encoder<I, C>
where
    I: Iterator<Item = Bit>,
    C: LineCode,
{
    type Item = VoltageLevel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if !self.pending.is_empty() {
                let sample = self.pending.remove(0);
                self.last = Some(sample);
                return Some(sample);
            }
            else if let Some(bit) = self.bits.next() {
                let (state, symbol) = self.code.encode_bit(self.state, bit);
                debug_assert_eq!(symbol.len(), C::TIME_BASE.samples_per_bit());
                self.state = state;
                self.pending = symbol;
            }
            else {
                // hold sample. `take` makes sure it's only emitted once.
                return self.last.take();
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.bits.size_hint();
        let per_bit = C::TIME_BASE.samples_per_bit();
        let pending = self.pending.len();
        let hold = usize::from(self.last.is_some() || pending > 0 || lower > 0);
        (
            lower * per_bit + pending + hold,
            upper.map(|upper| upper * per_bit + pending + 1),
        )
    }
}

/// Encodes `bits` with `code` into a sample sequence including the hold sample.
pub fn encode<C: LineCode>(code: C, bits: impl IntoIterator<Item = Bit>) -> SampleSequence {
    Encoder::new(bits, code).collect()
}

#[inline]
fn symbol<const N: usize>(samples: [VoltageLevel; N]) -> Symbol {
    samples.into_iter().collect()
}
