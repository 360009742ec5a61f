use std::ops::Deref;

use crate::level::VoltageLevel;

/// Output of a line code.
///
/// Holds the encoded samples followed by a single *hold* sample, a copy of the
/// last encoded one, so that the final level lasts a full time step when
/// drawn as a step plot. Empty input has no last sample and thus no hold
/// sample either.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SampleSequence {
    samples: Vec<VoltageLevel>,
}

impl SampleSequence {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_slice(&self) -> &[VoltageLevel] {
        &self.samples
    }

    /// The encoded samples, i.e. without the trailing hold sample.
    pub fn encoded(&self) -> &[VoltageLevel] {
        match self.samples.split_last() {
            Some((_hold, encoded)) => encoded,
            None => &[],
        }
    }
}

impl Deref for SampleSequence {
    type Target = [VoltageLevel];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}

impl From<Vec<VoltageLevel>> for SampleSequence {
    #[inline]
    fn from(samples: Vec<VoltageLevel>) -> Self {
        Self { samples }
    }
}

impl FromIterator<VoltageLevel> for SampleSequence {
    fn from_iter<T: IntoIterator<Item = VoltageLevel>>(iter: T) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = VoltageLevel;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, VoltageLevel>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter().copied()
    }
}

impl IntoIterator for SampleSequence {
    type Item = VoltageLevel;
    type IntoIter = std::vec::IntoIter<VoltageLevel>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
