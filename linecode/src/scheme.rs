//! Scheme registry
//!
//! Maps each of the six supported line codes to its transform and time-base.
//! External identifiers are the names used by the visualizer's selector:
//! `NRZ-L`, `NRZ-I`, `Bipolar`, `Pseudoternary`, `Manchester` and
//! `Differential Manchester`.

use std::{
    fmt::Display,
    str::FromStr,
};

use crate::{
    Error,
    bits::Bit,
    code::{
        self,
        BipolarAmi,
        DifferentialManchester,
        LineCode,
        Manchester,
        NrzI,
        NrzL,
        Pseudoternary,
    },
    level::VoltageLevel,
    samples::SampleSequence,
};

/// Number of samples a scheme produces per input bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TimeBase {
    OneSamplePerBit,
    TwoSamplesPerBit,
}

impl TimeBase {
    #[inline]
    pub const fn samples_per_bit(&self) -> usize {
        match self {
            Self::OneSamplePerBit => 1,
            Self::TwoSamplesPerBit => 2,
        }
    }

    /// Time between two consecutive samples.
    #[inline]
    pub const fn time_step(&self) -> f64 {
        match self {
            Self::OneSamplePerBit => 1.0,
            Self::TwoSamplesPerBit => 0.5,
        }
    }

    /// Time of the first sample.
    ///
    /// One-sample-per-bit schemes start at 1, two-samples-per-bit schemes at 0.
    #[inline]
    pub const fn time_origin(&self) -> f64 {
        match self {
            Self::OneSamplePerBit => 1.0,
            Self::TwoSamplesPerBit => 0.0,
        }
    }

    /// Time of the `index`-th sample.
    #[inline]
    pub fn sample_time(&self, index: usize) -> f64 {
        self.time_origin() + index as f64 * self.time_step()
    }

    /// Axis label of the tick at the `tick`-th sample, if it gets one.
    ///
    /// With two samples per bit the ticks sit on half units. Only every other
    /// tick is labelled, with half its index, which is the bit number. With one
    /// sample per bit every tick is labelled with its time.
    pub fn tick_label(&self, tick: usize) -> Option<usize> {
        match self {
            Self::OneSamplePerBit => Some(tick + 1),
            Self::TwoSamplesPerBit => (tick % 2 == 0).then_some(tick / 2),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "NRZ-L"))]
    NrzL,
    #[cfg_attr(feature = "serde", serde(rename = "NRZ-I"))]
    NrzI,
    #[cfg_attr(feature = "serde", serde(rename = "Bipolar"))]
    Bipolar,
    #[cfg_attr(feature = "serde", serde(rename = "Pseudoternary"))]
    Pseudoternary,
    #[cfg_attr(feature = "serde", serde(rename = "Manchester"))]
    Manchester,
    #[cfg_attr(feature = "serde", serde(rename = "Differential Manchester"))]
    DifferentialManchester,
}

impl Scheme {
    pub const ALL: [Self; 6] = [
        Self::NrzL,
        Self::NrzI,
        Self::Bipolar,
        Self::Pseudoternary,
        Self::Manchester,
        Self::DifferentialManchester,
    ];

    pub fn descriptor(&self) -> &'static SchemeDescriptor {
        match self {
            Self::NrzL => &SchemeDescriptor::NRZ_L,
            Self::NrzI => &SchemeDescriptor::NRZ_I,
            Self::Bipolar => &SchemeDescriptor::BIPOLAR,
            Self::Pseudoternary => &SchemeDescriptor::PSEUDOTERNARY,
            Self::Manchester => &SchemeDescriptor::MANCHESTER,
            Self::DifferentialManchester => &SchemeDescriptor::DIFFERENTIAL_MANCHESTER,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    #[inline]
    pub fn time_base(&self) -> TimeBase {
        self.descriptor().time_base
    }

    /// Looks up a scheme by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.name() == name)
    }

    /// Runs this scheme's line code over `bits`.
    pub fn encode(&self, bits: impl IntoIterator<Item = Bit>) -> SampleSequence {
        let samples = match self {
            Self::NrzL => code::encode(NrzL, bits),
            Self::NrzI => code::encode(NrzI, bits),
            Self::Bipolar => code::encode(BipolarAmi, bits),
            Self::Pseudoternary => code::encode(Pseudoternary, bits),
            Self::Manchester => code::encode(Manchester, bits),
            Self::DifferentialManchester => code::encode(DifferentialManchester, bits),
        };
        tracing::trace!(scheme = %self, num_samples = samples.len(), "encoded");
        samples
    }

    /// Next scheme in [`Scheme::ALL`], wrapping around.
    pub fn next(&self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous scheme in [`Scheme::ALL`], wrapping around.
    pub fn previous(&self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position in [`Scheme::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|scheme| scheme == self)
            .unwrap_or_default()
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            Error::UnknownScheme {
                name: s.to_owned(),
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemeDescriptor {
    pub scheme: Scheme,
    pub name: &'static str,
    pub full_name: &'static str,
    pub time_base: TimeBase,
    /// Voltage levels the scheme can produce, in ascending order.
    pub levels: &'static [VoltageLevel],
}

impl SchemeDescriptor {
    pub const NRZ_L: Self = Self {
        scheme: Scheme::NrzL,
        name: "NRZ-L",
        full_name: "Non-Return-to-Zero Level",
        time_base: NrzL::TIME_BASE,
        levels: &[VoltageLevel::Zero, VoltageLevel::Positive],
    };

    pub const NRZ_I: Self = Self {
        scheme: Scheme::NrzI,
        name: "NRZ-I",
        full_name: "Non-Return-to-Zero Inverted",
        time_base: NrzI::TIME_BASE,
        levels: &[VoltageLevel::Zero, VoltageLevel::Positive],
    };

    pub const BIPOLAR: Self = Self {
        scheme: Scheme::Bipolar,
        name: "Bipolar",
        full_name: "Bipolar Alternate Mark Inversion",
        time_base: BipolarAmi::TIME_BASE,
        levels: &[
            VoltageLevel::Negative,
            VoltageLevel::Zero,
            VoltageLevel::Positive,
        ],
    };

    pub const PSEUDOTERNARY: Self = Self {
        scheme: Scheme::Pseudoternary,
        name: "Pseudoternary",
        full_name: "Pseudoternary",
        time_base: Pseudoternary::TIME_BASE,
        levels: &[
            VoltageLevel::Negative,
            VoltageLevel::Zero,
            VoltageLevel::Positive,
        ],
    };

    pub const MANCHESTER: Self = Self {
        scheme: Scheme::Manchester,
        name: "Manchester",
        full_name: "Manchester",
        time_base: Manchester::TIME_BASE,
        levels: &[VoltageLevel::Zero, VoltageLevel::Positive],
    };

    pub const DIFFERENTIAL_MANCHESTER: Self = Self {
        scheme: Scheme::DifferentialManchester,
        name: "Differential Manchester",
        full_name: "Differential Manchester",
        time_base: DifferentialManchester::TIME_BASE,
        levels: &[VoltageLevel::Zero, VoltageLevel::Positive],
    };
}
