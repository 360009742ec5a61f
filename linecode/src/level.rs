use std::fmt::{
    Debug,
    Display,
};

/// Instantaneous line voltage.
///
/// Every line code in this crate works with the same three levels, but each
/// one only uses a subset of them (see
/// [`SchemeDescriptor::levels`](crate::scheme::SchemeDescriptor::levels)).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "i8", try_from = "i8"))]
pub enum VoltageLevel {
    Negative,
    Zero,
    Positive,
}

impl VoltageLevel {
    /// Magnitude of a non-zero level in volts.
    pub const AMPLITUDE: i8 = 5;

    pub const MIN_VOLTS: i8 = -Self::AMPLITUDE;
    pub const MAX_VOLTS: i8 = Self::AMPLITUDE;

    #[inline]
    pub const fn volts(&self) -> i8 {
        match self {
            Self::Negative => -Self::AMPLITUDE,
            Self::Zero => 0,
            Self::Positive => Self::AMPLITUDE,
        }
    }

    #[inline]
    pub const fn from_volts(volts: i8) -> Option<Self> {
        match volts {
            -5 => Some(Self::Negative),
            0 => Some(Self::Zero),
            5 => Some(Self::Positive),
            _ => None,
        }
    }

    /// Flips the polarity. Zero stays zero.
    #[inline]
    pub const fn negated(&self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }

    /// Toggles between the two unipolar levels (0 V and +5 V).
    ///
    /// Unipolar codes never produce [`VoltageLevel::Negative`]. If it shows up
    /// anyway it is treated as "not high" and toggles to high.
    #[inline]
    pub const fn toggled_unipolar(&self) -> Self {
        match self {
            Self::Positive => Self::Zero,
            Self::Zero | Self::Negative => Self::Positive,
        }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }
}

impl From<VoltageLevel> for i8 {
    #[inline]
    fn from(value: VoltageLevel) -> Self {
        value.volts()
    }
}

impl From<VoltageLevel> for f64 {
    #[inline]
    fn from(value: VoltageLevel) -> Self {
        value.volts().into()
    }
}

impl TryFrom<i8> for VoltageLevel {
    type Error = InvalidVoltage;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::from_volts(value).ok_or(InvalidVoltage { volts: value })
    }
}

impl Debug for VoltageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}V", self.volts())
    }
}

impl Display for VoltageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.volts(), f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid voltage level: {volts} V")]
pub struct InvalidVoltage {
    pub volts: i8,
}
