/// Errors that can occur while driving the probe core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapError {
    /// Buffer index is not one of the six logical ports.
    PortOutOfRange,
    /// A control line could not be driven.
    Pin,
    /// Raw value does not name a valid state or port.
    InvalidDiscriminant,
}

impl core::fmt::Display for TapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TapError::PortOutOfRange => write!(f, "port index exceeds the six sampled ports"),
            TapError::Pin => write!(f, "failed to drive a shift register control line"),
            TapError::InvalidDiscriminant => write!(f, "raw value does not name a valid variant"),
        }
    }
}

impl core::error::Error for TapError {}
