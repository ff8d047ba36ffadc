use crate::tap::TapError;

/// Number of shift registers, and so of buffered bytes.
pub const PORT_COUNT: usize = 6;

/// Data lines that carry shift register outputs. Bit 6 of the MCU port is
/// reserved and never sampled.
pub const DATA_MASK: u8 = 0b0011_1111;

/// Reads the six serial data lines of the register bank.
///
/// Implementations must capture all lines at one instant (a single port
/// register read on most MCUs) and return them in bits 0..=5, line `n`
/// carrying the output of the register for [`Port`] index `n`. Bits above 5
/// are ignored.
pub trait DataPort {
    fn read(&mut self) -> u8;
}

impl<T: DataPort + ?Sized> DataPort for &mut T {
    #[inline]
    fn read(&mut self) -> u8 {
        (**self).read()
    }
}

/// One of the six logical input ports, A through F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

impl Port {
    /// All ports in buffer order.
    pub const ALL: [Port; PORT_COUNT] = [Port::A, Port::B, Port::C, Port::D, Port::E, Port::F];

    /// Position of this port in the sample buffer.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Port {
    type Error = TapError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Port::ALL
            .get(index as usize)
            .copied()
            .ok_or(TapError::InvalidDiscriminant)
    }
}

impl core::fmt::Display for Port {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
            Port::F => 'F',
        };
        write!(f, "{name}")
    }
}
