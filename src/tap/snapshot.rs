use bitmaps::Bitmap;

use crate::tap::port::{PORT_COUNT, Port};

/// Number of bits addressable through a snapshot, eight per buffered byte.
pub const INPUT_COUNT: usize = PORT_COUNT * 8;

/// Copy of the six bytes latched by one sample.
///
/// Detached from the reader, so it stays valid while the next sample runs.
///
/// This is a view of the buffered reads, not of register pins. Byte `n` is
/// the `n`th data port read: bit `k` of it is the serial output of register
/// `k` at that clock step. Only the six data lines are sampled, so bits 6
/// and 7 of every byte are always zero and at most 36 bits can be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    bytes: [u8; PORT_COUNT],
}

impl Snapshot {
    pub const fn new(bytes: [u8; PORT_COUNT]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn port(&self, port: Port) -> u8 {
        self.bytes[port.index()]
    }

    #[inline]
    pub fn bytes(&self) -> [u8; PORT_COUNT] {
        self.bytes
    }

    /// Bit `bit` of the byte buffered for `port`. Bits past 7 read as low.
    pub fn input(&self, port: Port, bit: u8) -> bool {
        bit < 8 && self.port(port) & (1 << bit) != 0
    }

    /// All buffered bytes as one bitmap, bit `port * 8 + n` holding bit `n`
    /// of the byte buffered for `port`.
    pub fn inputs(&self) -> Bitmap<INPUT_COUNT> {
        let mut map = Bitmap::new();
        for port in Port::ALL {
            let byte = self.port(port);
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    map.set(port.index() * 8 + bit, true);
                }
            }
        }
        map
    }

    /// Number of set bits across the buffered bytes.
    pub fn active_count(&self) -> usize {
        self.inputs().len()
    }
}
