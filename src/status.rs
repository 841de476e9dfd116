//! # Processor Status Flags
//!
//! The 6502 status register is a single 8-bit bitfield. Four of its bits
//! carry engine-level semantics (carry, zero, overflow, negative); the
//! remaining bits (interrupt disable, decimal, break, unused) are stored as
//! inert but settable state, because hardware-accurate programs may push,
//! pull, and probe them even when nothing in the engine interprets them.

/// The processor status register (bit layout `NV-BDIZC`).
///
/// # Examples
///
/// ```
/// use cpu6502::Status;
///
/// let mut status = Status::RESET;
/// status.set(Status::CARRY, true);
/// assert!(status.contains(Status::CARRY));
/// assert_eq!(status.bits() & Status::CARRY, Status::CARRY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(u8);

impl Status {
    /// Carry flag (bit 0): unsigned overflow out of bit 7, or no borrow.
    pub const CARRY: u8 = 0x01;
    /// Zero flag (bit 1): set when a result is 0x00.
    pub const ZERO: u8 = 0x02;
    /// Interrupt disable (bit 2): stored but not interpreted by this engine.
    pub const IRQ_DISABLE: u8 = 0x04;
    /// Decimal mode (bit 3): stored but never alters arithmetic here.
    pub const DECIMAL: u8 = 0x08;
    /// Break flag (bit 4): stored; set in the byte pushed by PHP.
    pub const BREAK: u8 = 0x10;
    /// Unused flag (bit 5): hardwired high on real silicon.
    pub const UNUSED: u8 = 0x20;
    /// Overflow flag (bit 6): signed overflow of an arithmetic result.
    pub const OVERFLOW: u8 = 0x40;
    /// Negative flag (bit 7): mirror of bit 7 of a result.
    pub const NEGATIVE: u8 = 0x80;

    /// The power-on value: break and unused bits set, everything else clear.
    pub const RESET: Status = Status(Self::BREAK | Self::UNUSED);

    /// Builds a status register from a raw byte, preserving every bit.
    pub const fn from_bits(bits: u8) -> Self {
        Status(bits)
    }

    /// Returns the register as a packed byte, reserved bits included.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every bit in `mask` is set.
    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask == mask
    }

    /// Sets or clears the bits in `mask`.
    pub fn set(&mut self, mask: u8, on: bool) {
        if on {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Updates the zero and negative flags from a result byte.
    ///
    /// Z is set iff `value == 0`; N is set iff bit 7 of `value` is set.
    /// Every load, transfer, and arithmetic result goes through here.
    pub(crate) fn update_zn(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, value & 0x80 != 0);
    }
}
