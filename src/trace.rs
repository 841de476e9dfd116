//! # Execution Trace Side Channel
//!
//! An optional per-step trace for observability. The CPU reports each
//! executed instruction to a host-supplied sink; nothing is ever written to
//! a fixed output destination, and installing a sink does not change
//! execution semantics.

use crate::addressing::{AddressingMode, Operand};

/// One executed instruction, reported after decode and operand resolution
/// but before the operation mutates state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    /// Address the opcode byte was fetched from.
    pub address: u16,
    /// The opcode byte.
    pub opcode: u8,
    /// Mnemonic of the decoded operation.
    pub mnemonic: &'static str,
    /// Addressing mode the operand was resolved under.
    pub mode: AddressingMode,
    /// The resolved operand.
    pub operand: Operand,
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "PC: 0x{:04X}, inst: 0x{:02X} {}",
            self.address, self.opcode, self.mnemonic
        )?;
        match self.operand {
            Operand::None => Ok(()),
            Operand::Accumulator => write!(f, " A"),
            Operand::Immediate(value) => write!(f, " #${value:02X}"),
            Operand::Relative(value) => write!(f, " ${value:02X}"),
            Operand::Address(addr) => write!(f, " ${addr:04X}"),
        }
    }
}

/// Receiver for per-step trace events.
///
/// Implemented for every `FnMut(&TraceEvent)` closure, so simple hosts can
/// install a closure directly:
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus, TraceEvent};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0600, &[0xA9, 0x42, 0x00]); // LDA #$42; BRK
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_trace_sink(Box::new(|event: &TraceEvent| {
///     println!("{event}");
/// }));
/// cpu.run().unwrap();
/// ```
pub trait TraceSink {
    /// Called once per executed instruction, before its state mutation.
    fn trace(&mut self, event: &TraceEvent);
}

impl<F: FnMut(&TraceEvent)> TraceSink for F {
    fn trace(&mut self, event: &TraceEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_immediate() {
        let event = TraceEvent {
            address: 0x0600,
            opcode: 0xA9,
            mnemonic: "LDA",
            mode: AddressingMode::Immediate,
            operand: Operand::Immediate(0x42),
        };
        assert_eq!(event.to_string(), "PC: 0x0600, inst: 0xA9 LDA #$42");
    }

    #[test]
    fn test_display_implied_has_no_operand_text() {
        let event = TraceEvent {
            address: 0x0602,
            opcode: 0x00,
            mnemonic: "BRK",
            mode: AddressingMode::Implied,
            operand: Operand::None,
        };
        assert_eq!(event.to_string(), "PC: 0x0602, inst: 0x00 BRK");
    }

    #[test]
    fn test_display_effective_address() {
        let event = TraceEvent {
            address: 0x0600,
            opcode: 0x8D,
            mnemonic: "STA",
            mode: AddressingMode::Absolute,
            operand: Operand::Address(0x1234),
        };
        assert_eq!(event.to_string(), "PC: 0x0600, inst: 0x8D STA $1234");
    }
}
