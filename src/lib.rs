//! # 6502 CPU Emulator Core
//!
//! An instruction-set emulator for the MOS Technology 6502 processor. A byte
//! stream in a flat 64KB address space is interpreted as machine instructions
//! and the processor's observable state transitions (registers, status flags,
//! memory writes, program counter) are reproduced bit-exactly.
//!
//! This crate is the execution engine only: test harnesses, debuggers, and
//! tooling drive it through raw memory access and a steppable execution
//! contract. Assemblers, loaders, and output formatting live outside.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // LDA #$42; BRK - loaded at the default program origin
//! memory.write(0x0600, 0xA9);
//! memory.write(0x0601, 0x42);
//! memory.write(0x0602, 0x00);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.a(), 0x42);
//! assert!(cpu.is_halted());
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven dispatch**: a declarative instruction catalog is compiled
//!   into a 256-entry opcode table; an opcode byte with no entry is undefined
//!   and terminates execution with an error.
//! - **Determinism**: given identical initial state and memory, repeated
//!   execution produces identical state at every step. No hidden entropy,
//!   no wall-clock dependence, no process-wide mutable state.
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus`
//!   trait; tracing is a host-supplied `TraceSink`, never a hard-wired
//!   output destination.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and the FlatMemory implementation
//! - `catalog` - declarative instruction catalog and operation kinds
//! - `opcodes` - opcode table built from the catalog
//! - `addressing` - addressing mode enumeration and resolved operands
//! - `status` - processor status flag bitfield
//! - `trace` - pluggable per-step trace side channel

pub mod addressing;
pub mod catalog;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use catalog::{InstructionDef, Operation, CATALOG};
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{CatalogError, OpcodeEntry, OpcodeTable, OPCODE_TABLE};
pub use status::Status;
pub use trace::{TraceEvent, TraceSink};

/// Errors that can occur during CPU execution.
///
/// There are no recoverable runtime errors: the engine is an
/// in-memory, I/O-free interpreter, so every error here indicates either a
/// malformed program byte stream or an internal consistency bug. Both are
/// fatal; the CPU transitions to the halted state before returning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode byte has no entry in the opcode table.
    ///
    /// Execution cannot safely continue without known semantics, so the
    /// offending opcode and its address are surfaced rather than skipped.
    UndefinedOpcode {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Address the opcode byte was fetched from.
        address: u16,
    },

    /// The resolver produced an operand shape the operation cannot consume.
    ///
    /// Unreachable as long as the opcode table invariant holds (every table
    /// entry pairs an operation with a mode it supports); surfaced as an
    /// error rather than silently ignored if it ever occurs.
    OperandMismatch {
        /// Mnemonic of the operation that rejected the operand.
        mnemonic: &'static str,
        /// Addressing mode the operand was resolved under.
        mode: AddressingMode,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UndefinedOpcode { opcode, address } => {
                write!(f, "undefined opcode 0x{opcode:02X} at 0x{address:04X}")
            }
            ExecutionError::OperandMismatch { mnemonic, mode } => {
                write!(f, "{mnemonic} cannot consume a {mode:?} operand")
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
