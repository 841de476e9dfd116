//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD, SED. Each sets or clears exactly one bit
//! of the status register. The interrupt-disable and decimal bits are
//! inert stored state in this engine (no interrupt machinery, no BCD
//! arithmetic), but they remain settable and readable.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// CLC: clears the carry flag.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.set(Status::CARRY, false);
}

/// SEC: sets the carry flag.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.set(Status::CARRY, true);
}

/// CLI: clears the interrupt-disable flag.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.set(Status::IRQ_DISABLE, false);
}

/// SEI: sets the interrupt-disable flag.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.set(Status::IRQ_DISABLE, true);
}

/// CLV: clears the overflow flag.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.set(Status::OVERFLOW, false);
}

/// CLD: clears the decimal flag.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.set(Status::DECIMAL, false);
}

/// SED: sets the decimal flag.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.set(Status::DECIMAL, true);
}
