//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI, BRK, NOP.
//!
//! BRK is deliberately limited: it transitions the engine to its terminal
//! halted state and performs no interrupt-vector push sequence (interrupt
//! handling is out of scope). RTI retains its pure stack semantics - pull
//! status, pull program counter - which need no interrupt machinery.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// JMP: program counter <- resolved effective address.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    cpu.pc = addr;
}

/// JSR: pushes the address of the last byte of this instruction (PC - 1,
/// high byte first), then jumps.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push((return_addr >> 8) as u8);
    cpu.push(return_addr as u8);
    cpu.pc = addr;
}

/// RTS: pulls the return address and resumes one byte past it.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    let low = cpu.pull() as u16;
    let high = cpu.pull() as u16;
    cpu.pc = ((high << 8) | low).wrapping_add(1);
}

/// RTI: pulls the status register (all eight bits), then the program
/// counter. Unlike RTS there is no one-byte adjustment.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let bits = cpu.pull();
    cpu.status = Status::from_bits(bits);
    let low = cpu.pull() as u16;
    let high = cpu.pull() as u16;
    cpu.pc = (high << 8) | low;
}

/// BRK: halts the engine. No registers, flags, or memory are touched.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.halted = true;
}

/// NOP: no state mutation at all.
pub(crate) fn nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}
