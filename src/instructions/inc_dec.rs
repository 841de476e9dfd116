//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory in place; INX/INY/DEX/DEY modify a register.
//! All wrap modulo 256 and update Z/N; carry is never affected.

use crate::{MemoryBus, CPU};

/// INC: increments the byte at the effective address. Updates Z/N.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, result);
    cpu.status.update_zn(result);
}

/// DEC: decrements the byte at the effective address. Updates Z/N.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, result);
    cpu.status.update_zn(result);
}

/// INX: increments the X register. Updates Z/N.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.update_zn(cpu.x);
}

/// INY: increments the Y register. Updates Z/N.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.update_zn(cpu.y);
}

/// DEX: decrements the X register. Updates Z/N.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.update_zn(cpu.x);
}

/// DEY: decrements the Y register. Updates Z/N.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.update_zn(cpu.y);
}
