//! # Load and Store Instructions
//!
//! LDA, LDX, LDY load a register from the resolved operand and update Z/N;
//! STA, STX, STY write a register to the effective address and touch no
//! flags.

use crate::{MemoryBus, CPU};

/// LDA: loads the operand into the accumulator. Updates Z/N.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a = value;
    cpu.status.update_zn(value);
}

/// LDX: loads the operand into the X register. Updates Z/N.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.x = value;
    cpu.status.update_zn(value);
}

/// LDY: loads the operand into the Y register. Updates Z/N.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.y = value;
    cpu.status.update_zn(value);
}

/// STA: stores the accumulator at the effective address. No flag effect.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    cpu.memory.write(addr, cpu.a);
}

/// STX: stores the X register at the effective address. No flag effect.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    cpu.memory.write(addr, cpu.x);
}

/// STY: stores the Y register at the effective address. No flag effect.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    cpu.memory.write(addr, cpu.y);
}
