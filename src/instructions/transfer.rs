//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS. All update Z/N from the destination
//! except TXS, which writes the stack pointer and touches no flags.

use crate::{MemoryBus, CPU};

/// TAX: X <- A. Updates Z/N.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.status.update_zn(cpu.x);
}

/// TAY: Y <- A. Updates Z/N.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.status.update_zn(cpu.y);
}

/// TXA: A <- X. Updates Z/N.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.status.update_zn(cpu.a);
}

/// TYA: A <- Y. Updates Z/N.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.status.update_zn(cpu.a);
}

/// TSX: X <- SP. Updates Z/N.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.status.update_zn(cpu.x);
}

/// TXS: SP <- X. No flag effect.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
