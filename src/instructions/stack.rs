//! # Stack Operations
//!
//! PHA, PHP, PLA, PLP. The stack occupies 0x0100-0x01FF and grows downward;
//! pushes write at 0x0100 | SP then decrement, pulls increment then read.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// PHA: pushes the accumulator. No flag effect.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.a);
}

/// PHP: pushes the status register with the break and unused bits set in
/// the pushed byte (hardware convention); the live register is unchanged.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.status.bits() | Status::BREAK | Status::UNUSED);
}

/// PLA: pulls into the accumulator. Updates Z/N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pull();
    cpu.status.update_zn(cpu.a);
}

/// PLP: pulls the status register, restoring all eight bits - reserved
/// bits included, since programs may probe them.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let bits = cpu.pull();
    cpu.status = Status::from_bits(bits);
}
