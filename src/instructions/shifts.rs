//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. Each operates either on the accumulator or on a
//! memory location (read-modify-write); the shifted-out bit lands in the
//! carry flag and Z/N are updated from the result.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Where a shift or rotate reads its input and writes its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShiftTarget {
    /// The accumulator register.
    Accumulator,
    /// A memory location, modified in place.
    Memory(u16),
}

fn read_target<M: MemoryBus>(cpu: &CPU<M>, target: ShiftTarget) -> u8 {
    match target {
        ShiftTarget::Accumulator => cpu.a,
        ShiftTarget::Memory(addr) => cpu.memory.read(addr),
    }
}

fn write_target<M: MemoryBus>(cpu: &mut CPU<M>, target: ShiftTarget, value: u8) {
    match target {
        ShiftTarget::Accumulator => cpu.a = value,
        ShiftTarget::Memory(addr) => cpu.memory.write(addr, value),
    }
}

/// ASL: shift left one bit. Bit 7 moves into carry, bit 0 becomes 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, target: ShiftTarget) {
    let value = read_target(cpu, target);
    let result = value << 1;

    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    write_target(cpu, target, result);
    cpu.status.update_zn(result);
}

/// LSR: shift right one bit. Bit 0 moves into carry, bit 7 becomes 0.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, target: ShiftTarget) {
    let value = read_target(cpu, target);
    let result = value >> 1;

    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    write_target(cpu, target, result);
    cpu.status.update_zn(result);
}

/// ROL: rotate left through carry. Old carry enters bit 0, bit 7 exits
/// into carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, target: ShiftTarget) {
    let value = read_target(cpu, target);
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = (value << 1) | carry_in;

    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    write_target(cpu, target, result);
    cpu.status.update_zn(result);
}

/// ROR: rotate right through carry. Old carry enters bit 7, bit 0 exits
/// into carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, target: ShiftTarget) {
    let value = read_target(cpu, target);
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = (carry_in << 7) | (value >> 1);

    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    write_target(cpu, target, result);
    cpu.status.update_zn(result);
}
