//! # Branch Instructions
//!
//! Conditional branches: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS. All use
//! relative addressing; the displacement byte is a signed two's-complement
//! offset applied to the program counter *after* it has advanced past the
//! branch instruction. When the condition fails, the program counter is
//! left untouched.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// BCC: branch if carry clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    if !cpu.status.contains(Status::CARRY) {
        branch(cpu, displacement);
    }
}

/// BCS: branch if carry set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    if cpu.status.contains(Status::CARRY) {
        branch(cpu, displacement);
    }
}

/// BEQ: branch if the zero flag is set.
pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    if cpu.status.contains(Status::ZERO) {
        branch(cpu, displacement);
    }
}

/// BNE: branch if the zero flag is clear.
pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    if !cpu.status.contains(Status::ZERO) {
        branch(cpu, displacement);
    }
}

/// BMI: branch if the negative flag is set.
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    if cpu.status.contains(Status::NEGATIVE) {
        branch(cpu, displacement);
    }
}

/// BPL: branch if the negative flag is clear.
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    if !cpu.status.contains(Status::NEGATIVE) {
        branch(cpu, displacement);
    }
}

/// BVC: branch if the overflow flag is clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    if !cpu.status.contains(Status::OVERFLOW) {
        branch(cpu, displacement);
    }
}

/// BVS: branch if the overflow flag is set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    if cpu.status.contains(Status::OVERFLOW) {
        branch(cpu, displacement);
    }
}

/// Applies a taken branch: displacement bytes >= 0x80 move the program
/// counter backwards (two's-complement), the rest move it forwards.
fn branch<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) {
    cpu.pc = cpu.pc.wrapping_add_signed(i16::from(displacement as i8));
}
