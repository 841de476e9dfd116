//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic and logical operations: ADC, SBC, AND, ORA, EOR, CMP, CPX,
//! CPY, BIT. Decimal mode is out of scope; the D flag is stored state only
//! and never alters these results.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// ADC: adds operand plus carry to the accumulator.
///
/// The sum is computed in a widened domain: carry is set iff it exceeds
/// 0xFF. Signed overflow is detected from the input sign bits - it occurs
/// when both addends share a sign and the truncated result's sign differs
/// from it - never from the result alone.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.contains(Status::CARRY) as u16;
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set(Status::CARRY, sum > 0xFF);
    cpu.status
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.status.update_zn(result);
}

/// SBC: subtracts operand and borrow from the accumulator.
///
/// Binary subtraction is addition of the one's complement, with the carry
/// flag acting as the inverted borrow; the carry/overflow rules then come
/// out of [`adc`] unchanged.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    adc(cpu, value ^ 0xFF);
}

/// AND: bitwise AND of accumulator and operand. Updates Z/N.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a &= value;
    cpu.status.update_zn(cpu.a);
}

/// ORA: bitwise OR of accumulator and operand. Updates Z/N.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a |= value;
    cpu.status.update_zn(cpu.a);
}

/// EOR: bitwise exclusive OR of accumulator and operand. Updates Z/N.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a ^= value;
    cpu.status.update_zn(cpu.a);
}

/// CMP: compares the accumulator with the operand.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    compare(cpu, cpu.a, value);
}

/// CPX: compares the X register with the operand.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    compare(cpu, cpu.x, value);
}

/// CPY: compares the Y register with the operand.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    compare(cpu, cpu.y, value);
}

/// Shared comparison rule: carry iff register >= operand (unsigned), Z/N
/// from the wrapped 8-bit difference. The difference is not stored.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.update_zn(register.wrapping_sub(value));
}

/// BIT: tests accumulator bits against memory without modifying either.
///
/// Z from `A & operand`; N and V are copies of operand bits 7 and 6.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
}
