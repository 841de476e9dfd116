//! Tests for the compare instructions (CMP, CPX, CPY) and BIT.
//!
//! A compare performs register - operand without storing the result:
//! carry is set iff register >= operand (unsigned), zero iff equal, and
//! negative tracks bit 7 of the difference.

use cpu6502::{CPU, FlatMemory, MemoryBus};

/// Helper to create a CPU with `program` loaded at the default origin.
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, program);
    CPU::new(memory)
}

#[test]
fn test_cmp_equal() {
    let mut cpu = setup_cpu(&[0xC9, 0x42]);
    cpu.set_a(0x42);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    // The accumulator is not modified.
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_cmp_register_greater() {
    let mut cpu = setup_cpu(&[0xC9, 0x10]);
    cpu.set_a(0x50);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_register_less() {
    let mut cpu = setup_cpu(&[0xC9, 0x50]);
    cpu.set_a(0x10);
    cpu.step().unwrap();

    // 0x10 - 0x50 = 0xC0, so N is set and the borrow clears carry.
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_cpx_and_cpy() {
    let mut cpu = setup_cpu(&[0xE0, 0x05, 0xC0, 0x05]);
    cpu.set_x(0x05);
    cpu.set_y(0x04);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_cmp_does_not_touch_overflow() {
    let mut cpu = setup_cpu(&[0xC9, 0x80]);
    cpu.set_a(0x7F);
    cpu.set_flag_v(true);
    cpu.step().unwrap();

    assert!(cpu.flag_v());
}

#[test]
fn test_bit_copies_high_bits_from_memory() {
    let mut cpu = setup_cpu(&[0x24, 0x10]);
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x01);
    cpu.step().unwrap();

    // A & 0xC0 == 0, so Z set; N and V come from bits 7 and 6 of memory.
    assert!(cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_bit_nonzero_mask_clears_zero() {
    let mut cpu = setup_cpu(&[0x2C, 0x00, 0x20]);
    cpu.memory_mut().write(0x2000, 0x3F);
    cpu.set_a(0x01);
    cpu.step().unwrap();

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}
