//! Tests for the stack instructions (PHA, PLA, PHP, PLP).
//!
//! The stack occupies page one. The pointer starts at 0xFF and grows
//! downward, so the first push lands at 0x01FF.

use cpu6502::{CPU, FlatMemory, MemoryBus};

/// Helper to create a CPU with `program` loaded at the default origin.
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, program);
    CPU::new(memory)
}

#[test]
fn test_pha_writes_to_page_one() {
    let mut cpu = setup_cpu(&[0x48]);
    cpu.set_a(0x42);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FF), 0x42);
    assert_eq!(cpu.sp(), 0xFE);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu(&[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x99);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.sp(), 0xFF);
    // PLA updates Z and N from the pulled value.
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_pla_of_zero_sets_zero_flag() {
    let mut cpu = setup_cpu(&[0x48, 0x68]);
    cpu.set_a(0x00);
    cpu.step().unwrap();
    cpu.set_a(0x55);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_php_pushes_break_and_unused_set() {
    let mut cpu = setup_cpu(&[0x08]);
    cpu.set_status(0x01);
    cpu.step().unwrap();

    // The pushed copy always has bits 4 and 5 set.
    assert_eq!(cpu.memory().read(0x01FF), 0x31);
}

#[test]
fn test_plp_restores_all_eight_bits() {
    let mut cpu = setup_cpu(&[0x28]);
    cpu.memory_mut().write(0x01FF, 0xC3);
    cpu.set_sp(0xFE);
    cpu.step().unwrap();

    assert_eq!(cpu.status(), 0xC3);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
}

#[test]
fn test_stack_pointer_wraps() {
    let mut cpu = setup_cpu(&[0x48]);
    cpu.set_sp(0x00);
    cpu.set_a(0x77);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0100), 0x77);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_push_does_not_touch_flags() {
    let mut cpu = setup_cpu(&[0x48]);
    cpu.set_a(0x00);
    let before = cpu.status();
    cpu.step().unwrap();

    assert_eq!(cpu.status(), before);
}
