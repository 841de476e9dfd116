//! Tests for the register transfer instructions and the flag
//! set/clear instructions.

use cpu6502::{CPU, FlatMemory};

/// Helper to create a CPU with `program` loaded at the default origin.
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, program);
    CPU::new(memory)
}

#[test]
fn test_tax_tay_update_flags() {
    let mut cpu = setup_cpu(&[0xAA, 0xA8]);
    cpu.set_a(0x80);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());

    cpu.set_a(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa_tya() {
    let mut cpu = setup_cpu(&[0x8A, 0x98]);
    cpu.set_x(0x42);
    cpu.set_y(0x17);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x17);
}

#[test]
fn test_tsx_reads_stack_pointer() {
    let mut cpu = setup_cpu(&[0xBA]);
    cpu.set_sp(0xF0);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_sets_stack_pointer_without_flags() {
    let mut cpu = setup_cpu(&[0x9A]);
    cpu.set_x(0x00);
    let before = cpu.status();
    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    // TXS is the one transfer that does not update Z and N.
    assert_eq!(cpu.status(), before);
}

#[test]
fn test_carry_set_and_clear() {
    let mut cpu = setup_cpu(&[0x38, 0x18]);

    cpu.step().unwrap();
    assert!(cpu.flag_c());

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
}

#[test]
fn test_clv_clears_overflow() {
    let mut cpu = setup_cpu(&[0xB8]);
    cpu.set_flag_v(true);
    cpu.step().unwrap();

    assert!(!cpu.flag_v());
}

#[test]
fn test_interrupt_disable_and_decimal_bits_track_in_status() {
    // D and I have no effect on arithmetic here, but the bits must still
    // be visible through the status register.
    let mut cpu = setup_cpu(&[0x78, 0xF8, 0x58, 0xD8]);

    cpu.step().unwrap();
    assert_ne!(cpu.status() & 0x04, 0);
    cpu.step().unwrap();
    assert_ne!(cpu.status() & 0x08, 0);
    cpu.step().unwrap();
    assert_eq!(cpu.status() & 0x04, 0);
    cpu.step().unwrap();
    assert_eq!(cpu.status() & 0x08, 0);
}

#[test]
fn test_flag_instructions_leave_other_flags_alone() {
    let mut cpu = setup_cpu(&[0x38]);
    cpu.set_flag_n(true);
    cpu.set_flag_z(true);
    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(cpu.flag_z());
}
