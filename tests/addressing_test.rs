//! Addressing-mode resolution tests
//!
//! Exercises every decode rule through load/store instructions, including
//! the zero-page wraparound quirks that plain 16-bit arithmetic would get
//! wrong.

use cpu6502::{CPU, FlatMemory, MemoryBus};

/// Helper to create a CPU with `program` loaded at the default origin.
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, program);
    CPU::new(memory)
}

#[test]
fn test_immediate() {
    let mut cpu = setup_cpu(&[0xA9, 0x7B]); // LDA #$7B
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x7B);
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_zero_page() {
    let mut cpu = setup_cpu(&[0xA5, 0x42]); // LDA $42
    cpu.memory_mut().write(0x0042, 0x99);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_zero_page_x_wraps_within_page() {
    let mut cpu = setup_cpu(&[0xB5, 0xF0]); // LDA $F0,X
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x0010, 0x55); // (0xF0 + 0x20) & 0xFF
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_zero_page_y() {
    let mut cpu = setup_cpu(&[0xB6, 0x80]); // LDX $80,Y
    cpu.set_y(0x0F);
    cpu.memory_mut().write(0x008F, 0x33);
    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x33);
}

#[test]
fn test_absolute_is_little_endian() {
    let mut cpu = setup_cpu(&[0xAD, 0x34, 0x12]); // LDA $1234
    cpu.memory_mut().write(0x1234, 0xAB);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xAB);
    assert_eq!(cpu.pc(), 0x0603);
}

#[test]
fn test_absolute_x_crosses_pages_with_plain_arithmetic() {
    let mut cpu = setup_cpu(&[0xBD, 0xFF, 0x10]); // LDA $10FF,X
    cpu.set_x(0x02);
    cpu.memory_mut().write(0x1101, 0x66);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_absolute_y() {
    let mut cpu = setup_cpu(&[0xB9, 0x00, 0x20]); // LDA $2000,Y
    cpu.set_y(0x80);
    cpu.memory_mut().write(0x2080, 0x44);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x44);
}

#[test]
fn test_indexed_indirect_wraps_in_page_zero() {
    // Base 0xFF with X = 0x02: the pointer lives at 0x01/0x02, not 0x101.
    let mut cpu = setup_cpu(&[0xA1, 0xFF]); // LDA ($FF,X)
    cpu.set_x(0x02);
    cpu.memory_mut().write(0x0001, 0x00);
    cpu.memory_mut().write(0x0002, 0x30);
    cpu.memory_mut().write(0x3000, 0x88);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x88);
}

#[test]
fn test_indirect_indexed_adds_y_after_dereference() {
    let mut cpu = setup_cpu(&[0xB1, 0x40]); // LDA ($40),Y
    cpu.set_y(0x10);
    cpu.memory_mut().write(0x0040, 0xF8);
    cpu.memory_mut().write(0x0041, 0x1F);
    cpu.memory_mut().write(0x2008, 0x21); // 0x1FF8 + 0x10
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x21);
}

#[test]
fn test_indirect_indexed_takes_no_x_offset() {
    let mut cpu = setup_cpu(&[0xB1, 0x40]); // LDA ($40),Y
    cpu.set_x(0x55); // must be ignored
    cpu.memory_mut().write(0x0040, 0x00);
    cpu.memory_mut().write(0x0041, 0x10);
    cpu.memory_mut().write(0x1000, 0x77);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_store_resolves_same_addresses_as_load() {
    // STA $F0,X mirrors the LDA wraparound rule.
    let mut cpu = setup_cpu(&[0x95, 0xF0]); // STA $F0,X
    cpu.set_a(0xCD);
    cpu.set_x(0x20);
    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0010), 0xCD);
}

#[test]
fn test_operand_bytes_consumed_per_mode() {
    // One-byte operand: PC advances by 2.
    let mut cpu = setup_cpu(&[0xA5, 0x00]);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0602);

    // Two-byte operand: PC advances by 3.
    let mut cpu = setup_cpu(&[0xAD, 0x00, 0x00]);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0603);

    // No operand: PC advances by 1.
    let mut cpu = setup_cpu(&[0xE8]);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0601);
}
