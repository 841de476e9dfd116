//! # Addressing Modes
//!
//! The 13 addressing modes of the emulated instruction set, plus the
//! `Operand` type the resolver produces from them. A mode fixes how many
//! operand bytes an instruction consumes and how those bytes turn into a
//! value or an effective memory address.

/// How an instruction's operand bytes are interpreted.
///
/// Operand sizes by mode:
///
/// - 0 bytes: `Implied`, `Accumulator`
/// - 1 byte: `Immediate`, `ZeroPage`, `ZeroPageX`, `ZeroPageY`,
///   `Relative`, `IndirectX`, `IndirectY`
/// - 2 bytes: `Absolute`, `AbsoluteX`, `AbsoluteY`, `Indirect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand bytes; the operation's target is fixed (CLC, RTS, NOP).
    Implied,

    /// The operand is the accumulator itself (ASL A, LSR A).
    Accumulator,

    /// A literal byte follows the opcode (LDA #$10).
    Immediate,

    /// One byte naming an address in page zero (LDA $80 reads 0x0080).
    ZeroPage,

    /// Page-zero address plus X, wrapping within the page (LDA $80,X).
    ZeroPageX,

    /// Page-zero address plus Y, wrapping within the page (LDX $80,Y).
    ZeroPageY,

    /// Signed 8-bit branch displacement. The displacement is applied to
    /// the program counter by the branch operation itself, not by the
    /// resolver.
    Relative,

    /// A full little-endian 16-bit address (JMP $1234).
    Absolute,

    /// 16-bit address plus X, wrapping modulo 65536 (LDA $1234,X).
    AbsoluteX,

    /// 16-bit address plus Y, wrapping modulo 65536 (LDA $1234,Y).
    AbsoluteY,

    /// A 16-bit pointer to the real target address; JMP ($FFFC) jumps to
    /// the address stored at 0xFFFC/0xFFFD. Only JMP uses this mode.
    Indirect,

    /// Indexed indirect, written ($40,X): X is added to the page-zero base
    /// first (wrapping within the page, so base 0xFF with X = 0x02 finds
    /// its pointer at 0x01), then the 16-bit pointer there is followed.
    IndirectX,

    /// Indirect indexed, written ($40),Y: the 16-bit pointer at the
    /// page-zero base is followed first, then Y is added to it.
    IndirectY,
}

/// A resolved instruction operand.
///
/// Produced by the CPU's addressing-mode resolver after it has consumed the
/// instruction's operand bytes and advanced the program counter past them.
/// Which shape an operation consumes is fixed by its addressing mode, so a
/// mismatch here indicates a table-construction bug (see
/// [`ExecutionError::OperandMismatch`](crate::ExecutionError::OperandMismatch)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implied addressing).
    None,

    /// The operation targets the accumulator register.
    Accumulator,

    /// A literal byte taken from the instruction stream.
    Immediate(u8),

    /// A fully resolved 16-bit effective address, after any indexing or
    /// indirection.
    Address(u16),

    /// A raw branch displacement byte; values >= 0x80 are interpreted as
    /// negative two's-complement offsets by the branch operations.
    Relative(u8),
}
