//! # Instruction Catalog
//!
//! The declarative table of canonical operations. Each catalog entry names
//! one semantic operation (e.g. "add with carry") and, for every addressing
//! mode it supports, the concrete opcode byte that selects it. Unsupported
//! modes are explicitly absent (`None`) rather than flagged by a sentinel
//! value, so opcode 0x00 (BRK) is an ordinary, defined entry.
//!
//! The catalog is pure data. It is compiled into the dense lookup table in
//! [`crate::opcodes`] and is never consulted during execution.

use crate::addressing::AddressingMode;

/// Canonical operation kinds, one per instruction mnemonic.
///
/// Each variant carries its own mnemonic string (via [`Operation::mnemonic`])
/// and an execution routine selected by exhaustive matching in the CPU's
/// dispatch, so tracing reads the stored name directly instead of
/// introspecting function identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add with carry.
    Adc,
    /// Bitwise AND with accumulator.
    And,
    /// Arithmetic shift left.
    Asl,
    /// Branch if carry clear.
    Bcc,
    /// Branch if carry set.
    Bcs,
    /// Branch if equal (zero set).
    Beq,
    /// Bit test.
    Bit,
    /// Branch if minus (negative set).
    Bmi,
    /// Branch if not equal (zero clear).
    Bne,
    /// Branch if plus (negative clear).
    Bpl,
    /// Break: halts the engine. Interrupt-vector semantics are out of scope.
    Brk,
    /// Branch if overflow clear.
    Bvc,
    /// Branch if overflow set.
    Bvs,
    /// Clear carry flag.
    Clc,
    /// Clear decimal flag (stored state only; no BCD arithmetic).
    Cld,
    /// Clear interrupt-disable flag (stored state only).
    Cli,
    /// Clear overflow flag.
    Clv,
    /// Compare with accumulator.
    Cmp,
    /// Compare with X register.
    Cpx,
    /// Compare with Y register.
    Cpy,
    /// Decrement memory.
    Dec,
    /// Decrement X register.
    Dex,
    /// Decrement Y register.
    Dey,
    /// Bitwise exclusive OR with accumulator.
    Eor,
    /// Increment memory.
    Inc,
    /// Increment X register.
    Inx,
    /// Increment Y register.
    Iny,
    /// Unconditional jump.
    Jmp,
    /// Jump to subroutine.
    Jsr,
    /// Load accumulator.
    Lda,
    /// Load X register.
    Ldx,
    /// Load Y register.
    Ldy,
    /// Logical shift right.
    Lsr,
    /// No operation.
    Nop,
    /// Bitwise OR with accumulator.
    Ora,
    /// Push accumulator.
    Pha,
    /// Push processor status.
    Php,
    /// Pull accumulator.
    Pla,
    /// Pull processor status.
    Plp,
    /// Rotate left through carry.
    Rol,
    /// Rotate right through carry.
    Ror,
    /// Return from interrupt (pull status, pull program counter).
    Rti,
    /// Return from subroutine.
    Rts,
    /// Subtract with carry (borrow).
    Sbc,
    /// Set carry flag.
    Sec,
    /// Set decimal flag (stored state only).
    Sed,
    /// Set interrupt-disable flag (stored state only).
    Sei,
    /// Store accumulator.
    Sta,
    /// Store X register.
    Stx,
    /// Store Y register.
    Sty,
    /// Transfer accumulator to X.
    Tax,
    /// Transfer accumulator to Y.
    Tay,
    /// Transfer stack pointer to X.
    Tsx,
    /// Transfer X to accumulator.
    Txa,
    /// Transfer X to stack pointer.
    Txs,
    /// Transfer Y to accumulator.
    Tya,
}

impl Operation {
    /// Returns the three-letter assembly mnemonic for this operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
        }
    }
}

/// One catalog entry: an operation plus its mode-to-opcode associations.
///
/// A mode the operation does not support is `None`. There is deliberately
/// no numeric "absent" sentinel anywhere: presence is the `Option`, which
/// keeps opcode byte 0x00 available as a real, defined opcode (BRK).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDef {
    /// The canonical operation this entry defines opcodes for.
    pub op: Operation,
    /// Opcode byte for immediate addressing, if supported.
    pub immediate: Option<u8>,
    /// Opcode byte for zero-page addressing, if supported.
    pub zero_page: Option<u8>,
    /// Opcode byte for zero-page,X addressing, if supported.
    pub zero_page_x: Option<u8>,
    /// Opcode byte for zero-page,Y addressing, if supported.
    pub zero_page_y: Option<u8>,
    /// Opcode byte for absolute addressing, if supported.
    pub absolute: Option<u8>,
    /// Opcode byte for absolute,X addressing, if supported.
    pub absolute_x: Option<u8>,
    /// Opcode byte for absolute,Y addressing, if supported.
    pub absolute_y: Option<u8>,
    /// Opcode byte for indirect addressing, if supported.
    pub indirect: Option<u8>,
    /// Opcode byte for indexed-indirect (zp,X) addressing, if supported.
    pub indirect_x: Option<u8>,
    /// Opcode byte for indirect-indexed (zp),Y addressing, if supported.
    pub indirect_y: Option<u8>,
    /// Opcode byte for accumulator addressing, if supported.
    pub accumulator: Option<u8>,
    /// Opcode byte for implied (single-byte) addressing, if supported.
    pub implied: Option<u8>,
    /// Opcode byte for relative (branch) addressing, if supported.
    pub relative: Option<u8>,
}

/// Starts a catalog entry with no opcodes declared for any mode.
const fn def(op: Operation) -> InstructionDef {
    InstructionDef {
        op,
        immediate: None,
        zero_page: None,
        zero_page_x: None,
        zero_page_y: None,
        absolute: None,
        absolute_x: None,
        absolute_y: None,
        indirect: None,
        indirect_x: None,
        indirect_y: None,
        accumulator: None,
        implied: None,
        relative: None,
    }
}

impl InstructionDef {
    const fn imm(mut self, opcode: u8) -> Self {
        self.immediate = Some(opcode);
        self
    }

    const fn zp(mut self, opcode: u8) -> Self {
        self.zero_page = Some(opcode);
        self
    }

    const fn zpx(mut self, opcode: u8) -> Self {
        self.zero_page_x = Some(opcode);
        self
    }

    const fn zpy(mut self, opcode: u8) -> Self {
        self.zero_page_y = Some(opcode);
        self
    }

    const fn abs(mut self, opcode: u8) -> Self {
        self.absolute = Some(opcode);
        self
    }

    const fn abx(mut self, opcode: u8) -> Self {
        self.absolute_x = Some(opcode);
        self
    }

    const fn aby(mut self, opcode: u8) -> Self {
        self.absolute_y = Some(opcode);
        self
    }

    const fn ind(mut self, opcode: u8) -> Self {
        self.indirect = Some(opcode);
        self
    }

    const fn izx(mut self, opcode: u8) -> Self {
        self.indirect_x = Some(opcode);
        self
    }

    const fn izy(mut self, opcode: u8) -> Self {
        self.indirect_y = Some(opcode);
        self
    }

    const fn acc(mut self, opcode: u8) -> Self {
        self.accumulator = Some(opcode);
        self
    }

    const fn imp(mut self, opcode: u8) -> Self {
        self.implied = Some(opcode);
        self
    }

    const fn rel(mut self, opcode: u8) -> Self {
        self.relative = Some(opcode);
        self
    }

    /// Enumerates every mode slot of this entry for table construction.
    pub const fn modes(&self) -> [(AddressingMode, Option<u8>); 13] {
        [
            (AddressingMode::Immediate, self.immediate),
            (AddressingMode::ZeroPage, self.zero_page),
            (AddressingMode::ZeroPageX, self.zero_page_x),
            (AddressingMode::ZeroPageY, self.zero_page_y),
            (AddressingMode::Absolute, self.absolute),
            (AddressingMode::AbsoluteX, self.absolute_x),
            (AddressingMode::AbsoluteY, self.absolute_y),
            (AddressingMode::Indirect, self.indirect),
            (AddressingMode::IndirectX, self.indirect_x),
            (AddressingMode::IndirectY, self.indirect_y),
            (AddressingMode::Accumulator, self.accumulator),
            (AddressingMode::Implied, self.implied),
            (AddressingMode::Relative, self.relative),
        ]
    }
}

/// The full documented NMOS 6502 instruction catalog: 56 operations, 151
/// opcodes. Undocumented/illegal opcodes are deliberately absent; fetching
/// one is an undefined-opcode error, not a quirk to emulate.
pub const CATALOG: &[InstructionDef] = &[
    def(Operation::Adc)
        .imm(0x69)
        .zp(0x65)
        .zpx(0x75)
        .abs(0x6D)
        .abx(0x7D)
        .aby(0x79)
        .izx(0x61)
        .izy(0x71),
    def(Operation::And)
        .imm(0x29)
        .zp(0x25)
        .zpx(0x35)
        .abs(0x2D)
        .abx(0x3D)
        .aby(0x39)
        .izx(0x21)
        .izy(0x31),
    def(Operation::Asl)
        .acc(0x0A)
        .zp(0x06)
        .zpx(0x16)
        .abs(0x0E)
        .abx(0x1E),
    def(Operation::Bcc).rel(0x90),
    def(Operation::Bcs).rel(0xB0),
    def(Operation::Beq).rel(0xF0),
    def(Operation::Bit).zp(0x24).abs(0x2C),
    def(Operation::Bmi).rel(0x30),
    def(Operation::Bne).rel(0xD0),
    def(Operation::Bpl).rel(0x10),
    def(Operation::Brk).imp(0x00),
    def(Operation::Bvc).rel(0x50),
    def(Operation::Bvs).rel(0x70),
    def(Operation::Clc).imp(0x18),
    def(Operation::Cld).imp(0xD8),
    def(Operation::Cli).imp(0x58),
    def(Operation::Clv).imp(0xB8),
    def(Operation::Cmp)
        .imm(0xC9)
        .zp(0xC5)
        .zpx(0xD5)
        .abs(0xCD)
        .abx(0xDD)
        .aby(0xD9)
        .izx(0xC1)
        .izy(0xD1),
    def(Operation::Cpx).imm(0xE0).zp(0xE4).abs(0xEC),
    def(Operation::Cpy).imm(0xC0).zp(0xC4).abs(0xCC),
    def(Operation::Dec).zp(0xC6).zpx(0xD6).abs(0xCE).abx(0xDE),
    def(Operation::Dex).imp(0xCA),
    def(Operation::Dey).imp(0x88),
    def(Operation::Eor)
        .imm(0x49)
        .zp(0x45)
        .zpx(0x55)
        .abs(0x4D)
        .abx(0x5D)
        .aby(0x59)
        .izx(0x41)
        .izy(0x51),
    def(Operation::Inc).zp(0xE6).zpx(0xF6).abs(0xEE).abx(0xFE),
    def(Operation::Inx).imp(0xE8),
    def(Operation::Iny).imp(0xC8),
    def(Operation::Jmp).abs(0x4C).ind(0x6C),
    def(Operation::Jsr).abs(0x20),
    def(Operation::Lda)
        .imm(0xA9)
        .zp(0xA5)
        .zpx(0xB5)
        .abs(0xAD)
        .abx(0xBD)
        .aby(0xB9)
        .izx(0xA1)
        .izy(0xB1),
    def(Operation::Ldx)
        .imm(0xA2)
        .zp(0xA6)
        .zpy(0xB6)
        .abs(0xAE)
        .aby(0xBE),
    def(Operation::Ldy)
        .imm(0xA0)
        .zp(0xA4)
        .zpx(0xB4)
        .abs(0xAC)
        .abx(0xBC),
    def(Operation::Lsr)
        .acc(0x4A)
        .zp(0x46)
        .zpx(0x56)
        .abs(0x4E)
        .abx(0x5E),
    def(Operation::Nop).imp(0xEA),
    def(Operation::Ora)
        .imm(0x09)
        .zp(0x05)
        .zpx(0x15)
        .abs(0x0D)
        .abx(0x1D)
        .aby(0x19)
        .izx(0x01)
        .izy(0x11),
    def(Operation::Pha).imp(0x48),
    def(Operation::Php).imp(0x08),
    def(Operation::Pla).imp(0x68),
    def(Operation::Plp).imp(0x28),
    def(Operation::Rol)
        .acc(0x2A)
        .zp(0x26)
        .zpx(0x36)
        .abs(0x2E)
        .abx(0x3E),
    def(Operation::Ror)
        .acc(0x6A)
        .zp(0x66)
        .zpx(0x76)
        .abs(0x6E)
        .abx(0x7E),
    def(Operation::Rti).imp(0x40),
    def(Operation::Rts).imp(0x60),
    def(Operation::Sbc)
        .imm(0xE9)
        .zp(0xE5)
        .zpx(0xF5)
        .abs(0xED)
        .abx(0xFD)
        .aby(0xF9)
        .izx(0xE1)
        .izy(0xF1),
    def(Operation::Sec).imp(0x38),
    def(Operation::Sed).imp(0xF8),
    def(Operation::Sei).imp(0x78),
    def(Operation::Sta)
        .zp(0x85)
        .zpx(0x95)
        .abs(0x8D)
        .abx(0x9D)
        .aby(0x99)
        .izx(0x81)
        .izy(0x91),
    def(Operation::Stx).zp(0x86).zpy(0x96).abs(0x8E),
    def(Operation::Sty).zp(0x84).zpx(0x94).abs(0x8C),
    def(Operation::Tax).imp(0xAA),
    def(Operation::Tay).imp(0xA8),
    def(Operation::Tsx).imp(0xBA),
    def(Operation::Txa).imp(0x8A),
    def(Operation::Txs).imp(0x9A),
    def(Operation::Tya).imp(0x98),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_declares_151_opcodes() {
        let declared: usize = CATALOG
            .iter()
            .map(|entry| entry.modes().iter().filter(|(_, op)| op.is_some()).count())
            .sum();
        assert_eq!(declared, 151);
    }

    #[test]
    fn test_every_operation_appears_once() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.op, b.op, "{} has two catalog entries", a.op.mnemonic());
            }
        }
    }

    #[test]
    fn test_brk_is_a_defined_opcode() {
        // 0x00 is a real opcode, not an "absent" marker.
        let brk = CATALOG.iter().find(|e| e.op == Operation::Brk).unwrap();
        assert_eq!(brk.implied, Some(0x00));
    }

    #[test]
    fn test_mnemonics_are_three_letters() {
        for entry in CATALOG {
            assert_eq!(entry.op.mnemonic().len(), 3);
        }
    }
}
