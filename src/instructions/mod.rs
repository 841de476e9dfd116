//! # 6502 Instruction Implementations
//!
//! Implementations of all operations in the catalog, organized by category.
//! Each function receives the CPU and its already-resolved operand (value,
//! effective address, shift target, or branch displacement); operand
//! resolution and dispatch live in [`crate::cpu`].
//!
//! ## Categories
//!
//! - **alu**: arithmetic and logic (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: shifts and rotates (ASL, LSR, ROL, ROR)
//! - **load_store**: loads and stores (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: increments and decrements (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: control flow (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: status flag manipulation (CLC, SEC, CLI, SEI, CLV, CLD, SED)
//! - **transfer**: register transfers (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
