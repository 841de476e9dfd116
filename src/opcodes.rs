//! # Opcode Table
//!
//! A dense lookup from opcode byte to (addressing mode, operation), built
//! from the declarative catalog in [`crate::catalog`]. The builtin table is
//! a compile-time constant ([`OPCODE_TABLE`]), so there is no load-time
//! initialization and no process-wide mutable state; a duplicate opcode in
//! the builtin catalog fails the build itself. Host-supplied catalogs go
//! through the same checked constructor at runtime.

use crate::addressing::AddressingMode;
use crate::catalog::{InstructionDef, Operation, CATALOG};

/// One opcode table entry: the addressing mode and operation an opcode byte
/// selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// How the instruction's operand bytes are interpreted.
    pub mode: AddressingMode,
    /// The operation to execute.
    pub op: Operation,
}

/// Error raised while building an opcode table from a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// Two catalog entries declared the same opcode byte. Construction
    /// fails fast instead of silently overwriting the earlier entry.
    DuplicateOpcode {
        /// The contested opcode byte.
        opcode: u8,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateOpcode { opcode } => {
                write!(f, "opcode 0x{opcode:02X} is declared twice in the catalog")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable 256-slot lookup from opcode byte to [`OpcodeEntry`].
///
/// A slot with no entry means the opcode byte is *undefined*: fetching it
/// is a fatal [`ExecutionError::UndefinedOpcode`](crate::ExecutionError).
/// Absence is represented by `Option`, never by a sentinel byte value, so
/// a defined opcode of 0x00 and "no entry" cannot be confused.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE.lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.op, Operation::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
///
/// // 0x02 is an undocumented opcode and has no entry.
/// assert!(OPCODE_TABLE.lookup(0x02).is_none());
/// ```
pub struct OpcodeTable {
    entries: [Option<OpcodeEntry>; 256],
}

impl OpcodeTable {
    /// Builds an opcode table from a catalog, inserting one entry per
    /// declared mode-to-opcode association.
    ///
    /// Fails with [`CatalogError::DuplicateOpcode`] if two associations
    /// claim the same opcode byte. The result is read-only; nothing in the
    /// crate mutates a table after this returns.
    pub const fn from_catalog(catalog: &[InstructionDef]) -> Result<Self, CatalogError> {
        let mut entries: [Option<OpcodeEntry>; 256] = [None; 256];

        let mut i = 0;
        while i < catalog.len() {
            let modes = catalog[i].modes();
            let mut m = 0;
            while m < modes.len() {
                let (mode, byte) = modes[m];
                if let Some(opcode) = byte {
                    if entries[opcode as usize].is_some() {
                        return Err(CatalogError::DuplicateOpcode { opcode });
                    }
                    entries[opcode as usize] = Some(OpcodeEntry {
                        mode,
                        op: catalog[i].op,
                    });
                }
                m += 1;
            }
            i += 1;
        }

        Ok(Self { entries })
    }

    /// Returns the entry for an opcode byte, or `None` if it is undefined.
    pub const fn lookup(&self, opcode: u8) -> Option<OpcodeEntry> {
        self.entries[opcode as usize]
    }

    /// Number of defined opcodes in the table.
    pub fn defined_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }
}

/// The opcode table for the builtin catalog, constructed at compile time.
///
/// A duplicate opcode byte in [`CATALOG`] makes this constant fail to
/// evaluate, which is the fail-fast construction check demanded of the
/// table: no instruction can ever execute against a conflicted table.
pub const OPCODE_TABLE: OpcodeTable = match OpcodeTable::from_catalog(CATALOG) {
    Ok(table) => table,
    Err(_) => panic!("builtin instruction catalog declares a duplicate opcode"),
};
