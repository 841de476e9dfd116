//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the execution engine from any particular
//! memory layout, and `FlatMemory` provides the 64KB flat RAM that simple
//! hosts and test harnesses use.
//!
//! Reads and writes are total functions over the 16-bit address space. The
//! 6502 has no bus-error mechanism, so neither do these signatures; a host
//! that wants ROM regions or mapped devices expresses them by what its
//! `read` returns and what its `write` ignores.

/// Byte-granular access to a 16-bit address space.
///
/// The CPU performs every fetch, operand read, stack access, and store
/// through this trait. The host uses the same surface to load programs and
/// to inspect results before or between steps.
///
/// `read` takes `&self` so shared inspection needs no mutable borrow;
/// `write` takes `&mut self` so every side effect is explicit.
///
/// # Examples
///
/// A host with a RAM low half and a write-protected high half:
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct SplitMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for SplitMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr as usize) - 0x8000]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         // Stores into the ROM half are dropped.
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`.
    ///
    /// Must not panic. An implementation backing only part of the address
    /// space returns whatever it likes for the rest.
    fn read(&self, addr: u16) -> u8;

    /// Writes `value` at `addr`.
    ///
    /// Must not panic. Implementations are free to ignore writes to
    /// addresses they treat as read-only.
    fn write(&mut self, addr: u16, value: u8);
}

/// 64KB of zero-initialized flat RAM.
///
/// Every address from 0x0000 to 0xFFFF is backed by one contiguous array.
/// This is the memory model the engine's semantics are described against;
/// hosts needing ROM splits or device windows implement [`MemoryBus`]
/// themselves.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0600, 0xE8); // INX at the default program origin
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
/// assert_eq!(cpu.x(), 0x01);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a flat memory with every byte set to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `program` into memory starting at `origin`, wrapping at the
    /// top of the address space.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0600, &[0xA9, 0x42, 0x00]); // LDA #$42; BRK
    /// assert_eq!(mem.read(0x0601), 0x42);
    /// ```
    pub fn load(&mut self, origin: u16, program: &[u8]) {
        for (offset, &byte) in program.iter().enumerate() {
            let addr = origin.wrapping_add(offset as u16);
            self.data[addr as usize] = byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
