//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: a single 8-bit bitfield, reserved bits preserved
//! - **Halted indicator**: the terminal state of the execution engine
//!
//! ## Execution Model
//!
//! - `step()`: execute exactly one instruction and return
//! - `run()`: step repeatedly until the halted state is reached
//!
//! Every step fully completes (fetch, resolve, mutate) before control
//! returns, so a host may stop calling `step()` at any boundary without
//! leaving a partial instruction behind.

use crate::addressing::{AddressingMode, Operand};
use crate::catalog::Operation;
use crate::instructions::shifts::ShiftTarget;
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::{OpcodeEntry, OPCODE_TABLE};
use crate::status::Status;
use crate::trace::{TraceEvent, TraceSink};
use crate::{ExecutionError, MemoryBus};

/// Base address of the stack page. The full stack address is 0x0100 | SP.
const STACK_BASE: u16 = 0x0100;

/// Default program origin the program counter is reset to.
///
/// An emulator convention carried over from the reference machine, not a
/// hardware reset-vector read: hosts load programs at 0x0600 and call
/// [`CPU::run`].
pub const RESET_PC: u16 = 0x0600;

/// 6502 CPU state and execution context.
///
/// Owns all processor state (registers, flags, program counter, stack
/// pointer, halted indicator) and the memory bus. Generic over the memory
/// implementation via the [`MemoryBus`] trait.
///
/// Each instance is fully independent: there is no shared mutable state
/// anywhere in the crate, so multiple CPUs may be driven concurrently by a
/// host (e.g. parallel test execution) with zero interaction.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0600, &[0xA2, 0x05, 0xCA, 0x00]); // LDX #$05; DEX; BRK
///
/// let mut cpu = CPU::new(memory);
/// cpu.run().unwrap();
///
/// assert_eq!(cpu.x(), 0x04);
/// assert!(cpu.is_halted());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives the full stack address)
    pub(crate) sp: u8,

    /// Status register bitfield
    pub(crate) status: Status,

    /// Terminal state indicator; set by BRK and by fatal errors
    pub(crate) halted: bool,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Host-supplied trace sink, if any
    trace: Option<Box<dyn TraceSink + Send>>,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU owning the given memory bus.
    ///
    /// The reset posture follows emulator convention rather than a
    /// hardware reset-vector fetch:
    /// - PC = [`RESET_PC`] (0x0600)
    /// - SP = 0xFF (top of the stack page)
    /// - Status = 0x30 (break and unused bits set)
    /// - A, X, Y zeroed; engine in the running state
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: RESET_PC,
            sp: 0xFF,
            status: Status::RESET,
            halted: false,
            memory,
            trace: None,
        }
    }

    /// Executes exactly one instruction and returns control to the caller.
    ///
    /// The fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC and advance PC past it
    /// 2. Look the opcode up in the table; a missing entry is fatal
    /// 3. Resolve the operand per the entry's addressing mode (advancing PC
    ///    past the operand bytes)
    /// 4. Report the decoded instruction to the trace sink, if installed
    /// 5. Execute the operation, mutating registers/flags/memory
    ///
    /// Calling `step()` on a halted CPU does nothing and returns `Ok(())`,
    /// so hosts can poll [`CPU::is_halted`] between steps for cooperative
    /// cancellation. On any error the CPU halts before the error is
    /// returned; execution never continues past unknown semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0600, &[0xE8, 0xE8]); // INX; INX
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.x(), 0x01);
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.x(), 0x02);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if self.halted {
            return Ok(());
        }

        let address = self.pc;
        let opcode = self.fetch_byte();

        let entry = match OPCODE_TABLE.lookup(opcode) {
            Some(entry) => entry,
            None => {
                self.halted = true;
                return Err(ExecutionError::UndefinedOpcode { opcode, address });
            }
        };

        let operand = self.resolve(entry.mode);

        if let Some(mut sink) = self.trace.take() {
            sink.trace(&TraceEvent {
                address,
                opcode,
                mnemonic: entry.op.mnemonic(),
                mode: entry.mode,
                operand,
            });
            self.trace = Some(sink);
        }

        let result = self.execute(entry, operand);
        if result.is_err() {
            self.halted = true;
        }
        result
    }

    /// Steps repeatedly until the CPU reaches the halted state.
    ///
    /// Errors from [`CPU::step`] propagate immediately; the CPU is already
    /// halted when they do.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while !self.halted {
            self.step()?;
        }
        Ok(())
    }

    // ========== Addressing-mode resolver ==========

    /// Consumes the operand bytes for `mode` from the instruction stream,
    /// advancing PC past them, and produces the resolved operand.
    ///
    /// Zero-page indexing and the indexed-indirect pointer wrap within page
    /// 0 (`wrapping_add` on the u8), a hardware quirk preserved exactly.
    /// Absolute indexing is plain 16-bit arithmetic.
    fn resolve(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::Relative => Operand::Relative(self.fetch_byte()),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                Operand::Address(self.fetch_byte().wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                Operand::Address(self.fetch_byte().wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                Operand::Address(self.fetch_word().wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                Operand::Address(self.fetch_word().wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                Operand::Address(self.read_word(pointer))
            }
            AddressingMode::IndirectX => {
                // Pointer arithmetic wraps within page 0.
                let pointer = self.fetch_byte().wrapping_add(self.x);
                Operand::Address(self.read_word(pointer as u16))
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte();
                let base = self.read_word(pointer as u16);
                Operand::Address(base.wrapping_add(self.y as u16))
            }
        }
    }

    /// Fetches the byte at PC and advances PC by one.
    fn fetch_byte(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches a little-endian 16-bit word at PC and advances PC by two.
    fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte() as u16;
        let high = self.fetch_byte() as u16;
        (high << 8) | low
    }

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    fn read_word(&self, addr: u16) -> u16 {
        let low = self.memory.read(addr) as u16;
        let high = self.memory.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    // ========== Operand extraction ==========

    fn operand_mismatch(&self, entry: OpcodeEntry) -> ExecutionError {
        ExecutionError::OperandMismatch {
            mnemonic: entry.op.mnemonic(),
            mode: entry.mode,
        }
    }

    /// The operand as a value byte (immediate literal or memory read).
    fn value(&self, entry: OpcodeEntry, operand: Operand) -> Result<u8, ExecutionError> {
        match operand {
            Operand::Immediate(value) => Ok(value),
            Operand::Address(addr) => Ok(self.memory.read(addr)),
            _ => Err(self.operand_mismatch(entry)),
        }
    }

    /// The operand as an effective address (stores, jumps, memory RMW).
    fn address(&self, entry: OpcodeEntry, operand: Operand) -> Result<u16, ExecutionError> {
        match operand {
            Operand::Address(addr) => Ok(addr),
            _ => Err(self.operand_mismatch(entry)),
        }
    }

    /// The operand as a raw branch displacement byte.
    fn displacement(&self, entry: OpcodeEntry, operand: Operand) -> Result<u8, ExecutionError> {
        match operand {
            Operand::Relative(value) => Ok(value),
            _ => Err(self.operand_mismatch(entry)),
        }
    }

    /// The operand as a shift/rotate target (accumulator or memory).
    fn shift_target(
        &self,
        entry: OpcodeEntry,
        operand: Operand,
    ) -> Result<ShiftTarget, ExecutionError> {
        match operand {
            Operand::Accumulator => Ok(ShiftTarget::Accumulator),
            Operand::Address(addr) => Ok(ShiftTarget::Memory(addr)),
            _ => Err(self.operand_mismatch(entry)),
        }
    }

    // ========== Dispatch ==========

    /// Invokes the operation implementation matched to the table entry.
    ///
    /// The match is exhaustive over [`Operation`]; adding a catalog entry
    /// without an arm here is a compile error, which is what keeps the
    /// [`ExecutionError::OperandMismatch`] path unreachable in practice.
    fn execute(&mut self, entry: OpcodeEntry, operand: Operand) -> Result<(), ExecutionError> {
        match entry.op {
            // Load and store
            Operation::Lda => {
                let value = self.value(entry, operand)?;
                load_store::lda(self, value);
            }
            Operation::Ldx => {
                let value = self.value(entry, operand)?;
                load_store::ldx(self, value);
            }
            Operation::Ldy => {
                let value = self.value(entry, operand)?;
                load_store::ldy(self, value);
            }
            Operation::Sta => {
                let addr = self.address(entry, operand)?;
                load_store::sta(self, addr);
            }
            Operation::Stx => {
                let addr = self.address(entry, operand)?;
                load_store::stx(self, addr);
            }
            Operation::Sty => {
                let addr = self.address(entry, operand)?;
                load_store::sty(self, addr);
            }

            // Arithmetic and logic
            Operation::Adc => {
                let value = self.value(entry, operand)?;
                alu::adc(self, value);
            }
            Operation::Sbc => {
                let value = self.value(entry, operand)?;
                alu::sbc(self, value);
            }
            Operation::And => {
                let value = self.value(entry, operand)?;
                alu::and(self, value);
            }
            Operation::Ora => {
                let value = self.value(entry, operand)?;
                alu::ora(self, value);
            }
            Operation::Eor => {
                let value = self.value(entry, operand)?;
                alu::eor(self, value);
            }
            Operation::Cmp => {
                let value = self.value(entry, operand)?;
                alu::cmp(self, value);
            }
            Operation::Cpx => {
                let value = self.value(entry, operand)?;
                alu::cpx(self, value);
            }
            Operation::Cpy => {
                let value = self.value(entry, operand)?;
                alu::cpy(self, value);
            }
            Operation::Bit => {
                let value = self.value(entry, operand)?;
                alu::bit(self, value);
            }

            // Shifts and rotates
            Operation::Asl => {
                let target = self.shift_target(entry, operand)?;
                shifts::asl(self, target);
            }
            Operation::Lsr => {
                let target = self.shift_target(entry, operand)?;
                shifts::lsr(self, target);
            }
            Operation::Rol => {
                let target = self.shift_target(entry, operand)?;
                shifts::rol(self, target);
            }
            Operation::Ror => {
                let target = self.shift_target(entry, operand)?;
                shifts::ror(self, target);
            }

            // Increment and decrement
            Operation::Inc => {
                let addr = self.address(entry, operand)?;
                inc_dec::inc(self, addr);
            }
            Operation::Dec => {
                let addr = self.address(entry, operand)?;
                inc_dec::dec(self, addr);
            }
            Operation::Inx => inc_dec::inx(self),
            Operation::Iny => inc_dec::iny(self),
            Operation::Dex => inc_dec::dex(self),
            Operation::Dey => inc_dec::dey(self),

            // Branches
            Operation::Bcc => {
                let displacement = self.displacement(entry, operand)?;
                branches::bcc(self, displacement);
            }
            Operation::Bcs => {
                let displacement = self.displacement(entry, operand)?;
                branches::bcs(self, displacement);
            }
            Operation::Beq => {
                let displacement = self.displacement(entry, operand)?;
                branches::beq(self, displacement);
            }
            Operation::Bne => {
                let displacement = self.displacement(entry, operand)?;
                branches::bne(self, displacement);
            }
            Operation::Bmi => {
                let displacement = self.displacement(entry, operand)?;
                branches::bmi(self, displacement);
            }
            Operation::Bpl => {
                let displacement = self.displacement(entry, operand)?;
                branches::bpl(self, displacement);
            }
            Operation::Bvc => {
                let displacement = self.displacement(entry, operand)?;
                branches::bvc(self, displacement);
            }
            Operation::Bvs => {
                let displacement = self.displacement(entry, operand)?;
                branches::bvs(self, displacement);
            }

            // Control flow
            Operation::Jmp => {
                let addr = self.address(entry, operand)?;
                control::jmp(self, addr);
            }
            Operation::Jsr => {
                let addr = self.address(entry, operand)?;
                control::jsr(self, addr);
            }
            Operation::Rts => control::rts(self),
            Operation::Rti => control::rti(self),
            Operation::Brk => control::brk(self),
            Operation::Nop => control::nop(self),

            // Stack
            Operation::Pha => stack::pha(self),
            Operation::Php => stack::php(self),
            Operation::Pla => stack::pla(self),
            Operation::Plp => stack::plp(self),

            // Flag manipulation
            Operation::Clc => flags::clc(self),
            Operation::Sec => flags::sec(self),
            Operation::Cli => flags::cli(self),
            Operation::Sei => flags::sei(self),
            Operation::Clv => flags::clv(self),
            Operation::Cld => flags::cld(self),
            Operation::Sed => flags::sed(self),

            // Register transfers
            Operation::Tax => transfer::tax(self),
            Operation::Tay => transfer::tay(self),
            Operation::Txa => transfer::txa(self),
            Operation::Tya => transfer::tya(self),
            Operation::Tsx => transfer::tsx(self),
            Operation::Txs => transfer::txs(self),
        }
        Ok(())
    }

    // ========== Stack helpers ==========

    /// Pushes a byte at 0x0100 | SP, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte at 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    // ========== Trace plumbing ==========

    /// Installs a per-step trace sink. Replaces any existing sink.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink + Send>) {
        self.trace = Some(sink);
    }

    /// Removes the trace sink, if one is installed.
    pub fn clear_trace_sink(&mut self) {
        self.trace = None;
    }

    // ========== Register getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 | SP; the stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (`NV-BDIZC`).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns true once the CPU has reached the terminal halted state.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    // ========== Status flag getters ==========

    /// Returns true if the carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.contains(Status::CARRY)
    }

    /// Returns true if the zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    /// Returns true if the overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    // ========== Host-facing setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the status register from a packed byte, reserved bits included.
    pub fn set_status(&mut self, bits: u8) {
        self.status = Status::from_bits(bits);
    }

    /// Sets or clears the carry flag.
    pub fn set_flag_c(&mut self, on: bool) {
        self.status.set(Status::CARRY, on);
    }

    /// Sets or clears the zero flag.
    pub fn set_flag_z(&mut self, on: bool) {
        self.status.set(Status::ZERO, on);
    }

    /// Sets or clears the overflow flag.
    pub fn set_flag_v(&mut self, on: bool) {
        self.status.set(Status::OVERFLOW, on);
    }

    /// Sets or clears the negative flag.
    pub fn set_flag_n(&mut self, on: bool) {
        self.status.set(Status::NEGATIVE, on);
    }

    // ========== Memory access ==========

    /// Shared access to the memory bus, for host inspection between steps.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, for program loading between steps.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
