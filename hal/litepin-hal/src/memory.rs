//! In-memory register backend
//!
//! Backs each register with a plain byte so the controller can be exercised
//! on a host without hardware. The IN register has no loopback from OUT;
//! tests drive it explicitly with [`MemoryGpio::set_input`].

use core::cell::Cell;

use crate::regs::GpioRegisters;

/// Byte-backed GPIO registers
#[derive(Debug, Clone, Default)]
pub struct MemoryGpio {
    oe: u8,
    out: u8,
    input: u8,
    /// Register reads issued through the trait
    reads: Cell<u32>,
    /// Register writes issued through the trait
    writes: u32,
}

impl MemoryGpio {
    /// Create a register set with every bit cleared
    pub const fn new() -> Self {
        Self {
            oe: 0,
            out: 0,
            input: 0,
            reads: Cell::new(0),
            writes: 0,
        }
    }

    /// Create a register set with preset register contents
    pub const fn with_state(oe: u8, out: u8, input: u8) -> Self {
        Self {
            oe,
            out,
            input,
            reads: Cell::new(0),
            writes: 0,
        }
    }

    /// Drive the sensed input levels
    pub fn set_input(&mut self, value: u8) {
        self.input = value;
    }

    /// Current OE contents, without counting as a register access
    pub fn oe(&self) -> u8 {
        self.oe
    }

    /// Current OUT contents, without counting as a register access
    pub fn out(&self) -> u8 {
        self.out
    }

    /// Number of reads issued through [`GpioRegisters`]
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    /// Number of writes issued through [`GpioRegisters`]
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Check whether any register was accessed through the trait
    pub fn touched(&self) -> bool {
        self.reads() != 0 || self.writes != 0
    }

    fn count_read(&self, value: u8) -> u8 {
        self.reads.set(self.reads.get().wrapping_add(1));
        value
    }
}

impl GpioRegisters for MemoryGpio {
    fn oe_read(&self) -> u8 {
        self.count_read(self.oe)
    }

    fn oe_write(&mut self, value: u8) {
        self.writes = self.writes.wrapping_add(1);
        self.oe = value;
    }

    fn out_read(&self) -> u8 {
        self.count_read(self.out)
    }

    fn out_write(&mut self, value: u8) {
        self.writes = self.writes.wrapping_add(1);
        self.out = value;
    }

    fn in_read(&self) -> u8 {
        self.count_read(self.input)
    }
}
