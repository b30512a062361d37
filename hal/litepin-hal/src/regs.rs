//! GPIO register abstractions
//!
//! The GPIO block exposes three 8-bit registers. Bit `i` of each register
//! belongs to pin `i`:
//!
//! - OE (output enable): 1 = output, 0 = input
//! - OUT (output value): driven level for output pins
//! - IN (input value): sensed level, read-only
//!
//! Writes always replace the whole register. Callers that change a single
//! pin must read, modify and write back.

/// Number of pins wired to the GPIO block
pub const PIN_COUNT: usize = 8;

/// Bit mask for a pin index
///
/// `index` must be below [`PIN_COUNT`].
#[inline]
pub const fn bit(index: u8) -> u8 {
    1 << index
}

/// Register access for the GPIO block
///
/// Implementations map these calls onto the actual hardware. Reads take
/// `&self` because reading a status register has no side effect on the
/// block; writes need exclusive access.
pub trait GpioRegisters {
    /// Read the output-enable register
    fn oe_read(&self) -> u8;

    /// Write the output-enable register
    fn oe_write(&mut self, value: u8);

    /// Read the output-value register
    fn out_read(&self) -> u8;

    /// Write the output-value register
    fn out_write(&mut self, value: u8);

    /// Read the input-value register
    fn in_read(&self) -> u8;
}

impl<T: GpioRegisters + ?Sized> GpioRegisters for &mut T {
    fn oe_read(&self) -> u8 {
        (**self).oe_read()
    }

    fn oe_write(&mut self, value: u8) {
        (**self).oe_write(value)
    }

    fn out_read(&self) -> u8 {
        (**self).out_read()
    }

    fn out_write(&mut self, value: u8) {
        (**self).out_write(value)
    }

    fn in_read(&self) -> u8 {
        (**self).in_read()
    }
}
