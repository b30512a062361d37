//! Stub backend for builds without a GPIO peripheral
//!
//! Every read returns 0 and every write is discarded, so pin objects stay
//! usable on SoCs where the gateware has no GPIO block.

use crate::regs::GpioRegisters;

/// GPIO block that is not present in the hardware
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoGpio;

impl NoGpio {
    /// Create the stub backend
    pub const fn new() -> Self {
        Self
    }
}

impl GpioRegisters for NoGpio {
    fn oe_read(&self) -> u8 {
        0
    }

    fn oe_write(&mut self, _value: u8) {}

    fn out_read(&self) -> u8 {
        0
    }

    fn out_write(&mut self, _value: u8) {}

    fn in_read(&self) -> u8 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_ignores_writes() {
        let mut regs = NoGpio::new();

        regs.oe_write(0xFF);
        regs.out_write(0xFF);

        assert_eq!(regs.oe_read(), 0);
        assert_eq!(regs.out_read(), 0);
        assert_eq!(regs.in_read(), 0);
    }
}
