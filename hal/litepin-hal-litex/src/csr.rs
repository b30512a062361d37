//! GPIOTristate CSR access
//!
//! LiteX places the three registers of a `GPIOTristate` block in
//! consecutive 32-bit CSR words:
//!
//! | Offset | Register | Access |
//! |--------|----------|--------|
//! | 0x00   | OE       | r/w    |
//! | 0x04   | IN       | r      |
//! | 0x08   | OUT      | r/w    |
//!
//! Only the low 8 bits are wired to pins.

use core::ptr;

use litepin_hal::GpioRegisters;

/// Output-enable register offset
pub const OE_OFFSET: usize = 0x00;

/// Input-value register offset
pub const IN_OFFSET: usize = 0x04;

/// Output-value register offset
pub const OUT_OFFSET: usize = 0x08;

/// Memory-mapped GPIOTristate block
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CsrGpio {
    base: usize,
}

impl CsrGpio {
    /// Create a backend for the block at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the address of a GPIOTristate CSR block (or of three
    /// writable, 4-byte aligned words), and no other code may access those
    /// registers while this value exists.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Base address of the block
    pub fn base(&self) -> usize {
        self.base
    }

    fn read(&self, offset: usize) -> u8 {
        // SAFETY: `new` guarantees the address is a valid CSR word
        let word = unsafe { ptr::read_volatile((self.base + offset) as *const u32) };
        word as u8
    }

    fn write(&mut self, offset: usize, value: u8) {
        // SAFETY: `new` guarantees the address is a valid CSR word
        unsafe { ptr::write_volatile((self.base + offset) as *mut u32, u32::from(value)) }
    }
}

impl GpioRegisters for CsrGpio {
    fn oe_read(&self) -> u8 {
        self.read(OE_OFFSET)
    }

    fn oe_write(&mut self, value: u8) {
        self.write(OE_OFFSET, value);
    }

    fn out_read(&self) -> u8 {
        self.read(OUT_OFFSET)
    }

    fn out_write(&mut self, value: u8) {
        self.write(OUT_OFFSET, value);
    }

    fn in_read(&self) -> u8 {
        self.read(IN_OFFSET)
    }
}

/// Parse a CSR base address as written in `csr.h` (`0xf0003000L`)
///
/// Accepts hexadecimal with a `0x` prefix or decimal, an optional `L`/`UL`
/// suffix and `_` separators. Returns None for anything else.
pub const fn parse_base_address(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut end = bytes.len();
    while end > 0 && (bytes[end - 1] == b'L' || bytes[end - 1] == b'U') {
        end -= 1;
    }

    let (mut i, radix) = if end > 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        (2, 16)
    } else {
        (0, 10)
    };
    if i == end {
        return None;
    }

    let mut value: usize = 0;
    let mut digits = 0;
    while i < end {
        let digit = match bytes[i] {
            b'_' => {
                i += 1;
                continue;
            }
            b @ b'0'..=b'9' => (b - b'0') as usize,
            b @ b'a'..=b'f' if radix == 16 => (b - b'a' + 10) as usize,
            b @ b'A'..=b'F' if radix == 16 => (b - b'A' + 10) as usize,
            _ => return None,
        };
        value = match value.checked_mul(radix) {
            Some(v) => match v.checked_add(digit) {
                Some(v) => v,
                None => return None,
            },
            None => return None,
        };
        digits += 1;
        i += 1;
    }
    if digits == 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_layout() {
        let mut words = [0u32; 3];
        {
            // SAFETY: three aligned words owned by this test
            let mut gpio = unsafe { CsrGpio::new(words.as_mut_ptr() as usize) };
            assert_eq!(gpio.base(), words.as_ptr() as usize);
            gpio.oe_write(0x0F);
            gpio.out_write(0xA5);
            assert_eq!(gpio.oe_read(), 0x0F);
            assert_eq!(gpio.out_read(), 0xA5);
            assert_eq!(gpio.in_read(), 0);
        }
        assert_eq!(words, [0x0F, 0, 0xA5]);
    }

    #[test]
    fn test_upper_bits_ignored() {
        let mut words = [0xFFFF_FF00u32, 0x1234_5681, 0];
        // SAFETY: three aligned words owned by this test
        let gpio = unsafe { CsrGpio::new(words.as_mut_ptr() as usize) };
        assert_eq!(gpio.oe_read(), 0);
        assert_eq!(gpio.in_read(), 0x81);
    }

    #[test]
    fn test_parse_base_address() {
        assert_eq!(parse_base_address("0xf0003000L"), Some(0xf000_3000));
        assert_eq!(parse_base_address("0xF000_3000"), Some(0xf000_3000));
        assert_eq!(parse_base_address("0x800UL"), Some(0x800));
        assert_eq!(parse_base_address("4096"), Some(4096));

        assert_eq!(parse_base_address(""), None);
        assert_eq!(parse_base_address("0x"), None);
        // Separators alone are not an address
        assert_eq!(parse_base_address("0x_"), None);
        assert_eq!(parse_base_address("0x__L"), None);
        assert_eq!(parse_base_address("_"), None);
        assert_eq!(parse_base_address("12ab"), None);
        assert_eq!(parse_base_address("0xfffffffffffffffff"), None);
    }
}
