//! Pin controller
//!
//! Owns the fixed descriptor table and performs every register access.
//! Each output operation is a plain read-modify-write of a whole register;
//! the `&mut self` receiver is what keeps two updates from interleaving.
//! Sharing one controller between contexts requires wrapping it in a lock
//! (see `litepin-hal-litex::global`).

use core::convert::Infallible;
use core::fmt;

use heapless::String;
use litepin_hal::{GpioRegisters, PIN_COUNT};

use crate::config::GpioConfig;
use crate::pin::{PinDescriptor, PinError, PinId, PinMode, DESCRIBE_LEN};

/// GPIO pin controller
///
/// All eight descriptors exist from construction onwards and start in
/// [`PinMode::Input`]. Construction does not touch the registers.
pub struct PinController<R> {
    regs: R,
    pins: [PinDescriptor; PIN_COUNT],
}

impl<R: GpioRegisters> PinController<R> {
    /// Create a controller over a register backend
    pub const fn new(regs: R) -> Self {
        Self {
            regs,
            pins: [
                PinDescriptor::new(0),
                PinDescriptor::new(1),
                PinDescriptor::new(2),
                PinDescriptor::new(3),
                PinDescriptor::new(4),
                PinDescriptor::new(5),
                PinDescriptor::new(6),
                PinDescriptor::new(7),
            ],
        }
    }

    /// Look up the descriptor for a pin index
    ///
    /// Returns the same descriptor on every call with the same index.
    /// Fails with [`PinError::InvalidPin`] outside 0-7 without accessing
    /// any register.
    pub fn acquire(&self, index: u32) -> Result<&PinDescriptor, PinError> {
        let id = PinId::new(index)?;
        Ok(self.descriptor(id))
    }

    /// Descriptor for an already validated pin
    pub fn descriptor(&self, pin: PinId) -> &PinDescriptor {
        &self.pins[pin.index() as usize]
    }

    /// All descriptors, indexed by pin number
    pub fn descriptors(&self) -> &[PinDescriptor; PIN_COUNT] {
        &self.pins
    }

    /// Borrow a pin handle by index
    pub fn pin(&mut self, index: u32) -> Result<Pin<'_, R>, PinError> {
        let id = PinId::new(index)?;
        Ok(Pin { ctrl: self, id })
    }

    /// Borrow a pin handle for an already validated pin
    pub fn pin_by_id(&mut self, pin: PinId) -> Pin<'_, R> {
        Pin { ctrl: self, id: pin }
    }

    /// Set the direction of a pin
    ///
    /// Rewrites the full OE register with only this pin's bit changed and
    /// records the mode on the descriptor.
    pub fn configure(&mut self, pin: PinId, mode: PinMode) {
        self.pins[pin.index() as usize].set_mode(mode);
        self.write_direction(pin, mode);
    }

    /// Set the direction of a pin from a raw mode number
    ///
    /// See [`PinMode::from_raw`] for how the number is narrowed. The
    /// descriptor keeps the number itself, so a nonzero value other than 1
    /// leaves the pin an input but describes it as `OUT`.
    pub fn configure_raw(&mut self, pin: PinId, raw: i64) {
        self.pins[pin.index() as usize].set_raw_mode(raw);
        self.write_direction(pin, PinMode::from_raw(raw));
    }

    fn write_direction(&mut self, pin: PinId, mode: PinMode) {
        let mut oe = self.regs.oe_read() & !pin.mask();
        if mode.is_output() {
            oe |= pin.mask();
        }
        self.regs.oe_write(oe);

        #[cfg(feature = "defmt")]
        defmt::trace!("configure pin={=u8} mode={} oe={=u8:#x}", pin.index(), mode, oe);
    }

    /// Mode last configured for a pin
    pub fn mode(&self, pin: PinId) -> PinMode {
        self.descriptor(pin).mode()
    }

    /// Sample the input level of a pin
    ///
    /// Reads IN only; the OUT register is never looped back. No mode check
    /// is made.
    pub fn read_value(&self, pin: PinId) -> bool {
        self.regs.in_read() & pin.mask() != 0
    }

    /// Drive a pin high
    pub fn set_high(&mut self, pin: PinId) {
        let out = self.regs.out_read();

        #[cfg(feature = "defmt")]
        defmt::trace!("high pin={=u8}", pin.index());

        self.regs.out_write(out | pin.mask());
    }

    /// Drive a pin low
    pub fn set_low(&mut self, pin: PinId) {
        let out = self.regs.out_read();

        #[cfg(feature = "defmt")]
        defmt::trace!("low pin={=u8}", pin.index());

        self.regs.out_write(out & !pin.mask());
    }

    /// Drive a pin to the given level
    pub fn set_level(&mut self, pin: PinId, high: bool) {
        if high {
            self.set_high(pin);
        } else {
            self.set_low(pin);
        }
    }

    /// Invert the driven level of a pin
    pub fn toggle(&mut self, pin: PinId) {
        let out = self.regs.out_read();

        #[cfg(feature = "defmt")]
        defmt::trace!("toggle pin={=u8}", pin.index());

        self.regs.out_write(out ^ pin.mask());
    }

    /// Check whether OUT currently drives the pin high
    pub fn is_set_high(&self, pin: PinId) -> bool {
        self.regs.out_read() & pin.mask() != 0
    }

    /// Render the diagnostic description of a pin, e.g. `PIN(3, mode=OUT)`
    pub fn describe(&self, pin: PinId) -> String<DESCRIBE_LEN> {
        use core::fmt::Write;

        let mut s = String::new();
        let written = write!(s, "{}", self.descriptor(pin));
        debug_assert!(written.is_ok(), "pin description exceeds DESCRIBE_LEN");
        s
    }

    /// Apply a board configuration
    ///
    /// Output pins with an initial level get that level written to OUT
    /// before their OE bit is set, so the line never briefly drives the
    /// previous level.
    pub fn apply_config(&mut self, config: &GpioConfig) {
        for pin in PinId::all() {
            let setup = config.pin(pin);
            if setup.mode.is_output() {
                if let Some(level) = setup.level {
                    self.set_level(pin, level.is_high());
                }
            }
            self.configure(pin, setup.mode);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("gpio config applied, oe={=u8:#x}", self.regs.oe_read());
    }

    /// Register backend
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Mutable register backend
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Consume the controller and return the register backend
    pub fn into_registers(self) -> R {
        self.regs
    }
}

/// Borrowed handle to one pin of a controller
///
/// Mirrors the script-facing pin object: `init`, `value`, `high`, `low`
/// and a `PIN(n, mode=..)` display form.
pub struct Pin<'a, R> {
    ctrl: &'a mut PinController<R>,
    id: PinId,
}

impl<'a, R: GpioRegisters> Pin<'a, R> {
    pub fn id(&self) -> PinId {
        self.id
    }

    /// The controller's descriptor for this pin
    pub fn descriptor(&self) -> &PinDescriptor {
        self.ctrl.descriptor(self.id)
    }

    /// Reconfigure the direction
    pub fn init(&mut self, mode: PinMode) {
        self.ctrl.configure(self.id, mode);
    }

    /// Sampled input level
    pub fn value(&self) -> bool {
        self.ctrl.read_value(self.id)
    }

    pub fn high(&mut self) {
        self.ctrl.set_high(self.id);
    }

    pub fn low(&mut self) {
        self.ctrl.set_low(self.id);
    }

    pub fn toggle(&mut self) {
        self.ctrl.toggle(self.id);
    }
}

impl<R: GpioRegisters> fmt::Display for Pin<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.descriptor(), f)
    }
}

impl<R: GpioRegisters> embedded_hal::digital::ErrorType for Pin<'_, R> {
    type Error = Infallible;
}

impl<R: GpioRegisters> embedded_hal::digital::OutputPin for Pin<'_, R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high();
        Ok(())
    }
}

impl<R: GpioRegisters> embedded_hal::digital::StatefulOutputPin for Pin<'_, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.ctrl.is_set_high(self.id))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.ctrl.is_set_high(self.id))
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.ctrl.toggle(self.id);
        Ok(())
    }
}

impl<R: GpioRegisters> embedded_hal::digital::InputPin for Pin<'_, R> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.value())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.value())
    }
}
