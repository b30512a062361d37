//! The script-level `pin` type
//!
//! Pin objects are the controller's descriptors: constructing `pin(n)`
//! twice yields the same [`PinId`] and therefore the same descriptor.

use heapless::String;
use litepin_core::{GpioRegisters, PinController, PinId, DESCRIBE_LEN};

use crate::args::{parse_int_args, ArgSpec, Args};
use crate::error::ScriptError;
use crate::value::ScriptValue;

/// Arguments accepted by `init`: `pin.init(mode=0)`
pub const INIT_ARGS: [ArgSpec; 1] = [ArgSpec::int("mode", 0)];

/// Signature of a bound method
pub type MethodFn<R> =
    fn(&mut PinController<R>, PinId, &Args<'_>) -> Result<ScriptValue<'static>, ScriptError>;

/// Method names of the pin type, in lookup order
pub const METHOD_NAMES: [&str; 4] = ["init", "value", "high", "low"];

/// Construct a pin object: `pin(index, ...)`
///
/// Arguments after the index, positional or keyword, are passed on to
/// [`init`].
pub fn make_new<R: GpioRegisters>(
    ctrl: &mut PinController<R>,
    args: &Args<'_>,
) -> Result<PinId, ScriptError> {
    let (index, rest) = args
        .split_first()
        .ok_or(ScriptError::TypeError("function missing 1 required positional arguments"))?;
    let index = index
        .as_int()
        .ok_or(ScriptError::TypeError("can't convert to int"))?;
    let pin = PinId::try_from(index)?;

    #[cfg(feature = "defmt")]
    defmt::trace!("make_new pin={=u8}", pin.index());

    if !rest.is_empty() {
        init(ctrl, pin, &rest)?;
    }
    Ok(pin)
}

/// `pin.init(mode=0)`
pub fn init<R: GpioRegisters>(
    ctrl: &mut PinController<R>,
    pin: PinId,
    args: &Args<'_>,
) -> Result<ScriptValue<'static>, ScriptError> {
    let [mode] = parse_int_args(args, &INIT_ARGS)?;
    ctrl.configure_raw(pin, mode);
    Ok(ScriptValue::None)
}

/// `pin.value()`
pub fn value<R: GpioRegisters>(
    ctrl: &mut PinController<R>,
    pin: PinId,
    args: &Args<'_>,
) -> Result<ScriptValue<'static>, ScriptError> {
    args.expect_none()?;
    Ok(ScriptValue::Bool(ctrl.read_value(pin)))
}

/// `pin.high()`
pub fn high<R: GpioRegisters>(
    ctrl: &mut PinController<R>,
    pin: PinId,
    args: &Args<'_>,
) -> Result<ScriptValue<'static>, ScriptError> {
    args.expect_none()?;
    ctrl.set_high(pin);
    Ok(ScriptValue::None)
}

/// `pin.low()`
pub fn low<R: GpioRegisters>(
    ctrl: &mut PinController<R>,
    pin: PinId,
    args: &Args<'_>,
) -> Result<ScriptValue<'static>, ScriptError> {
    args.expect_none()?;
    ctrl.set_low(pin);
    Ok(ScriptValue::None)
}

/// Find a bound method by name
pub fn lookup<R: GpioRegisters>(name: &str) -> Option<MethodFn<R>> {
    let method: MethodFn<R> = match name {
        "init" => init::<R>,
        "value" => value::<R>,
        "high" => high::<R>,
        "low" => low::<R>,
        _ => return None,
    };
    Some(method)
}

/// Call a method on a pin object
pub fn call_method<R: GpioRegisters>(
    ctrl: &mut PinController<R>,
    pin: PinId,
    name: &str,
    args: &Args<'_>,
) -> Result<ScriptValue<'static>, ScriptError> {
    let method = lookup::<R>(name).ok_or(ScriptError::AttributeError(
        "'pin' object has no such attribute",
    ))?;
    method(ctrl, pin, args)
}

/// String representation of a pin object
pub fn print<R: GpioRegisters>(ctrl: &PinController<R>, pin: PinId) -> String<DESCRIBE_LEN> {
    ctrl.describe(pin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use litepin_core::{MemoryGpio, NoGpio, PinMode};

    fn ctrl() -> PinController<MemoryGpio> {
        PinController::new(MemoryGpio::new())
    }

    fn new_pin(ctrl: &mut PinController<MemoryGpio>, index: i64) -> Result<PinId, ScriptError> {
        let pos = [ScriptValue::Int(index)];
        make_new(ctrl, &Args::positional(&pos))
    }

    #[test]
    fn test_make_new_returns_singleton() {
        let mut ctrl = ctrl();
        let a = new_pin(&mut ctrl, 5).unwrap();
        let b = new_pin(&mut ctrl, 5).unwrap();
        assert_eq!(a, b);
        assert!(core::ptr::eq(ctrl.descriptor(a), ctrl.descriptor(b)));
        // Construction without init arguments leaves the registers alone
        assert!(!ctrl.registers().touched());
    }

    #[test]
    fn test_make_new_invalid_pin() {
        let mut ctrl = ctrl();
        for index in [8, 42, -1, i64::MIN, i64::MAX] {
            assert_eq!(
                new_pin(&mut ctrl, index),
                Err(ScriptError::ValueError("Invalid PIN"))
            );
        }
        assert!(!ctrl.registers().touched());
    }

    #[test]
    fn test_make_new_argument_errors() {
        let mut ctrl = ctrl();
        assert!(matches!(
            make_new(&mut ctrl, &Args::empty()),
            Err(ScriptError::TypeError(_))
        ));

        let pos = [ScriptValue::Str("3")];
        assert_eq!(
            make_new(&mut ctrl, &Args::positional(&pos)),
            Err(ScriptError::TypeError("can't convert to int"))
        );
    }

    #[test]
    fn test_make_new_with_mode() {
        let mut ctrl = ctrl();

        let kw = [("mode", ScriptValue::Int(1))];
        let pos = [ScriptValue::Int(2)];
        let pin = make_new(&mut ctrl, &Args::new(&pos, &kw)).unwrap();
        assert_eq!(ctrl.mode(pin), PinMode::Output);
        assert_eq!(ctrl.registers().oe(), 0b0000_0100);

        // Mode may also follow the index positionally
        let pos = [ScriptValue::Int(2), ScriptValue::Int(0)];
        make_new(&mut ctrl, &Args::positional(&pos)).unwrap();
        assert_eq!(ctrl.mode(pin), PinMode::Input);
        assert_eq!(ctrl.registers().oe(), 0);
    }

    #[test]
    fn test_init_unknown_mode_prints_out() {
        let mut ctrl = ctrl();
        let pos = [ScriptValue::Int(2), ScriptValue::Int(2)];
        let pin = make_new(&mut ctrl, &Args::positional(&pos)).unwrap();

        // Only mode 1 drives the line; any other nonzero mode still reads OUT
        assert_eq!(ctrl.registers().oe(), 0);
        assert_eq!(ctrl.mode(pin), PinMode::Input);
        assert_eq!(print(&ctrl, pin).as_str(), "PIN(2, mode=OUT)");

        call_method(&mut ctrl, pin, "init", &Args::empty()).unwrap();
        assert_eq!(print(&ctrl, pin).as_str(), "PIN(2, mode=IN)");
    }

    #[test]
    fn test_init_defaults_to_input() {
        let mut ctrl = PinController::new(MemoryGpio::with_state(0xFF, 0, 0));
        let pin = PinId::new(0).unwrap();

        let result = call_method(&mut ctrl, pin, "init", &Args::empty());
        assert_eq!(result, Ok(ScriptValue::None));
        assert_eq!(ctrl.registers().oe(), 0xFE);
    }

    #[test]
    fn test_init_rejects_bad_arguments() {
        let mut ctrl = ctrl();
        let pin = PinId::new(0).unwrap();

        let kw = [("pull", ScriptValue::Int(1))];
        assert!(matches!(
            call_method(&mut ctrl, pin, "init", &Args::new(&[], &kw)),
            Err(ScriptError::TypeError(_))
        ));
        assert!(!ctrl.registers().touched());
    }

    #[test]
    fn test_value_high_low() {
        let mut ctrl = ctrl();
        let pin = new_pin(&mut ctrl, 3).unwrap();

        let mode = [("mode", ScriptValue::Int(1))];
        call_method(&mut ctrl, pin, "init", &Args::new(&[], &mode)).unwrap();
        call_method(&mut ctrl, pin, "high", &Args::empty()).unwrap();
        assert_eq!(ctrl.registers().out(), 0b0000_1000);
        assert_eq!(print(&ctrl, pin).as_str(), "PIN(3, mode=OUT)");

        // No loopback from OUT to IN
        assert_eq!(
            call_method(&mut ctrl, pin, "value", &Args::empty()),
            Ok(ScriptValue::Bool(false))
        );
        ctrl.registers_mut().set_input(0b0000_1000);
        assert_eq!(
            call_method(&mut ctrl, pin, "value", &Args::empty()),
            Ok(ScriptValue::Bool(true))
        );

        call_method(&mut ctrl, pin, "low", &Args::empty()).unwrap();
        assert_eq!(ctrl.registers().out(), 0);
    }

    #[test]
    fn test_methods_take_no_arguments() {
        let mut ctrl = ctrl();
        let pin = PinId::new(1).unwrap();
        let pos = [ScriptValue::Int(1)];

        for name in ["value", "high", "low"] {
            assert!(matches!(
                call_method(&mut ctrl, pin, name, &Args::positional(&pos)),
                Err(ScriptError::TypeError(_))
            ));
        }
        assert!(!ctrl.registers().touched());
    }

    #[test]
    fn test_unknown_method() {
        let mut ctrl = ctrl();
        let pin = PinId::new(1).unwrap();
        assert!(matches!(
            call_method(&mut ctrl, pin, "toggle", &Args::empty()),
            Err(ScriptError::AttributeError(_))
        ));
    }

    #[test]
    fn test_method_table_complete() {
        for name in METHOD_NAMES {
            assert!(lookup::<MemoryGpio>(name).is_some());
        }
    }

    #[test]
    fn test_stub_backend_script_calls() {
        let mut ctrl = PinController::new(NoGpio::new());
        let pos = [ScriptValue::Int(4), ScriptValue::Int(1)];
        let pin = make_new(&mut ctrl, &Args::positional(&pos)).unwrap();

        for _ in 0..3 {
            call_method(&mut ctrl, pin, "high", &Args::empty()).unwrap();
            call_method(&mut ctrl, pin, "low", &Args::empty()).unwrap();
            assert_eq!(
                call_method(&mut ctrl, pin, "value", &Args::empty()),
                Ok(ScriptValue::Bool(false))
            );
        }
        assert_eq!(print(&ctrl, pin).as_str(), "PIN(4, mode=OUT)");
    }
}
