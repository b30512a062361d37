//! Call arguments and keyword parsing

use crate::error::ScriptError;
use crate::value::ScriptValue;

/// Arguments of a script call, excluding the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Args<'a> {
    pub positional: &'a [ScriptValue<'a>],
    pub keywords: &'a [(&'a str, ScriptValue<'a>)],
}

impl<'a> Args<'a> {
    pub const fn new(
        positional: &'a [ScriptValue<'a>],
        keywords: &'a [(&'a str, ScriptValue<'a>)],
    ) -> Self {
        Self {
            positional,
            keywords,
        }
    }

    /// Positional arguments only
    pub const fn positional(positional: &'a [ScriptValue<'a>]) -> Self {
        Self::new(positional, &[])
    }

    /// No arguments at all
    pub const fn empty() -> Self {
        Self::new(&[], &[])
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    /// Split off the first positional argument
    pub fn split_first(&self) -> Option<(ScriptValue<'a>, Args<'a>)> {
        let (first, rest) = self.positional.split_first()?;
        Some((*first, Args::new(rest, self.keywords)))
    }

    /// Fail unless the call passed nothing
    pub fn expect_none(&self) -> Result<(), ScriptError> {
        if !self.keywords.is_empty() {
            return Err(ScriptError::TypeError("function doesn't take keyword arguments"));
        }
        if !self.positional.is_empty() {
            return Err(ScriptError::TypeError("function takes no arguments"));
        }
        Ok(())
    }
}

/// Description of one integer argument
///
/// Arguments may be passed positionally in declaration order or by
/// keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub default: i64,
}

impl ArgSpec {
    pub const fn int(name: &'static str, default: i64) -> Self {
        Self { name, default }
    }
}

/// Parse integer arguments against their specs
///
/// Each spec takes, in order of precedence, the positional argument at its
/// position, the keyword of its name, or its default. Positional or keyword
/// arguments left unconsumed are an error.
pub fn parse_int_args<const N: usize>(
    args: &Args<'_>,
    specs: &[ArgSpec; N],
) -> Result<[i64; N], ScriptError> {
    let mut values = [0i64; N];
    let mut used_keywords = 0;

    for (i, spec) in specs.iter().enumerate() {
        let given = match args.positional.get(i) {
            Some(v) => Some(*v),
            None => {
                let kw = args.keywords.iter().find(|(name, _)| *name == spec.name);
                if kw.is_some() {
                    used_keywords += 1;
                }
                kw.map(|(_, v)| *v)
            }
        };
        values[i] = match given {
            Some(v) => v
                .as_int()
                .ok_or(ScriptError::TypeError("can't convert to int"))?,
            None => spec.default,
        };
    }

    if args.positional.len() > N {
        return Err(ScriptError::TypeError("extra positional arguments given"));
    }
    if used_keywords < args.keywords.len() {
        return Err(ScriptError::TypeError("extra keyword arguments given"));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE: [ArgSpec; 1] = [ArgSpec::int("mode", 0)];

    #[test]
    fn test_default_used() {
        assert_eq!(parse_int_args(&Args::empty(), &MODE), Ok([0]));
    }

    #[test]
    fn test_positional_and_keyword() {
        let pos = [ScriptValue::Int(1)];
        assert_eq!(parse_int_args(&Args::positional(&pos), &MODE), Ok([1]));

        let kw = [("mode", ScriptValue::Bool(true))];
        assert_eq!(parse_int_args(&Args::new(&[], &kw), &MODE), Ok([1]));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        let pos = [ScriptValue::Int(1), ScriptValue::Int(0)];
        assert_eq!(
            parse_int_args(&Args::positional(&pos), &MODE),
            Err(ScriptError::TypeError("extra positional arguments given"))
        );

        let kw = [("pull", ScriptValue::Int(1))];
        assert_eq!(
            parse_int_args(&Args::new(&[], &kw), &MODE),
            Err(ScriptError::TypeError("extra keyword arguments given"))
        );

        // A keyword repeating a positional argument is left unconsumed
        let pos = [ScriptValue::Int(1)];
        let kw = [("mode", ScriptValue::Int(0))];
        assert_eq!(
            parse_int_args(&Args::new(&pos, &kw), &MODE),
            Err(ScriptError::TypeError("extra keyword arguments given"))
        );
    }

    #[test]
    fn test_rejects_non_int() {
        let pos = [ScriptValue::Str("out")];
        assert_eq!(
            parse_int_args(&Args::positional(&pos), &MODE),
            Err(ScriptError::TypeError("can't convert to int"))
        );
    }

    #[test]
    fn test_split_first() {
        let pos = [ScriptValue::Int(3), ScriptValue::Int(1)];
        let kw = [("mode", ScriptValue::Int(1))];
        let args = Args::new(&pos, &kw);

        let (first, rest) = args.split_first().unwrap();
        assert_eq!(first, ScriptValue::Int(3));
        assert_eq!(rest.positional, &[ScriptValue::Int(1)]);
        assert_eq!(rest.keywords.len(), 1);

        assert!(Args::new(&[], &kw).split_first().is_none());
    }

    #[test]
    fn test_expect_none() {
        assert_eq!(Args::empty().expect_none(), Ok(()));

        let pos = [ScriptValue::None];
        assert!(Args::positional(&pos).expect_none().is_err());
    }
}
