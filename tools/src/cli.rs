use intcnv::UnrecognizedType;
use intcnv::Value;
use intcnv::Warning;
use intcnv::convert;
use std::error;
use std::fmt;
use warn::Warn;

/// Printed to stdout when `TYPE` or `VALUE` is missing.
pub const USAGE: &str = "Usage: intcnv i32 134";

#[derive(Debug)]
pub enum Error {
    MissingArguments,
    UnrecognizedType(UnrecognizedType),
    MalformedNumber {
        input: String,
        warnings: Vec<Warning>,
    },
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match *self {
            Error::MissingArguments => 1,
            Error::UnrecognizedType(_) => 2,
            Error::MalformedNumber { .. } => 2,
        }
    }
}

impl From<UnrecognizedType> for Error {
    fn from(e: UnrecognizedType) -> Error {
        Error::UnrecognizedType(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingArguments => f.write_str(USAGE),
            Error::UnrecognizedType(ref e) => fmt::Display::fmt(e, f),
            Error::MalformedNumber { ref input, ref warnings } => {
                write!(f, "malformed number {:?}", input)?;
                for w in warnings {
                    write!(f, ": {}", w)?;
                }
                Ok(())
            }
        }
    }
}

impl error::Error for Error {}

/// Converts `value` to the type named by `ty`.
///
/// Parse warnings are passed on to `warn`, unless `strict` is set, in which
/// case they fail the conversion.
pub fn run<W>(warn: &mut W, ty: Option<&str>, value: Option<&str>, strict: bool)
    -> Result<Value, Error>
    where W: Warn<Warning>
{
    let (ty, value) = match (ty, value) {
        (Some(t), Some(v)) => (t, v),
        _ => return Err(Error::MissingArguments),
    };
    let mut warnings = vec![];
    let result = convert(&mut warnings, ty, value)?;
    if strict && !warnings.is_empty() {
        return Err(Error::MalformedNumber {
            input: value.to_owned(),
            warnings,
        });
    }
    for w in warnings {
        warn.warn(w);
    }
    Ok(result)
}
