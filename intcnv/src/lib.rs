#[cfg(test)]
#[macro_use]
extern crate quickcheck;

#[macro_use]
extern crate log;
extern crate warn;

use warn::Warn;

pub use parse::Warning;
pub use parse::parse;
pub use ty::Type;
pub use ty::UnrecognizedType;
pub use ty::WidthRule;
pub use value::Value;

pub mod parse;
pub mod ty;
pub mod value;

/// Truncates the decimal `raw` to the integer type named by `type_tag`.
///
/// The type tag is resolved before the value is looked at, so an unknown
/// tag never produces parse warnings.
pub fn convert<W>(warn: &mut W, type_tag: &str, raw: &str)
    -> Result<Value, UnrecognizedType>
    where W: Warn<Warning>
{
    let ty: Type = type_tag.parse()?;
    let rule = ty.rule();
    debug!("type {} -> {} bits, signed={}", ty, rule.bits(), rule.signed());
    let input = parse(warn, raw);
    debug!("parsed {:?} as {:#018x}", raw, input);
    Ok(rule.apply(input))
}
