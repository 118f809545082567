use std::error;
use std::fmt;
use std::str::FromStr;
use super::Value;

/// Integer type a value can be truncated to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Type {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

/// Bit width and signedness of a [`Type`].
///
/// The width is always in `1..=64`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WidthRule {
    bits: u32,
    signed: bool,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnrecognizedType(pub String);

impl Type {
    pub const ALL: [Type; 8] = [
        Type::U8,
        Type::I8,
        Type::U16,
        Type::I16,
        Type::U32,
        Type::I32,
        Type::U64,
        Type::I64,
    ];

    pub fn name(self) -> &'static str {
        use self::Type::*;
        match self {
            U8 => "u8",
            I8 => "i8",
            U16 => "u16",
            I16 => "i16",
            U32 => "u32",
            I32 => "i32",
            U64 => "u64",
            I64 => "i64",
        }
    }

    pub fn rule(self) -> WidthRule {
        use self::Type::*;
        let (bits, signed) = match self {
            U8 => (8, false),
            I8 => (8, true),
            U16 => (16, false),
            I16 => (16, true),
            U32 => (32, false),
            I32 => (32, true),
            U64 => (64, false),
            I64 => (64, true),
        };
        WidthRule { bits, signed }
    }

    pub fn truncate(self, value: u64) -> Value {
        self.rule().apply(value)
    }
}

impl FromStr for Type {
    type Err = UnrecognizedType;
    fn from_str(s: &str) -> Result<Type, UnrecognizedType> {
        Type::ALL.iter().cloned().find(|t| t.name() == s)
            .ok_or_else(|| UnrecognizedType(s.to_owned()))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl WidthRule {
    /// Returns `None` unless `1 <= bits <= 64`.
    pub fn new(bits: u32, signed: bool) -> Option<WidthRule> {
        if 1 <= bits && bits <= 64 {
            Some(WidthRule { bits, signed })
        } else {
            None
        }
    }
    pub fn bits(self) -> u32 {
        self.bits
    }
    pub fn signed(self) -> bool {
        self.signed
    }
    /// Mask selecting the low `bits` bits.
    pub fn mask(self) -> u64 {
        if self.bits >= 64 {
            !0
        } else {
            (1 << self.bits) - 1
        }
    }

    /// Keeps the low `bits` bits of `value`. Signed rules sign-extend from
    /// the top bit of the field.
    pub fn apply(self, value: u64) -> Value {
        let mask = self.mask();
        let low = value & mask;
        if !self.signed {
            return Value::Unsigned(low);
        }
        let sign_bit = 1 << (self.bits - 1);
        if low & sign_bit != 0 {
            Value::Signed((low | !mask) as i64)
        } else {
            Value::Signed(low as i64)
        }
    }
}

impl fmt::Display for UnrecognizedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized type `{}`, expected one of", self.0)?;
        for (i, ty) in Type::ALL.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, ty)?;
        }
        Ok(())
    }
}

impl error::Error for UnrecognizedType {}
