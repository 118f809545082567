use std::fmt;

/// A truncated integer, tagged with how its bits are to be read.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Signed(i64),
    Unsigned(u64),
}

impl Value {
    /// Two's-complement bit pattern, sign-extended to 64 bits.
    pub fn to_bits(self) -> u64 {
        match self {
            Value::Signed(v) => v as u64,
            Value::Unsigned(v) => v,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Signed(v) => fmt::Display::fmt(&v, f),
            Value::Unsigned(v) => fmt::Display::fmt(&v, f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Value;

    #[test] fn zero() { assert_eq!(Value::Signed(0).to_string(), "0") }
    #[test] fn negative() { assert_eq!(Value::Signed(-128).to_string(), "-128") }
    #[test] fn unsigned_max() { assert_eq!(Value::Unsigned(!0).to_string(), "18446744073709551615") }
    #[test] fn signed_min() { assert_eq!(Value::Signed(i64::min_value()).to_string(), "-9223372036854775808") }
    #[test] fn bits_m1() { assert_eq!(Value::Signed(-1).to_bits(), !0) }
}
