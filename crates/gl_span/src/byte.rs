use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

// -----------------------------------------------------------------------------
// Byte

/// An opaque 8-bit unit of memory.
///
/// Unlike `u8`, a `Byte` is not a number: it supports bitwise operations
/// only, and converts to an integer explicitly through
/// [`to_integer`](Self::to_integer).
///
/// Any initialized memory may be viewed as `Byte`s, which is what
/// [`Span::as_bytes`](crate::Span::as_bytes) does.
///
/// # Examples
///
/// ```
/// use gl_span::{to_byte, Byte};
///
/// let b = to_byte(0b1010_0000) | to_byte(0b0000_0101);
///
/// assert_eq!(b, Byte::new(0b1010_0101));
/// assert_eq!(b.to_integer::<u32>(), 0b1010_0101);
/// assert_eq!((b >> 4).to_integer::<u8>(), 0b1010);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(transparent)]
pub struct Byte(u8);

impl Byte {
    /// Creates a byte holding `bits`.
    #[inline(always)]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[inline(always)]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Converts the bits into any integer type that can hold a `u8`.
    #[inline(always)]
    pub fn to_integer<I: From<u8>>(self) -> I {
        I::from(self.0)
    }
}

/// Creates a [`Byte`] from its bits.
#[inline(always)]
pub const fn to_byte(bits: u8) -> Byte {
    Byte(bits)
}

impl From<u8> for Byte {
    #[inline(always)]
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<Byte> for u8 {
    #[inline(always)]
    fn from(byte: Byte) -> Self {
        byte.0
    }
}

impl fmt::Debug for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl fmt::LowerHex for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

// -----------------------------------------------------------------------------
// Bit operations

macro_rules! impl_bit_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $tok:tt) => {
        impl $Op for Byte {
            type Output = Byte;

            #[inline(always)]
            fn $op(self, rhs: Byte) -> Byte {
                Byte(self.0 $tok rhs.0)
            }
        }

        impl $OpAssign for Byte {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: Byte) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Not for Byte {
    type Output = Byte;

    #[inline(always)]
    fn not(self) -> Byte {
        Byte(!self.0)
    }
}

// Shifting out of range drops every bit instead of overflowing.
macro_rules! impl_shift_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $checked:ident) => {
        impl $Op<u32> for Byte {
            type Output = Byte;

            #[inline(always)]
            fn $op(self, rhs: u32) -> Byte {
                Byte(self.0.$checked(rhs).unwrap_or(0))
            }
        }

        impl $OpAssign<u32> for Byte {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: u32) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_shift_op!(Shl, shl, ShlAssign, shl_assign, checked_shl);
impl_shift_op!(Shr, shr, ShrAssign, shr_assign, checked_shr);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Byte, to_byte};
    use alloc::format;

    #[test]
    fn construction_and_conversion() {
        let b = to_byte(0x42);
        assert_eq!(b, Byte::new(0x42));
        assert_eq!(b, Byte::from(0x42u8));
        assert_eq!(u8::from(b), 0x42);
        assert_eq!(b.get(), 0x42);
        assert_eq!(b.to_integer::<u16>(), 0x42);
        assert_eq!(b.to_integer::<i64>(), 0x42);
        assert_eq!(Byte::default(), to_byte(0));
    }

    #[test]
    fn bitwise_operators() {
        let a = to_byte(0b1100_1100);
        let b = to_byte(0b1010_1010);

        assert_eq!(a | b, to_byte(0b1110_1110));
        assert_eq!(a & b, to_byte(0b1000_1000));
        assert_eq!(a ^ b, to_byte(0b0110_0110));
        assert_eq!(!a, to_byte(0b0011_0011));

        let mut c = a;
        c |= b;
        assert_eq!(c, a | b);
        c &= b;
        assert_eq!(c, b);
        c ^= b;
        assert_eq!(c, to_byte(0));
    }

    #[test]
    fn shifts() {
        let b = to_byte(0b0000_0011);
        assert_eq!(b << 2, to_byte(0b0000_1100));
        assert_eq!((b << 7), to_byte(0b1000_0000));
        assert_eq!(b << 8, to_byte(0));
        assert_eq!(to_byte(0xf0) >> 4, to_byte(0x0f));
        assert_eq!(to_byte(0xf0) >> 9, to_byte(0));

        let mut c = b;
        c <<= 1;
        c >>= 1;
        assert_eq!(c, b);
    }

    #[test]
    fn ordering_and_formatting() {
        assert!(to_byte(1) < to_byte(2));
        assert_eq!(format!("{:?}", to_byte(0x0a)), "0x0a");
        assert_eq!(format!("{:x}", to_byte(0xab)), "ab");
        assert_eq!(format!("{:X}", to_byte(0xab)), "AB");
        assert_eq!(format!("{:b}", to_byte(5)), "101");
    }
}
