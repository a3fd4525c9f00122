use core::any::type_name;

use gl_contract::ContractKind;
use thiserror::Error;

// -----------------------------------------------------------------------------
// NarrowCast

/// An `as` conversion from `Self` to `T`.
///
/// Implemented between every pair of primitive integer and float types.
pub trait NarrowCast<T>: Copy {
    /// Converts with `as` semantics: truncating, wrapping or saturating.
    fn narrow_cast(self) -> T;
}

macro_rules! impl_narrow_cast {
    ($($from:ty),* $(,)?) => {
        $(
            impl_narrow_cast!(@from $from => u8, u16, u32, u64, u128, usize,
                i8, i16, i32, i64, i128, isize, f32, f64);
        )*
    };
    (@from $from:ty => $($to:ty),*) => {
        $(
            impl NarrowCast<$to> for $from {
                #[inline(always)]
                #[allow(clippy::unnecessary_cast, reason = "identity pairs")]
                fn narrow_cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

impl_narrow_cast!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// -----------------------------------------------------------------------------
// NarrowingError

/// A checked narrowing lost information.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("narrowing {from} to {to} does not preserve the value")]
pub struct NarrowingError {
    from: &'static str,
    to: &'static str,
}

impl NarrowingError {
    #[inline]
    fn new<U, T>() -> Self {
        Self {
            from: type_name::<U>(),
            to: type_name::<T>(),
        }
    }

    /// The source type name.
    #[inline(always)]
    pub fn from_type(&self) -> &'static str {
        self.from
    }

    /// The target type name.
    #[inline(always)]
    pub fn to_type(&self) -> &'static str {
        self.to
    }
}

// -----------------------------------------------------------------------------
// Conversions

/// Converts `u` to `T` with `as` semantics, without any check.
///
/// Use it where the loss is intended; the name makes that visible.
#[inline(always)]
pub fn narrow_cast<T, U: NarrowCast<T>>(u: U) -> T {
    u.narrow_cast()
}

#[inline(always)]
fn preserves<T, U>(u: U) -> Option<T>
where
    U: NarrowCast<T> + PartialOrd + Default,
    T: NarrowCast<U> + PartialOrd + Default,
{
    let t = <U as NarrowCast<T>>::narrow_cast(u);
    let round_trip = <T as NarrowCast<U>>::narrow_cast(t) == u;
    let same_sign = (t < T::default()) == (u < U::default());
    (round_trip && same_sign).then_some(t)
}

/// Converts `u` to `T`, failing when the value changes.
///
/// The value changes when converting back does not yield `u`, or when the
/// sign flips. NaN never survives.
///
/// ```
/// use gl_utils::num::narrow;
///
/// assert_eq!(narrow::<i8, _>(-5_i64), Ok(-5));
/// assert!(narrow::<u32, _>(-1_i32).is_err());
/// assert!(narrow::<i32, _>(1.5_f64).is_err());
/// ```
#[inline]
pub fn narrow<T, U>(u: U) -> Result<T, NarrowingError>
where
    U: NarrowCast<T> + PartialOrd + Default,
    T: NarrowCast<U> + PartialOrd + Default,
{
    preserves(u).ok_or_else(NarrowingError::new::<U, T>)
}

/// Converts `u` to `T`; a changed value is an assertion failure.
#[inline]
#[track_caller]
pub fn narrow_failfast<T, U>(u: U) -> T
where
    U: NarrowCast<T> + PartialOrd + Default,
    T: NarrowCast<U> + PartialOrd + Default,
{
    match preserves(u) {
        Some(t) => t,
        None => gl_contract::fail(ContractKind::Assertion, Some("narrowing changed the value")),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{NarrowingError, narrow, narrow_cast, narrow_failfast};
    use gl_contract::{ContractKind, catch_violation};
    use std::string::ToString;

    #[test]
    fn casts_are_unchecked() {
        assert_eq!(narrow_cast::<u8, _>(0x1234_u32), 0x34);
        assert_eq!(narrow_cast::<i8, _>(255_u8), -1);
        assert_eq!(narrow_cast::<u32, _>(-1_i32), u32::MAX);
        assert_eq!(narrow_cast::<i32, _>(2.9_f64), 2);
        assert_eq!(narrow_cast::<u16, _>(7_u16), 7);
    }

    #[test]
    fn narrow_accepts_preserved_values() {
        assert_eq!(narrow::<u8, _>(255_u32), Ok(255));
        assert_eq!(narrow::<i16, _>(-300_i64), Ok(-300));
        assert_eq!(narrow::<u64, _>(5_i8), Ok(5));
        assert_eq!(narrow::<f32, _>(0.5_f64), Ok(0.5));
        assert_eq!(narrow::<i32, _>(3.0_f32), Ok(3));
    }

    #[test]
    fn narrow_rejects_truncation() {
        let err = narrow::<u8, _>(256_u32).unwrap_err();
        assert_eq!(err.from_type(), "u32");
        assert_eq!(err.to_type(), "u8");
        assert_eq!(err.to_string(), "narrowing u32 to u8 does not preserve the value");

        assert!(narrow::<f32, _>(0.1_f64).is_err());
        assert!(narrow::<f32, _>(f64::NAN).is_err());
    }

    #[test]
    fn narrow_rejects_sign_changes() {
        assert!(narrow::<u32, _>(-1_i32).is_err());
        assert!(narrow::<i32, _>(u32::MAX).is_err());
        assert!(narrow::<u8, _>(-1_i8).is_err());
    }

    #[test]
    fn failfast_is_an_assertion() {
        assert_eq!(catch_violation(|| narrow_failfast::<u8, _>(10_i32)), Ok(10));

        let err = catch_violation(|| narrow_failfast::<u8, _>(-10_i32)).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Assertion);
    }

    #[test]
    fn error_is_comparable() {
        assert_eq!(narrow::<u8, _>(300_i32), Err::<u8, _>(NarrowingError::new::<i32, u8>()));
    }
}
