//! Zero-terminated string views.
//!
//! The terminator is never part of a reported length: [`ZStringSpan::size`]
//! and [`ZStringSpan::as_string_span`] both stop before it.

use core::ffi::CStr;
use core::fmt;

use gl_contract::ContractKind;

use crate::index::{IndexType, to_index, to_offset};
use crate::{IntoSpan, Span};

// -----------------------------------------------------------------------------
// Terminated

/// Code units whose strings end with a zero terminator.
pub trait Terminated: Copy + Eq {
    /// The terminating value.
    const TERMINATOR: Self;
}

macro_rules! impl_terminated {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Terminated for $ty {
                const TERMINATOR: Self = 0;
            }
        )*
    };
}

impl_terminated!(u8, i8, u16, u32);

impl Terminated for char {
    const TERMINATOR: Self = '\0';
}

// -----------------------------------------------------------------------------
// ZStringSpan

/// A non-empty view whose last element is the terminator.
///
/// # Examples
///
/// ```
/// use gl_span::{Span, ZStringSpan};
///
/// let buf = *b"hi\0";
/// let z = ZStringSpan::new(Span::from(&buf));
///
/// assert_eq!(z.size(), 2);
/// assert_eq!(z.as_string_span(), *b"hi");
/// assert_eq!(z.assume_z(), buf.as_ptr());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZStringSpan<'a, T: Terminated> {
    span: Span<'a, T>,
}

impl<'a, T: Terminated> ZStringSpan<'a, T> {
    /// Wraps `span`, which must end with the terminator.
    ///
    /// Contract: `span` is non-empty and its last element is
    /// [`Terminated::TERMINATOR`].
    #[inline]
    #[track_caller]
    pub fn new(span: Span<'a, T>) -> Self {
        gl_contract::check(
            ContractKind::Precondition,
            span.as_slice().last() == Some(&T::TERMINATOR),
            Some("zero-terminated span does not end with a terminator"),
        );
        Self { span }
    }

    /// Returns the number of elements before the final terminator.
    #[inline]
    pub fn size(&self) -> IndexType {
        to_index(self.len())
    }

    /// Returns the number of elements before the final terminator as `usize`.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len() - 1
    }

    /// Always `false`: the terminator is always present.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the string elements, without the final terminator.
    #[inline]
    pub fn as_string_span(&self) -> Span<'a, T> {
        let slice = self.span.as_slice();
        Span::from_slice(&slice[..slice.len() - 1])
    }

    /// Returns the whole view, including the final terminator.
    #[inline(always)]
    pub fn as_z_span(&self) -> Span<'a, T> {
        self.span
    }

    /// Returns the view up to the first terminator.
    ///
    /// This is shorter than [`as_string_span`](Self::as_string_span) when
    /// the string holds embedded terminators.
    #[inline]
    pub fn ensure_z(&self) -> Span<'a, T> {
        ensure_z(self.span)
    }

    /// Returns the begin pointer, valid as a zero-terminated string.
    #[inline(always)]
    pub fn assume_z(&self) -> *const T {
        self.span.data()
    }
}

impl<'a> ZStringSpan<'a, u8> {
    /// Views a C string, terminator included.
    #[inline]
    pub fn from_c_str(s: &'a CStr) -> Self {
        Self {
            span: Span::from_slice(s.to_bytes_with_nul()),
        }
    }
}

impl<T: Terminated + fmt::Debug> fmt::Debug for ZStringSpan<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ZStringSpan").field(&self.as_string_span()).finish()
    }
}

// -----------------------------------------------------------------------------
// Sentinel search

/// Returns the view of `source` up to, not including, the first `sentinel`.
///
/// Contract: `sentinel` occurs in `source`.
///
/// ```
/// use gl_span::ensure_sentinel;
///
/// let line = [3, 1, 4, -1, 5];
/// assert_eq!(ensure_sentinel(&line, -1), [3, 1, 4]);
/// ```
#[inline]
#[track_caller]
pub fn ensure_sentinel<'a, C>(source: C, sentinel: C::Element) -> Span<'a, C::Element>
where
    C: IntoSpan<'a>,
    C::Element: PartialEq,
{
    let span = source.into_span();
    let slice = span.as_slice();
    match slice.iter().position(|x| *x == sentinel) {
        Some(len) => Span::from_slice(&slice[..len]),
        None => gl_contract::fail(
            ContractKind::Precondition,
            Some("sentinel not found within span"),
        ),
    }
}

/// Returns the view of `source` up to, not including, the first terminator.
///
/// Contract: a terminator occurs in `source`.
///
/// ```
/// use gl_span::ensure_z;
///
/// let buf = *b"abc\0def\0";
/// assert_eq!(ensure_z(&buf), *b"abc");
/// ```
#[inline]
#[track_caller]
pub fn ensure_z<'a, C>(source: C) -> Span<'a, C::Element>
where
    C: IntoSpan<'a>,
    C::Element: Terminated,
{
    ensure_sentinel(source, <C::Element as Terminated>::TERMINATOR)
}

/// Measures a raw zero-terminated string, examining at most `max` elements.
///
/// Contract: `max >= 0`, `ptr` is non-null unless `max == 0`, and a
/// terminator occurs among the first `max` elements.
///
/// # Safety
///
/// `ptr` must be aligned and valid for reads up to and including the first
/// terminator, or of `max` elements if that comes first, for the whole
/// lifetime `'a`.
#[track_caller]
pub unsafe fn ensure_z_ptr<'a, T: Terminated>(ptr: *const T, max: IndexType) -> Span<'a, T> {
    let max = to_offset(max, "negative scan limit");
    gl_contract::check(
        ContractKind::Precondition,
        max == 0 || !ptr.is_null(),
        Some("null string pointer"),
    );
    let mut len = 0;
    // SAFETY: `len < max` and every element before the terminator is readable.
    while len < max && unsafe { *ptr.add(len) } != T::TERMINATOR {
        len += 1;
    }
    gl_contract::check(
        ContractKind::Precondition,
        len < max,
        Some("sentinel not found within span"),
    );
    // SAFETY: the `len` elements before the terminator are readable for `'a`.
    unsafe { Span::from_parts(ptr, len) }
}

// -----------------------------------------------------------------------------
// Tests
