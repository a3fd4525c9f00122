//! Byte views and element reinterpretation.
//!
//! Reading `T` as bytes requires `T: IntoBytes` (no padding) and
//! `T: Immutable` (no interior mutability behind a shared view). Writing
//! bytes back additionally requires `T: FromBytes`, so that every byte
//! pattern written is a valid `T`.

use gl_contract::ContractKind;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::{Byte, Span, SpanMut};

/// Element count of a `U` view over `len` elements of `T`.
///
/// Contract: `U` is not zero-sized and `ptr` is aligned for `U` unless the
/// view is empty. A trailing partial `U` is not part of the view.
#[inline]
#[track_caller]
fn view_len<T, U>(ptr: *const T, len: usize) -> usize {
    gl_contract::check(
        ContractKind::Precondition,
        size_of::<U>() != 0,
        Some("zero-sized view element"),
    );
    let count = len * size_of::<T>() / size_of::<U>();
    gl_contract::check(
        ContractKind::Precondition,
        count == 0 || ptr.cast::<U>().is_aligned(),
        Some("span pointer is misaligned for the view element"),
    );
    count
}

// -----------------------------------------------------------------------------
// Span

impl<'a, T: IntoBytes + Immutable> Span<'a, T> {
    /// Views the same memory as bytes.
    ///
    /// The result has `size_bytes()` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use gl_span::{to_byte, Span};
    ///
    /// let words = [0x0102_u16];
    /// let bytes = Span::from(&words).as_bytes();
    ///
    /// assert_eq!(bytes.size(), 2);
    /// assert_eq!(bytes[0], to_byte(u16::to_ne_bytes(0x0102)[0]));
    /// ```
    #[inline]
    pub fn as_bytes(&self) -> Span<'a, Byte> {
        // SAFETY: `T: IntoBytes + Immutable` makes every byte of the range
        // initialized and immutable for `'a`, and `Byte` is a `u8`.
        unsafe { Span::from_parts(self.data().cast::<Byte>(), self.len() * size_of::<T>()) }
    }

    /// Views the same memory as `U`s.
    ///
    /// Contract: `U` is not zero-sized, and the begin pointer is aligned for
    /// `U` unless the resulting view is empty. Trailing bytes that do not
    /// fill a whole `U` are left out.
    ///
    /// ```
    /// use gl_span::Span;
    ///
    /// let words = [u32::MAX; 2];
    /// let halves = Span::from(&words).as_view::<u16>();
    ///
    /// assert_eq!(halves, [u16::MAX; 4]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn as_view<U: FromBytes + Immutable>(&self) -> Span<'a, U> {
        let count = view_len::<T, U>(self.data(), self.len());
        // SAFETY: the bytes are initialized and immutable for `'a`, any byte
        // pattern is a valid `U`, and `count` whole `U`s fit in the range.
        unsafe { Span::from_parts(self.data().cast::<U>(), count) }
    }
}

// -----------------------------------------------------------------------------
// SpanMut

impl<T: IntoBytes + Immutable> SpanMut<'_, T> {
    /// Views the same memory as read-only bytes, borrowing `self`.
    #[inline]
    pub fn as_bytes(&self) -> Span<'_, Byte> {
        self.as_span().as_bytes()
    }
}

impl<'a, T: IntoBytes + FromBytes> SpanMut<'a, T> {
    /// Views the same memory as writable bytes, borrowing `self`.
    ///
    /// ```
    /// use gl_span::{to_byte, SpanMut};
    ///
    /// let mut words = [0_u32; 2];
    /// let mut view = SpanMut::from(&mut words);
    /// view.as_writable_bytes().iter_mut().for_each(|b| *b = to_byte(0xff));
    ///
    /// assert_eq!(words, [u32::MAX; 2]);
    /// ```
    #[inline]
    pub fn as_writable_bytes(&mut self) -> SpanMut<'_, Byte> {
        as_writable_bytes(self.reborrow())
    }

    /// Views the same memory as writable `U`s, borrowing `self`.
    ///
    /// Same contract as [`Span::as_view`].
    #[inline]
    #[track_caller]
    pub fn as_view_mut<U: IntoBytes + FromBytes>(&mut self) -> SpanMut<'_, U> {
        let count = view_len::<T, U>(self.data(), self.len());
        // SAFETY: the range is exclusively borrowed, both element types
        // accept any byte pattern and write no padding, and `count` whole
        // `U`s fit in the range.
        unsafe { SpanMut::from_parts(self.data().cast::<U>(), count) }
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// Views the memory of `span` as bytes. See [`Span::as_bytes`].
#[inline]
pub fn as_bytes<T: IntoBytes + Immutable>(span: Span<'_, T>) -> Span<'_, Byte> {
    span.as_bytes()
}

/// Views the memory of `span` as writable bytes, keeping its lifetime.
#[inline]
pub fn as_writable_bytes<T: IntoBytes + FromBytes>(span: SpanMut<'_, T>) -> SpanMut<'_, Byte> {
    let len = span.len() * size_of::<T>();
    // SAFETY: the range is exclusively borrowed for the returned lifetime,
    // `T` accepts any byte pattern, and `Byte` is a `u8`.
    unsafe { SpanMut::from_parts(span.data().cast::<Byte>(), len) }
}

// -----------------------------------------------------------------------------
// Tests
