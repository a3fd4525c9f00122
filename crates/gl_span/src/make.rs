use alloc::vec::Vec;

use crate::{IndexType, Span, SpanMut};

// -----------------------------------------------------------------------------
// Traits

/// Types that can be viewed as a [`Span`] for the lifetime `'a`.
///
/// Implemented for borrowed slices, arrays, vectors, strings and for the
/// views themselves. Generic code takes `impl IntoSpan<'a>` to accept any
/// of them.
pub trait IntoSpan<'a> {
    /// The viewed element type.
    type Element: 'a;

    /// Converts into a read-only view.
    fn into_span(self) -> Span<'a, Self::Element>;
}

/// Types that can be viewed as a [`SpanMut`] for the lifetime `'a`.
pub trait IntoSpanMut<'a> {
    /// The viewed element type.
    type Element: 'a;

    /// Converts into a mutable view.
    fn into_span_mut(self) -> SpanMut<'a, Self::Element>;
}

impl<'a, T> IntoSpan<'a> for &'a [T] {
    type Element = T;

    #[inline(always)]
    fn into_span(self) -> Span<'a, T> {
        Span::from_slice(self)
    }
}

impl<'a, T, const N: usize> IntoSpan<'a> for &'a [T; N] {
    type Element = T;

    #[inline(always)]
    fn into_span(self) -> Span<'a, T> {
        Span::from_slice(self)
    }
}

impl<'a, T> IntoSpan<'a> for &'a Vec<T> {
    type Element = T;

    #[inline(always)]
    fn into_span(self) -> Span<'a, T> {
        Span::from_slice(self)
    }
}

impl<'a, T> IntoSpan<'a> for &'a mut [T] {
    type Element = T;

    #[inline(always)]
    fn into_span(self) -> Span<'a, T> {
        Span::from_slice(self)
    }
}

impl<'a> IntoSpan<'a> for &'a str {
    type Element = u8;

    #[inline(always)]
    fn into_span(self) -> Span<'a, u8> {
        Span::from_slice(self.as_bytes())
    }
}

impl<'a, T> IntoSpan<'a> for Span<'a, T> {
    type Element = T;

    #[inline(always)]
    fn into_span(self) -> Span<'a, T> {
        self
    }
}

impl<'a, T> IntoSpan<'a> for SpanMut<'a, T> {
    type Element = T;

    #[inline(always)]
    fn into_span(self) -> Span<'a, T> {
        SpanMut::into_span(self)
    }
}

impl<'a, T> IntoSpanMut<'a> for &'a mut [T] {
    type Element = T;

    #[inline(always)]
    fn into_span_mut(self) -> SpanMut<'a, T> {
        SpanMut::from_slice(self)
    }
}

impl<'a, T, const N: usize> IntoSpanMut<'a> for &'a mut [T; N] {
    type Element = T;

    #[inline(always)]
    fn into_span_mut(self) -> SpanMut<'a, T> {
        SpanMut::from_slice(self)
    }
}

impl<'a, T> IntoSpanMut<'a> for &'a mut Vec<T> {
    type Element = T;

    #[inline(always)]
    fn into_span_mut(self) -> SpanMut<'a, T> {
        SpanMut::from_slice(self)
    }
}

impl<'a, T> IntoSpanMut<'a> for SpanMut<'a, T> {
    type Element = T;

    #[inline(always)]
    fn into_span_mut(self) -> SpanMut<'a, T> {
        self
    }
}

// -----------------------------------------------------------------------------
// Factories

/// Creates a read-only view over any [`IntoSpan`] source.
///
/// # Examples
///
/// ```
/// use gl_span::make_span;
///
/// let vec = vec![1, 2, 3];
/// assert_eq!(make_span(&vec).last(1), [3]);
/// assert_eq!(make_span("hi"), *b"hi");
/// ```
#[inline(always)]
pub fn make_span<'a, C: IntoSpan<'a>>(source: C) -> Span<'a, C::Element> {
    source.into_span()
}

/// Creates a mutable view over any [`IntoSpanMut`] source.
#[inline(always)]
pub fn make_span_mut<'a, C: IntoSpanMut<'a>>(source: C) -> SpanMut<'a, C::Element> {
    source.into_span_mut()
}

/// Creates a read-only view from a begin pointer and an element count.
///
/// # Safety
///
/// See [`Span::from_raw_parts`].
#[inline]
#[track_caller]
pub unsafe fn make_span_from_raw_parts<'a, T>(ptr: *const T, len: IndexType) -> Span<'a, T> {
    // SAFETY: forwarded to the caller.
    unsafe { Span::from_raw_parts(ptr, len) }
}

/// Creates a read-only view over `[begin, end)`.
///
/// # Safety
///
/// See [`Span::from_ptr_range`].
#[inline]
#[track_caller]
pub unsafe fn make_span_from_ptr_range<'a, T>(begin: *const T, end: *const T) -> Span<'a, T> {
    // SAFETY: forwarded to the caller.
    unsafe { Span::from_ptr_range(begin, end) }
}

/// Creates a mutable view from a begin pointer and an element count.
///
/// # Safety
///
/// See [`SpanMut::from_raw_parts`].
#[inline]
#[track_caller]
pub unsafe fn make_span_mut_from_raw_parts<'a, T>(ptr: *mut T, len: IndexType) -> SpanMut<'a, T> {
    // SAFETY: forwarded to the caller.
    unsafe { SpanMut::from_raw_parts(ptr, len) }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{IntoSpan, make_span, make_span_from_ptr_range, make_span_from_raw_parts};
    use super::{make_span_mut, make_span_mut_from_raw_parts};
    use crate::{Span, SpanMut};
    use alloc::vec;
    use core::ptr;
    use gl_contract::catch_violation;

    fn total<'a>(source: impl IntoSpan<'a, Element = u32>) -> u32 {
        source.into_span().iter().sum()
    }

    #[test]
    fn every_source_converts() {
        let array = [1_u32, 2, 3];
        let mut vec = vec![4_u32, 5];

        assert_eq!(total(&array), 6);
        assert_eq!(total(&array[1..]), 5);
        assert_eq!(total(&vec), 9);
        assert_eq!(total(Span::from(&array)), 6);
        assert_eq!(total(SpanMut::from(&mut vec)), 9);
        assert_eq!(total(vec.as_mut_slice()), 9);
    }

    #[test]
    fn factories_keep_the_range() {
        let array = [1, 2, 3];
        let s = make_span(&array);
        assert_eq!(s.data(), array.as_ptr());
        assert_eq!(s.size(), 3);

        let range = array.as_ptr_range();
        let r = unsafe { make_span_from_ptr_range(range.start, range.end) };
        assert_eq!(r, s);

        let p = unsafe { make_span_from_raw_parts(array.as_ptr(), 2) };
        assert_eq!(p, [1, 2]);

        assert_eq!(make_span("abc"), *b"abc");
    }

    #[test]
    fn mutable_factories() {
        let mut array = [1, 2, 3];
        make_span_mut(&mut array).iter_mut().for_each(|x| *x += 1);
        assert_eq!(array, [2, 3, 4]);

        let mut vec = vec![0; 2];
        let mut m = unsafe { make_span_mut_from_raw_parts(vec.as_mut_ptr(), 2) };
        m[1] = 7;
        assert_eq!(vec, [0, 7]);
    }

    #[test]
    fn raw_factories_check_contracts() {
        assert!(catch_violation(|| unsafe { make_span_from_raw_parts::<u8>(ptr::null(), 1) }).is_err());
        let empty = catch_violation(|| unsafe { make_span_from_raw_parts::<u8>(ptr::null(), 0) });
        assert!(empty.unwrap().is_empty());
    }
}
