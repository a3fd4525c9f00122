use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use gl_contract::ContractKind;

use crate::Span;
use crate::index::{IndexType, checked_index, checked_offset, to_index, to_offset};

// -----------------------------------------------------------------------------
// SpanMut

/// A bounded, mutable view over `len` contiguous `T`s, like `&'a mut [T]`.
///
/// It carries the same invariants and contracts as [`Span`]. Being an
/// exclusive view it is not `Copy`; use [`reborrow`](Self::reborrow) for a
/// shorter-lived copy and [`as_span`](Self::as_span) for a read-only one.
/// Sub-range derivation borrows the source, so the source stays untouched
/// and usable afterwards.
///
/// # Examples
///
/// ```
/// use gl_span::SpanMut;
///
/// let mut data = [1, 2, 3, 4];
/// let mut view = SpanMut::from(&mut data);
///
/// view.last(2).iter_mut().for_each(|x| *x *= 10);
/// view[0] = 0;
///
/// assert_eq!(data, [0, 2, 30, 40]);
/// ```
pub struct SpanMut<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: a `SpanMut` behaves like `&mut [T]`.
unsafe impl<T: Send> Send for SpanMut<'_, T> {}
// SAFETY: a `SpanMut` behaves like `&mut [T]`.
unsafe impl<T: Sync> Sync for SpanMut<'_, T> {}

impl<T> Default for SpanMut<'_, T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SpanMut<'a, T> {
    /// Creates an empty span with a null begin pointer.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates a span from a null pointer and a size.
    ///
    /// The only valid size is `0`.
    #[inline]
    #[track_caller]
    pub fn from_null(len: IndexType) -> Self {
        let len = to_offset(len, "negative span size");
        gl_contract::check(
            ContractKind::Precondition,
            len == 0,
            Some("null span with non-zero size"),
        );
        Self::new()
    }

    /// Creates a span from a begin pointer and an element count.
    ///
    /// Contract: `len >= 0`, and `ptr` is non-null and aligned unless `len == 0`.
    ///
    /// # Safety
    ///
    /// When `len > 0`, `ptr` must be valid for reads and writes of `len`
    /// consecutive `T`s for the whole lifetime `'a`, and the memory must not
    /// be accessed through any other pointer during that lifetime.
    #[inline]
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *mut T, len: IndexType) -> Self {
        let len = to_offset(len, "negative span size");
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_parts(ptr, len) }
    }

    /// Creates a span over the half-open range `[begin, end)`.
    ///
    /// Contract: `begin <= end`, and `begin` is non-null unless `begin == end`.
    ///
    /// # Safety
    ///
    /// Both pointers must be derived from the same allocation, and the range
    /// must satisfy the requirements of [`from_raw_parts`](Self::from_raw_parts).
    #[inline]
    #[track_caller]
    pub unsafe fn from_ptr_range(begin: *mut T, end: *mut T) -> Self {
        gl_contract::check(
            ContractKind::Precondition,
            begin <= end,
            Some("span begin is past its end"),
        );
        gl_contract::check(
            ContractKind::Precondition,
            !begin.is_null() || begin == end,
            Some("null span with non-zero size"),
        );
        let len = match size_of::<T>() {
            0 => 0,
            size => (end.addr() - begin.addr()) / size,
        };
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_parts(begin, len) }
    }

    #[inline]
    #[track_caller]
    pub(crate) unsafe fn from_parts(ptr: *mut T, len: usize) -> Self {
        gl_contract::check(
            ContractKind::Precondition,
            len == 0 || !ptr.is_null(),
            Some("null span with non-zero size"),
        );
        gl_contract::check(
            ContractKind::Precondition,
            len == 0 || ptr.is_aligned(),
            Some("span pointer is misaligned"),
        );
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Creates a span covering a whole slice.
    #[inline(always)]
    pub const fn from_slice(slice: &'a mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    fn sub(&mut self, offset: usize, len: usize) -> SpanMut<'_, T> {
        SpanMut {
            ptr: self.ptr.wrapping_add(offset),
            len,
            _marker: PhantomData,
        }
    }

    /// Returns a shorter-lived span over the same range.
    #[inline(always)]
    pub fn reborrow(&mut self) -> SpanMut<'_, T> {
        self.sub(0, self.len)
    }

    /// Returns a read-only view of the same range, borrowing `self`.
    #[inline(always)]
    pub fn as_span(&self) -> Span<'_, T> {
        // SAFETY: the shared borrow of `self` keeps the range readable.
        unsafe { Span::from_raw_unchecked(self.ptr, self.len) }
    }

    /// Converts into a read-only view with the full lifetime.
    #[inline(always)]
    pub fn into_span(self) -> Span<'a, T> {
        // SAFETY: the exclusive borrow for `'a` is given up for a shared one.
        unsafe { Span::from_raw_unchecked(self.ptr, self.len) }
    }

    // -------------------------------------------------------------------------
    // Queries

    /// Returns the number of elements.
    #[inline(always)]
    pub const fn size(&self) -> IndexType {
        to_index(self.len)
    }

    /// Returns the number of elements as `usize`.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the span has no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the size of the viewed memory in bytes.
    #[doc(alias = "bytes")]
    #[inline(always)]
    pub const fn size_bytes(&self) -> IndexType {
        to_index(self.len * size_of::<T>())
    }

    /// Returns the begin pointer. It may be null only if the span is empty.
    #[inline(always)]
    pub const fn data(&self) -> *mut T {
        self.ptr
    }

    /// Returns `true` if the begin pointer is null.
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the viewed elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        if self.len == 0 {
            &[]
        } else {
            // SAFETY: a non-empty span holds a non-null, aligned pointer that
            // is valid for `len` reads.
            unsafe { slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    /// Returns the viewed elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.reborrow().into_mut_slice()
    }

    /// Converts into a mutable slice with the full lifetime.
    #[inline]
    pub fn into_mut_slice(self) -> &'a mut [T] {
        if self.len == 0 {
            &mut []
        } else {
            // SAFETY: a non-empty span holds a non-null, aligned pointer that
            // is valid for `len` reads and writes during `'a`, exclusively.
            unsafe { slice::from_raw_parts_mut(self.ptr, self.len) }
        }
    }

    // -------------------------------------------------------------------------
    // Element access

    /// Returns the element at `index`.
    ///
    /// Contract: `0 <= index < size()`.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: IndexType) -> &T {
        let index = checked_index(index, self.len);
        // SAFETY: `index < len`.
        unsafe { &*self.ptr.add(index) }
    }

    /// Returns the element at `index` mutably.
    ///
    /// Contract: `0 <= index < size()`.
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: IndexType) -> &mut T {
        let index = checked_index(index, self.len);
        // SAFETY: `index < len`.
        unsafe { &mut *self.ptr.add(index) }
    }

    /// Returns the element at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: IndexType) -> Option<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.as_slice().get(index))
    }

    /// Returns the element at `index` mutably, or `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, index: IndexType) -> Option<&mut T> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.as_mut_slice().get_mut(index))
    }

    /// Returns the first element.
    ///
    /// Contract: the span is not empty.
    #[inline]
    #[track_caller]
    pub fn front(&mut self) -> &mut T {
        gl_contract::check(
            ContractKind::Precondition,
            self.len > 0,
            Some("front of an empty span"),
        );
        // SAFETY: the span is non-empty.
        unsafe { &mut *self.ptr }
    }

    /// Returns the last element.
    ///
    /// Contract: the span is not empty.
    #[inline]
    #[track_caller]
    pub fn back(&mut self) -> &mut T {
        gl_contract::check(
            ContractKind::Precondition,
            self.len > 0,
            Some("back of an empty span"),
        );
        // SAFETY: the span is non-empty.
        unsafe { &mut *self.ptr.add(self.len - 1) }
    }

    /// Returns a double-ended iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a double-ended iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // -------------------------------------------------------------------------
    // Slicing

    /// Returns a view of the first `count` elements.
    ///
    /// Contract: `0 <= count <= size()`.
    #[inline]
    #[track_caller]
    pub fn first(&mut self, count: IndexType) -> SpanMut<'_, T> {
        let count = checked_offset(count, self.len, "first(count) exceeds span size");
        self.sub(0, count)
    }

    /// Returns a view of the last `count` elements.
    ///
    /// Contract: `0 <= count <= size()`.
    #[inline]
    #[track_caller]
    pub fn last(&mut self, count: IndexType) -> SpanMut<'_, T> {
        let count = checked_offset(count, self.len, "last(count) exceeds span size");
        let offset = self.len - count;
        self.sub(offset, count)
    }

    /// Returns a view from `offset` to the end.
    ///
    /// Contract: `0 <= offset <= size()`.
    #[inline]
    #[track_caller]
    pub fn subspan_from(&mut self, offset: IndexType) -> SpanMut<'_, T> {
        let offset = checked_offset(offset, self.len, "subspan offset exceeds span size");
        let count = self.len - offset;
        self.sub(offset, count)
    }

    /// Returns a view of `count` elements starting at `offset`.
    ///
    /// Contract: `0 <= offset <= size()` and `0 <= count <= size() - offset`.
    #[inline]
    #[track_caller]
    pub fn subspan(&mut self, offset: IndexType, count: IndexType) -> SpanMut<'_, T> {
        let offset = checked_offset(offset, self.len, "subspan offset exceeds span size");
        let count = checked_offset(count, self.len - offset, "subspan count exceeds span size");
        self.sub(offset, count)
    }

    /// Exchanges the viewed ranges of two spans. No element is touched.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T> {
    #[inline(always)]
    fn from(slice: &'a mut [T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SpanMut<'a, T> {
    #[inline(always)]
    fn from(array: &'a mut [T; N]) -> Self {
        Self::from_slice(array)
    }
}

impl<'a, T> From<&'a mut alloc::vec::Vec<T>> for SpanMut<'a, T> {
    #[inline(always)]
    fn from(vec: &'a mut alloc::vec::Vec<T>) -> Self {
        Self::from_slice(vec.as_mut_slice())
    }
}

impl<T> AsRef<[T]> for SpanMut<'_, T> {
    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SpanMut<'_, T> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<IndexType> for SpanMut<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: IndexType) -> &T {
        self.at(index)
    }
}

impl<T> IndexMut<IndexType> for SpanMut<'_, T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: IndexType) -> &mut T {
        self.at_mut(index)
    }
}

impl<'a, T> IntoIterator for SpanMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.into_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for SpanMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
