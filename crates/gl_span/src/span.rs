use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::Index;
use core::ptr;
use core::slice;

use gl_contract::ContractKind;

use crate::SpanMut;
use crate::index::{IndexType, checked_index, checked_offset, to_index, to_offset};

// -----------------------------------------------------------------------------
// Span

/// A bounded, read-only view over `len` contiguous `T`s, like `&'a [T]`.
///
/// A `Span` never owns the memory it refers to: copying it duplicates the
/// begin pointer and the element count, nothing else. The lifetime `'a`
/// bounds how long the referenced memory is valid for.
///
/// # Invariants
///
/// - A non-empty span has a non-null, aligned begin pointer.
/// - An empty span may be null (see [`new`](Self::new)) or point anywhere.
///
/// Every constructor and accessor enforces its preconditions through
/// [`gl_contract`], so a violation either terminates the process or raises a
/// [`ContractViolation`](gl_contract::ContractViolation) depending on the
/// build's policy.
///
/// # Examples
///
/// ```
/// use gl_span::Span;
///
/// let data = [1, 2, 3, 4, 5];
/// let view = Span::from(&data);
///
/// assert_eq!(view.size(), 5);
/// assert_eq!(view[1], 2);
/// assert_eq!(view.first(3), [1, 2, 3]);
/// assert_eq!(view.last(3), [3, 4, 5]);
/// assert_eq!(view.subspan(1, 3), [2, 3, 4]);
/// assert!(view.subspan_from(5).is_empty());
/// ```
pub struct Span<'a, T> {
    ptr: *const T,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

// SAFETY: a `Span` behaves like `&[T]`.
unsafe impl<T: Sync> Send for Span<'_, T> {}
// SAFETY: a `Span` behaves like `&[T]`.
unsafe impl<T: Sync> Sync for Span<'_, T> {}

impl<T> Clone for Span<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<T> Default for Span<'_, T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Span<'a, T> {
    /// Creates an empty span with a null begin pointer.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            ptr: ptr::null(),
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
    /// When `len > 0`, `ptr` must be valid for reads of `len` consecutive
    /// `T`s for the whole lifetime `'a`, and the memory must not be mutated
    /// through another pointer during that lifetime.
    ///
    /// # Examples
    ///
    /// ```
    /// use gl_span::Span;
    ///
    /// let data = [1u16, 2, 3];
    /// let view = unsafe { Span::from_raw_parts(data.as_ptr(), 2) };
    /// assert_eq!(view, [1, 2]);
    ///
    /// let empty = unsafe { Span::<u16>::from_raw_parts(core::ptr::null(), 0) };
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *const T, len: IndexType) -> Self {
        let len = to_offset(len, "negative span size");
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_parts(ptr, len) }
    }

    /// Creates a span over the half-open range `[begin, end)`.
    ///
    /// Contract: `begin <= end`, and `begin` is non-null unless `begin == end`.
    ///
    /// Zero-sized elements always produce an empty span.
    ///
    /// # Safety
    ///
    /// Both pointers must be derived from the same allocation, and the range
    /// must satisfy the requirements of [`from_raw_parts`](Self::from_raw_parts).
    ///
    /// # Examples
    ///
    /// ```
    /// use gl_span::Span;
    ///
    /// let data = [1, 2, 3, 4];
    /// let range = data.as_ptr_range();
    /// let view = unsafe { Span::from_ptr_range(range.start, range.end) };
    /// assert_eq!(view.size(), 4);
    /// ```
    #[inline]
    #[track_caller]
    pub unsafe fn from_ptr_range(begin: *const T, end: *const T) -> Self {
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

    /// Shared tail of the raw constructors, `len` already non-negative.
    #[inline]
    #[track_caller]
    pub(crate) unsafe fn from_parts(ptr: *const T, len: usize) -> Self {
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

    /// Keeps `ptr` as is, even for an empty range.
    ///
    /// # Safety
    ///
    /// `ptr` and `len` must come from a live view whose range stays readable
    /// during `'a`.
    #[inline(always)]
    pub(crate) const unsafe fn from_raw_unchecked(ptr: *const T, len: usize) -> Self {
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Creates a span covering a whole slice.
    #[inline(always)]
    pub const fn from_slice(slice: &'a [T]) -> Self {
        Self {
            ptr: slice.as_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Creates a span covering a whole array.
    #[inline(always)]
    pub const fn from_array<const N: usize>(array: &'a [T; N]) -> Self {
        Self {
            ptr: array.as_ptr(),
            len: N,
            _marker: PhantomData,
        }
    }

    /// Internal constructor for sub-ranges already proven in bounds.
    #[inline(always)]
    const fn sub(&self, offset: usize, len: usize) -> Self {
        Self {
            ptr: self.ptr.wrapping_add(offset),
            len,
            _marker: PhantomData,
        }
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
    pub const fn data(&self) -> *const T {
        self.ptr
    }

    /// Returns `true` if the begin pointer is null.
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the viewed elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        if self.len == 0 {
            &[]
        } else {
            // SAFETY: a non-empty span holds a non-null, aligned pointer that
            // is valid for `len` reads during `'a`.
            unsafe { slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    // -------------------------------------------------------------------------
    // Element access

    /// Returns the element at `index`.
    ///
    /// Contract: `0 <= index < size()`.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: IndexType) -> &'a T {
        let index = checked_index(index, self.len);
        // SAFETY: `index < len`, so the element is in bounds.
        unsafe { &*self.ptr.add(index) }
    }

    /// Returns the element at `index`, or `None` when out of range.
    ///
    /// Unlike [`at`](Self::at) this is not a contract check.
    #[inline]
    pub fn get(&self, index: IndexType) -> Option<&'a T> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.as_slice().get(index))
    }

    /// Returns the first element.
    ///
    /// Contract: the span is not empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &'a T {
        gl_contract::check(
            ContractKind::Precondition,
            self.len > 0,
            Some("front of an empty span"),
        );
        // SAFETY: the span is non-empty.
        unsafe { &*self.ptr }
    }

    /// Returns the last element.
    ///
    /// Contract: the span is not empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &'a T {
        gl_contract::check(
            ContractKind::Precondition,
            self.len > 0,
            Some("back of an empty span"),
        );
        // SAFETY: the span is non-empty.
        unsafe { &*self.ptr.add(self.len - 1) }
    }

    /// Returns a double-ended iterator over the elements.
    ///
    /// Use [`Iterator::rev`] for reverse iteration.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    // -------------------------------------------------------------------------
    // Slicing

    /// Returns a view of the first `count` elements.
    ///
    /// Contract: `0 <= count <= size()`.
    #[inline]
    #[track_caller]
    pub fn first(&self, count: IndexType) -> Self {
        let count = checked_offset(count, self.len, "first(count) exceeds span size");
        self.sub(0, count)
    }

    /// Returns a view of the last `count` elements.
    ///
    /// Contract: `0 <= count <= size()`.
    #[inline]
    #[track_caller]
    pub fn last(&self, count: IndexType) -> Self {
        let count = checked_offset(count, self.len, "last(count) exceeds span size");
        self.sub(self.len - count, count)
    }

    /// Returns a view from `offset` to the end.
    ///
    /// Contract: `0 <= offset <= size()`.
    #[inline]
    #[track_caller]
    pub fn subspan_from(&self, offset: IndexType) -> Self {
        let offset = checked_offset(offset, self.len, "subspan offset exceeds span size");
        self.sub(offset, self.len - offset)
    }

    /// Returns a view of `count` elements starting at `offset`.
    ///
    /// Contract: `0 <= offset <= size()` and `0 <= count <= size() - offset`.
    #[inline]
    #[track_caller]
    pub fn subspan(&self, offset: IndexType, count: IndexType) -> Self {
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

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    #[inline(always)]
    fn from(slice: &'a [T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Span<'a, T> {
    #[inline(always)]
    fn from(array: &'a [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<'a, T> From<&'a alloc::vec::Vec<T>> for Span<'a, T> {
    /// The span captures the vector's current buffer and length; it does not
    /// follow later reallocations (the borrow prevents them).
    #[inline(always)]
    fn from(vec: &'a alloc::vec::Vec<T>) -> Self {
        Self::from_slice(vec.as_slice())
    }
}

impl<'a, T> From<SpanMut<'a, T>> for Span<'a, T> {
    #[inline(always)]
    fn from(span: SpanMut<'a, T>) -> Self {
        span.into_span()
    }
}

impl<T> AsRef<[T]> for Span<'_, T> {
    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Index<IndexType> for Span<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: IndexType) -> &T {
        self.at(index)
    }
}

impl<'a, T> IntoIterator for Span<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Span<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
