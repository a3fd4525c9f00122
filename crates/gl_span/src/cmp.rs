use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ptr;

use crate::{Span, SpanMut};

#[inline(always)]
fn same_range<T>(lhs: &[T], rhs: &[T]) -> bool {
    lhs.len() == rhs.len() && ptr::eq(lhs.as_ptr(), rhs.as_ptr())
}

/// Size first, then pointer identity, then the elements in order.
#[inline]
fn view_eq<T: PartialEq>(lhs: &[T], rhs: &[T]) -> bool {
    lhs.len() == rhs.len() && (ptr::eq(lhs.as_ptr(), rhs.as_ptr()) || lhs == rhs)
}

/// A view over the same range is equal to itself, whatever its elements.
#[inline]
fn view_partial_cmp<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> Option<Ordering> {
    if same_range(lhs, rhs) {
        Some(Ordering::Equal)
    } else {
        lhs.partial_cmp(rhs)
    }
}

#[inline]
fn view_cmp<T: Ord>(lhs: &[T], rhs: &[T]) -> Ordering {
    if same_range(lhs, rhs) {
        Ordering::Equal
    } else {
        lhs.cmp(rhs)
    }
}

// -----------------------------------------------------------------------------
// View against view

macro_rules! impl_view_cmp {
    ($Lhs:ident, $Rhs:ident) => {
        impl<T: PartialEq> PartialEq<$Rhs<'_, T>> for $Lhs<'_, T> {
            #[inline]
            fn eq(&self, other: &$Rhs<'_, T>) -> bool {
                view_eq(self.as_slice(), other.as_slice())
            }
        }

        impl<T: PartialOrd> PartialOrd<$Rhs<'_, T>> for $Lhs<'_, T> {
            #[inline]
            fn partial_cmp(&self, other: &$Rhs<'_, T>) -> Option<Ordering> {
                view_partial_cmp(self.as_slice(), other.as_slice())
            }
        }
    };
}

impl_view_cmp!(Span, Span);
impl_view_cmp!(Span, SpanMut);
impl_view_cmp!(SpanMut, Span);
impl_view_cmp!(SpanMut, SpanMut);

// -----------------------------------------------------------------------------
// View against slices and arrays

macro_rules! impl_slice_eq {
    ($View:ident) => {
        impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for $View<'_, T> {
            #[inline]
            fn eq(&self, other: &[U; N]) -> bool {
                self.as_slice() == other
            }
        }

        impl<T: PartialEq<U>, U> PartialEq<[U]> for $View<'_, T> {
            #[inline]
            fn eq(&self, other: &[U]) -> bool {
                self.as_slice() == other
            }
        }

        impl<T: PartialEq<U>, U> PartialEq<&[U]> for $View<'_, T> {
            #[inline]
            fn eq(&self, other: &&[U]) -> bool {
                self.as_slice() == *other
            }
        }

        impl<T: PartialEq<U>, U> PartialEq<alloc::vec::Vec<U>> for $View<'_, T> {
            #[inline]
            fn eq(&self, other: &alloc::vec::Vec<U>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }
    };
}

impl_slice_eq!(Span);
impl_slice_eq!(SpanMut);

// -----------------------------------------------------------------------------
// Total order and hashing

macro_rules! impl_view_traits {
    ($View:ident) => {
        impl<T: Eq> Eq for $View<'_, T> {}

        impl<T: Ord> Ord for $View<'_, T> {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                view_cmp(self.as_slice(), other.as_slice())
            }
        }

        impl<T: Hash> Hash for $View<'_, T> {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_slice().hash(state);
            }
        }
    };
}

impl_view_traits!(Span);
impl_view_traits!(SpanMut);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{Span, SpanMut};
    use alloc::vec;
    use core::cmp::Ordering;
    use core::hash::BuildHasher;
    use std::hash::RandomState;

    #[test]
    fn equality_by_elements() {
        let a = [1, 2, 3];
        let b = vec![1, 2, 3];
        let c = [1, 2, 4];

        assert_eq!(Span::from(&a), Span::from(&b));
        assert_ne!(Span::from(&a), Span::from(&c));
        assert_ne!(Span::from(&a), Span::from(&a).first(2));
        assert_eq!(Span::<i32>::new(), Span::from(&a).first(0));
    }

    #[test]
    fn identity_shortcut() {
        let nan = [f64::NAN, 1.0];
        let s = Span::from(&nan);
        let copy = s;
        assert_eq!(s, copy);
        assert_eq!(s.partial_cmp(&copy), Some(Ordering::Equal));
        assert!(s <= copy);
        assert!(s >= copy);

        let other = [f64::NAN, 1.0];
        assert_ne!(s, Span::from(&other));
        assert_eq!(s.partial_cmp(&Span::from(&other)), None);
    }

    #[test]
    fn against_slices_and_arrays() {
        let a = [1u8, 2, 3];
        let s = Span::from(&a);

        assert_eq!(s, [1, 2, 3]);
        assert_eq!(s, a[..]);
        assert_eq!(s, &a[..]);
        assert_eq!(s, vec![1, 2, 3]);
        assert_ne!(s, [1, 2]);
    }

    #[test]
    fn mixed_mutability() {
        let a = [1, 2];
        let mut b = [1, 2];
        let m = SpanMut::from(&mut b);
        assert!(Span::from(&a) == m);
        assert!(m == Span::from(&a));
        assert!(m.as_span() == m);
    }

    #[test]
    fn lexicographic_ordering() {
        let a = [1, 2, 3];
        let b = [1, 3];
        let s = Span::from(&a);
        let t = Span::from(&b);

        assert!(s < t);
        assert!(s <= t);
        assert!(t > s);
        assert!(s.first(2) < s);
        assert!(s >= s.first(3));
        assert_eq!(s.cmp(&t), Ordering::Less);
        assert_eq!(s.cmp(&s.first(3)), Ordering::Equal);
    }

    #[test]
    fn hash_follows_elements() {
        let a = [7, 8, 9];
        let b = vec![7, 8, 9];
        let state = RandomState::new();
        assert_eq!(
            state.hash_one(Span::from(&a)),
            state.hash_one(Span::from(&b)),
        );
    }
}
