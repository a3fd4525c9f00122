use crate::index::{IndexType, checked_index};

/// Returns the element at `index` of any contiguous container.
///
/// Contract: `0 <= index < len`.
///
/// ```
/// let v = vec![10, 20, 30];
/// assert_eq!(*gl_span::at(&v, 2), 30);
/// assert_eq!(*gl_span::at(&[1, 2][..], 0), 1);
/// ```
#[inline]
#[track_caller]
pub fn at<T, C: AsRef<[T]> + ?Sized>(container: &C, index: IndexType) -> &T {
    let slice = container.as_ref();
    let index = checked_index(index, slice.len());
    &slice[index]
}

/// Returns the element at `index` of any contiguous container mutably.
///
/// Contract: `0 <= index < len`.
#[inline]
#[track_caller]
pub fn at_mut<T, C: AsMut<[T]> + ?Sized>(container: &mut C, index: IndexType) -> &mut T {
    let slice = container.as_mut();
    let index = checked_index(index, slice.len());
    &mut slice[index]
}

#[cfg(test)]
mod tests {
    use super::{at, at_mut};
    use crate::Span;
    use alloc::vec;
    use gl_contract::{ContractKind, catch_violation};

    #[test]
    fn in_range_access() {
        let array = [1, 2, 3];
        let mut vec = vec![4, 5];

        assert_eq!(*at(&array, 0), 1);
        assert_eq!(*at(&vec, 1), 5);
        assert_eq!(*at(&Span::from(&array), 2), 3);

        *at_mut(&mut vec, 0) = 40;
        assert_eq!(vec, [40, 5]);
    }

    #[test]
    fn out_of_range_is_precondition() {
        let array = [1, 2, 3];
        let err = catch_violation(|| *at(&array, 3)).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Precondition);

        let mut vec = vec![1];
        assert!(catch_violation(move || *at_mut(&mut vec, 1) = 0).is_err());
    }
}
