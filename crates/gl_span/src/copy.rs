use gl_contract::ContractKind;

use crate::{Span, SpanMut};

/// Clones every element of `src` into the front of `dest`.
///
/// Elements of `dest` past `src.len()` are left as they are.
///
/// Contract: `dest.len() >= src.len()`.
///
/// ```
/// use gl_span::{Span, SpanMut, copy};
///
/// let src = [1, 2];
/// let mut dest = [0; 3];
/// copy(Span::from(&src), SpanMut::from(&mut dest));
/// assert_eq!(dest, [1, 2, 0]);
/// ```
#[inline]
#[track_caller]
pub fn copy<T: Clone>(src: Span<'_, T>, mut dest: SpanMut<'_, T>) {
    dest.copy_from(src);
}

impl<T: Clone> SpanMut<'_, T> {
    /// Clones every element of `src` into the front of this view.
    ///
    /// Contract: `self.len() >= src.len()`.
    #[inline]
    #[track_caller]
    pub fn copy_from(&mut self, src: Span<'_, T>) {
        let src = src.as_slice();
        gl_contract::check(
            ContractKind::Precondition,
            self.len() >= src.len(),
            Some("copy destination is shorter than the source"),
        );
        self.as_mut_slice()[..src.len()].clone_from_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::copy;
    use crate::{Span, SpanMut};
    use alloc::string::{String, ToString};
    use alloc::vec;
    use gl_contract::{ContractKind, catch_violation};

    #[test]
    fn fills_the_front_of_dest() {
        let src = [1, 2];
        let mut dest = [9; 4];
        copy(Span::from(&src), SpanMut::from(&mut dest));
        assert_eq!(dest, [1, 2, 9, 9]);

        let mut same = [0; 2];
        SpanMut::from(&mut same).copy_from(Span::from(&src));
        assert_eq!(same, src);
    }

    #[test]
    fn clones_owned_elements() {
        let src = vec!["a".to_string(), "b".to_string()];
        let mut dest = vec![String::new(); 2];
        copy(Span::from(&src), SpanMut::from(&mut dest));
        assert_eq!(dest, src);
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let mut dest = [5, 6];
        copy(Span::<i32>::new(), SpanMut::from(&mut dest));
        assert_eq!(dest, [5, 6]);
        copy(Span::<i32>::new(), SpanMut::new());
    }

    #[test]
    fn short_dest_is_precondition() {
        let src = [1, 2, 3];
        let mut dest = [0; 2];
        let err = catch_violation(|| copy(Span::from(&src), SpanMut::from(&mut dest))).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Precondition);
        assert_eq!(err.message(), Some("copy destination is shorter than the source"));
        assert_eq!(dest, [0, 0]);
    }
}
