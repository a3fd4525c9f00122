//! The integer type of sizes, indices, offsets and counts.
//!
//! Caller-supplied values are converted to `usize` offsets on entry, so a
//! negative value under `signed-index` fails its precondition before any
//! range check runs.

use gl_contract::ContractKind;

crate::cfg::signed_index! {
    if {
        /// Integer type used for sizes and indices (`isize` under `signed-index`).
        pub type IndexType = isize;

        #[inline]
        #[track_caller]
        pub(crate) fn to_offset(value: IndexType, message: &'static str) -> usize {
            match usize::try_from(value) {
                Ok(offset) => offset,
                Err(_) => gl_contract::fail(ContractKind::Precondition, Some(message)),
            }
        }

        /// Saturates at `isize::MAX`, which only zero-sized elements reach.
        #[inline(always)]
        pub(crate) const fn to_index(len: usize) -> IndexType {
            if len > IndexType::MAX as usize {
                IndexType::MAX
            } else {
                len as IndexType
            }
        }
    } else {
        /// Integer type used for sizes and indices (`isize` under `signed-index`).
        pub type IndexType = usize;

        #[inline(always)]
        pub(crate) const fn to_offset(value: IndexType, _message: &'static str) -> usize {
            value
        }

        #[inline(always)]
        pub(crate) const fn to_index(len: usize) -> IndexType {
            len
        }
    }
}

/// Checks `offset <= len` after converting a caller-supplied value.
#[inline]
#[track_caller]
pub(crate) fn checked_offset(value: IndexType, len: usize, message: &'static str) -> usize {
    let offset = to_offset(value, message);
    gl_contract::check(ContractKind::Precondition, offset <= len, Some(message));
    offset
}

/// Checks `index < len` after converting a caller-supplied value.
#[inline]
#[track_caller]
pub(crate) fn checked_index(value: IndexType, len: usize) -> usize {
    const MESSAGE: &str = "index out of range";
    let index = to_offset(value, MESSAGE);
    gl_contract::check(ContractKind::Precondition, index < len, Some(MESSAGE));
    index
}

#[cfg(test)]
mod tests {
    use super::{checked_index, checked_offset, to_index};
    use gl_contract::{ContractKind, catch_violation};

    #[test]
    fn offsets_up_to_len_pass() {
        assert_eq!(catch_violation(|| checked_offset(3, 3, "offset")), Ok(3));
        assert_eq!(catch_violation(|| checked_index(2, 3)), Ok(2));
        assert_eq!(to_index(7), 7);
    }

    #[test]
    fn out_of_range_is_precondition() {
        let err = catch_violation(|| checked_offset(4, 3, "offset")).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Precondition);
        assert_eq!(err.message(), Some("offset"));

        let err = catch_violation(|| checked_index(3, 3)).unwrap_err();
        assert_eq!(err.message(), Some("index out of range"));
    }

    #[cfg(feature = "signed-index")]
    #[test]
    fn negative_values_fail() {
        let err = catch_violation(|| checked_offset(-1, 3, "offset")).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Precondition);
        assert!(catch_violation(|| checked_index(-1, 3)).is_err());
    }

    #[cfg(feature = "signed-index")]
    #[test]
    fn counts_past_isize_max_saturate() {
        assert_eq!(to_index(isize::MAX as usize), isize::MAX);
        assert_eq!(to_index(isize::MAX as usize + 1), isize::MAX);
        assert_eq!(to_index(usize::MAX), isize::MAX);
    }
}
