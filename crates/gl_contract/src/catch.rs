use core::panic::AssertUnwindSafe;
use std::panic;

use crate::ContractViolation;

/// Runs `f`, turning a raised [`ContractViolation`] into `Err`.
///
/// Panics that do not carry a violation are resumed unchanged.
///
/// Only available with the `std` and `raise` features.
///
/// # Examples
///
/// ```
/// use gl_contract::{catch_violation, ContractKind};
///
/// let ok = catch_violation(|| 3);
/// assert_eq!(ok, Ok(3));
///
/// let err = catch_violation(|| gl_contract::expects!(1 > 2)).unwrap_err();
/// assert_eq!(err.kind(), ContractKind::Precondition);
/// ```
pub fn catch_violation<R>(f: impl FnOnce() -> R) -> Result<R, ContractViolation> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<ContractViolation>() {
            Ok(violation) => Err(*violation),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::catch_violation;
    use std::panic;

    #[test]
    fn foreign_panics_are_resumed() {
        let outer = panic::catch_unwind(|| catch_violation(|| panic!("not a contract")));
        let payload = outer.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"not a contract"));
    }
}
