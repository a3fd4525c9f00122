use core::panic::Location;

use crate::policy::violate;
use crate::{ContractKind, ContractViolation};

// -----------------------------------------------------------------------------
// Functions

/// The contract-check primitive.
///
/// Returns immediately when `condition` holds, otherwise builds a
/// [`ContractViolation`] located at the caller and hands it to the
/// configured [`ViolationPolicy`](crate::ViolationPolicy).
///
/// ```
/// use gl_contract::{check, ContractKind};
///
/// check(ContractKind::Assertion, 1 + 1 == 2, Some("arithmetic works"));
/// ```
#[inline]
#[track_caller]
pub fn check(kind: ContractKind, condition: bool, message: Option<&'static str>) {
    if !condition {
        violate(ContractViolation::new(kind, message, Location::caller()));
    }
}

/// Checks a precondition.
#[inline]
#[track_caller]
pub fn expects(condition: bool) {
    check(ContractKind::Precondition, condition, None);
}

/// Checks a postcondition.
#[inline]
#[track_caller]
pub fn ensures(condition: bool) {
    check(ContractKind::Postcondition, condition, None);
}

/// Fails unconditionally with the given kind.
///
/// Useful where a check has to produce a value, e.g. inside a `match` arm.
#[cold]
#[track_caller]
pub fn fail(kind: ContractKind, message: Option<&'static str>) -> ! {
    violate(ContractViolation::new(kind, message, Location::caller()))
}

/// Fails unconditionally as a broken assertion.
#[cold]
#[track_caller]
pub fn fail_fast(message: Option<&'static str>) -> ! {
    fail(ContractKind::Assertion, message)
}

// -----------------------------------------------------------------------------
// Macros

/// Checks a precondition; the message defaults to the stringified condition.
///
/// ```
/// fn halve(n: u32) -> u32 {
///     gl_contract::expects!(n % 2 == 0);
///     n / 2
/// }
/// assert_eq!(halve(8), 4);
/// ```
#[macro_export]
macro_rules! expects {
    ($cond:expr $(,)?) => {
        $crate::check(
            $crate::ContractKind::Precondition,
            $cond,
            ::core::option::Option::Some(::core::stringify!($cond)),
        )
    };
    ($cond:expr, $msg:expr $(,)?) => {
        $crate::check(
            $crate::ContractKind::Precondition,
            $cond,
            ::core::option::Option::Some($msg),
        )
    };
}

/// Checks a postcondition; the message defaults to the stringified condition.
#[macro_export]
macro_rules! ensures {
    ($cond:expr $(,)?) => {
        $crate::check(
            $crate::ContractKind::Postcondition,
            $cond,
            ::core::option::Option::Some(::core::stringify!($cond)),
        )
    };
    ($cond:expr, $msg:expr $(,)?) => {
        $crate::check(
            $crate::ContractKind::Postcondition,
            $cond,
            ::core::option::Option::Some($msg),
        )
    };
}

/// Checks an internal invariant; the message defaults to the stringified condition.
#[macro_export]
macro_rules! assert_contract {
    ($cond:expr $(,)?) => {
        $crate::check(
            $crate::ContractKind::Assertion,
            $cond,
            ::core::option::Option::Some(::core::stringify!($cond)),
        )
    };
    ($cond:expr, $msg:expr $(,)?) => {
        $crate::check(
            $crate::ContractKind::Assertion,
            $cond,
            ::core::option::Option::Some($msg),
        )
    };
}

/// Fails unconditionally, optionally with a message.
#[macro_export]
macro_rules! fail_fast {
    () => {
        $crate::fail_fast(::core::option::Option::None)
    };
    ($msg:expr $(,)?) => {
        $crate::fail_fast(::core::option::Option::Some($msg))
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{ContractKind, catch_violation, check, ensures, expects};

    #[test]
    fn passing_checks_are_silent() {
        let value = catch_violation(|| {
            check(ContractKind::Assertion, true, None);
            expects(true);
            ensures(true);
            crate::expects!(1 < 2);
            crate::ensures!(2 > 1, "ordering");
            crate::assert_contract!(true);
            42
        });
        assert_eq!(value, Ok(42));
    }

    #[test]
    fn failing_precondition_raises() {
        let err = catch_violation(|| expects(false)).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Precondition);
        assert_eq!(err.message(), None);
        assert_eq!(err.location().file(), file!());
    }

    #[test]
    fn failing_postcondition_raises() {
        let err = catch_violation(|| ensures(false)).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Postcondition);
    }

    #[test]
    fn macro_message_defaults_to_condition() {
        let len = 3;
        let err = catch_violation(|| crate::expects!(len > 5)).unwrap_err();
        assert_eq!(err.message(), Some("len > 5"));

        let err = catch_violation(|| crate::assert_contract!(len == 0, "must be empty")).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Assertion);
        assert_eq!(err.message(), Some("must be empty"));
    }

    #[test]
    fn fail_fast_always_raises() {
        let err = catch_violation(|| -> u8 { crate::fail_fast!() }).unwrap_err();
        assert_eq!(err.kind(), ContractKind::Assertion);
        assert_eq!(err.message(), None);

        let err = catch_violation(|| -> u8 { crate::fail_fast!("unreachable state") }).unwrap_err();
        assert_eq!(err.message(), Some("unreachable state"));
    }

    #[test]
    fn fail_keeps_kind() {
        let err = catch_violation(|| -> u8 { crate::fail(ContractKind::Precondition, Some("negative")) })
            .unwrap_err();
        assert_eq!(err.kind(), ContractKind::Precondition);
        assert_eq!(err.message(), Some("negative"));
    }

    #[test]
    fn location_points_at_caller() {
        let line = line!() + 1;
        let err = catch_violation(|| check(ContractKind::Assertion, false, None)).unwrap_err();
        assert_eq!(err.location().line(), line);
    }
}
