use crate::ContractViolation;

// -----------------------------------------------------------------------------
// ViolationPolicy

/// What happens when a contract check fails.
///
/// The policy is fixed at build time through the `raise` cargo feature;
/// see [`VIOLATION_POLICY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationPolicy {
    /// Abort the process immediately. No unwinding, no recovery.
    Terminate,
    /// Unwind with a [`ContractViolation`] payload that callers may intercept.
    Raise,
}

/// The policy selected for this build.
///
/// ```
/// use gl_contract::{ViolationPolicy, VIOLATION_POLICY};
///
/// let recoverable = match VIOLATION_POLICY {
///     ViolationPolicy::Terminate => false,
///     ViolationPolicy::Raise => true,
/// };
/// # let _ = recoverable;
/// ```
pub const VIOLATION_POLICY: ViolationPolicy = crate::cfg::raise! {
    if { ViolationPolicy::Raise } else { ViolationPolicy::Terminate }
};

// -----------------------------------------------------------------------------
// violate

/// Reports `violation` and hands it to the configured policy.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violate(violation: ContractViolation) -> ! {
    log::error!(target: "gl_contract", "contract violation: {violation}");
    handle(violation)
}

crate::cfg::switch! {
    crate::cfg::raise => {
        crate::cfg::switch! {
            crate::cfg::std => {
                #[track_caller]
                fn handle(violation: ContractViolation) -> ! {
                    std::panic::panic_any(violation)
                }
            }
            _ => {
                #[track_caller]
                fn handle(violation: ContractViolation) -> ! {
                    panic!("{violation}")
                }
            }
        }
    }
    crate::cfg::std => {
        fn handle(_violation: ContractViolation) -> ! {
            std::process::abort()
        }
    }
    _ => {
        // Without `std` the target's panic strategy decides; such targets
        // normally build with `panic = "abort"`.
        #[track_caller]
        fn handle(violation: ContractViolation) -> ! {
            panic!("{violation}")
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
