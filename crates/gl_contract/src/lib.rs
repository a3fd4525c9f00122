#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    pub(crate) use gl_cfg::switch;

    gl_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(any(feature = "raise", test))] => raise,
    }
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! { extern crate std; }

#[cfg(test)]
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod check;
mod error;
mod policy;

crate::cfg::std! {
    crate::cfg::raise! {
        mod catch;
        pub use catch::catch_violation;
    }
}

// -----------------------------------------------------------------------------
// Top-level exports

pub use check::{check, ensures, expects, fail, fail_fast};
pub use error::{ContractKind, ContractViolation};
pub use policy::{VIOLATION_POLICY, ViolationPolicy};
