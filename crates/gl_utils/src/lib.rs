#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    gl_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
    }
}

// -----------------------------------------------------------------------------
// no_std support

#[cfg(any(feature = "std", test))]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod final_action;

pub mod num;

// -----------------------------------------------------------------------------
// Top-level exports

pub use final_action::{FinalAction, finally};

crate::cfg::std! {
    pub use final_action::{ExitAction, on_error, on_return};
}
