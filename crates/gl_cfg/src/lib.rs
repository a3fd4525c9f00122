//! Compilation control macros shared by every crate of the workspace.
//!
//! Each crate declares a small `cfg` module that turns `#[cfg(...)]` predicates
//! into named macros:
//!
//! ```
//! mod cfg {
//!     gl_cfg::define_alias! {
//!         #[cfg(debug_assertions)] => debug,
//!         #[cfg(feature = "never-enabled")] => never,
//!     }
//! }
//!
//! cfg::never! { compile_error!("this is never emitted"); }
//!
//! let checked = cfg::debug!();
//! assert_eq!(checked, cfg!(debug_assertions));
//! ```
//!
//! An alias macro accepts three forms:
//!
//! - `alias!()` expands to `true` or `false`.
//! - `alias! { items }` emits the items only when the predicate holds.
//! - `alias! { if { a } else { b } }` selects one of the two blocks.
//!
//! [`switch!`] chains several aliases (or raw `#[cfg]` predicates) and emits the
//! first matching arm.
#![no_std]

// -----------------------------------------------------------------------------
// Primitive aliases

/// Alias target for a predicate that holds.
///
/// Usually re-exported under a meaningful name by [`define_alias!`].
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Alias target for a predicate that does not hold.
///
/// Usually re-exported under a meaningful name by [`define_alias!`].
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

// -----------------------------------------------------------------------------
// define_alias

/// Defines one alias macro per `#[cfg(...)] => name` entry.
///
/// Attributes (usually docs) can be attached with the braced form:
///
/// ```
/// mod cfg {
///     gl_cfg::define_alias! {
///         #[cfg(debug_assertions)] => {
///             /// Emits its input in debug builds only.
///             debug
///         }
///     }
/// }
/// # let _ = cfg::debug!();
/// ```
#[macro_export]
macro_rules! define_alias {
    () => {};
    (
        #[cfg($meta:meta)] => {
            $(#[$p_meta:meta])*
            $p:ident
        }
        $(, $($rest:tt)*)?
    ) => {
        $(#[$p_meta])*
        #[cfg($meta)]
        #[doc(inline)]
        pub use $crate::enabled as $p;

        $(#[$p_meta])*
        #[cfg(not($meta))]
        #[doc(inline)]
        pub use $crate::disabled as $p;

        $( $crate::define_alias! { $($rest)* } )?
    };
    (
        #[cfg($meta:meta)] => $p:ident
        $(, $($rest:tt)*)?
    ) => {
        $crate::define_alias! {
            #[cfg($meta)] => { $p }
            $(, $($rest)*)?
        }
    };
}

// -----------------------------------------------------------------------------
// switch

/// Emits the first arm whose condition holds.
///
/// Conditions are either alias macro paths or raw `#[cfg(...)]` predicates,
/// and `_` is the fallback.
///
/// ```
/// mod cfg {
///     gl_cfg::define_alias! {
///         #[cfg(feature = "never-enabled")] => never,
///     }
/// }
///
/// gl_cfg::switch! {
///     cfg::never => {
///         const MODE: &str = "never";
///     }
///     #[cfg(any())] => {
///         const MODE: &str = "empty";
///     }
///     _ => {
///         const MODE: &str = "fallback";
///     }
/// }
///
/// assert_eq!(MODE, "fallback");
/// ```
#[macro_export]
macro_rules! switch {
    () => {};
    ({ $($tt:tt)* }) => {{ $crate::switch! { $($tt)* } }};
    (_ => { $($output:tt)* }) => { $($output)* };
    (
        #[cfg($meta:meta)] => $output:tt
        $($rest:tt)*
    ) => {
        #[cfg($meta)]
        $crate::switch! { _ => $output }

        #[cfg(not($meta))]
        $crate::switch! { $($rest)* }
    };
    (
        $cond:path => $output:tt
        $($rest:tt)*
    ) => {
        $cond! {
            if {
                $crate::switch! { _ => $output }
            } else {
                $crate::switch! { $($rest)* }
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    mod cfg {
        crate::define_alias! {
            #[cfg(test)] => testing,
            #[cfg(not(test))] => {
                /// Never enabled while testing.
                released
            },
        }
    }

    #[test]
    fn alias_as_bool() {
        assert!(cfg::testing!());
        assert!(!cfg::released!());
    }

    #[test]
    fn alias_if_else() {
        let picked = cfg::testing! { if { 1 } else { 2 } };
        assert_eq!(picked, 1);

        let picked = cfg::released! { if { 1 } else { 2 } };
        assert_eq!(picked, 2);
    }

    #[test]
    fn alias_items() {
        cfg::testing! {
            fn emitted() -> u8 { 7 }
        }
        cfg::released! {
            fn emitted() -> u8 { 0 }
        }
        assert_eq!(emitted(), 7);
    }

    #[test]
    fn switch_picks_first_match() {
        crate::switch! {
            cfg::released => {
                const PICK: u8 = 1;
            }
            cfg::testing => {
                const PICK: u8 = 2;
            }
            _ => {
                const PICK: u8 = 3;
            }
        }
        assert_eq!(PICK, 2);
    }

    #[test]
    fn switch_raw_cfg_and_fallback() {
        crate::switch! {
            #[cfg(any())] => {
                const PICK: u8 = 1;
            }
            _ => {
                const PICK: u8 = 2;
            }
        }
        assert_eq!(PICK, 2);
    }
}
