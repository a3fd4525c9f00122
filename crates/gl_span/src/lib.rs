#![doc = include_str!("../README.md")]
#![expect(unsafe_code, reason = "Spans are built from raw pointers.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    gl_cfg::define_alias! {
        #[cfg(feature = "signed-index")] => signed_index,
        #[cfg(feature = "serde")] => serde,
    }
}

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

#[cfg(test)]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod at;
mod byte;
mod bytes;
mod cmp;
mod copy;
mod index;
mod make;
mod span;
mod span_mut;
mod zstring;

crate::cfg::serde! { mod serde; }

// -----------------------------------------------------------------------------
// Top-level exports

pub use at::{at, at_mut};
pub use byte::{Byte, to_byte};
pub use bytes::{as_bytes, as_writable_bytes};
pub use copy::copy;
pub use index::IndexType;
pub use make::{IntoSpan, IntoSpanMut, make_span, make_span_from_ptr_range, make_span_from_raw_parts};
pub use make::{make_span_mut, make_span_mut_from_raw_parts};
pub use span::Span;
pub use span_mut::SpanMut;
pub use zstring::{Terminated, ZStringSpan, ensure_sentinel, ensure_z, ensure_z_ptr};
