//! Numeric conversions.

mod narrow;

pub use narrow::{NarrowCast, NarrowingError, narrow, narrow_cast, narrow_failfast};
