//! Views serialize as sequences of their elements. Deserializing a view is
//! not possible since it owns nothing; deserialize into a `Vec` and view it.

use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Byte, Span, SpanMut, Terminated, ZStringSpan};

impl<T: Serialize> Serialize for Span<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<T: Serialize> Serialize for SpanMut<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Serializes the string elements, without the terminator.
impl<T: Terminated + Serialize> Serialize for ZStringSpan<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_string_span().serialize(serializer)
    }
}

impl Serialize for Byte {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.get())
    }
}

impl<'de> Deserialize<'de> for Byte {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Byte::new)
    }
}
