//! Canonical JSON bytes: the one serialization used for digests.
//!
//! Every digest in the workspace (element sets, traces, solution lists, run
//! bindings) hashes bytes produced here, so two equal values always hash
//! equal regardless of map insertion order or formatting.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":[2,3]}`.
//! 3. Strings are escaped per RFC 8259 §7; non-ASCII passes through as UTF-8.
//! 4. Numbers must be integers representable as `i64` or `u64`. Floats are
//!    rejected. Wider integers are carried as decimal strings
//!    (see [`wide_integer`]).
//! 5. `null`, `true`, `false` are written literally.

use std::io::Write;

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// an `i64`/`u64` integer.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut writer = CanonWriter::default();
    writer.value(value)?;
    Ok(writer.buf)
}

/// Represent an `i128` in JSON without losing precision.
///
/// Values in `i64` range become JSON numbers; anything wider becomes a
/// decimal string. Sums over element sets are `i128`, and almost always fit.
#[must_use]
pub fn wide_integer(v: i128) -> Value {
    match i64::try_from(v) {
        Ok(narrow) => Value::from(narrow),
        Err(_) => Value::String(v.to_string()),
    }
}

#[derive(Default)]
struct CanonWriter {
    buf: Vec<u8>,
}

impl CanonWriter {
    fn value(&mut self, value: &Value) -> Result<(), CanonError> {
        match value {
            Value::Null => self.buf.extend_from_slice(b"null"),
            Value::Bool(true) => self.buf.extend_from_slice(b"true"),
            Value::Bool(false) => self.buf.extend_from_slice(b"false"),
            Value::Number(n) => self.number(n)?,
            Value::String(s) => self.string(s),
            Value::Array(items) => {
                self.buf.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.buf.push(b',');
                    }
                    self.value(item)?;
                }
                self.buf.push(b']');
            }
            Value::Object(map) => self.object(map)?,
        }
        Ok(())
    }

    fn object(&mut self, map: &Map<String, Value>) -> Result<(), CanonError> {
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        self.buf.push(b'{');
        for (i, (key, item)) in entries.into_iter().enumerate() {
            if i > 0 {
                self.buf.push(b',');
            }
            self.string(key);
            self.buf.push(b':');
            self.value(item)?;
        }
        self.buf.push(b'}');
        Ok(())
    }

    fn number(&mut self, n: &Number) -> Result<(), CanonError> {
        if let Some(i) = n.as_i64() {
            let _ = write!(self.buf, "{i}");
        } else if let Some(u) = n.as_u64() {
            let _ = write!(self.buf, "{u}");
        } else {
            return Err(CanonError::NonIntegerNumber {
                raw: n.to_string(),
            });
        }
        Ok(())
    }

    fn string(&mut self, s: &str) {
        self.buf.push(b'"');
        for ch in s.chars() {
            match ch {
                '"' => self.buf.extend_from_slice(b"\\\""),
                '\\' => self.buf.extend_from_slice(b"\\\\"),
                '\n' => self.buf.extend_from_slice(b"\\n"),
                '\r' => self.buf.extend_from_slice(b"\\r"),
                '\t' => self.buf.extend_from_slice(b"\\t"),
                c if c < '\u{0020}' => {
                    let _ = write!(self.buf, "\\u{:04x}", u32::from(c));
                }
                c => {
                    let mut utf8 = [0u8; 4];
                    self.buf
                        .extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                }
            }
        }
        self.buf.push(b'"');
    }
}
