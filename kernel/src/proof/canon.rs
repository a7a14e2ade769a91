//! Canonical JSON bytes for reports and fixtures.
//!
//! Every digest that covers JSON goes through [`canonical_json_bytes`]:
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace.
//! 3. Strings are escaped per RFC 8259 §7; other UTF-8 passes through.
//! 4. Numbers must be integers (`i64` or `u64`); floats are rejected.
//!    Elapsed wall-clock time is therefore never part of a canonical report.

use serde_json::{Map, Number, Value};

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "canonical JSON allows integers only, got {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any JSON number is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut writer = CanonicalWriter::default();
    writer.value(value)?;
    Ok(writer.out)
}

#[derive(Default)]
struct CanonicalWriter {
    out: Vec<u8>,
}

impl CanonicalWriter {
    fn value(&mut self, value: &Value) -> Result<(), CanonError> {
        match value {
            Value::Null => self.out.extend_from_slice(b"null"),
            Value::Bool(true) => self.out.extend_from_slice(b"true"),
            Value::Bool(false) => self.out.extend_from_slice(b"false"),
            Value::Number(n) => self.number(n)?,
            Value::String(s) => self.string(s),
            Value::Array(items) => self.array(items)?,
            Value::Object(map) => self.object(map)?,
        }
        Ok(())
    }

    fn number(&mut self, n: &Number) -> Result<(), CanonError> {
        let digits = match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(u)) => u.to_string(),
            (None, None) => return Err(CanonError::NonIntegerNumber { raw: n.to_string() }),
        };
        self.out.extend_from_slice(digits.as_bytes());
        Ok(())
    }

    /// RFC 8259 escaping: quote, backslash and control characters only.
    fn string(&mut self, s: &str) {
        self.out.push(b'"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.extend_from_slice(b"\\\""),
                '\\' => self.out.extend_from_slice(b"\\\\"),
                '\n' => self.out.extend_from_slice(b"\\n"),
                '\r' => self.out.extend_from_slice(b"\\r"),
                '\t' => self.out.extend_from_slice(b"\\t"),
                c if u32::from(c) < 0x20 => {
                    self.out
                        .extend_from_slice(format!("\\u{:04x}", u32::from(c)).as_bytes());
                }
                c => {
                    let mut utf8 = [0u8; 4];
                    self.out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                }
            }
        }
        self.out.push(b'"');
    }

    fn array(&mut self, items: &[Value]) -> Result<(), CanonError> {
        self.out.push(b'[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            self.value(item)?;
        }
        self.out.push(b']');
        Ok(())
    }

    /// Keys in byte order, independent of the map's own iteration order.
    fn object(&mut self, map: &Map<String, Value>) -> Result<(), CanonError> {
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        self.out.push(b'{');
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            self.string(key);
            self.out.push(b':');
            self.value(value)?;
        }
        self.out.push(b'}');
        Ok(())
    }
}
