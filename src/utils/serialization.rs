// Canonical JSON: object keys sorted lexicographically at every depth, written the way
// Python's `json.dumps(data, sort_keys=True)` writes them so digests agree byte for byte.
use crate::error::{LedgerError, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Serializer, Value};
use std::io;

/// Serialize any value into its canonical JSON text
pub fn canonical_json<T: Serialize>(data: &T) -> Result<String> {
    let value = serde_json::to_value(data)?;
    canonical_string(value)
}

/// Render an already-built JSON value canonically
pub fn canonical_string(value: Value) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, DumpsFormatter);
    sort_keys(value).serialize(&mut serializer)?;
    String::from_utf8(buffer)
        .map_err(|e| LedgerError::Serialization(format!("Canonical JSON is not UTF-8: {e}")))
}

// serde_json keeps insertion order when `preserve_order` is enabled anywhere in the
// dependency graph, so the maps are rebuilt in sorted order explicitly.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (key, inner) in entries {
                sorted.insert(key, sort_keys(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// `", "` and `": "` separators, ASCII-only strings, floats in shortest `repr` form.
///
/// Quotes, backslashes and control characters keep serde_json's escapes, which
/// already match (`\n`, `\t`, lowercase `\u001f`).
struct DumpsFormatter;

impl Formatter for DumpsFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

// Shortest round-trip digits, fixed notation for decimal exponents in [-4, 16),
// otherwise `d.ddde+XX` with a signed exponent of at least two digits.
fn float_repr(value: f64) -> String {
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        let point = exponent + 1;
        if point <= 0 {
            format!("{sign}0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
        } else if point as usize >= digits.len() {
            let padding = "0".repeat(point as usize - digits.len());
            format!("{sign}{digits}{padding}.0")
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            format!("{sign}{whole}.{fraction}")
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        let exponent = exponent.unsigned_abs();
        if rest.is_empty() {
            format!("{sign}{lead}e{exponent_sign}{exponent:02}")
        } else {
            format!("{sign}{lead}.{rest}e{exponent_sign}{exponent:02}")
        }
    }
}
