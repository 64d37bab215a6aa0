//! Compact JSON with minimal string escaping.
//!
//! Absent optional fields are left out by the serde attributes on the tree
//! itself. This module only controls how strings are written: the quote, the
//! backslash and the `\n`, `\r`, `\t` controls are escaped, every other
//! character (including other control characters) is written as is.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::{CharEscape, Formatter};
use std::io;

/// A compact `serde_json` formatter with the slim escaping rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlimFormatter;

impl Formatter for SlimFormatter {
    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let bytes: &[u8] = match char_escape {
            CharEscape::Quote => b"\\\"",
            CharEscape::ReverseSolidus => b"\\\\",
            CharEscape::LineFeed => b"\\n",
            CharEscape::CarriageReturn => b"\\r",
            CharEscape::Tab => b"\\t",
            CharEscape::Solidus => b"/",
            CharEscape::Backspace => b"\x08",
            CharEscape::FormFeed => b"\x0c",
            CharEscape::AsciiControl(byte) => return writer.write_all(&[byte]),
        };
        writer.write_all(bytes)
    }
}

/// Serialize `value` to compact slim JSON.
pub fn to_slim_json<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(256);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, SlimFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|err| Error::Serialization(serde::ser::Error::custom(err)))
}
