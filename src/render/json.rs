use crate::error::FilterError;
use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Single-line JSON with `", "` / `": "` separators and ASCII-only output.
///
/// Example: `[{"name": "grafana", "title": "café"}]`
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // serde_json already escapes quotes, backslashes and C0 controls; fragments
    // only hold the rest. DEL and everything above ASCII become \uXXXX (UTF-16).
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Encode `entries` as one line of JSON, newline included.
pub fn to_json_line(entries: &[Value]) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    entries
        .serialize(&mut ser)
        .context("encode filtered entries")?;
    buf.push(b'\n');

    String::from_utf8(buf).context("encoded output is not UTF-8")
}

/// Render the whole line first, then hand it to `writer` in one write.
pub fn write_entries<W: Write>(mut writer: W, entries: &[Value]) -> anyhow::Result<()> {
    let line = to_json_line(entries)?;
    writer
        .write_all(line.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| FilterError::Io {
            action: "write standard output",
            source,
        })?;
    Ok(())
}
