//! Pretty JSON with every non-ASCII character escaped as `\uXXXX`.
//!
//! Layout matches a two-space indented dump: `": "` between key and value, no
//! trailing newline. Characters outside the BMP become UTF-16 surrogate pairs.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::error::{PackError, Result};

pub struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    pub fn new() -> Self {
        Self { pretty: PrettyFormatter::with_indent(b"  ") }
    }
}

impl Default for AsciiFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

pub fn to_ascii_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiFormatter::new());
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write already-serialized bytes, creating parent folders first.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| PackError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, bytes).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepoint::CodePoint;
    use serde_json::json;

    fn text<T: Serialize + ?Sized>(v: &T) -> String {
        String::from_utf8(to_ascii_json(v).unwrap()).unwrap()
    }

    #[test]
    fn escapes_private_use_lowercase() {
        let cp = CodePoint::new(0xE00B).unwrap();
        assert_eq!(text(&cp), "\"\\ue00b\"");
    }

    #[test]
    fn escapes_mixed_fragments() {
        assert_eq!(text("caf\u{e9} \u{2713} ok"), "\"caf\\u00e9 \\u2713 ok\"");
        assert_eq!(text("\u{1F600}"), "\"\\ud83d\\ude00\"");
        // Control characters still take serde_json's own escapes.
        assert_eq!(text("a\"b\n"), "\"a\\\"b\\n\"");
    }

    #[test]
    fn pretty_layout() {
        let v = json!({"providers": [{"a": 1, "b": [2]}], "empty": []});
        let expected = "{\n  \"empty\": [],\n  \"providers\": [\n    {\n      \"a\": 1,\n      \"b\": [\n        2\n      ]\n    }\n  ]\n}";
        assert_eq!(text(&v), expected);
    }

    #[test]
    fn write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/out.json");
        write_file(&target, b"[]").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "[]");
    }

    #[test]
    fn write_into_file_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        assert!(matches!(write_file(&blocker.join("out.json"), b"[]"), Err(PackError::Write { .. })));
    }
}
