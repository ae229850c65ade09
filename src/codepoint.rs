use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{PackError, Result};

const MAX_SCALAR: u32 = 0x10FFFF;
const BMP_PRIVATE_USE_END: u32 = 0xF8FF;
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// A Unicode scalar value used as an opaque glyph id.
///
/// Serializes as a one-character JSON string; `Display` renders the escaped form
/// (`\ue000`) used in the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    pub fn new(value: u32) -> Option<Self> {
        char::from_u32(value).map(|_| Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn as_char(self) -> char {
        // Constructed only from valid scalars.
        char::from_u32(self.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut units = [0u16; 2];
        for unit in self.as_char().encode_utf16(&mut units) {
            write!(f, "\\u{:04x}", unit)?;
        }
        Ok(())
    }
}

impl Serialize for CodePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for CodePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(CodePoint(c as u32)),
            _ => Err(de::Error::invalid_length(s.chars().count(), &"exactly one character")),
        }
    }
}

/// Hands out consecutive code points from a fixed base.
#[derive(Debug, Clone)]
pub struct Allocator {
    first: u32,
    next: u32,
}

impl Allocator {
    pub fn new(first: u32) -> Self {
        Self { first, next: first }
    }

    /// Check up front that `count` allocations fit, so a run fails before producing anything.
    pub fn reserve(&self, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let overflow = || PackError::CodePointOverflow { first: self.first, count };
        let span = u32::try_from(count - 1).map_err(|_| overflow())?;
        let last = self.next.checked_add(span).ok_or_else(overflow)?;
        if last > MAX_SCALAR || (self.next <= SURROGATE_END && last >= SURROGATE_START) {
            return Err(overflow());
        }
        if last > BMP_PRIVATE_USE_END && self.next <= BMP_PRIVATE_USE_END {
            log::warn!(
                "allocation runs past the BMP private-use area (last U+{last:04X}); glyphs may collide with assigned characters"
            );
        }
        Ok(())
    }

    pub fn allocate(&mut self) -> Result<CodePoint> {
        let cp = CodePoint::new(self.next).ok_or(PackError::CodePointOverflow {
            first: self.first,
            count: (self.next - self.first) as usize + 1,
        })?;
        self.next += 1;
        Ok(cp)
    }
}
