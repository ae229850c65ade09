//! Pack layout configuration: naming, code-point base and glyph metrics.
//! Defaults reproduce the FIB resource pack exactly; RON files may override any field.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GlyphMetrics {
    pub height: u32,
    pub ascent: i32,
}
impl Default for GlyphMetrics {
    fn default() -> Self {
        Self { height: 15, ascent: 9 }
    }
}

/// The fixed trailing provider for the tab-list background bitmap.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SentinelConfig {
    pub name: String,
    pub height: u32,
    pub ascent: i32,
}
impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            name: "tab".into(),
            height: 106,
            ascent: 66,
        }
    }
}

impl SentinelConfig {
    pub fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics {
            height: self.height,
            ascent: self.ascent,
        }
    }

    /// Case-insensitive match against a material name.
    pub fn matches(&self, material: &str) -> bool {
        material.to_lowercase() == self.name.to_lowercase()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PackConfig {
    /// Namespace + folder prepended to every bitmap file reference.
    pub file_prefix: String,
    /// Image extension selected while scanning (compared case-insensitively, no dot).
    pub extension: String,
    pub first_code_point: u32,
    pub tab_chat_suffix: String,
    pub normal: GlyphMetrics,
    pub tab_chat: GlyphMetrics,
    pub sentinel: SentinelConfig,
}
impl Default for PackConfig {
    fn default() -> Self {
        Self {
            file_prefix: "minecraft:fib/".into(),
            extension: "png".into(),
            first_code_point: 0xE000,
            tab_chat_suffix: "_tabChat".into(),
            normal: GlyphMetrics::default(),
            tab_chat: GlyphMetrics { height: 10, ascent: 9 },
            sentinel: SentinelConfig::default(),
        }
    }
}

impl PackConfig {
    /// Layers given on a command line: none means defaults, any unreadable layer is an error.
    /// Validation warnings are logged, not returned.
    pub fn load_cli_layers<P: AsRef<Path>>(paths: &[P]) -> Result<Self, String> {
        if paths.is_empty() {
            return Ok(Self::default());
        }
        let (cfg, used, errors) = Self::load_layered(paths);
        if !errors.is_empty() {
            return Err(errors.join("; "));
        }
        log::info!("config layers: {}", used.join(", "));
        for w in cfg.validate() {
            log::warn!("config: {w}");
        }
        Ok(cfg)
    }

    /// Load multiple layers; later overrides earlier (deep merge).
    /// Skips unreadable files; returns (config, used_paths, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        match existing {
                            Some(ev) => merge_value(ev, v),
                            None => {
                                bm.insert(k, v);
                            }
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        match merged {
            Some(val) => match val.into_rust::<PackConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                    (PackConfig::default(), used, errors)
                }
            },
            None => (PackConfig::default(), used, errors),
        }
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.file_prefix.is_empty() {
            w.push("file_prefix is empty; file references will have no namespace".to_string());
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            w.push(format!("extension {:?} should be non-empty and without a leading dot", self.extension));
        }
        if self.tab_chat_suffix.is_empty() {
            w.push("tab_chat_suffix is empty; normal and tab-chat item names will be identical".to_string());
        }
        if self.sentinel.name.is_empty() {
            w.push("sentinel.name is empty".to_string());
        }
        if !in_private_use_area(self.first_code_point) {
            w.push(format!("first_code_point U+{:04X} is outside the private-use areas", self.first_code_point));
        }
        for (label, m) in [
            ("normal", self.normal),
            ("tab_chat", self.tab_chat),
            ("sentinel", self.sentinel.metrics()),
        ] {
            if m.height == 0 {
                w.push(format!("{label}.height is 0"));
            }
            if m.ascent > m.height as i32 {
                w.push(format!("{label}.ascent ({}) exceeds height ({})", m.ascent, m.height));
            }
        }
        w
    }
}

/// BMP private-use area plus the two supplementary private-use planes.
pub fn in_private_use_area(cp: u32) -> bool {
    matches!(cp, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}
