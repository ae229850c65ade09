//! Pure generation core: sorted materials in, item index + font descriptor out.
//!
//! One allocation pass produces a glyph per code point; both documents are
//! projections of that list, so their code points always line up.

use serde::{Deserialize, Serialize};

use crate::codepoint::{Allocator, CodePoint};
use crate::config::{GlyphMetrics, PackConfig};
use crate::error::Result;
use crate::material::Material;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Boss-bar rendering.
    Normal,
    TabChat,
    Sentinel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub material: String,
    pub variant: Variant,
    pub code_point: CodePoint,
}

/// One entry of `unicodeItems.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UnicodeItem {
    pub material: String,
    pub unicode: CodePoint,
}

/// One bitmap provider of the font descriptor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FontProvider {
    #[serde(rename = "type")]
    pub kind: String,
    pub file: String,
    pub height: u32,
    pub ascent: i32,
    pub chars: Vec<CodePoint>,
}

impl FontProvider {
    pub fn bitmap(file: String, metrics: GlyphMetrics, code_point: CodePoint) -> Self {
        Self {
            kind: "bitmap".into(),
            file,
            height: metrics.height,
            ascent: metrics.ascent,
            chars: vec![code_point],
        }
    }
}

/// `default.json` root.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FontDescriptor {
    pub providers: Vec<FontProvider>,
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub material_count: usize,
    pub glyphs: Vec<Glyph>,
    pub items: Vec<UnicodeItem>,
    pub font: FontDescriptor,
}

impl Generated {
    pub fn first_code_point(&self) -> Option<CodePoint> {
        self.glyphs.first().map(|g| g.code_point)
    }

    pub fn last_code_point(&self) -> Option<CodePoint> {
        self.glyphs.last().map(|g| g.code_point)
    }
}

/// Allocate code points for `materials` (expected sorted, sentinel removed) and build both documents.
pub fn generate(materials: &[Material], cfg: &PackConfig) -> Result<Generated> {
    let glyphs = allocate(materials, cfg)?;
    let items = glyphs
        .iter()
        .filter(|g| g.variant != Variant::Sentinel)
        .map(|g| UnicodeItem {
            material: item_name(&g.material, g.variant, cfg),
            unicode: g.code_point,
        })
        .collect();
    let providers = glyphs.iter().map(|g| provider_for(g, cfg)).collect();
    Ok(Generated {
        material_count: materials.len(),
        glyphs,
        items,
        font: FontDescriptor { providers },
    })
}

/// Normal then tab-chat per material, then the sentinel.
pub fn allocate(materials: &[Material], cfg: &PackConfig) -> Result<Vec<Glyph>> {
    let mut alloc = Allocator::new(cfg.first_code_point);
    alloc.reserve(materials.len() * 2 + 1)?;
    let mut glyphs = Vec::with_capacity(materials.len() * 2 + 1);
    for m in materials {
        for variant in [Variant::Normal, Variant::TabChat] {
            glyphs.push(Glyph {
                material: m.name().to_string(),
                variant,
                code_point: alloc.allocate()?,
            });
        }
    }
    glyphs.push(Glyph {
        material: cfg.sentinel.name.clone(),
        variant: Variant::Sentinel,
        code_point: alloc.allocate()?,
    });
    Ok(glyphs)
}

fn item_name(material: &str, variant: Variant, cfg: &PackConfig) -> String {
    match variant {
        Variant::TabChat => format!("{material}{}", cfg.tab_chat_suffix),
        _ => material.to_string(),
    }
}

fn provider_for(g: &Glyph, cfg: &PackConfig) -> FontProvider {
    let metrics = match g.variant {
        Variant::Normal => cfg.normal,
        Variant::TabChat => cfg.tab_chat,
        Variant::Sentinel => cfg.sentinel.metrics(),
    };
    let file = format!(
        "{}{}.{}",
        cfg.file_prefix,
        g.material.to_lowercase(),
        cfg.extension.to_lowercase()
    );
    FontProvider::bitmap(file, metrics, g.code_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mats(names: &[&str]) -> Vec<Material> {
        names.iter().map(|n| Material::new(*n, format!("{}.png", n.to_lowercase()))).collect()
    }

    #[test]
    fn stone_wood_example() {
        let out = generate(&mats(&["STONE", "WOOD"]), &PackConfig::default()).unwrap();
        let items: Vec<(&str, u32)> = out.items.iter().map(|i| (i.material.as_str(), i.unicode.value())).collect();
        assert_eq!(
            items,
            [("STONE", 0xE000), ("STONE_tabChat", 0xE001), ("WOOD", 0xE002), ("WOOD_tabChat", 0xE003)]
        );
        let p = &out.font.providers;
        assert_eq!(p.len(), 5);
        assert_eq!(p[0].file, "minecraft:fib/stone.png");
        assert_eq!((p[0].height, p[0].ascent), (15, 9));
        assert_eq!((p[1].height, p[1].ascent), (10, 9));
        assert_eq!(p[3].file, "minecraft:fib/wood.png");
        let last = p.last().unwrap();
        assert_eq!(last.file, "minecraft:fib/tab.png");
        assert_eq!((last.height, last.ascent), (106, 66));
        assert_eq!(last.chars[0].value(), 0xE004);
        assert_eq!(out.last_code_point().unwrap().to_string(), "\\ue004");
    }

    #[test]
    fn empty_input_still_has_sentinel() {
        let out = generate(&[], &PackConfig::default()).unwrap();
        assert!(out.items.is_empty());
        assert_eq!(out.font.providers.len(), 1);
        assert_eq!(out.font.providers[0].chars[0].value(), 0xE000);
        assert_eq!(out.font.providers[0].height, 106);
    }

    #[test]
    fn counts_and_contiguity_for_many_materials() {
        for n in [1usize, 7, 150] {
            let names: Vec<String> = (0..n).map(|i| format!("M{i:04}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let out = generate(&mats(&refs), &PackConfig::default()).unwrap();
            assert_eq!(out.items.len(), 2 * n);
            assert_eq!(out.font.providers.len(), 2 * n + 1);
            for (i, p) in out.font.providers.iter().enumerate() {
                assert_eq!(p.chars, vec![CodePoint::new(0xE000 + i as u32).unwrap()]);
            }
            for (item, p) in out.items.iter().zip(&out.font.providers) {
                assert_eq!(vec![item.unicode], p.chars);
            }
        }
    }

    #[test]
    fn config_overrides_flow_through() {
        let cfg = PackConfig {
            file_prefix: "pack:icons/".into(),
            first_code_point: 0xF000,
            tab_chat_suffix: "_chat".into(),
            ..PackConfig::default()
        };
        let out = generate(&mats(&["IRON"]), &cfg).unwrap();
        assert_eq!(out.items[1].material, "IRON_chat");
        assert_eq!(out.items[1].unicode.value(), 0xF001);
        assert_eq!(out.font.providers[0].file, "pack:icons/iron.png");
        assert_eq!(out.font.providers[2].file, "pack:icons/tab.png");
    }

    #[test]
    fn overflow_fails_before_allocating() {
        let cfg = PackConfig { first_code_point: 0x10FFFD, ..PackConfig::default() };
        assert!(generate(&mats(&["A"]), &cfg).is_ok());
        assert!(generate(&mats(&["A", "B"]), &cfg).is_err());
    }
}
