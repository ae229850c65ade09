//! Read back a generated item index + font descriptor and check they agree.

use std::{fs, path::Path};

use crate::codepoint::CodePoint;
use crate::config::PackConfig;
use crate::error::{PackError, Result};
use crate::generate::{FontDescriptor, UnicodeItem};

#[derive(Debug, Clone)]
pub struct Inspection {
    pub material_count: usize,
    pub item_count: usize,
    pub provider_count: usize,
    pub range: Option<(CodePoint, CodePoint)>,
    pub issues: Vec<String>,
}

impl Inspection {
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn inspect_files(unicode_items: &Path, font: &Path, cfg: &PackConfig) -> Result<Inspection> {
    let items: Vec<UnicodeItem> = serde_json::from_str(&read(unicode_items)?)?;
    let font: FontDescriptor = serde_json::from_str(&read(font)?)?;
    Ok(inspect(&items, &font, cfg))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PackError::Read { path: path.to_path_buf(), source })
}

pub fn inspect(items: &[UnicodeItem], font: &FontDescriptor, cfg: &PackConfig) -> Inspection {
    let providers = &font.providers;
    let mut issues = Vec::new();

    if providers.len() != items.len() + 1 {
        issues.push(format!(
            "expected {} providers for {} items, found {}",
            items.len() + 1,
            items.len(),
            providers.len()
        ));
    }
    if items.len() % 2 != 0 {
        issues.push(format!("odd item count {}; every material needs a tab-chat entry", items.len()));
    }

    for (i, p) in providers.iter().enumerate() {
        if p.kind != "bitmap" {
            issues.push(format!("provider {i}: type {:?} is not bitmap", p.kind));
        }
        if p.chars.len() != 1 {
            issues.push(format!("provider {i}: expected one char, found {}", p.chars.len()));
        }
    }

    let chars: Vec<CodePoint> = providers.iter().filter_map(|p| p.chars.first().copied()).collect();
    if let Some(first) = chars.first() {
        for (i, w) in chars.windows(2).enumerate() {
            if w[1].value() != w[0].value() + 1 {
                issues.push(format!("provider {}: {} does not follow {}", i + 1, w[1], w[0]));
            }
        }
        if first.value() != cfg.first_code_point {
            issues.push(format!("first code point U+{:04X}, expected U+{:04X}", first.value(), cfg.first_code_point));
        }
    }

    for (i, (item, p)) in items.iter().zip(providers).enumerate() {
        if p.chars.first() != Some(&item.unicode) {
            issues.push(format!("item {i} ({}) uses {} but provider {i} does not", item.material, item.unicode));
        }
    }
    for (i, pair) in items.chunks(2).enumerate() {
        if let [normal, chat] = pair {
            if chat.material != format!("{}{}", normal.material, cfg.tab_chat_suffix) {
                issues.push(format!("item {}: {} is not the tab-chat entry of {}", 2 * i + 1, chat.material, normal.material));
            }
        }
    }

    let sentinel_file = format!("{}{}.{}", cfg.file_prefix, cfg.sentinel.name.to_lowercase(), cfg.extension.to_lowercase());
    match providers.last() {
        Some(last) if last.file == sentinel_file => {
            let m = cfg.sentinel.metrics();
            if (last.height, last.ascent) != (m.height, m.ascent) {
                issues.push(format!("sentinel metrics {}/{}, expected {}/{}", last.height, last.ascent, m.height, m.ascent));
            }
        }
        Some(last) => issues.push(format!("last provider references {}, expected {sentinel_file}", last.file)),
        None => issues.push("font descriptor has no providers".to_string()),
    }

    Inspection {
        material_count: items.len() / 2,
        item_count: items.len(),
        provider_count: providers.len(),
        range: chars.first().copied().zip(chars.last().copied()),
        issues,
    }
}
