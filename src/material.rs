//! Materials: item names derived from bitmap file names, and the sorted catalog.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::config::SentinelConfig;
use crate::error::{PackError, Result};

/// A named item derived from an image file: the upper-cased file stem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Material {
    name: String,
    source: PathBuf,
}

impl Material {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// `wood.png` -> `WOOD`. `None` when the stem is missing or not UTF-8.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        Some(Self::new(stem.to_uppercase(), path))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Drop sentinel-named materials, reject collisions and sort by name.
///
/// Sentinel files in any casing are removed before the collision check, so `tab.png`
/// next to `TAB.png` is accepted.
pub fn catalog(found: impl IntoIterator<Item = Material>, sentinel: &SentinelConfig) -> Result<Vec<Material>> {
    let mut by_name: BTreeMap<String, Material> = BTreeMap::new();
    for material in found {
        if sentinel.matches(&material.name) {
            log::debug!("{} is the sentinel bitmap; handled separately", material.source.display());
            continue;
        }
        if let Some(existing) = by_name.get(&material.name) {
            // Report the pair in path order so the message is stable across filesystems.
            let (first, second) = if existing.source <= material.source {
                (existing.source.clone(), material.source)
            } else {
                (material.source, existing.source.clone())
            };
            return Err(PackError::DuplicateMaterial { name: material.name, first, second });
        }
        by_name.insert(material.name.clone(), material);
    }
    Ok(by_name.into_values().collect())
}
