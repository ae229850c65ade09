//! Build + write flow for a resource-pack run.

use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use crate::config::PackConfig;
use crate::error::Result;
use crate::generate::{generate, Generated};
use crate::json::{to_ascii_json, write_file};
use crate::scan::scan_materials;

pub const DEFAULT_UNICODE_OUTPUT: &str = "./unicodeItems.json";
pub const DEFAULT_FONT_OUTPUT: &str = "./default.json";

#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub png_folder: PathBuf,
    pub unicode_output: PathBuf,
    pub font_output: PathBuf,
    pub pack: PackConfig,
}

impl BuildConfig {
    pub fn new(png_folder: impl Into<PathBuf>) -> Self {
        Self {
            png_folder: png_folder.into(),
            unicode_output: PathBuf::from(DEFAULT_UNICODE_OUTPUT),
            font_output: PathBuf::from(DEFAULT_FONT_OUTPUT),
            pack: PackConfig::default(),
        }
    }
}

/// Both documents, serialized and ready to write.
pub struct PackArtifact {
    pub generated: Generated,
    pub unicode_json: Vec<u8>,
    pub font_json: Vec<u8>,
    pub unicode_path: PathBuf,
    pub font_path: PathBuf,
}

/// Scan, allocate and serialize. Touches nothing on disk.
pub fn build_pack(cfg: &BuildConfig) -> Result<PackArtifact> {
    let materials = scan_materials(&cfg.png_folder, &cfg.pack)?;
    let generated = generate(&materials, &cfg.pack)?;
    let unicode_json = to_ascii_json(&generated.items)?;
    let font_json = to_ascii_json(&generated.font)?;
    Ok(PackArtifact {
        generated,
        unicode_json,
        font_json,
        unicode_path: cfg.unicode_output.clone(),
        font_path: cfg.font_output.clone(),
    })
}

/// Item index first, then font descriptor. Returns the written paths in order.
pub fn write_outputs(artifact: &PackArtifact) -> Result<Vec<&Path>> {
    write_file(&artifact.unicode_path, &artifact.unicode_json)?;
    log::debug!("wrote {} bytes to {}", artifact.unicode_json.len(), artifact.unicode_path.display());
    write_file(&artifact.font_path, &artifact.font_json)?;
    log::debug!("wrote {} bytes to {}", artifact.font_json.len(), artifact.font_path.display());
    Ok(vec![artifact.unicode_path.as_path(), artifact.font_path.as_path()])
}

impl PackArtifact {
    pub fn summary(&self) -> String {
        let g = &self.generated;
        let mut s = String::new();
        let _ = writeln!(s, "Summary:");
        let _ = writeln!(s, "  Materials: {}", g.material_count);
        let _ = writeln!(s, "  Unicode entries: {}", g.items.len());
        let _ = writeln!(s, "  Font providers: {}", g.font.providers.len());
        if let (Some(first), Some(last)) = (g.first_code_point(), g.last_code_point()) {
            let _ = write!(s, "  Unicode range: {first} - {last}");
        }
        s
    }
}
