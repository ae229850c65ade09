//! FIB resource-pack generator: turns a folder of item bitmaps into the
//! `unicodeItems.json` item index and the `default.json` bitmap font descriptor.

pub mod codepoint;
pub mod config;
pub mod error;
pub mod generate;
pub mod inspect;
pub mod json;
pub mod material;
pub mod pack;
pub mod scan;

// Curated re-exports
pub use config::PackConfig;
pub use error::{PackError, Result};
pub use generate::{generate, FontDescriptor, FontProvider, Generated, UnicodeItem};
pub use material::Material;
pub use pack::{build_pack, write_outputs, BuildConfig, PackArtifact};
