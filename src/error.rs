use std::{io, path::PathBuf};

/// Failures of a generation or inspection run. Every variant is fatal.
#[derive(thiserror::Error, Debug)]
pub enum PackError {
    #[error("folder '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("'{}' is not a folder", .0.display())]
    NotADirectory(PathBuf),

    #[error("read folder {}: {source}", .path.display())]
    ReadDir { path: PathBuf, #[source] source: io::Error },

    /// Two source files upper-case to the same material name.
    #[error("material {name} is produced by both {} and {}", .first.display(), .second.display())]
    DuplicateMaterial { name: String, first: PathBuf, second: PathBuf },

    #[error("cannot allocate {count} code points starting at U+{first:04X}: range leaves the Unicode scalar values")]
    CodePointOverflow { first: u32, count: usize },

    #[error("write {}: {source}", .path.display())]
    Write { path: PathBuf, #[source] source: io::Error },

    #[error("read {}: {source}", .path.display())]
    Read { path: PathBuf, #[source] source: io::Error },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PackError>;
