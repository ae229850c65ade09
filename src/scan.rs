//! Folder scanning: the filesystem side of material discovery.

use std::{ffi::OsStr, fs, path::Path};

use crate::config::PackConfig;
use crate::error::{PackError, Result};
use crate::material::{catalog, Material};

/// List the materials of `folder` (non-recursive), sorted and without the sentinel.
pub fn scan_materials(folder: &Path, cfg: &PackConfig) -> Result<Vec<Material>> {
    if !folder.exists() {
        return Err(PackError::DirectoryNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(PackError::NotADirectory(folder.to_path_buf()));
    }
    let read_err = |source| PackError::ReadDir { path: folder.to_path_buf(), source };
    let mut found = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !has_extension(&path, &cfg.extension) {
            continue;
        }
        if !path.is_file() {
            log::debug!("skipping {}: not a file", path.display());
            continue;
        }
        match Material::from_path(&path) {
            Some(m) => found.push(m),
            None => log::warn!("skipping {}: file name is not valid UTF-8", path.display()),
        }
    }
    log::debug!("{} image files in {}", found.len(), folder.display());
    catalog(found, &cfg.sentinel)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn selects_png_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for f in ["wood.png", "stone.PNG", "notes.txt", "tab.png", "noext", ".png"] {
            touch(dir.path(), f);
        }
        fs::create_dir(dir.path().join("folder.png")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "deep.png");

        let ms = scan_materials(dir.path(), &PackConfig::default()).unwrap();
        let names: Vec<&str> = ms.iter().map(Material::name).collect();
        assert_eq!(names, ["STONE", "WOOD"]);
    }

    #[test]
    fn missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            scan_materials(&missing, &PackConfig::default()),
            Err(PackError::DirectoryNotFound(p)) if p == missing
        ));
    }

    #[test]
    fn file_instead_of_folder() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "wood.png");
        assert!(matches!(
            scan_materials(&dir.path().join("wood.png"), &PackConfig::default()),
            Err(PackError::NotADirectory(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "wood.png");
        let bad = dir.path().join(OsStr::from_bytes(b"bad\xff.png"));
        // Some filesystems refuse non-UTF-8 names outright.
        if fs::write(&bad, b"").is_err() {
            return;
        }
        let ms = scan_materials(dir.path(), &PackConfig::default()).unwrap();
        let names: Vec<&str> = ms.iter().map(Material::name).collect();
        assert_eq!(names, ["WOOD"]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_folder() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let res = scan_materials(&locked, &PackConfig::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        // Privileged users read through the mode bits; nothing to assert then.
        if res.is_ok() {
            return;
        }
        assert!(matches!(res, Err(PackError::ReadDir { ref path, .. }) if *path == locked));
    }

    #[test]
    fn configured_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "wood.png");
        touch(dir.path(), "iron.webp");
        let cfg = PackConfig { extension: "webp".into(), ..PackConfig::default() };
        let ms = scan_materials(dir.path(), &cfg).unwrap();
        assert_eq!(ms.len(), 1);
        assert_eq!(ms[0].name(), "IRON");
    }
}
