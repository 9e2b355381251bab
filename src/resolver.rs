//! Turns the files of one folder into displayable entries.
//!
//! Resolution is synchronous and runs once before the window opens. The
//! result follows the order `read_dir` yields, which is not sorted.

use crate::error::ResolveError;
use crate::image_load;
use crate::mapping::IconMapping;
use eframe::egui::ColorImage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const ICONS_DIR: &str = "icons";
pub const ICON_SIZE: u32 = 100;

/// One regular file of the target folder, ready to become a tile.
#[derive(Debug, Clone)]
pub struct FolderEntry {
    pub display_name: String,
    pub source_path: PathBuf,
    /// Asset name the icon was loaded from.
    pub asset: String,
    pub icon_path: PathBuf,
    pub icon: ColorImage,
}

pub struct IconResolver {
    mapping: IconMapping,
    icons_dir: PathBuf,
    icon_size: u32,
}

impl IconResolver {
    pub fn new(mapping: IconMapping) -> Self {
        Self { mapping, icons_dir: PathBuf::from(ICONS_DIR), icon_size: ICON_SIZE }
    }

    pub fn with_icons_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.icons_dir = dir.into();
        self
    }

    pub fn with_icon_size(mut self, size: u32) -> Self {
        self.icon_size = size.max(1);
        self
    }

    pub fn mapping(&self) -> &IconMapping {
        &self.mapping
    }

    /// Lists `folder` and resolves an icon for every regular file in it.
    ///
    /// Files whose icon cannot be found or decoded are logged and left out;
    /// only a folder that cannot be listed at all is reported as an error.
    pub fn resolve(&self, folder: &Path) -> Result<Vec<FolderEntry>, ResolveError> {
        let read_dir = fs::read_dir(folder).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ResolveError::FolderNotFound(folder.to_path_buf()),
            _ => ResolveError::ReadFolder { path: folder.to_path_buf(), source },
        })?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {e}", folder.display());
                    continue;
                }
            };
            let source_path = folder.join(dir_entry.file_name());
            // Follows symlinks, so a link to a file still counts.
            if !source_path.is_file() {
                continue;
            }
            let display_name = dir_entry.file_name().to_string_lossy().into_owned();
            match self.resolve_file(display_name, source_path) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("{e}"),
            }
        }
        Ok(entries)
    }

    /// Like [`resolve`](Self::resolve), but logs a folder-level failure and
    /// returns nothing.
    pub fn resolve_or_empty(&self, folder: &Path) -> Vec<FolderEntry> {
        match self.resolve(folder) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("{e}");
                Vec::new()
            }
        }
    }

    fn resolve_file(&self, display_name: String, source_path: PathBuf) -> Result<FolderEntry, ResolveError> {
        let (asset, icon_path) = self.locate_asset(&display_name)?;
        let icon = image_load::load_icon(&icon_path, self.icon_size)
            .map_err(|source| ResolveError::ImageDecode { file: display_name.clone(), source })?;
        Ok(FolderEntry { display_name, source_path, asset, icon_path, icon })
    }

    /// The mapped asset, if its file exists. A missing asset skips the file.
    fn locate_asset(&self, file_name: &str) -> Result<(String, PathBuf), ResolveError> {
        let asset = self.mapping.asset_for(file_name);
        let path = self.icons_dir.join(asset);
        if !path.is_file() {
            log::info!("No custom icon found for {file_name}, skipping");
            return Err(ResolveError::IconAssetMissing { file: file_name.to_owned(), icon: path });
        }
        Ok((asset.to_owned(), path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::DEFAULT_ICON;
    use std::collections::BTreeSet;

    fn write_png(path: &Path) {
        image::RgbaImage::from_pixel(8, 8, image::Rgba([30, 60, 90, 255])).save(path).unwrap();
    }

    fn icons_with(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            write_png(&dir.path().join(name));
        }
        dir
    }

    fn pairs(entries: &[FolderEntry]) -> BTreeSet<(String, String)> {
        entries.iter().map(|e| (e.display_name.clone(), e.asset.clone())).collect()
    }

    fn resolver(icons: &tempfile::TempDir, mapping: IconMapping) -> IconResolver {
        IconResolver::new(mapping).with_icons_dir(icons.path()).with_icon_size(16)
    }

    #[test]
    fn exact_name_and_default_resolution() {
        let icons = icons_with(&["steam.png", DEFAULT_ICON]);
        let folder = tempfile::tempdir().unwrap();
        fs::write(folder.path().join("game.lnk"), "").unwrap();
        fs::write(folder.path().join("readme.txt"), "hello").unwrap();

        let mapping = IconMapping::new(DEFAULT_ICON).with_filename("game.lnk", "steam.png");
        let entries = resolver(&icons, mapping).resolve(folder.path()).unwrap();

        let expected: BTreeSet<_> = [
            ("game.lnk".to_string(), "steam.png".to_string()),
            ("readme.txt".to_string(), DEFAULT_ICON.to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(pairs(&entries), expected);
        for entry in &entries {
            assert_eq!(entry.icon.size, [16, 16]);
            assert_eq!(entry.source_path, folder.path().join(&entry.display_name));
        }
    }

    #[test]
    fn exact_name_ignores_extension_table() {
        let icons = icons_with(&["special.png", "text.png", DEFAULT_ICON]);
        let folder = tempfile::tempdir().unwrap();
        fs::write(folder.path().join("NOTES.TXT"), "").unwrap();
        fs::write(folder.path().join("other.txt"), "").unwrap();

        let mapping = IconMapping::new(DEFAULT_ICON)
            .with_filename("notes.txt", "special.png")
            .with_extension(".txt", "text.png");
        let entries = resolver(&icons, mapping).resolve(folder.path()).unwrap();

        let found = pairs(&entries);
        assert!(found.contains(&("NOTES.TXT".to_string(), "special.png".to_string())));
        assert!(found.contains(&("other.txt".to_string(), "text.png".to_string())));
    }

    #[test]
    fn directories_are_skipped() {
        let icons = icons_with(&[DEFAULT_ICON]);
        let folder = tempfile::tempdir().unwrap();
        fs::create_dir(folder.path().join("nested")).unwrap();
        fs::write(folder.path().join("nested").join("inner.txt"), "").unwrap();
        fs::write(folder.path().join("top.txt"), "").unwrap();

        let entries = resolver(&icons, IconMapping::new(DEFAULT_ICON)).resolve(folder.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_name, "top.txt");
    }

    #[test]
    fn missing_folder_is_reported() {
        let icons = icons_with(&[DEFAULT_ICON]);
        let missing = icons.path().join("does-not-exist");
        let r = resolver(&icons, IconMapping::new(DEFAULT_ICON));

        assert!(matches!(r.resolve(&missing), Err(ResolveError::FolderNotFound(p)) if p == missing));
        assert!(r.resolve_or_empty(&missing).is_empty());
    }

    #[test]
    fn missing_mapped_asset_skips_the_entry() {
        let icons = icons_with(&[DEFAULT_ICON]);
        let folder = tempfile::tempdir().unwrap();
        fs::write(folder.path().join("game.lnk"), "").unwrap();
        fs::write(folder.path().join("readme.txt"), "").unwrap();

        let mapping = IconMapping::new(DEFAULT_ICON).with_filename("game.lnk", "steam.png");
        let entries = resolver(&icons, mapping).resolve(folder.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_name, "readme.txt");
        assert_eq!(entries[0].asset, DEFAULT_ICON);
    }

    #[test]
    fn missing_default_skips_only_that_entry() {
        let icons = icons_with(&["jpg.png"]);
        let folder = tempfile::tempdir().unwrap();
        fs::write(folder.path().join("photo.jpg"), "").unwrap();
        fs::write(folder.path().join("notes.txt"), "").unwrap();

        let entries = resolver(&icons, IconMapping::builtin()).resolve(folder.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_name, "photo.jpg");
        assert_eq!(entries[0].asset, "jpg.png");
    }

    #[test]
    fn undecodable_asset_skips_only_that_entry() {
        let icons = icons_with(&[DEFAULT_ICON]);
        fs::write(icons.path().join("gif.png"), b"definitely not a png").unwrap();
        let folder = tempfile::tempdir().unwrap();
        fs::write(folder.path().join("anim.gif"), "").unwrap();
        fs::write(folder.path().join("plain.bin"), "").unwrap();

        let entries = resolver(&icons, IconMapping::builtin()).resolve(folder.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_name, "plain.bin");
    }

    #[test]
    fn empty_folder_resolves_to_nothing() {
        let icons = icons_with(&[DEFAULT_ICON]);
        let folder = tempfile::tempdir().unwrap();
        let entries = resolver(&icons, IconMapping::builtin()).resolve(folder.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn resolving_twice_gives_the_same_pairs() {
        let icons = icons_with(&[DEFAULT_ICON, "png.png", "lnk.png"]);
        let folder = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.lnk", "c.txt", "D.PNG"] {
            fs::write(folder.path().join(name), "").unwrap();
        }

        let r = resolver(&icons, IconMapping::builtin());
        let first = r.resolve(folder.path()).unwrap();
        let second = r.resolve(folder.path()).unwrap();
        assert_eq!(first.len(), 4);
        assert_eq!(pairs(&first), pairs(&second));
    }
}
