use std::collections::{BTreeSet, HashMap};
use std::path::Path;

pub const DEFAULT_ICON: &str = "default_icon.png";

/// Lookup tables from file names and extensions to icon asset names.
///
/// Keys are stored lowercase; extension keys carry no leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMapping {
    filenames: HashMap<String, String>,
    extensions: HashMap<String, String>,
    default_icon: String,
}

impl IconMapping {
    pub fn new(default_icon: impl Into<String>) -> Self {
        Self {
            filenames: HashMap::new(),
            extensions: HashMap::new(),
            default_icon: default_icon.into(),
        }
    }

    /// The table the launcher ships with.
    pub fn builtin() -> Self {
        let mut mapping = Self::new(DEFAULT_ICON);
        for (ext, asset) in [
            (".png", "png.png"),
            (".jpg", "jpg.png"),
            (".jpeg", "jpeg.png"),
            (".gif", "gif.png"),
            (".lnk", "lnk.png"),
        ] {
            mapping.insert_extension(ext, asset);
        }
        for (name, asset) in [
            ("xbox.lnk", "xbox.png"),
            ("ea.lnk", "ea.png"),
            ("minecraft launcher.lnk", "mojang.png"),
            ("battle.net.lnk", "battle.net.png"),
            ("epic games launcher.lnk", "epic-games.png"),
            ("steam.lnk", "steam.png"),
            ("oculus.lnk", "oculus.png"),
            ("pcsx2 1.6.0.lnk", "pcsx2.png"),
            ("playnite.lnk", "playnite.png"),
            ("battlestate games launcher.lnk", "bsg.png"),
            ("ubisoft connect.lnk", "ubisoft.png"),
        ] {
            mapping.insert_filename(name, asset);
        }
        mapping
    }

    pub fn with_filename(mut self, name: &str, asset: impl Into<String>) -> Self {
        self.insert_filename(name, asset);
        self
    }

    pub fn with_extension(mut self, ext: &str, asset: impl Into<String>) -> Self {
        self.insert_extension(ext, asset);
        self
    }

    pub fn insert_filename(&mut self, name: &str, asset: impl Into<String>) {
        self.filenames.insert(name.to_lowercase(), asset.into());
    }

    pub fn insert_extension(&mut self, ext: &str, asset: impl Into<String>) {
        let key = ext.strip_prefix('.').unwrap_or(ext).to_lowercase();
        self.extensions.insert(key, asset.into());
    }

    pub fn default_icon(&self) -> &str {
        &self.default_icon
    }

    /// Exact name first, then extension, then the default asset.
    pub fn asset_for(&self, file_name: &str) -> &str {
        if let Some(asset) = self.filenames.get(&file_name.to_lowercase()) {
            return asset;
        }
        let ext = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        if let Some(asset) = ext.and_then(|e| self.extensions.get(&e)) {
            return asset;
        }
        &self.default_icon
    }

    /// Every distinct asset this mapping can produce, sorted.
    pub fn asset_names(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .filenames
            .values()
            .chain(self.extensions.values())
            .map(String::as_str)
            .chain(std::iter::once(self.default_icon.as_str()))
            .collect();
        set.into_iter().collect()
    }
}

impl Default for IconMapping {
    fn default() -> Self {
        Self::builtin()
    }
}
