use std::path::{Path, PathBuf};

/// Front-end capability: find a display asset for an item name.
/// Engines never depend on it; a missing asset is not an error.
pub trait AssetLookup {
    type Asset;

    fn lookup(&self, name: &str) -> Option<Self::Asset>;
}

/// `Llave Inglesa` -> `llave_inglesa.png`
pub fn asset_file_name(name: &str) -> String {
    format!("{}.png", name.trim().to_lowercase().replace(' ', "_"))
}

/// Images stored as `<root>/<lower_snake_name>.png`.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl AssetLookup for DirAssets {
    type Asset = PathBuf;

    fn lookup(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(asset_file_name(name));
        if path.is_file() {
            Some(path)
        } else {
            log::debug!("no asset for '{name}' at {}", path.display());
            None
        }
    }
}
