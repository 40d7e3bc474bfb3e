//! Presence checks for the images the page references.
//!
//! Missing images only degrade to the browser's broken-image placeholder,
//! so callers decide whether absence is fatal.

use audara_site::content::asset_paths;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetStatus {
    /// Site-absolute path as referenced by the page.
    pub path: &'static str,
    pub present: bool,
}

/// Location of a site-absolute asset path under `root`.
pub fn resolve(root: &Path, asset: &str) -> PathBuf {
    root.join(asset.trim_start_matches('/'))
}

/// Status of every referenced asset under `root`, in document order.
pub fn check_assets(root: &Path) -> Vec<AssetStatus> {
    asset_paths()
        .map(|path| AssetStatus {
            path,
            present: resolve(root, path).is_file(),
        })
        .collect()
}

/// Referenced assets not found under `root`.
pub fn missing_assets(root: &Path) -> Vec<&'static str> {
    check_assets(root)
        .into_iter()
        .filter(|status| !status.present)
        .map(|status| status.path)
        .collect()
}
