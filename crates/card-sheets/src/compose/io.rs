//! File operations for a run

use crate::constants::{BACK_PAGE_SUFFIX, PAGE_EXTENSION};
use crate::types::*;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Remove everything in `dir` except subdirectories, creating it first if
/// needed. Symlinks are removed, never their targets.
pub async fn clear_output_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            log::debug!("Leaving {} in place", entry.path().display());
        } else {
            tokio::fs::remove_file(entry.path()).await?;
        }
    }
    Ok(())
}

/// Output path of page `number`: `<dir>/<number>.png` or `<dir>/<number>_back.png`
pub fn page_path(dir: &Path, number: usize, back: bool) -> PathBuf {
    let suffix = if back { BACK_PAGE_SUFFIX } else { "" };
    dir.join(format!("{}{}.{}", number, suffix, PAGE_EXTENSION))
}

pub(crate) fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}
