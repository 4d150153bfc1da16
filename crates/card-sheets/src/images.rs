//! Card image lookup
//!
//! The image directory is listed once per run. Cards find their file by
//! substring match of their id against the file names, first match in
//! file-name order.

use crate::constants::EXCLUDED_FILE_MARKER;
use crate::manifest::CardEntry;
use crate::types::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct ImageIndex {
    /// (file name, full path), sorted by file name
    files: Vec<(String, PathBuf)>,
}

impl ImageIndex {
    /// List `dir` once and keep every candidate image file.
    pub fn build(dir: impl AsRef<Path>) -> Result<Self> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir.as_ref())? {
            let entry = entry?;
            let path = entry.path();
            // Follows symlinks
            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.contains(EXCLUDED_FILE_MARKER) {
                continue;
            }
            files.push((name, path));
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));

        log::debug!(
            "Indexed {} images in {}",
            files.len(),
            dir.as_ref().display()
        );
        Ok(Self { files })
    }

    /// First file whose name contains `id`
    pub fn resolve(&self, id: &str) -> Option<&Path> {
        self.files
            .iter()
            .find(|(name, _)| name.contains(id))
            .map(|(_, path)| path.as_path())
    }

    /// Resolve the image for `entry`, naming the entry when nothing matches.
    pub fn resolve_entry(&self, entry: &CardEntry) -> Result<&Path> {
        self.resolve(&entry.id)
            .ok_or_else(|| SheetError::ImageNotFound {
                name: entry.display_name().to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_first_match_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b_card42.png");
        touch(dir.path(), "a_card42.png");
        touch(dir.path(), "card7.png");

        let index = ImageIndex::build(dir.path()).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(
            index.resolve("card42"),
            Some(dir.path().join("a_card42.png").as_path())
        );
        assert_eq!(index.resolve("missing"), None);
    }

    #[test]
    fn test_skips_sidecars_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a_card42.png.Zone.Identifier");
        touch(dir.path(), "b_card42.png");
        fs::create_dir(dir.path().join("card42_dir")).unwrap();

        let index = ImageIndex::build(dir.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.resolve("card42"),
            Some(dir.path().join("b_card42.png").as_path())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_image_is_indexed() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        let images = dir.path().join("images");
        fs::create_dir(&real).unwrap();
        fs::create_dir(&images).unwrap();
        touch(&real, "A.png");
        std::os::unix::fs::symlink(real.join("A.png"), images.join("A.png")).unwrap();

        let index = ImageIndex::build(&images).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("A"), Some(images.join("A.png").as_path()));
    }

    #[test]
    fn test_resolve_entry_names_card() {
        let dir = tempfile::tempdir().unwrap();
        let index = ImageIndex::build(dir.path()).unwrap();
        let entry = CardEntry {
            id: "zzz".to_string(),
            query: Some("Lightning Bolt".to_string()),
            slots: "1".to_string(),
        };

        match index.resolve_entry(&entry) {
            Err(SheetError::ImageNotFound { name }) => assert_eq!(name, "Lightning Bolt"),
            other => panic!("Expected ImageNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ImageIndex::build(dir.path().join("nope")).is_err());
    }
}
