//! File discovery for finding images under an input root.

use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProcessingConfig;
use crate::error::{PipelineError, Result};

/// Discovers image files under an input root.
pub struct ImageWalker {
    config: ProcessingConfig,
}

/// A discovered image file.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    /// Full path to the source file
    pub path: PathBuf,
    /// Path relative to the input root; just the filename in non-recursive mode
    pub relative: PathBuf,
}

impl ImageWalker {
    /// Create a new walker instance.
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// Enumerate supported image files under `root`.
    ///
    /// In non-recursive mode only direct children of `root` are considered.
    /// In recursive mode the full tree is traversed and each entry's
    /// `relative` path preserves the intermediate directory segments.
    ///
    /// A missing or unreadable root is fatal; everything below it is
    /// best-effort (unreadable subtrees are skipped).
    pub fn walk(&self, root: &Path, recursive: bool) -> Result<Vec<ImageEntry>> {
        if !root.is_dir() {
            return Err(PipelineError::FileNotFound(root.to_path_buf()).into());
        }
        // Probe readability up front so a permission problem on the root
        // itself surfaces as an error instead of an empty batch.
        std::fs::read_dir(root)?;

        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .max_depth(max_depth)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !self.is_supported(path) {
                continue;
            }

            let relative = match path.strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };
            // A tree walk never yields `..` segments, but the relative path
            // is spliced into the output root verbatim, so check anyway.
            if relative
                .components()
                .any(|c| matches!(c, Component::ParentDir))
            {
                tracing::warn!("Skipping entry escaping the input root: {:?}", path);
                continue;
            }

            entries.push(ImageEntry {
                path: path.to_path_buf(),
                relative,
            });
        }

        // Sort by path for deterministic ordering
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.config
                    .supported_formats
                    .iter()
                    .any(|fmt| fmt.to_lowercase() == ext_lower)
            })
            .unwrap_or(false)
    }
}
