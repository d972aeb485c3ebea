//! Directory traversal for component source files.
//!
//! [`FileWalker`] uses the `ignore` crate to walk a directory tree and
//! produce the flat, sorted path list the [`Scanner`](crate::Scanner)
//! consumes.
//!
//! # Filters
//!
//! A regular file is kept when all of the following hold:
//!
//! - It survives the standard `ignore` filters (`.gitignore`, `.ignore`,
//!   hidden files and directories)
//! - Its extension is one of the configured extensions (exact, case-sensitive)
//! - No exclude pattern matches its root-relative path, either as a
//!   substring or as a whole path component
//! - When include directories are configured, its root-relative path is
//!   one of them or lies beneath one
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use elf_scanner::FileWalker;
//!
//! let walker = FileWalker::new(Utf8Path::new("./web"))?
//!     .with_include_dirs(&["src/components", "src/views"]);
//!
//! for path in walker.collect_paths()? {
//!     println!("Found: {path}");
//! }
//! # Ok::<(), elf_scanner::ScanError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use elf_core::DiscoveryConfig;
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::ScanError;

/// A file walker that discovers `.vue`, `.jsx`, and `.tsx` files.
///
/// Defaults come from [`DiscoveryConfig::default`].
#[derive(Debug)]
pub struct FileWalker {
    /// The root directory to walk.
    root: Utf8PathBuf,
    /// Extensions to keep, without the leading dot.
    extensions: Vec<String>,
    /// Substrings or path components that exclude a file.
    exclude_patterns: Vec<String>,
    /// Root-relative directories to restrict the walk to.
    include_dirs: Vec<String>,
    /// Whether to follow symbolic links.
    follow_links: bool,
}

impl FileWalker {
    /// Creates a new file walker for the given root directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if the root path doesn't exist or
    /// isn't a directory.
    pub fn new(root: &Utf8Path) -> Result<Self, ScanError> {
        Self::from_config(root, &DiscoveryConfig::default())
    }

    /// Creates a walker from a [`DiscoveryConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if the root path doesn't exist or
    /// isn't a directory.
    pub fn from_config(root: &Utf8Path, config: &DiscoveryConfig) -> Result<Self, ScanError> {
        if !root.exists() {
            return Err(ScanError::config(format!(
                "root path does not exist: {root}"
            )));
        }
        if !root.is_dir() {
            return Err(ScanError::config(format!(
                "root path is not a directory: {root}"
            )));
        }

        Ok(Self {
            root: root.to_owned(),
            extensions: config
                .file_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect(),
            exclude_patterns: config.exclude_patterns.clone(),
            include_dirs: config
                .include_dirs
                .iter()
                .map(|dir| normalize_dir(dir))
                .filter(|dir| !dir.is_empty())
                .collect(),
            follow_links: config.follow_links,
        })
    }

    /// Replaces the extensions to keep. A leading dot is accepted.
    #[must_use]
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_owned())
            .collect();
        self
    }

    /// Replaces the exclude patterns.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: &[&str]) -> Self {
        self.exclude_patterns = patterns.iter().map(ToString::to_string).collect();
        self
    }

    /// Restricts the walk to root-relative directories.
    ///
    /// Appends to any directories already configured.
    #[must_use]
    pub fn with_include_dirs(mut self, dirs: &[&str]) -> Self {
        self.include_dirs.extend(
            dirs.iter()
                .map(|dir| normalize_dir(dir))
                .filter(|dir| !dir.is_empty()),
        );
        self
    }

    /// Configures whether to follow symbolic links.
    ///
    /// By default, symbolic links are not followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Collects every matching file path, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] if directory traversal fails.
    /// Returns [`ScanError::NonUtf8Path`] if a non-UTF-8 path is encountered.
    pub fn collect_paths(&self) -> Result<Vec<Utf8PathBuf>, ScanError> {
        let mut paths = Vec::new();

        for result in self.build_walker() {
            let entry = result?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| ScanError::NonUtf8Path(path.to_owned()))?;

            if self.should_keep(utf8_path) {
                paths.push(utf8_path.to_owned());
            }
        }

        paths.sort();
        debug!(root = %self.root, count = paths.len(), "Collected component files");
        Ok(paths)
    }

    fn build_walker(&self) -> ignore::Walk {
        WalkBuilder::new(&self.root)
            .standard_filters(true)
            .follow_links(self.follow_links)
            .threads(1)
            .require_git(false)
            .build()
    }

    fn should_keep(&self, path: &Utf8Path) -> bool {
        let relative = self.relative_path(path);
        self.has_valid_extension(path)
            && !self.is_excluded(&relative)
            && self.is_included(&relative)
    }

    /// Returns `path` relative to the root with `/` separators.
    fn relative_path(&self, path: &Utf8Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .as_str()
            .replace('\\', "/")
    }

    fn has_valid_extension(&self, path: &Utf8Path) -> bool {
        path.extension()
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }

    fn is_excluded(&self, relative: &str) -> bool {
        self.exclude_patterns.iter().any(|pattern| {
            relative.contains(pattern.as_str()) || relative.split('/').any(|part| part == pattern)
        })
    }

    fn is_included(&self, relative: &str) -> bool {
        if self.include_dirs.is_empty() {
            return true;
        }

        self.include_dirs.iter().any(|dir| {
            relative == dir
                || relative
                    .strip_prefix(dir.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Returns the root directory being walked.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Normalizes a user-supplied directory to `a/b` form.
fn normalize_dir(dir: &str) -> String {
    let dir = dir.trim().replace('\\', "/");
    let dir = dir.trim_start_matches("./").trim_end_matches('/');
    if dir == "." {
        String::new()
    } else {
        dir.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn walker() -> FileWalker {
        FileWalker {
            root: Utf8PathBuf::from("/repo"),
            extensions: vec!["vue".to_owned(), "jsx".to_owned(), "tsx".to_owned()],
            exclude_patterns: DiscoveryConfig::default().exclude_patterns,
            include_dirs: Vec::new(),
            follow_links: false,
        }
    }

    fn touch(root: &Utf8Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "<template></template>").unwrap();
    }

    fn relative(root: &Utf8Path, paths: &[Utf8PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().as_str().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_has_valid_extension() {
        let walker = walker();
        assert!(walker.has_valid_extension(Utf8Path::new("a/Form.vue")));
        assert!(walker.has_valid_extension(Utf8Path::new("a/App.jsx")));
        assert!(walker.has_valid_extension(Utf8Path::new("a/App.tsx")));
        assert!(!walker.has_valid_extension(Utf8Path::new("a/main.ts")));
        assert!(!walker.has_valid_extension(Utf8Path::new("a/Form.VUE")));
        assert!(!walker.has_valid_extension(Utf8Path::new("a/vue")));
    }

    #[test]
    fn test_is_excluded() {
        let walker = walker();
        assert!(walker.is_excluded("node_modules/quasar/QForm.vue"));
        assert!(walker.is_excluded("src/__tests__/Form.vue"));
        assert!(walker.is_excluded("tests/Form.vue"));
        assert!(walker.is_excluded("src/Form.test.tsx"));
        assert!(walker.is_excluded("src/Form.spec.jsx"));
        // Substring match, as with any other pattern
        assert!(walker.is_excluded("src/latest/Form.vue"));

        assert!(!walker.is_excluded("src/components/Form.vue"));
        assert!(!walker.is_excluded("src/views/Login.tsx"));
    }

    #[test]
    fn test_is_included() {
        let mut walker = walker();
        assert!(walker.is_included("anything/at/all.vue"));

        walker = walker.with_include_dirs(&["./src/components/", "src/views"]);
        assert!(walker.is_included("src/components/Form.vue"));
        assert!(walker.is_included("src/components/deep/Form.vue"));
        assert!(walker.is_included("src/views/Login.vue"));
        assert!(!walker.is_included("src/componentsOld/Form.vue"));
        assert!(!walker.is_included("src/Form.vue"));
    }

    #[test]
    fn test_normalize_dir() {
        assert_eq!(normalize_dir("./src/components/"), "src/components");
        assert_eq!(normalize_dir(" src\\views "), "src/views");
        assert_eq!(normalize_dir("."), "");
        assert_eq!(normalize_dir("./"), "");
    }

    #[test]
    fn test_new_rejects_missing_root() {
        let err = FileWalker::new(Utf8Path::new("/nonexistent/ui-elf/root")).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[test]
    fn test_new_rejects_file_root() {
        let dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        touch(root, "Form.vue");

        let err = FileWalker::new(&root.join("Form.vue")).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_collect_paths_applies_filters() {
        let dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        touch(root, "src/components/LoginForm.vue");
        touch(root, "src/views/Home.tsx");
        touch(root, "src/App.jsx");
        touch(root, "src/main.ts");
        touch(root, "src/Form.spec.tsx");
        touch(root, "node_modules/quasar/QForm.vue");
        touch(root, "src/__tests__/Dialog.vue");

        let paths = FileWalker::new(root).unwrap().collect_paths().unwrap();
        assert_eq!(
            relative(root, &paths),
            vec!["src/App.jsx", "src/components/LoginForm.vue", "src/views/Home.tsx"]
        );
    }

    #[test]
    fn test_collect_paths_with_include_dirs() {
        let dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        touch(root, "src/components/LoginForm.vue");
        touch(root, "src/views/Home.tsx");
        touch(root, "src/App.jsx");

        let paths = FileWalker::new(root)
            .unwrap()
            .with_include_dirs(&["src/components"])
            .collect_paths()
            .unwrap();
        assert_eq!(relative(root, &paths), vec!["src/components/LoginForm.vue"]);
    }

    #[test]
    fn test_collect_paths_custom_extensions() {
        let dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        touch(root, "a/One.vue");
        touch(root, "a/Two.jsx");

        let paths = FileWalker::new(root)
            .unwrap()
            .with_extensions(&[".vue"])
            .with_exclude_patterns(&[])
            .collect_paths()
            .unwrap();
        assert_eq!(relative(root, &paths), vec!["a/One.vue"]);
    }

    #[test]
    fn test_collect_paths_skips_hidden() {
        let dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        touch(root, ".cache/Form.vue");
        touch(root, "Form.vue");

        let paths = FileWalker::new(root).unwrap().collect_paths().unwrap();
        assert_eq!(relative(root, &paths), vec!["Form.vue"]);
    }

    #[test]
    fn test_from_config() {
        let dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        let config = DiscoveryConfig {
            file_extensions: vec![".tsx".to_owned()],
            exclude_patterns: Vec::new(),
            include_dirs: vec!["./web/".to_owned()],
            follow_links: true,
        };

        let walker = FileWalker::from_config(root, &config).unwrap();
        assert_eq!(walker.extensions, vec!["tsx"]);
        assert_eq!(walker.include_dirs, vec!["web"]);
        assert!(walker.follow_links);
        assert_eq!(walker.root(), root);
    }
}
