use crate::errors::{NeoError, NeoResult};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directory names never picked up when walking the working tree
const IGNORED_PATHS: [&str; 2] = [".git", ".neo"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    /// Repository directory inside the working tree, skipped when listing
    repository_path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>, repository_path: Box<Path>) -> Self {
        Workspace {
            path,
            repository_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Regular files under `root` (the whole working tree when `None`), relative to
    /// the working-tree root and sorted by name
    ///
    /// A `root` naming a single file yields just that file. Symlinks to regular files
    /// count as files; symlinked directories are not descended into. A `root` that
    /// resolves outside the working tree, or into the repository directory, is an
    /// error.
    pub fn list_files(&self, root: Option<&Path>) -> NeoResult<Vec<PathBuf>> {
        let root = match root {
            Some(root) => self.resolve(root)?,
            None => self.path.to_path_buf(),
        };

        if !root.exists() {
            return Err(NeoError::io(
                &root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            ));
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                NeoError::io(path, e.into())
            })?;

            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.path)
                .map_err(|_| NeoError::OutsideWorkTree(entry.path().to_path_buf()))?;
            files.push(relative.to_path_buf());
        }

        Ok(files)
    }

    /// Absolute form of a user-supplied path, checked to lie under the working tree
    ///
    /// `.` and `..` are resolved lexically so a symlink keeps its own name. A path
    /// that only reaches the working tree through symlinked directories is accepted
    /// through its canonical form.
    fn resolve(&self, path: &Path) -> NeoResult<PathBuf> {
        let mut resolved = PathBuf::new();
        for component in self.path.join(path).components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                component => resolved.push(component),
            }
        }

        let resolved = if resolved.starts_with(&self.path) {
            resolved
        } else {
            match resolved.canonicalize() {
                Ok(canonical) if canonical.starts_with(&self.path) => canonical,
                _ => return Err(NeoError::OutsideWorkTree(path.to_path_buf())),
            }
        };

        if resolved.starts_with(&self.repository_path) {
            return Err(NeoError::InsideRepository(path.to_path_buf()));
        }

        Ok(resolved)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if path.starts_with(&self.repository_path) {
            return true;
        }

        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| IGNORED_PATHS.contains(&name))
    }

    /// Path of `file_path` as recorded in the index: relative, `/`-separated
    pub fn relative_name(&self, file_path: &Path) -> String {
        let relative = file_path.strip_prefix(&self.path).unwrap_or(file_path);

        relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn read_file(&self, file_path: &Path) -> NeoResult<Bytes> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .map(Bytes::from)
            .map_err(|e| NeoError::io(file_path, e))
    }
}
