use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;

/// Default name of the repository directory inside the working tree
pub const DEFAULT_REPOSITORY_DIR: &str = "neo";

pub const OBJECTS_DIR: &str = "objects";
pub const INDEX_FILE: &str = "index";

/// Handle on one repository, opened once per command
///
/// All areas (object store, index, HEAD, working tree) are reached through this
/// handle; nothing reads the repository files behind its back.
pub struct Repository {
    path: Box<Path>,
    repository_path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at the working tree `path`
    ///
    /// `repository_dir` is resolved against `path` unless it is absolute. Nothing is
    /// read yet; `init` may still have to create the layout.
    pub fn new(
        path: &Path,
        repository_dir: &Path,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        let repository_path = path.join(repository_dir);

        let index = Index::new(repository_path.join(INDEX_FILE).into_boxed_path());
        let database = Database::new(repository_path.join(OBJECTS_DIR).into_boxed_path());
        let workspace = Workspace::new(
            path.clone().into_boxed_path(),
            repository_path.clone().into_boxed_path(),
        );
        let refs = Refs::new(repository_path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            repository_path: repository_path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> &Path {
        &self.repository_path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Ref<'_, Index> {
        self.index.borrow()
    }

    pub fn index_mut(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Fail unless `init` has created the repository layout
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.database.objects_path().is_dir() {
            anyhow::bail!(
                "Not a neo repository: {} does not exist (run `neo init` first)",
                self.database.objects_path().display()
            );
        }

        Ok(())
    }
}
