use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::file_entry::FileEntry;
use anyhow::Context;
use std::path::Path;

/// Stages the whole working tree
pub const ADD_ALL: &str = ".";

impl Repository {
    /// Store each file's content and append one index line per file
    ///
    /// Directories (and `.`) expand to the files beneath them. A file that cannot be
    /// read aborts the command; files staged before it stay staged.
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        self.index_mut().rehydrate()?;

        let paths = paths
            .iter()
            .map(|path| {
                let root = (path != ADD_ALL).then(|| Path::new(path));
                self.workspace()
                    .list_files(root)
                    .with_context(|| format!("Unable to add {path}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .flatten();

        for path in paths {
            let entry = self.add_file(&path)?;

            writeln!(
                self.writer(),
                "Added {} to the index ({})",
                entry.path,
                entry.oid.to_short_oid()
            )?;
        }

        Ok(())
    }

    fn add_file(&self, path: &Path) -> anyhow::Result<FileEntry> {
        let data = self
            .workspace()
            .read_file(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;

        // content first, so a staged hash always resolves
        let blob_id = self.database().store(&Blob::new(data))?;

        let entry = FileEntry::new(self.workspace().relative_name(path), blob_id);
        self.index_mut().stage(entry.clone())?;

        Ok(entry)
    }
}
