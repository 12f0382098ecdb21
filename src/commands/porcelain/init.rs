use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use tracing::info;

impl Repository {
    /// Create `objects/`, an empty `HEAD` and an empty `index`, keeping whatever exists
    pub fn init(&mut self) -> anyhow::Result<()> {
        let head_path = self.refs().head_path();
        let index_path = self.index().path().to_path_buf();

        let already_exists =
            self.database().objects_path().is_dir() && head_path.exists() && index_path.exists();

        fs::create_dir_all(self.database().objects_path()).with_context(|| {
            format!(
                "Failed to create objects directory {}",
                self.database().objects_path().display()
            )
        })?;

        if !head_path.exists() {
            fs::write(&head_path, b"")
                .with_context(|| format!("Failed to create {}", head_path.display()))?;
        }

        if !index_path.exists() {
            fs::write(&index_path, b"")
                .with_context(|| format!("Failed to create {}", index_path.display()))?;
        }

        if already_exists {
            writeln!(
                self.writer(),
                "Repository already exists in {}",
                self.repository_path().display()
            )?;
        } else {
            info!(path = %self.repository_path().display(), "initialized repository");
            writeln!(
                self.writer(),
                "Initialized empty Neo repository in {}",
                self.repository_path().display()
            )?;
        }

        Ok(())
    }
}
