use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use anyhow::Context;

impl Repository {
    /// Print the id a file would be stored under, storing it when `write` is set
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let data = self
            .workspace()
            .read_file(object_path.as_ref())
            .with_context(|| format!("Unable to read {object_path}"))?;
        let blob = Blob::new(data);

        let object_id = if write {
            self.ensure_initialized()?;
            self.database().store(&blob)?
        } else {
            blob.object_id()?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
