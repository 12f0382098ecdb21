use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Write the raw bytes of a stored object
    pub fn cat_file(&mut self, object_id: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let object_id = ObjectId::try_parse(object_id)?;
        let content = self.database().load(&object_id)?;

        self.writer().write_all(&content)?;

        Ok(())
    }
}
