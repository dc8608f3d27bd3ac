use super::ProgressStore;
use crate::acquisition::Snapshot;
use crate::error::{GiftPlanError, Result};
use crate::model::PlanDocument;
use crate::plan::PlanKey;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const PROGRESS_FILENAME: &str = "progress.json";
const PROGRESS_BACKUP_FILENAME: &str = "progress.json.bak";
const PLAN_FILENAME: &str = "plan.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GiftPlanError::Io)?;
        }
        Ok(())
    }

    /// Raw per-plan entries. Each entry is decoded on its own, so one bad
    /// snapshot only affects its own plan.
    fn read_entries(&self) -> Result<BTreeMap<String, Value>> {
        let path = self.root.join(PROGRESS_FILENAME);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(GiftPlanError::Io)?;
        let entries = serde_json::from_str(&content).map_err(GiftPlanError::Serialization)?;
        Ok(entries)
    }

    /// Entries to rewrite. An unreadable progress file is moved aside so
    /// saving can start over instead of failing for good.
    fn entries_for_update(&self) -> Result<BTreeMap<String, Value>> {
        match self.read_entries() {
            Err(GiftPlanError::Serialization(e)) => {
                let path = self.root.join(PROGRESS_FILENAME);
                let backup = self.root.join(PROGRESS_BACKUP_FILENAME);
                log::warn!(
                    "progress file is unreadable ({}), moving it to {}",
                    e,
                    backup.display()
                );
                fs::rename(path, backup).map_err(GiftPlanError::Io)?;
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(entries).map_err(GiftPlanError::Serialization)?;
        self.write_atomic(PROGRESS_FILENAME, &content)
    }

    /// Writes next to the target and renames over it, so a cut-off write
    /// never leaves a half-written file behind.
    fn write_atomic(&self, filename: &str, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let tmp = self.root.join(format!("{}.tmp", filename));
        fs::write(&tmp, content).map_err(GiftPlanError::Io)?;
        fs::rename(&tmp, self.root.join(filename)).map_err(GiftPlanError::Io)?;
        Ok(())
    }
}

impl ProgressStore for FileStore {
    fn load_snapshot(&self, key: &PlanKey) -> Result<Option<Snapshot>> {
        match self.read_entries()?.remove(key.as_str()) {
            Some(value) => {
                let snapshot =
                    serde_json::from_value(value).map_err(GiftPlanError::Serialization)?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    fn save_snapshot(&mut self, key: &PlanKey, snapshot: &Snapshot) -> Result<()> {
        let mut entries = self.entries_for_update()?;
        let value = serde_json::to_value(snapshot).map_err(GiftPlanError::Serialization)?;
        entries.insert(key.as_str().to_string(), value);
        self.write_entries(&entries)
    }

    fn remove_snapshot(&mut self, key: &PlanKey) -> Result<()> {
        let mut entries = self.entries_for_update()?;
        if entries.remove(key.as_str()).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    fn load_current_plan(&self) -> Result<Option<PlanDocument>> {
        let path = self.root.join(PLAN_FILENAME);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(GiftPlanError::Io)?;
        let doc = serde_json::from_str(&content).map_err(GiftPlanError::Serialization)?;
        Ok(Some(doc))
    }

    fn save_current_plan(&mut self, doc: &PlanDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(doc).map_err(GiftPlanError::Serialization)?;
        self.write_atomic(PLAN_FILENAME, &content)
    }
}
