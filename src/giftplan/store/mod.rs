//! # Storage Layer
//!
//! Progress is kept per plan, under the plan's [`PlanKey`]. The
//! [`ProgressStore`] trait lets the session work against the filesystem in
//! production and against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: file-based storage in the data directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── progress.json   # { "<plan key>": { "acquired": [..], "manual": [..] } }
//! ├── plan.json       # the most recently loaded plan document
//! └── config.json     # viewer configuration
//! ```
//!
//! Keys are not unique per plan: plans that share name, difficulty and gift
//! count share progress.

use crate::acquisition::Snapshot;
use crate::error::Result;
use crate::model::PlanDocument;
use crate::plan::PlanKey;

pub mod fs;
pub mod memory;

pub trait ProgressStore {
    /// Snapshot saved under `key`, if any.
    fn load_snapshot(&self, key: &PlanKey) -> Result<Option<Snapshot>>;

    /// Save (create or replace) the snapshot under `key`.
    fn save_snapshot(&mut self, key: &PlanKey, snapshot: &Snapshot) -> Result<()>;

    /// Remove the snapshot under `key`. Removing a missing key is not an error.
    fn remove_snapshot(&mut self, key: &PlanKey) -> Result<()>;

    /// The plan that was loaded last, if any.
    fn load_current_plan(&self) -> Result<Option<PlanDocument>>;

    fn save_current_plan(&mut self, doc: &PlanDocument) -> Result<()>;
}
